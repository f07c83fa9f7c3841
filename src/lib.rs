// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Mbdecomp: a decompiler for compiled Mount&Blade module data files.
//!
//! The engine's build toolchain turns Python module source into flat,
//! whitespace-delimited `.txt` files. This crate reads those files back and
//! regenerates the module source:
//!
//! - statement blocks are rebuilt from opcode streams using the opcode table
//!   of the selected engine build,
//! - numeric references are resolved against symbol tables loaded from the
//!   same module directory,
//! - packed flag words are decomposed into pipe-joined flag expressions.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Batch runner / FileFormat         │
//! ├─────────────────────────────────────┤
//! │   Per-format drivers                │
//! ├──────────────────┬──────────────────┤
//! │ Statement decoder│   Flag decoder   │
//! ├──────────────────┴──────────────────┤
//! │ Operator tables │ Symbol tables     │
//! ├─────────────────────────────────────┤
//! │        Token reader                 │
//! └─────────────────────────────────────┘
//! ```

pub mod batch;
pub mod context;
pub mod error;
pub mod flags;
pub mod format;
pub mod ops;
pub mod reader;
pub mod statement;
pub mod symbols;

mod drivers;

pub use batch::{DecompileConfig, Decompiler, FileOutcome, FileReport, RunReport, RunStatus};
pub use context::{CancelToken, DecompileContext};
pub use error::{DecodeError, DecompileError, ReadError};
pub use format::FileFormat;
pub use ops::{Mode, OperatorTable};
pub use reader::TokenReader;
pub use statement::{RecordBlock, Statement, decompile_block};
pub use symbols::{SymbolKind, SymbolTable, SymbolTables, resolve};
