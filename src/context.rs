//! Immutable per-run decompilation context and cooperative cancellation.

use crate::ops::{Mode, OperatorTable};
use crate::symbols::SymbolTables;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared flag used to request that a running decompile stop.
///
/// Clones observe the same flag, so a control thread can hold one clone
/// while the worker holds another.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// New, not yet cancelled, token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation was requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

/// Everything a driver needs to render one file.
///
/// Built once per run and handed to every driver by reference.
#[derive(Debug)]
pub struct DecompileContext {
    operators: OperatorTable,
    symbols: SymbolTables,
    cancel: CancelToken,
}

impl DecompileContext {
    /// Assemble a context from already-built tables.
    #[must_use]
    pub fn new(operators: OperatorTable, symbols: SymbolTables, cancel: CancelToken) -> Self {
        Self {
            operators,
            symbols,
            cancel,
        }
    }

    /// Context for `mode` with no symbol tables and a fresh token.
    #[must_use]
    pub fn for_mode(mode: Mode) -> Self {
        Self::new(OperatorTable::load(mode), SymbolTables::new(), CancelToken::new())
    }

    /// Active engine mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.operators.mode()
    }

    /// Opcode table of the active mode.
    #[must_use]
    pub fn operators(&self) -> &OperatorTable {
        &self.operators
    }

    /// Loaded symbol tables.
    #[must_use]
    pub fn symbols(&self) -> &SymbolTables {
        &self.symbols
    }

    /// Whether the run has been cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}
