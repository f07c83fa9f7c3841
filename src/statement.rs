//! Statement block decompilation.
//!
//! A statement block is a record count followed by that many records of the
//! form `opcode operand_count operand...`. A negative opcode is the negated
//! form of the operator at its absolute value.

use crate::context::DecompileContext;
use crate::error::{DecodeError, ReadError};
use crate::ops::{OperandRole, Operator};
use crate::reader::TokenReader;
use std::fmt;
use std::io::BufRead;

/// Negation prefix of the engine's script syntax.
pub const NEGATION_PREFIX: &str = "neg|";

/// Callee of a decompiled statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementHead {
    /// Opcode resolved in the active table.
    Operator(&'static str),
    /// Unresolved absolute opcode.
    Raw(u64),
}

impl fmt::Display for StatementHead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatementHead::Operator(name) => f.write_str(name),
            StatementHead::Raw(code) => write!(f, "{code}"),
        }
    }
}

/// One decompiled call-expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// Whether the opcode was negative.
    pub negated: bool,
    /// Operator name or raw opcode.
    pub head: StatementHead,
    /// Operands, already rendered.
    pub operands: Vec<String>,
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            f.write_str(NEGATION_PREFIX)?;
        }
        write!(f, "{}({})", self.head, self.operands.join(", "))
    }
}

/// Ordered statements of one block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordBlock {
    /// Statements in stream order.
    pub statements: Vec<Statement>,
}

impl RecordBlock {
    /// Whether the block has no statements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Number of statements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// One `statement,` line per statement, each prefixed with `indent`.
    ///
    /// Callers decide how an empty block is laid out; this returns an empty
    /// string for it.
    #[must_use]
    pub fn render(&self, indent: &str) -> String {
        let mut out = String::new();
        for statement in &self.statements {
            out.push_str(indent);
            out.push_str(&statement.to_string());
            out.push_str(",\n");
        }
        out
    }
}

/// Render a float the way module source writes literals (`1.0`, `0.25`).
#[must_use]
pub fn render_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// Decompile one statement block.
///
/// # Errors
///
/// Returns [`DecodeError::Cancelled`] if the run was cancelled before the
/// block started, [`DecodeError::Read`] if the record count itself is missing
/// or non-numeric (no record has started, so there is no record index), and
/// [`DecodeError::MalformedStatement`] if any record is truncated or carries
/// a non-numeric token.
pub fn decompile_block<R: BufRead>(
    reader: &mut TokenReader<R>,
    ctx: &DecompileContext,
) -> Result<RecordBlock, DecodeError> {
    if ctx.is_cancelled() {
        return Err(DecodeError::Cancelled);
    }
    let count = reader.next_i64()?;
    let count = usize::try_from(count).unwrap_or(0);
    let mut block = RecordBlock {
        statements: Vec::with_capacity(count.min(1024)),
    };
    for record in 0..count {
        let statement = decompile_statement(reader, ctx)
            .map_err(|source| DecodeError::MalformedStatement { record, source })?;
        block.statements.push(statement);
    }
    Ok(block)
}

fn decompile_statement<R: BufRead>(
    reader: &mut TokenReader<R>,
    ctx: &DecompileContext,
) -> Result<Statement, ReadError> {
    let opcode = reader.next_i64()?;
    let negated = opcode < 0;
    let code = opcode.unsigned_abs();
    let operator = u32::try_from(code)
        .ok()
        .and_then(|code| ctx.operators().lookup(code));
    let count = usize::try_from(reader.next_i64()?).unwrap_or(0);

    let mut operands = Vec::with_capacity(count.min(64));
    for slot in 0..count {
        let role = operator.map_or(OperandRole::Int, |op| op.role(slot));
        operands.push(read_operand(reader, role, ctx)?);
    }

    let head = match operator {
        Some(op) => {
            check_arity(op, count);
            StatementHead::Operator(op.name)
        }
        None => StatementHead::Raw(code),
    };
    Ok(Statement {
        negated,
        head,
        operands,
    })
}

fn read_operand<R: BufRead>(
    reader: &mut TokenReader<R>,
    role: OperandRole,
    ctx: &DecompileContext,
) -> Result<String, ReadError> {
    Ok(match role {
        OperandRole::Int => reader.next_i64()?.to_string(),
        OperandRole::Float => render_float(reader.next_f64()?),
        OperandRole::Symbol(kind) => ctx.symbols().resolve(kind, reader.next_i64()?),
    })
}

fn check_arity(op: &Operator, count: usize) {
    if !op.arity.accepts(count) {
        tracing::debug!(
            operator = op.name,
            expected = ?op.arity,
            found = count,
            "operand count does not match declared arity"
        );
    }
}

/// Consume one statement block without rendering it.
///
/// # Errors
///
/// Returns a [`ReadError`] if the block is truncated or malformed.
pub fn skip_block<R: BufRead>(reader: &mut TokenReader<R>) -> Result<(), ReadError> {
    let count = reader.next_i64()?;
    for _ in 0..count.max(0) {
        reader.next_i64()?;
        let operands = reader.next_i64()?;
        for _ in 0..operands.max(0) {
            reader.next_word()?;
        }
    }
    Ok(())
}
