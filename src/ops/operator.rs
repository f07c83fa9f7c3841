//! Operator representation.

use crate::symbols::SymbolKind;

/// Expected operand count of an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many operands.
    Exact(usize),
    /// At least this many operands (variadic tail).
    AtLeast(usize),
}

impl Arity {
    /// Whether `count` operands satisfy this arity.
    #[must_use]
    pub const fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exact(n) => count == n,
            Arity::AtLeast(n) => count >= n,
        }
    }
}

/// How a single operand slot is read and rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandRole {
    /// Raw signed integer.
    Int,
    /// Raw floating-point value.
    Float,
    /// Index into a symbol table, rendered with the table's prefix.
    Symbol(SymbolKind),
}

/// One entry of a mode's opcode table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operator {
    /// Opcode with the negation bit removed.
    pub code: u32,
    /// Mnemonic emitted in generated source.
    pub name: &'static str,
    /// Declared operand count.
    pub arity: Arity,
    /// Per-slot rendering rules; slots past the end render as raw integers.
    pub roles: &'static [OperandRole],
}

impl Operator {
    /// Role of operand `slot`.
    #[must_use]
    pub fn role(&self, slot: usize) -> OperandRole {
        self.roles.get(slot).copied().unwrap_or(OperandRole::Int)
    }
}

// Role shorthands for the definition tables.
pub(super) const I: OperandRole = OperandRole::Int;
pub(super) const F: OperandRole = OperandRole::Float;
pub(super) const TRP: OperandRole = OperandRole::Symbol(SymbolKind::Troop);
pub(super) const ITM: OperandRole = OperandRole::Symbol(SymbolKind::Item);
pub(super) const FAC: OperandRole = OperandRole::Symbol(SymbolKind::Faction);
pub(super) const PTY: OperandRole = OperandRole::Symbol(SymbolKind::Party);
pub(super) const PT: OperandRole = OperandRole::Symbol(SymbolKind::PartyTemplate);
pub(super) const SCN: OperandRole = OperandRole::Symbol(SymbolKind::Scene);
pub(super) const QST: OperandRole = OperandRole::Symbol(SymbolKind::Quest);
pub(super) const SKL: OperandRole = OperandRole::Symbol(SymbolKind::Skill);
pub(super) const STR: OperandRole = OperandRole::Symbol(SymbolKind::Str);
pub(super) const SND: OperandRole = OperandRole::Symbol(SymbolKind::Sound);
pub(super) const MESH: OperandRole = OperandRole::Symbol(SymbolKind::Mesh);
pub(super) const SPR: OperandRole = OperandRole::Symbol(SymbolKind::SceneProp);
pub(super) const PSYS: OperandRole = OperandRole::Symbol(SymbolKind::ParticleSystem);
pub(super) const ICON: OperandRole = OperandRole::Symbol(SymbolKind::MapIcon);
pub(super) const SCRIPT: OperandRole = OperandRole::Symbol(SymbolKind::Script);

/// Shorthand used by the definition tables.
pub(super) const fn op(
    code: u32,
    name: &'static str,
    arity: Arity,
    roles: &'static [OperandRole],
) -> Operator {
    Operator {
        code,
        name,
        arity,
        roles,
    }
}
