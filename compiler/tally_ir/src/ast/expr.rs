//! Expression and statement nodes.

use std::fmt;

use super::operators::{BinaryOp, UnaryOp};
use crate::{ExprId, ExprRange, Name, Span};

/// AST node: a kind plus the source span it was parsed from.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Node variants.
///
/// All children are arena indices. Statement forms (`Print`, `Block`, `If`,
/// `While`, `DoWhile`, `Program`) live here too; the evaluator gives them a
/// `Void` result.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub enum ExprKind {
    // ===== Literals =====
    /// Integer literal: `42`
    Int(i64),

    /// Real literal: `3.14`, `11.`, `.5` (stored as bits for Hash)
    Float(u64),

    /// Variable reference.
    Ident(Name),

    // ===== Operators =====
    /// `left op right`
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },

    /// `op operand`
    Unary { op: UnaryOp, operand: ExprId },

    /// `target = value`
    ///
    /// The parser accepts any expression as target; the evaluator rejects
    /// everything but `Ident`.
    Assign { target: ExprId, value: ExprId },

    /// Built-in function call: `sqrt(9)`
    Call { func: Name, args: ExprRange },

    // ===== Statements =====
    /// `print` with optional operand.
    Print(Option<ExprId>),

    /// `{ s1; s2 }`
    Block(ExprRange),

    /// `if (cond) { .. } else { .. }`
    If {
        cond: ExprId,
        then_branch: ExprId,
        else_branch: Option<ExprId>,
    },

    /// `while (cond) { .. }`
    While { cond: ExprId, body: ExprId },

    /// `do { .. } while (cond)`
    DoWhile { body: ExprId, cond: ExprId },

    /// Root node: the top-level statement list.
    Program(ExprRange),
}

impl ExprKind {
    /// Real literal from its value.
    #[inline]
    pub fn float(value: f64) -> Self {
        ExprKind::Float(value.to_bits())
    }

    /// Short tag for tracing and diagnostics.
    pub const fn tag(&self) -> &'static str {
        match self {
            ExprKind::Int(_) | ExprKind::Float(_) => "number",
            ExprKind::Ident(_) => "identifier",
            ExprKind::Binary { op, .. } => op.as_symbol(),
            ExprKind::Unary { op, .. } => op.as_symbol(),
            ExprKind::Assign { .. } => "assign",
            ExprKind::Call { .. } => "call",
            ExprKind::Print(_) => "print",
            ExprKind::Block(_) => "block",
            ExprKind::If { .. } => "if",
            ExprKind::While { .. } => "while",
            ExprKind::DoWhile { .. } => "do_while",
            ExprKind::Program(_) => "program",
        }
    }
}

impl fmt::Debug for ExprKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprKind::Int(n) => write!(f, "Int({n})"),
            ExprKind::Float(bits) => write!(f, "Float({:?})", f64::from_bits(*bits)),
            ExprKind::Ident(name) => write!(f, "Ident({name:?})"),
            ExprKind::Binary { op, left, right } => {
                write!(f, "Binary({op:?}, {left:?}, {right:?})")
            }
            ExprKind::Unary { op, operand } => write!(f, "Unary({op:?}, {operand:?})"),
            ExprKind::Assign { target, value } => write!(f, "Assign({target:?}, {value:?})"),
            ExprKind::Call { func, args } => write!(f, "Call({func:?}, {args:?})"),
            ExprKind::Print(value) => write!(f, "Print({value:?})"),
            ExprKind::Block(stmts) => write!(f, "Block({stmts:?})"),
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => write!(f, "If({cond:?}, {then_branch:?}, {else_branch:?})"),
            ExprKind::While { cond, body } => write!(f, "While({cond:?}, {body:?})"),
            ExprKind::DoWhile { body, cond } => write!(f, "DoWhile({body:?}, {cond:?})"),
            ExprKind::Program(stmts) => write!(f, "Program({stmts:?})"),
        }
    }
}
