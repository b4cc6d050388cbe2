//! Arena allocation for the flat AST.
//!
//! - Contiguous storage for all nodes of one program
//! - Children referenced by `ExprId`, lists by `ExprRange`
//! - Bulk deallocation when the arena is dropped

use std::fmt;

use crate::{Expr, ExprId, ExprRange};

/// Contiguous storage for every node of a parsed program.
#[derive(Clone, Default, Eq, PartialEq)]
pub struct ExprArena {
    /// All nodes (indexed by `ExprId`).
    exprs: Vec<Expr>,

    /// Flattened node lists (statement lists, call arguments).
    expr_lists: Vec<ExprId>,
}

impl ExprArena {
    /// Create a new empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with capacity estimated from the token count.
    pub fn with_capacity(token_count: usize) -> Self {
        ExprArena {
            exprs: Vec::with_capacity(token_count),
            expr_lists: Vec::with_capacity(token_count / 4),
        }
    }

    /// Allocate a node, return its ID.
    #[inline]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "node count is bounded by token count, which is bounded by a u32 source length"
    )]
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(self.exprs.len() as u32);
        self.exprs.push(expr);
        id
    }

    /// Get a node by ID.
    ///
    /// # Panics
    /// Panics if `id` did not come from this arena.
    #[inline]
    #[track_caller]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    /// Number of allocated nodes.
    #[inline]
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    /// Allocate a node list, return its range.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "list storage is bounded by node count"
    )]
    pub fn alloc_expr_list(&mut self, exprs: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = self.expr_lists.len();
        self.expr_lists.extend(exprs);
        let len = self.expr_lists.len() - start;
        ExprRange::new(start as u32, len as u32)
    }

    /// Get the nodes of a list.
    ///
    /// # Panics
    /// Panics if `range` did not come from this arena.
    #[inline]
    #[track_caller]
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        let start = range.start as usize;
        &self.expr_lists[start..start + range.len()]
    }
}

impl fmt::Debug for ExprArena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExprArena")
            .field("exprs", &self.exprs.len())
            .field("expr_lists", &self.expr_lists.len())
            .finish()
    }
}
