//! Statement parsing.
//!
//! Statements are dispatched on their first token without backtracking.
//! Anything that is not a keyword statement or a block is an assignment
//! statement, which also covers bare expressions.

use tally_ir::{Expr, ExprId, ExprKind, Span, TokenKind};
use tally_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse the whole token stream as `[ statement { ";" statement } ] Eof`.
    pub(crate) fn parse_program(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.current_span();
        let stmts = self.parse_statement_list(&TokenKind::Eof)?;

        if !self.cursor.is_at_end() {
            return Err(ParseError::TrailingInput {
                found: self.cursor.describe_current(),
                position: self.cursor.current().position(),
            });
        }

        let span = start.merge(self.cursor.current_span());
        let stmts = self.arena.alloc_expr_list(stmts);
        Ok(self
            .arena
            .alloc_expr(Expr::new(ExprKind::Program(stmts), span)))
    }

    /// Parse a single statement.
    fn parse_statement(&mut self) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| match self.cursor.current_kind() {
            TokenKind::LBrace => self.parse_block(),
            TokenKind::If => self.parse_if(),
            TokenKind::While => self.parse_while(),
            TokenKind::Do => self.parse_do_while(),
            TokenKind::Print => self.parse_print(),
            _ => self.parse_assignment(),
        })
    }

    /// Parse `statement { ";" statement }` up to (not including) `end`.
    ///
    /// An empty list and a trailing `;` directly before `end` are accepted.
    fn parse_statement_list(&mut self, end: &TokenKind) -> Result<Vec<ExprId>, ParseError> {
        let mut stmts = Vec::new();
        if self.cursor.check(end) {
            return Ok(stmts);
        }

        stmts.push(self.parse_statement()?);
        while self.cursor.check(&TokenKind::Semicolon) {
            self.cursor.advance();
            if self.cursor.check(end) {
                break;
            }
            stmts.push(self.parse_statement()?);
        }

        Ok(stmts)
    }

    /// Parse `{ statements }`. Blocks do not open a scope.
    fn parse_block(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.expect(&TokenKind::LBrace)?.span;
        let stmts = self.parse_statement_list(&TokenKind::RBrace)?;
        let end = self.cursor.expect(&TokenKind::RBrace)?.span;

        let stmts = self.arena.alloc_expr_list(stmts);
        Ok(self
            .arena
            .alloc_expr(Expr::new(ExprKind::Block(stmts), start.merge(end))))
    }

    /// Parse `print [expression]`.
    ///
    /// The operand is absent when the next token is `}`, `;` or end of input.
    fn parse_print(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.expect(&TokenKind::Print)?.span;

        let value = match self.cursor.current_kind() {
            TokenKind::RBrace | TokenKind::Semicolon | TokenKind::Eof => None,
            _ => Some(self.parse_expr()?),
        };

        let span = self.span_from(start);
        Ok(self
            .arena
            .alloc_expr(Expr::new(ExprKind::Print(value), span)))
    }

    /// Parse `if (cond) block [else block]`.
    fn parse_if(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.expect(&TokenKind::If)?.span;
        let cond = self.parse_condition()?;
        let then_branch = self.parse_block()?;

        let else_branch = if self.cursor.check(&TokenKind::Else) {
            self.cursor.advance();
            Some(self.parse_block()?)
        } else {
            None
        };

        let span = self.span_from(start);
        Ok(self.arena.alloc_expr(Expr::new(
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            },
            span,
        )))
    }

    /// Parse `while (cond) block`.
    fn parse_while(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.expect(&TokenKind::While)?.span;
        let cond = self.parse_condition()?;
        let body = self.parse_block()?;

        let span = self.span_from(start);
        Ok(self
            .arena
            .alloc_expr(Expr::new(ExprKind::While { cond, body }, span)))
    }

    /// Parse `do block while (cond)`.
    fn parse_do_while(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.expect(&TokenKind::Do)?.span;
        let body = self.parse_block()?;
        self.cursor.expect(&TokenKind::While)?;
        let cond = self.parse_condition()?;

        let span = self.span_from(start);
        Ok(self
            .arena
            .alloc_expr(Expr::new(ExprKind::DoWhile { body, cond }, span)))
    }

    /// Parse `expression [= expression]`.
    ///
    /// Any expression is accepted as the target; the evaluator rejects
    /// non-identifiers.
    fn parse_assignment(&mut self) -> Result<ExprId, ParseError> {
        let target = self.parse_expr()?;
        if !self.cursor.check(&TokenKind::Eq) {
            return Ok(target);
        }

        self.cursor.advance();
        let value = self.parse_expr()?;
        let span = self
            .arena
            .get_expr(target)
            .span
            .merge(self.arena.get_expr(value).span);
        Ok(self
            .arena
            .alloc_expr(Expr::new(ExprKind::Assign { target, value }, span)))
    }

    /// Parse `( expression )`.
    fn parse_condition(&mut self) -> Result<ExprId, ParseError> {
        self.cursor.expect(&TokenKind::LParen)?;
        let cond = self.parse_expr()?;
        self.cursor.expect(&TokenKind::RParen)?;
        Ok(cond)
    }

    /// Span from `start` through the last consumed token.
    fn span_from(&self, start: Span) -> Span {
        start.merge(self.cursor.previous_span())
    }
}
