//! Expression parsing.
//!
//! Levels, loosest first: `||`, `&&`, relational, additive, multiplicative,
//! factor. Every binary level is a left fold, so `a/b/c` is `(a/b)/c` and
//! `x<y>z` is `(x<y)>z`.

use tally_ir::{BinaryOp, Expr, ExprId, ExprKind, Name, TokenKind, UnaryOp};
use tally_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse an expression.
    pub(crate) fn parse_expr(&mut self) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| self.parse_logical_or())
    }

    /// Parse `||` (loosest).
    fn parse_logical_or(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_logical_and()?;

        while self.cursor.check(&TokenKind::PipePipe) {
            self.cursor.advance();
            let right = self.parse_logical_and()?;
            left = self.alloc_binary(BinaryOp::Or, left, right);
        }

        Ok(left)
    }

    /// Parse `&&`.
    fn parse_logical_and(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_relational()?;

        while self.cursor.check(&TokenKind::AmpAmp) {
            self.cursor.advance();
            let right = self.parse_relational()?;
            left = self.alloc_binary(BinaryOp::And, left, right);
        }

        Ok(left)
    }

    /// Parse `<` `>` `<=` `>=` `==` `!=`, all one level.
    fn parse_relational(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_additive()?;

        while let Some(op) = self.match_relational_op() {
            self.cursor.advance();
            let right = self.parse_additive()?;
            left = self.alloc_binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse `+` and `-`.
    fn parse_additive(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_multiplicative()?;

        while let Some(op) = self.match_additive_op() {
            self.cursor.advance();
            let right = self.parse_multiplicative()?;
            left = self.alloc_binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse `*` and `/`.
    fn parse_multiplicative(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_factor()?;

        while let Some(op) = self.match_multiplicative_op() {
            self.cursor.advance();
            let right = self.parse_factor()?;
            left = self.alloc_binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse a factor.
    ///
    /// The operand of `!` and `-` is a full expression, so `-1+2` parses as
    /// `-(1+2)`.
    fn parse_factor(&mut self) -> Result<ExprId, ParseError> {
        let span = self.cursor.current_span();

        match self.cursor.current_kind() {
            TokenKind::Int(n) => {
                self.cursor.advance();
                Ok(self.arena.alloc_expr(Expr::new(ExprKind::Int(n), span)))
            }
            TokenKind::Float(bits) => {
                self.cursor.advance();
                Ok(self.arena.alloc_expr(Expr::new(ExprKind::Float(bits), span)))
            }
            TokenKind::Ident(name) => {
                if self.cursor.peek_next_kind() == TokenKind::LParen {
                    return self.parse_call(name);
                }
                self.cursor.advance();
                Ok(self.arena.alloc_expr(Expr::new(ExprKind::Ident(name), span)))
            }
            TokenKind::LParen => {
                self.cursor.advance();
                let inner = self.parse_expr()?;
                self.cursor.expect(&TokenKind::RParen)?;
                Ok(inner)
            }
            TokenKind::Bang | TokenKind::Minus => {
                let op = if self.cursor.check(&TokenKind::Bang) {
                    UnaryOp::Not
                } else {
                    UnaryOp::Neg
                };
                self.cursor.advance();
                let operand = self.parse_expr()?;
                let span = span.merge(self.arena.get_expr(operand).span);
                Ok(self
                    .arena
                    .alloc_expr(Expr::new(ExprKind::Unary { op, operand }, span)))
            }
            _ => Err(ParseError::UnexpectedToken {
                found: self.cursor.describe_current(),
                position: span.start,
            }),
        }
    }

    /// Parse `func(arg, ...)`. The cursor is on `func`.
    fn parse_call(&mut self, func: Name) -> Result<ExprId, ParseError> {
        let start = self.cursor.advance().span;
        self.cursor.expect(&TokenKind::LParen)?;

        let mut args = Vec::new();
        if !self.cursor.check(&TokenKind::RParen) {
            args.push(self.parse_expr()?);
            while self.cursor.check(&TokenKind::Comma) {
                self.cursor.advance();
                args.push(self.parse_expr()?);
            }
        }
        let end = self.cursor.expect(&TokenKind::RParen)?.span;

        let args = self.arena.alloc_expr_list(args);
        Ok(self
            .arena
            .alloc_expr(Expr::new(ExprKind::Call { func, args }, start.merge(end))))
    }

    fn alloc_binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> ExprId {
        let span = self
            .arena
            .get_expr(left)
            .span
            .merge(self.arena.get_expr(right).span);
        self.arena
            .alloc_expr(Expr::new(ExprKind::Binary { op, left, right }, span))
    }

    fn match_relational_op(&self) -> Option<BinaryOp> {
        match self.cursor.current_kind() {
            TokenKind::Lt => Some(BinaryOp::Lt),
            TokenKind::Gt => Some(BinaryOp::Gt),
            TokenKind::LtEq => Some(BinaryOp::LtEq),
            TokenKind::GtEq => Some(BinaryOp::GtEq),
            TokenKind::EqEq => Some(BinaryOp::Eq),
            TokenKind::NotEq => Some(BinaryOp::NotEq),
            _ => None,
        }
    }

    fn match_additive_op(&self) -> Option<BinaryOp> {
        match self.cursor.current_kind() {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            _ => None,
        }
    }

    fn match_multiplicative_op(&self) -> Option<BinaryOp> {
        match self.cursor.current_kind() {
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            _ => None,
        }
    }
}
