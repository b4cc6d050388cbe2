//! Token cursor for navigating the token stream.
//!
//! Provides token access, one-token lookahead, and consumption.

use tally_ir::{Span, StringInterner, Token, TokenKind, TokenList};
use tracing::trace;

use crate::ParseError;

/// Returned when reading past the end of a list with no `Eof` sentinel.
static EOF: Token = Token::new(TokenKind::Eof, Span::DUMMY);

/// Cursor over a [`TokenList`].
///
/// Never moves past the final token, so a lexer-produced list always leaves
/// the cursor parked on `Eof`.
pub(crate) struct Cursor<'a> {
    tokens: &'a TokenList,
    interner: &'a StringInterner,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Cursor {
            tokens,
            interner,
            pos: 0,
        }
    }

    #[inline]
    pub fn current(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&EOF)
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Span of the most recently consumed token.
    #[inline]
    pub fn previous_span(&self) -> Span {
        match self.pos.checked_sub(1).and_then(|i| self.tokens.get(i)) {
            Some(token) => token.span,
            None => Span::DUMMY,
        }
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    /// Check if the current token is of the given kind (payloads ignored).
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind().same_kind(kind)
    }

    /// Kind of the token after the current one.
    #[inline]
    pub fn peek_next_kind(&self) -> TokenKind {
        self.tokens.get(self.pos + 1).map_or(TokenKind::Eof, |t| t.kind)
    }

    /// Consume the current token and return it.
    pub fn advance(&mut self) -> Token {
        let token = *self.current();
        trace!(
            pos = self.pos,
            kind = %token.kind.display_name(),
            span_start = token.span.start,
            span_end = token.span.end,
            "advance"
        );
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    /// Consume a token of the given kind or fail with `ParseError::Expected`.
    pub fn expect(&mut self, kind: &TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.make_expect_error(kind))
        }
    }

    #[cold]
    fn make_expect_error(&self, kind: &TokenKind) -> ParseError {
        ParseError::Expected {
            expected: kind.display_name(),
            found: self.describe_current(),
            position: self.current().position(),
        }
    }

    /// Human-readable description of the current token for diagnostics.
    pub fn describe_current(&self) -> String {
        match self.current_kind() {
            TokenKind::Int(n) => format!("number `{n}`"),
            TokenKind::Float(bits) => format!("number `{:?}`", f64::from_bits(bits)),
            TokenKind::Ident(name) => format!("identifier `{}`", self.interner.lookup(name)),
            TokenKind::Eof => "end of input".to_owned(),
            other => format!("`{}`", other.display_name()),
        }
    }
}
