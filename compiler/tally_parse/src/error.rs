//! Parse errors.
//!
//! There is no recovery: the first error aborts the parse.

use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ParseError {
    /// A token that cannot start a factor.
    #[error("unexpected token {found} at position {position}")]
    UnexpectedToken { found: String, position: u32 },

    /// A required token was missing.
    #[error("expected `{expected}`, found {found} at position {position}")]
    Expected {
        expected: &'static str,
        found: String,
        position: u32,
    },

    /// Tokens left over after the top-level statement list.
    #[error("expected end of input at position {position}, found {found}")]
    TrailingInput { found: String, position: u32 },
}

impl ParseError {
    /// Source position of the offending token.
    pub fn position(&self) -> u32 {
        match self {
            ParseError::UnexpectedToken { position, .. }
            | ParseError::Expected { position, .. }
            | ParseError::TrailingInput { position, .. } => *position,
        }
    }
}
