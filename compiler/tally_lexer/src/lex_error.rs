//! Scanner errors.
//!
//! Every error aborts the scan; no partial token list is returned.

use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum LexError {
    /// No pattern matched at `position`.
    #[error("unexpected character {ch:?} at position {position}")]
    UnexpectedCharacter { ch: char, position: u32 },

    /// A number literal that does not fit its value type.
    #[error("invalid number literal `{text}` at position {position}")]
    InvalidNumber { text: String, position: u32 },

    /// Positions are `u32`; larger inputs cannot be addressed.
    #[error("source of {len} bytes exceeds the {max} byte limit", max = u32::MAX)]
    SourceTooLarge { len: usize },
}

impl LexError {
    /// Source position of the error, if it has one.
    pub fn position(&self) -> Option<u32> {
        match self {
            LexError::UnexpectedCharacter { position, .. }
            | LexError::InvalidNumber { position, .. } => Some(*position),
            LexError::SourceTooLarge { .. } => None,
        }
    }
}
