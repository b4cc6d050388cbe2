//! Recursive descent parser for Tally.
//!
//! Produces a flat AST in an `ExprArena`, rooted at a single `Program` node.
//! The whole token stream must be consumed; there is no error recovery.

mod cursor;
mod error;
mod grammar;

pub use error::ParseError;

use cursor::Cursor;
use tally_ir::{ExprArena, ExprId, StringInterner, TokenList};
use tracing::debug;

/// Result of a successful parse.
#[derive(Clone, Debug)]
pub struct ParseOutput {
    /// Storage for every node of the program.
    pub arena: ExprArena,
    /// The root `Program` node.
    pub program: ExprId,
}

/// Parser state.
pub(crate) struct Parser<'a> {
    cursor: Cursor<'a>,
    arena: ExprArena,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Parser {
            cursor: Cursor::new(tokens, interner),
            arena: ExprArena::with_capacity(tokens.len()),
        }
    }
}

/// Parse a token list into a program.
///
/// `interner` must be the one the tokens were lexed with; it is used to name
/// identifiers in error messages.
pub fn parse(tokens: &TokenList, interner: &StringInterner) -> Result<ParseOutput, ParseError> {
    let mut parser = Parser::new(tokens, interner);
    let program = parser.parse_program()?;
    debug!(nodes = parser.arena.expr_count(), "parsed program");

    Ok(ParseOutput {
        arena: parser.arena,
        program,
    })
}

#[cfg(test)]
mod tests;
