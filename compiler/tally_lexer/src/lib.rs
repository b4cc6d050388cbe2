//! Scanner for Tally using logos with string interning.
//!
//! Produces a `TokenList` terminated by a single `Eof` token positioned at the
//! end of the source.

mod lex_error;
mod raw_token;

use logos::Logos;
use tally_ir::{Span, StringInterner, Token, TokenKind, TokenList};
use tracing::{debug, trace};

pub use lex_error::LexError;
use raw_token::RawToken;

/// Lex source code into a `TokenList`.
///
/// Whitespace is skipped. Keywords match first, even as the prefix of a
/// longer word: `printx` lexes as `print` followed by `x`. The first position
/// no pattern matches fails the whole scan.
pub fn lex(source: &str, interner: &StringInterner) -> Result<TokenList, LexError> {
    let eof_pos =
        u32::try_from(source.len()).map_err(|_| LexError::SourceTooLarge { len: source.len() })?;

    let mut result = TokenList::new();
    let mut offset = 0;
    while let Some(resume) = lex_from(source, offset, interner, &mut result)? {
        offset = resume;
    }

    result.push(Token::new(TokenKind::Eof, Span::point(eof_pos)));
    debug!(tokens = result.len(), bytes = source.len(), "lexed source");

    Ok(result)
}

/// Lex `source[offset..]` into `out`.
///
/// Returns the position to restart from after splitting a keyword off the
/// front of an identifier, or `None` once the input is exhausted.
fn lex_from(
    source: &str,
    offset: usize,
    interner: &StringInterner,
    out: &mut TokenList,
) -> Result<Option<usize>, LexError> {
    let too_large = || LexError::SourceTooLarge { len: source.len() };
    let mut logos = RawToken::lexer(&source[offset..]);

    while let Some(token_result) = logos.next() {
        let range = logos.span();
        let start = offset + range.start;
        let slice = logos.slice();

        let raw = match token_result {
            Ok(raw) => raw,
            Err(()) => {
                let ch = slice.chars().next().unwrap_or('\0');
                return Err(LexError::UnexpectedCharacter {
                    ch,
                    position: u32::try_from(start).map_err(|_| too_large())?,
                });
            }
        };

        if raw == RawToken::Ident {
            if let Some((keyword, len)) = RawToken::leading_keyword(slice) {
                let span = Span::try_from_range(start..start + len).map_err(|_| too_large())?;
                push_token(out, convert_token(keyword, &slice[..len], span, interner)?, span);
                return Ok(Some(start + len));
            }
        }

        let span = Span::try_from_range(start..offset + range.end).map_err(|_| too_large())?;
        push_token(out, convert_token(raw, slice, span, interner)?, span);
    }

    Ok(None)
}

fn push_token(out: &mut TokenList, kind: TokenKind, span: Span) {
    trace!(?kind, start = span.start, "token");
    out.push(Token::new(kind, span));
}

/// Convert a raw token to a `TokenKind`, interning identifiers and parsing
/// number literals.
fn convert_token(
    raw: RawToken,
    slice: &str,
    span: Span,
    interner: &StringInterner,
) -> Result<TokenKind, LexError> {
    let invalid_number = || LexError::InvalidNumber {
        text: slice.to_owned(),
        position: span.start,
    };

    let kind = match raw {
        // Literals
        RawToken::Int => TokenKind::Int(slice.parse::<i64>().map_err(|_| invalid_number())?),
        RawToken::Float => TokenKind::float(slice.parse::<f64>().map_err(|_| invalid_number())?),
        RawToken::Ident => TokenKind::Ident(interner.intern(slice)),

        // Keywords
        RawToken::Print => TokenKind::Print,
        RawToken::If => TokenKind::If,
        RawToken::Else => TokenKind::Else,
        RawToken::While => TokenKind::While,
        RawToken::Do => TokenKind::Do,
        RawToken::Continue => TokenKind::Continue,
        RawToken::Break => TokenKind::Break,
        RawToken::Return => TokenKind::Return,
        RawToken::Assert => TokenKind::Assert,

        // Operators
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,
        RawToken::Eq => TokenKind::Eq,
        RawToken::AmpAmp => TokenKind::AmpAmp,
        RawToken::PipePipe => TokenKind::PipePipe,
        RawToken::Bang => TokenKind::Bang,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,

        // Punctuation
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Dot => TokenKind::Dot,
    };

    Ok(kind)
}
