//! Raw logos tokens, before interning and numeric conversion.

use logos::Logos;

/// Token as recognised by logos.
///
/// Logos prefers the longest match, so `printx` arrives as one `Ident`. The
/// scanner splits a leading keyword off such identifiers with
/// [`RawToken::leading_keyword`].
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub(crate) enum RawToken {
    // Keywords
    #[token("print")]
    Print,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("while")]
    While,
    #[token("do")]
    Do,
    #[token("continue")]
    Continue,
    #[token("break")]
    Break,
    #[token("return")]
    Return,
    #[token("assert")]
    Assert,

    // Operators
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("=")]
    Eq,
    #[token("&&")]
    AmpAmp,
    #[token("||")]
    PipePipe,
    #[token("!")]
    Bang,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,

    // Punctuation
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,

    /// Digits only: `42`
    #[regex(r"[0-9]+")]
    Int,

    /// Digits-dot-optional-digits or dot-digits: `3.14`, `11.`, `.5`
    #[regex(r"[0-9]+\.[0-9]*|\.[0-9]+")]
    Float,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}

impl RawToken {
    /// Keywords in match order.
    const KEYWORDS: [(&'static str, RawToken); 9] = [
        ("print", RawToken::Print),
        ("if", RawToken::If),
        ("else", RawToken::Else),
        ("while", RawToken::While),
        ("do", RawToken::Do),
        ("continue", RawToken::Continue),
        ("break", RawToken::Break),
        ("return", RawToken::Return),
        ("assert", RawToken::Assert),
    ];

    /// The first keyword `text` starts with, and its length.
    pub(crate) fn leading_keyword(text: &str) -> Option<(RawToken, usize)> {
        Self::KEYWORDS
            .iter()
            .find(|(keyword, _)| text.starts_with(keyword))
            .map(|&(keyword, raw)| (raw, keyword.len()))
    }
}
