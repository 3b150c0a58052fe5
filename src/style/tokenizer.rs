//! logos-based utility class tokenizer.
//!
//! A class string is a whitespace-separated list of utilities, each optionally
//! preceded by one or more variant prefixes: `md:hover:underline` lexes as
//! `Variant("md:")`, `Variant("hover:")`, `Utility("underline")`.
//!
//! Longest match wins, so `sm:` is a [`Token::Variant`] rather than a
//! [`Token::Utility`] `sm` followed by a stray colon.

use std::ops::Range;

use logos::Logos;

/// Utility class token produced by the lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum Token {
    /// Variant prefix including its colon: `sm:`, `md:`, `hover:`, `2xl:`.
    #[regex(r"[a-zA-Z0-9-]+:")]
    Variant,

    /// A utility name: `grid-cols-2`, `bg-gray-800`, `w-1/2`, `-mt-4`.
    #[regex(r"[a-zA-Z0-9_./%#!\[\]()-]+")]
    Utility,
}

/// Tokenize a class string into `(Token, span)` pairs.
///
/// Characters that fail to lex are skipped.
pub fn tokenize(input: &str) -> Vec<(Token, Range<usize>)> {
    Token::lexer(input)
        .spanned()
        .filter_map(|(result, span)| result.ok().map(|token| (token, span)))
        .collect()
}
