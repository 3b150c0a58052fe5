//! Class list parsing: token stream → utilities with their variant prefixes.

use std::fmt;

use logos::Logos;

use crate::style::breakpoint::Breakpoint;
use crate::style::tokenizer::Token;

/// Errors from class list parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    #[error("unexpected character {found:?} at byte {position}")]
    UnexpectedCharacter { position: usize, found: String },
    #[error("variant prefix `{0}:` is not followed by a utility")]
    DanglingVariant(String),
}

/// One utility class with the variant prefixes that condition it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtilityClass {
    /// Variant names without colons, outermost first.
    pub variants: Vec<String>,
    pub utility: String,
}

impl UtilityClass {
    /// The breakpoint this class applies from.
    ///
    /// `Some(Base)` for an unprefixed class, `Some(bp)` for exactly one
    /// breakpoint prefix, `None` when any other variant (e.g. `hover:`) is
    /// involved.
    pub fn breakpoint(&self) -> Option<Breakpoint> {
        match self.variants.as_slice() {
            [] => Some(Breakpoint::Base),
            [only] => Breakpoint::from_prefix(only),
            _ => None,
        }
    }
}

impl fmt::Display for UtilityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for variant in &self.variants {
            write!(f, "{variant}:")?;
        }
        f.write_str(&self.utility)
    }
}

/// A parsed, ordered list of utility classes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: Vec<UtilityClass>,
}

impl ClassList {
    /// Parse a whitespace-separated class string.
    ///
    /// Variant prefixes must be directly attached to the utility they
    /// condition: `sm: flex` is a dangling variant.
    pub fn parse(input: &str) -> Result<Self, StyleError> {
        let mut classes = Vec::new();
        let mut pending: Vec<String> = Vec::new();
        let mut pending_end: Option<usize> = None;

        for (result, span) in Token::lexer(input).spanned() {
            let Ok(token) = result else {
                return Err(StyleError::UnexpectedCharacter {
                    position: span.start,
                    found: input[span].to_owned(),
                });
            };

            if let Some(end) = pending_end {
                if span.start != end {
                    return Err(StyleError::DanglingVariant(pending.join(":")));
                }
            }

            match token {
                Token::Variant => {
                    pending.push(input[span.start..span.end - 1].to_owned());
                    pending_end = Some(span.end);
                }
                Token::Utility => {
                    classes.push(UtilityClass {
                        variants: std::mem::take(&mut pending),
                        utility: input[span].to_owned(),
                    });
                    pending_end = None;
                }
            }
        }

        if !pending.is_empty() {
            return Err(StyleError::DanglingVariant(pending.join(":")));
        }

        Ok(Self { classes })
    }

    /// Iterate over the classes in source order.
    pub fn iter(&self) -> impl Iterator<Item = &UtilityClass> {
        self.classes.iter()
    }

    /// Number of classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
