use std::fmt;

use thiserror::Error;

/// What went wrong while parsing a role expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("empty expression")]
    Empty,

    #[error("empty parentheses")]
    EmptyGroup,

    #[error("unexpected end of expression, expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    #[error("unexpected '{found}', expected {expected}")]
    UnexpectedToken {
        found: String,
        expected: &'static str,
    },

    #[error("unclosed parenthesis")]
    UnclosedParen,

    #[error("unmatched ')'")]
    UnmatchedCloseParen,

    #[error("missing operator before '{found}'")]
    MissingOperator { found: String },

    #[error("expression nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },

    #[error("expression is {len} bytes long, limit is {limit}")]
    TooLong { len: usize, limit: usize },
}

/// Error produced when a role expression fails to parse.
///
/// Carries the byte offset in the source where the problem was detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    kind: ParseErrorKind,
    offset: usize,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    #[must_use]
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// Byte offset into the source expression.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "parse error at offset {}: {}", self.offset, self.kind)
    }
}

impl std::error::Error for ParseError {}
