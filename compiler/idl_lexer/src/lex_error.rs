//! Lexer error types.

use idl_ir::Span;
use thiserror::Error;

/// A fatal lexer error. Lexing stops at the first one.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{kind}")]
pub struct LexError {
    /// WHAT went wrong.
    pub kind: LexErrorKind,
    /// WHERE it went wrong: the offending literal or word.
    pub span: Span,
}

impl LexError {
    #[cold]
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        LexError { kind, span }
    }
}

/// What kind of lexer error occurred.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    /// Missing closing `"` for a string literal.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// The buffer ended in the middle of an identifier.
    #[error("unexpected end of input while scanning an identifier")]
    UnexpectedEofInIdentifier,
}
