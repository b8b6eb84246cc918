//! Parse error types.
//!
//! Parsing stops at the first error: there is no resynchronization and no
//! partial tree. Every error carries the span of the token it was raised on.
//! Running out of tokens where one was required is always reported as
//! [`ParseErrorKind::UnexpectedEof`] rather than as a mismatch against the
//! end-of-input sentinel.

use std::fmt;

use idl_ir::{Span, Token, TokenKind};
use idl_lexer::LexError;
use thiserror::Error;

use crate::ContextKind;

/// The production being parsed when an error was raised.
///
/// Used for "while parsing X" messages.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ErrorContext {
    // === Items ===
    ModuleName,
    TypeDef,
    Constant,
    ConstantValue,
    StructName,
    StructInheritance,
    EnumName,
    InterfaceName,
    InterfaceInheritance,
    UnionName,
    UnionDiscriminant,

    // === Members ===
    StructMember,
    EnumMember,
    Method,
    MethodParameter,
    UnionCase,

    // === Other ===
    TemplateParameters,
    Directive,
}

impl ErrorContext {
    /// Phrase suitable for "while parsing {description}".
    pub fn description(self) -> &'static str {
        match self {
            Self::ModuleName => "a module name",
            Self::TypeDef => "a typedef",
            Self::Constant => "a constant",
            Self::ConstantValue => "a constant value",
            Self::StructName => "a struct header",
            Self::StructInheritance => "struct inheritance",
            Self::EnumName => "an enum header",
            Self::InterfaceName => "an interface header",
            Self::InterfaceInheritance => "interface inheritance",
            Self::UnionName => "a union header",
            Self::UnionDiscriminant => "a union discriminant",
            Self::StructMember => "a struct member",
            Self::EnumMember => "an enum member",
            Self::Method => "an interface method",
            Self::MethodParameter => "a method parameter",
            Self::UnionCase => "a union case",
            Self::TemplateParameters => "template parameters",
            Self::Directive => "a preprocessor directive",
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// What kind of parse error occurred.
///
/// `found` fields hold the rendered offending token, e.g. "identifier `x`".
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum ParseErrorKind {
    /// A token of the wrong kind at a decision point.
    #[error("expected {expected}, found {found} while parsing {context}")]
    Expected {
        expected: TokenKind,
        context: ErrorContext,
        found: String,
    },
    /// A word that does not start a declaration in a global or module scope.
    #[error("unexpected keyword in {context} context: `{keyword}`")]
    UnexpectedKeyword {
        keyword: String,
        context: ContextKind,
    },
    #[error("unknown directive `#{name}`")]
    UnknownDirective { name: String },
    #[error("unexpected parameter direction {found}, expected `in`, `out` or `inout`")]
    InvalidDirection { found: String },
    #[error("expected `case` in union member, found {found}")]
    ExpectedCase { found: String },
    #[error("expected `switch` after union name, found {found}")]
    ExpectedSwitch { found: String },
    /// An interface name followed by something other than `;`, `{` or `:`.
    #[error("invalid interface definition: found {found} after the interface name")]
    InvalidInterfaceDefinition { found: String },
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: TokenKind },
    /// A `}` with no open module or aggregate to close.
    #[error("unmatched closing brace")]
    UnmatchedCloseBrace,
    /// End of input reached inside a module or aggregate.
    #[error("unclosed {kind} `{name}` at end of input")]
    UnclosedScope { kind: ContextKind, name: String },
}

/// A fatal parse error.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    #[cold]
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError { kind, span }
    }

    /// Error raised on `found` when `expected` was required.
    ///
    /// Reaching the end-of-input sentinel becomes `UnexpectedEof`; any other
    /// token is rendered and handed to `make`.
    #[cold]
    pub(crate) fn mismatch(
        found: &Token,
        expected: TokenKind,
        make: impl FnOnce(String) -> ParseErrorKind,
    ) -> Self {
        if found.kind == TokenKind::Invalid {
            ParseError::new(ParseErrorKind::UnexpectedEof { expected }, found.span)
        } else {
            ParseError::new(make(found.to_string()), found.span)
        }
    }

    /// Plain token mismatch while parsing `context`.
    #[cold]
    pub(crate) fn expected(found: &Token, expected: TokenKind, context: ErrorContext) -> Self {
        ParseError::mismatch(found, expected, |found| ParseErrorKind::Expected {
            expected,
            context,
            found,
        })
    }
}

/// Error from [`parse_source`](crate::parse_source): either phase can fail.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum FrontEndError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl FrontEndError {
    /// Location of the error in the source.
    pub fn span(&self) -> Span {
        match self {
            FrontEndError::Lex(err) => err.span,
            FrontEndError::Parse(err) => err.span,
        }
    }
}

#[cfg(test)]
mod tests;
