//! Token types for the IDL lexer.
//!
//! Keywords are not token kinds: every alphanumeric run is an
//! [`TokenKind::Identifier`] and the parser decides what it means from
//! context. That keeps words like `in`, `out`, `case` and `switch` usable as
//! ordinary names everywhere else in the grammar.

use std::fmt;

use super::Span;

/// Kind of a lexed token.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// Any run of `[A-Za-z0-9_]`, including numbers and keywords.
    Identifier,
    /// `#`
    Hash,
    /// `"..."`; the token text excludes the quotes.
    StringLiteral,
    /// `:`
    Colon,
    /// `::`
    Namespace,
    /// `;`
    Semicolon,
    /// `{`
    OpenBrace,
    /// `}`
    CloseBrace,
    /// `[`
    OpenSquareBracket,
    /// `]`
    CloseSquareBracket,
    /// `(`
    OpenBracket,
    /// `)`
    CloseBracket,
    /// `=`
    Equals,
    /// `\n`. Directives are line-terminated, so newlines survive lexing.
    EndLine,
    /// `,`
    Comma,
    /// `<`
    LessThan,
    /// `>`
    GreaterThan,
    /// Sentinel returned for reads past the last token. Never lexed.
    Invalid,
}

impl TokenKind {
    /// Human-readable name used in diagnostics.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Hash => "`#`",
            TokenKind::StringLiteral => "string literal",
            TokenKind::Colon => "`:`",
            TokenKind::Namespace => "`::`",
            TokenKind::Semicolon => "`;`",
            TokenKind::OpenBrace => "`{`",
            TokenKind::CloseBrace => "`}`",
            TokenKind::OpenSquareBracket => "`[`",
            TokenKind::CloseSquareBracket => "`]`",
            TokenKind::OpenBracket => "`(`",
            TokenKind::CloseBracket => "`)`",
            TokenKind::Equals => "`=`",
            TokenKind::EndLine => "end of line",
            TokenKind::Comma => "`,`",
            TokenKind::LessThan => "`<`",
            TokenKind::GreaterThan => "`>`",
            TokenKind::Invalid => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A token with its literal text and its span in the source.
///
/// `text` is non-empty only for identifiers and string literals.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Punctuation token with no literal text.
    #[inline]
    pub fn punct(kind: TokenKind, span: Span) -> Self {
        Token {
            kind,
            text: String::new(),
            span,
        }
    }

    /// The past-the-end sentinel, positioned at `offset`.
    pub fn invalid(offset: u32) -> Self {
        Token::punct(TokenKind::Invalid, Span::point(offset))
    }

    /// Create a token without a meaningful location, for tests and tools.
    pub fn dummy(kind: TokenKind, text: impl Into<String>) -> Self {
        Token::new(kind, text, Span::DUMMY)
    }

    /// Check whether this is the identifier `word`.
    #[inline]
    pub fn is_word(&self, word: &str) -> bool {
        self.kind == TokenKind::Identifier && self.text == word
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.text.is_empty() {
            write!(f, "{:?} @ {}", self.kind, self.span)
        } else {
            write!(f, "{:?}({:?}) @ {}", self.kind, self.text, self.span)
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Identifier => write!(f, "identifier `{}`", self.text),
            TokenKind::StringLiteral => write!(f, "string literal \"{}\"", self.text),
            kind => f.write_str(kind.display_name()),
        }
    }
}

#[cfg(test)]
mod tests;
