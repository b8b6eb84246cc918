//! Lexer for IDL using logos.
//!
//! Produces a flat `Vec<Token>` for the parser. There is no keyword table:
//! every alphanumeric run becomes an identifier and the parser gives it
//! meaning from context.
//!
//! Newlines are kept as [`TokenKind::EndLine`] because `#define` is
//! line-terminated. Line comments and horizontal whitespace are dropped.
//! Bytes outside the token grammar are skipped.

mod lex_error;

pub use lex_error::{LexError, LexErrorKind};

use idl_ir::{Span, Token, TokenKind};
use logos::Logos;
use tracing::{debug, trace};

/// Raw token from logos (before cooking into a `Token`).
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r]+")] // Skip horizontal whitespace
enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("\n")]
    Newline,

    // Raw bytes up to the next quote; newlines are allowed inside.
    #[regex(r#""[^"]*""#)]
    String,

    // Same literal with no closing quote before the end of input.
    #[regex(r#""[^"]*"#)]
    UnterminatedString,

    #[token("#")]
    Hash,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("::")]
    ColonColon,
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token("=")]
    Eq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,

    #[regex(r"[A-Za-z0-9_]+")]
    Ident,
}

/// Lex IDL source into tokens.
///
/// On error, every token produced so far is discarded and only the error is
/// returned.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let range = logos.span();
        let span = Span::from_range(range.clone());
        let slice = logos.slice();

        match token_result {
            Ok(RawToken::Ident) if range.end == source.len() => {
                return Err(LexError::new(
                    LexErrorKind::UnexpectedEofInIdentifier,
                    span,
                ));
            }
            Ok(raw) => {
                if let Some(token) = cook(raw, slice, span)? {
                    tokens.push(token);
                }
            }
            Err(()) => {
                trace!(?span, text = slice, "skipping byte outside the token grammar");
            }
        }
    }

    debug!(count = tokens.len(), "lexed source");
    Ok(tokens)
}

/// Lex a raw byte buffer. Invalid UTF-8 sequences are replaced with U+FFFD
/// first; they can only occur inside string literals or skipped bytes.
pub fn lex_bytes(source: &[u8]) -> Result<Vec<Token>, LexError> {
    lex(&String::from_utf8_lossy(source))
}

/// Convert a raw token to a `Token`, keeping literal text where it matters.
///
/// Comments cook to nothing; an unterminated string is fatal.
fn cook(raw: RawToken, slice: &str, span: Span) -> Result<Option<Token>, LexError> {
    let kind = match raw {
        RawToken::LineComment => return Ok(None),
        RawToken::UnterminatedString => {
            return Err(LexError::new(LexErrorKind::UnterminatedString, span));
        }
        RawToken::Ident => return Ok(Some(Token::new(TokenKind::Identifier, slice, span))),
        RawToken::String => {
            let content = &slice[1..slice.len() - 1];
            return Ok(Some(Token::new(TokenKind::StringLiteral, content, span)));
        }
        RawToken::Newline => TokenKind::EndLine,
        RawToken::Hash => TokenKind::Hash,
        RawToken::LBrace => TokenKind::OpenBrace,
        RawToken::RBrace => TokenKind::CloseBrace,
        RawToken::LBracket => TokenKind::OpenSquareBracket,
        RawToken::RBracket => TokenKind::CloseSquareBracket,
        RawToken::LParen => TokenKind::OpenBracket,
        RawToken::RParen => TokenKind::CloseBracket,
        RawToken::ColonColon => TokenKind::Namespace,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Eq => TokenKind::Equals,
        RawToken::Lt => TokenKind::LessThan,
        RawToken::Gt => TokenKind::GreaterThan,
    };
    Ok(Some(Token::punct(kind, span)))
}
