use idl_ir::{Span, Token, TokenKind};
use idl_lexer::{LexError, LexErrorKind};
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_expected_message() {
    let found = Token::new(TokenKind::Identifier, "x", Span::new(4, 5));
    let err = ParseError::expected(&found, TokenKind::Semicolon, ErrorContext::StructMember);
    assert_eq!(
        err.to_string(),
        "expected `;`, found identifier `x` while parsing a struct member"
    );
    assert_eq!(err.span, Span::new(4, 5));
}

#[test]
fn test_mismatch_at_end_of_input_is_eof() {
    let err = ParseError::expected(
        &Token::invalid(12),
        TokenKind::OpenBrace,
        ErrorContext::ModuleName,
    );
    assert_eq!(
        err.kind,
        ParseErrorKind::UnexpectedEof {
            expected: TokenKind::OpenBrace
        }
    );
    assert_eq!(err.span, Span::point(12));
    assert_eq!(err.to_string(), "unexpected end of input, expected `{`");
}

#[test]
fn test_mismatch_uses_custom_kind() {
    let found = Token::punct(TokenKind::OpenBracket, Span::new(9, 10));
    let err = ParseError::mismatch(&found, TokenKind::Identifier, |found| {
        ParseErrorKind::ExpectedSwitch { found }
    });
    assert_eq!(err.to_string(), "expected `switch` after union name, found `(`");
}

#[test]
fn test_messages() {
    let cases = [
        (
            ParseErrorKind::UnexpectedKeyword {
                keyword: "foo".into(),
                context: ContextKind::Module,
            },
            "unexpected keyword in module context: `foo`",
        ),
        (
            ParseErrorKind::UnknownDirective {
                name: "pragma".into(),
            },
            "unknown directive `#pragma`",
        ),
        (
            ParseErrorKind::UnclosedScope {
                kind: ContextKind::Struct,
                name: "Point".into(),
            },
            "unclosed struct `Point` at end of input",
        ),
        (
            ParseErrorKind::UnmatchedCloseBrace,
            "unmatched closing brace",
        ),
    ];
    for (kind, message) in cases {
        assert_eq!(kind.to_string(), message);
    }
}

#[test]
fn test_front_end_error_span() {
    let lex = FrontEndError::from(LexError::new(
        LexErrorKind::UnterminatedString,
        Span::new(3, 7),
    ));
    assert_eq!(lex.span(), Span::new(3, 7));
    assert_eq!(lex.to_string(), "unterminated string literal");

    let parse = FrontEndError::from(ParseError::new(
        ParseErrorKind::UnmatchedCloseBrace,
        Span::new(0, 1),
    ));
    assert_eq!(parse.span(), Span::new(0, 1));
}
