use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_is_word_requires_identifier_kind() {
    let ident = Token::dummy(TokenKind::Identifier, "case");
    let string = Token::dummy(TokenKind::StringLiteral, "case");
    assert!(ident.is_word("case"));
    assert!(!ident.is_word("switch"));
    assert!(!string.is_word("case"));
}

#[test]
fn test_invalid_sentinel() {
    let tok = Token::invalid(42);
    assert_eq!(tok.kind, TokenKind::Invalid);
    assert!(tok.text.is_empty());
    assert_eq!(tok.span, Span::point(42));
}

#[test]
fn test_display_mentions_text() {
    assert_eq!(
        Token::dummy(TokenKind::Identifier, "foo").to_string(),
        "identifier `foo`"
    );
    assert_eq!(
        Token::dummy(TokenKind::StringLiteral, "a.idl").to_string(),
        "string literal \"a.idl\""
    );
    assert_eq!(
        Token::punct(TokenKind::Namespace, Span::DUMMY).to_string(),
        "`::`"
    );
    assert_eq!(TokenKind::Invalid.to_string(), "end of input");
}

#[test]
fn test_debug_format() {
    let tok = Token::new(TokenKind::Identifier, "x", Span::new(1, 2));
    assert_eq!(format!("{tok:?}"), "Identifier(\"x\") @ 1..2");
    let brace = Token::punct(TokenKind::OpenBrace, Span::new(3, 4));
    assert_eq!(format!("{brace:?}"), "OpenBrace @ 3..4");
}
