use idl_ir::{Directive, Type};
use pretty_assertions::assert_eq;

use crate::{parse_source, ErrorContext, FrontEndError, ParseErrorKind};

fn directives(source: &str) -> Vec<Directive> {
    parse_source(source).unwrap().directives().to_vec()
}

fn parse_err(source: &str) -> ParseErrorKind {
    match parse_source(source).unwrap_err() {
        FrontEndError::Parse(err) => err.kind,
        FrontEndError::Lex(err) => panic!("unexpected lex error: {err}"),
    }
}

#[test]
fn test_define_with_value() {
    assert_eq!(
        directives("#define MAX_SAMPLES 64\n"),
        [Directive::Define {
            name: "MAX_SAMPLES".into(),
            value: Some("64".into()),
        }]
    );
}

#[test]
fn test_define_value_stays_on_its_line() {
    let tree = parse_source("#define GUARD\ntypedef long Count;\n").unwrap();
    assert_eq!(
        tree.directives(),
        [Directive::Define {
            name: "GUARD".into(),
            value: None,
        }]
    );
    assert_eq!(tree.root().typedefs[0].ty, Type::new("long"));
}

#[test]
fn test_include() {
    assert_eq!(
        directives("#include \"common/types.idl\"\n"),
        [Directive::Include {
            path: "common/types.idl".into(),
        }]
    );
}

#[test]
fn test_directives_in_order() {
    let found = directives("#include \"a.idl\"\n#define A\n#include \"b.idl\"\n");
    assert_eq!(found.len(), 3);
    assert!(matches!(&found[1], Directive::Define { name, .. } if name == "A"));
}

#[test]
fn test_include_requires_string() {
    assert_eq!(
        parse_err("#include <types.idl>\n"),
        ParseErrorKind::Expected {
            expected: idl_ir::TokenKind::StringLiteral,
            context: ErrorContext::Directive,
            found: "`<`".into(),
        }
    );
}

#[test]
fn test_unknown_directive() {
    assert_eq!(
        parse_err("#pragma once\n"),
        ParseErrorKind::UnknownDirective {
            name: "pragma".into()
        }
    );
}

#[test]
fn test_hash_requires_name() {
    assert_eq!(
        parse_err("# \"x\"\n"),
        ParseErrorKind::Expected {
            expected: idl_ir::TokenKind::Identifier,
            context: ErrorContext::Directive,
            found: "string literal \"x\"".into(),
        }
    );
}
