use idl_lexer::lex;
use idl_parse::parse_source;
use pretty_assertions::assert_eq;

use super::*;

fn dump_tree(source: &str) -> String {
    let parsed = parse_source(source).unwrap();
    let mut out = Vec::new();
    tree(&parsed, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_empty_tree() {
    assert_eq!(dump_tree(""), "Module: (root)\n");
}

#[test]
fn test_nested_modules_indent() {
    let expected = "\
Module: (root)
  Module: A
    TypeDefs:
      T (long)
    Module: A::B
      Enums:
        Color
          RED = 0
          GREEN = 1
";
    assert_eq!(
        dump_tree("module A { typedef long T; module B { enum Color { RED, GREEN }; }; };"),
        expected
    );
}

#[test]
fn test_all_sections() {
    let source = "\
#define VERSION 2
interface Store : Base { long put(in string key, out long size); };
const long MAX = 8;
struct Point : Shape { double x; double y[3]; };
union Value switch (Kind) { case (Kind::Int): long i; };
";
    let expected = "\
Directive: Define { name: \"VERSION\", value: Some(\"2\") }
Module: (root)
  Interfaces:
    Store (: Base)
      long put(in string key, out long size)
  Constants:
    MAX (long) = 8
  Structs:
    Point (: Shape)
      x (double)
      y (double[3])
  Unions:
    Value switch (Kind)
      case Kind::Int: i (long)
";
    assert_eq!(dump_tree(source), expected);
}

#[test]
fn test_tokens() {
    let toks = lex("a;\n").unwrap();
    let mut out = Vec::new();
    tokens(&toks, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Tokens (3):\n  Identifier(\"a\") @ 0..1\n  Semicolon @ 1..2\n  EndLine @ 2..3\n"
    );
}
