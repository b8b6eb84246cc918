//! Property tests over generated module trees.

use idl_parse::parse_source;
use proptest::prelude::*;

/// A declaration inside a generated module.
#[derive(Clone, Debug)]
enum Decl {
    Struct(String, Vec<String>),
    Enum(String, Vec<String>),
    Typedef(String),
}

fn name() -> impl Strategy<Value = String> {
    "[A-Z][a-z0-9_]{0,8}".prop_map(|s| format!("N{s}"))
}

fn decl() -> impl Strategy<Value = Decl> {
    prop_oneof![
        (name(), proptest::collection::vec(name(), 0..5)).prop_map(|(n, m)| Decl::Struct(n, m)),
        (name(), proptest::collection::vec(name(), 0..5)).prop_map(|(n, m)| Decl::Enum(n, m)),
        name().prop_map(Decl::Typedef),
    ]
}

fn render(decls: &[Decl]) -> String {
    let mut out = String::from("module Generated {\n");
    for decl in decls {
        match decl {
            Decl::Struct(name, members) => {
                out.push_str(&format!("  struct {name} {{\n"));
                for member in members {
                    out.push_str(&format!("    long {member};\n"));
                }
                out.push_str("  };\n");
            }
            Decl::Enum(name, members) => {
                out.push_str(&format!("  enum {name} {{ {} }};\n", members.join(", ")));
            }
            Decl::Typedef(name) => out.push_str(&format!("  typedef long {name};\n")),
        }
    }
    out.push_str("};\n");
    out
}

proptest! {
    #[test]
    fn declaration_order_is_preserved(decls in proptest::collection::vec(decl(), 0..12)) {
        let source = render(&decls);
        let tree = parse_source(&source).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let module = tree.find("Generated").map(|id| &tree[id]);
        let module = module.ok_or_else(|| TestCaseError::fail("module missing"))?;

        let mut structs = module.structs.iter();
        let mut enums = module.enums.iter();
        let mut typedefs = module.typedefs.iter();
        for decl in &decls {
            match decl {
                Decl::Struct(name, members) => {
                    let parsed = structs.next().ok_or_else(|| TestCaseError::fail("struct missing"))?;
                    prop_assert_eq!(&parsed.name, name);
                    let parsed_members: Vec<_> = parsed.members.iter().map(|m| m.name.clone()).collect();
                    prop_assert_eq!(&parsed_members, members);
                }
                Decl::Enum(name, members) => {
                    let parsed = enums.next().ok_or_else(|| TestCaseError::fail("enum missing"))?;
                    prop_assert_eq!(&parsed.name, name);
                    let parsed_members: Vec<_> = parsed.members.iter().map(|m| m.name.clone()).collect();
                    prop_assert_eq!(&parsed_members, members);
                }
                Decl::Typedef(name) => {
                    let parsed = typedefs.next().ok_or_else(|| TestCaseError::fail("typedef missing"))?;
                    prop_assert_eq!(&parsed.name, name);
                }
            }
        }
        prop_assert!(structs.next().is_none());
        prop_assert!(enums.next().is_none());
        prop_assert!(typedefs.next().is_none());
    }

    #[test]
    fn parsing_is_deterministic(source in "[a-z{};:<>, \n]{0,120}") {
        prop_assert_eq!(parse_source(&source), parse_source(&source));
    }
}
