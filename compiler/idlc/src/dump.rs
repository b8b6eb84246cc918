//! Human-readable dumps of tokens and module trees.
//!
//! Output goes to any `io::Write`; nesting is an explicit `depth` threaded
//! through the recursion.

use std::fmt;
use std::io::{self, Write};

use idl_ir::{Module, ModuleId, ModuleTree, Token};

/// Spaces per nesting level.
const INDENT: usize = 2;

fn line(out: &mut dyn Write, depth: usize, args: fmt::Arguments<'_>) -> io::Result<()> {
    writeln!(out, "{:width$}{args}", "", width = depth * INDENT)
}

/// Print one token per line.
pub fn tokens(tokens: &[Token], out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Tokens ({}):", tokens.len())?;
    for token in tokens {
        line(out, 1, format_args!("{token:?}"))?;
    }
    Ok(())
}

/// Print the whole tree, starting at the root.
pub fn tree(tree: &ModuleTree, out: &mut dyn Write) -> io::Result<()> {
    for directive in tree.directives() {
        writeln!(out, "Directive: {directive:?}")?;
    }
    module(tree, ModuleId::ROOT, 0, out)
}

/// Print `id` and its nested modules at `depth`.
pub fn module(tree: &ModuleTree, id: ModuleId, depth: usize, out: &mut dyn Write) -> io::Result<()> {
    let m = &tree[id];
    if m.parent.is_none() {
        line(out, depth, format_args!("Module: (root)"))?;
    } else {
        line(out, depth, format_args!("Module: {}", tree.path(id)))?;
    }
    declarations(m, depth + 1, out)?;

    for (child, _) in tree.children(id) {
        module(tree, child, depth + 1, out)?;
    }
    Ok(())
}

fn declarations(m: &Module, depth: usize, out: &mut dyn Write) -> io::Result<()> {
    if !m.interfaces.is_empty() {
        line(out, depth, format_args!("Interfaces:"))?;
    }
    for iface in &m.interfaces {
        line(out, depth + 1, format_args!("{}{}", iface.name, Inherits(&iface.inherits)))?;
        for method in &iface.methods {
            let params: Vec<_> = method.parameters.iter().map(ToString::to_string).collect();
            line(
                out,
                depth + 2,
                format_args!("{} {}({})", method.return_value, method.name, params.join(", ")),
            )?;
        }
    }

    if !m.constants.is_empty() {
        line(out, depth, format_args!("Constants:"))?;
    }
    for constant in &m.constants {
        line(
            out,
            depth + 1,
            format_args!("{} ({}) = {}", constant.name, constant.ty, constant.value),
        )?;
    }

    if !m.typedefs.is_empty() {
        line(out, depth, format_args!("TypeDefs:"))?;
    }
    for typedef in &m.typedefs {
        line(out, depth + 1, format_args!("{} ({})", typedef.name, typedef.ty))?;
    }

    if !m.enums.is_empty() {
        line(out, depth, format_args!("Enums:"))?;
    }
    for e in &m.enums {
        line(out, depth + 1, format_args!("{}", e.name))?;
        for (ordinal, name) in e.ordinals() {
            line(out, depth + 2, format_args!("{name} = {ordinal}"))?;
        }
    }

    if !m.structs.is_empty() {
        line(out, depth, format_args!("Structs:"))?;
    }
    for s in &m.structs {
        line(out, depth + 1, format_args!("{}{}", s.name, Inherits(&s.inherits)))?;
        for member in &s.members {
            line(out, depth + 2, format_args!("{} ({})", member.name, member.ty))?;
        }
    }

    if !m.unions.is_empty() {
        line(out, depth, format_args!("Unions:"))?;
    }
    for u in &m.unions {
        line(out, depth + 1, format_args!("{} switch ({})", u.name, u.discriminant))?;
        for case in &u.members {
            line(
                out,
                depth + 2,
                format_args!(
                    "case {}: {} ({})",
                    case.case_value, case.member_name, case.member_type
                ),
            )?;
        }
    }
    Ok(())
}

/// ` (: A, B)`, or nothing when there are no bases.
struct Inherits<'a>(&'a [String]);

impl fmt::Display for Inherits<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            Ok(())
        } else {
            write!(f, " (: {})", self.0.join(", "))
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
