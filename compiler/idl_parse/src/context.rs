//! Parser context stack.
//!
//! The parser is a state machine: what an identifier means depends on the
//! innermost open scope. Each `{` that opens a module or aggregate pushes a
//! frame, each `}` pops one.

use std::fmt;

use idl_ir::{ModuleId, Span};

/// Kind of scope the parser is in.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ContextKind {
    Global,
    Module,
    Struct,
    Enum,
    Interface,
    Union,
}

impl ContextKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ContextKind::Global => "global",
            ContextKind::Module => "module",
            ContextKind::Struct => "struct",
            ContextKind::Enum => "enum",
            ContextKind::Interface => "interface",
            ContextKind::Union => "union",
        }
    }
}

impl fmt::Display for ContextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What an open scope is populating.
///
/// Aggregates are addressed by their index in the current module's
/// collection, never by reference, so the module can keep growing while the
/// aggregate is open.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Scope {
    Global,
    Module(ModuleId),
    Struct(usize),
    Enum(usize),
    Interface(usize),
    Union(usize),
}

impl Scope {
    pub(crate) fn kind(self) -> ContextKind {
        match self {
            Scope::Global => ContextKind::Global,
            Scope::Module(_) => ContextKind::Module,
            Scope::Struct(_) => ContextKind::Struct,
            Scope::Enum(_) => ContextKind::Enum,
            Scope::Interface(_) => ContextKind::Interface,
            Scope::Union(_) => ContextKind::Union,
        }
    }
}

/// One entry of the context stack.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct ContextFrame {
    pub scope: Scope,
    /// Name of the construct; empty for the global frame.
    pub name: String,
    /// Where the construct's name was written.
    pub span: Span,
}

impl ContextFrame {
    pub(crate) fn global() -> Self {
        ContextFrame {
            scope: Scope::Global,
            name: String::new(),
            span: Span::DUMMY,
        }
    }

    #[inline]
    pub(crate) fn kind(&self) -> ContextKind {
        self.scope.kind()
    }
}
