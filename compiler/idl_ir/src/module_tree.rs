//! Module arena.
//!
//! Every `Module` lives in one `ModuleTree` and is addressed by a `ModuleId`.
//! Parent and child links are ids, so adding a module never invalidates a
//! link held elsewhere and the tree has no ownership cycles.

use std::fmt;
use std::ops::Index;

use crate::ast::{Constant, Enum, Interface, Struct, TypeDef, Union};

/// Index of a module inside its `ModuleTree`.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct ModuleId(u32);

impl ModuleId {
    /// The unnamed root module every tree starts with.
    pub const ROOT: ModuleId = ModuleId(0);

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ModuleId({})", self.0)
    }
}

/// A `module Name { ... }` scope, or the unnamed root.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Module {
    pub name: String,
    /// Enclosing module. Navigation only; the tree owns every module.
    pub parent: Option<ModuleId>,
    /// Nested modules in declaration order.
    pub modules: Vec<ModuleId>,
    pub interfaces: Vec<Interface>,
    pub typedefs: Vec<TypeDef>,
    pub structs: Vec<Struct>,
    pub constants: Vec<Constant>,
    pub enums: Vec<Enum>,
    pub unions: Vec<Union>,
}

impl Module {
    fn new(name: String, parent: Option<ModuleId>) -> Self {
        Module {
            name,
            parent,
            ..Module::default()
        }
    }

    /// Whether the module declares nothing at all, nested modules included.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
            && self.interfaces.is_empty()
            && self.typedefs.is_empty()
            && self.structs.is_empty()
            && self.constants.is_empty()
            && self.enums.is_empty()
            && self.unions.is_empty()
    }
}

/// A preprocessor directive, recorded but never evaluated.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Directive {
    /// `#define NAME [VALUE]`
    Define { name: String, value: Option<String> },
    /// `#include "path"`
    Include { path: String },
}

/// Owner of every module produced by one parse.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ModuleTree {
    modules: Vec<Module>,
    directives: Vec<Directive>,
}

impl Default for ModuleTree {
    fn default() -> Self {
        ModuleTree::new()
    }
}

impl ModuleTree {
    /// Create a tree holding only the unnamed root module.
    pub fn new() -> Self {
        ModuleTree {
            modules: vec![Module::new(String::new(), None)],
            directives: Vec::new(),
        }
    }

    /// The unnamed root module.
    #[inline]
    pub fn root(&self) -> &Module {
        &self.modules[ModuleId::ROOT.index()]
    }

    #[inline]
    pub fn get(&self, id: ModuleId) -> &Module {
        &self.modules[id.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: ModuleId) -> &mut Module {
        &mut self.modules[id.index()]
    }

    /// Allocate a new module named `name` nested in `parent`.
    pub fn add_child(&mut self, parent: ModuleId, name: impl Into<String>) -> ModuleId {
        let raw = u32::try_from(self.modules.len()).unwrap_or(u32::MAX);
        let id = ModuleId(raw);
        self.modules.push(Module::new(name.into(), Some(parent)));
        self.modules[parent.index()].modules.push(id);
        id
    }

    #[inline]
    pub fn parent(&self, id: ModuleId) -> Option<ModuleId> {
        self.get(id).parent
    }

    /// Direct children of `id` in declaration order.
    pub fn children(&self, id: ModuleId) -> impl Iterator<Item = (ModuleId, &Module)> + '_ {
        self.get(id)
            .modules
            .iter()
            .map(move |&child| (child, self.get(child)))
    }

    /// Fully qualified name, e.g. `Outer::Inner`. The root's path is empty.
    pub fn path(&self, id: ModuleId) -> String {
        let mut segments = Vec::new();
        let mut current = Some(id);
        while let Some(module_id) = current {
            let module = self.get(module_id);
            if module.parent.is_some() {
                segments.push(module.name.as_str());
            }
            current = module.parent;
        }
        segments.reverse();
        segments.join("::")
    }

    /// Find a module by qualified path (`"A::B"`), starting at the root.
    ///
    /// When sibling modules share a name (reopened modules), the first
    /// declared one wins.
    pub fn find(&self, path: &str) -> Option<ModuleId> {
        let mut current = ModuleId::ROOT;
        if path.is_empty() {
            return Some(current);
        }
        for segment in path.split("::") {
            current = self
                .children(current)
                .find(|(_, module)| module.name == segment)
                .map(|(id, _)| id)?;
        }
        Some(current)
    }

    /// Pre-order traversal from the root, yielding each module's id and
    /// nesting depth (root = 0).
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            tree: self,
            stack: vec![(ModuleId::ROOT, 0)],
        }
    }

    /// Number of modules, root included.
    #[inline]
    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    /// Directives in source order.
    #[inline]
    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    pub fn push_directive(&mut self, directive: Directive) {
        self.directives.push(directive);
    }
}

impl Index<ModuleId> for ModuleTree {
    type Output = Module;

    #[inline]
    fn index(&self, id: ModuleId) -> &Module {
        self.get(id)
    }
}

/// Pre-order module iterator returned by [`ModuleTree::walk`].
pub struct Walk<'a> {
    tree: &'a ModuleTree,
    stack: Vec<(ModuleId, usize)>,
}

impl Iterator for Walk<'_> {
    type Item = (ModuleId, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (id, depth) = self.stack.pop()?;
        // Reverse so the first declared child is visited first.
        let children = &self.tree.get(id).modules;
        self.stack
            .extend(children.iter().rev().map(|&child| (child, depth + 1)));
        Some((id, depth))
    }
}
