//! IDL IR - token and syntax tree types.
//!
//! This crate contains the data shared by every stage of the IDL front end:
//! - Spans for source locations
//! - Tokens produced by `idl_lexer`
//! - AST nodes (structs, enums, unions, interfaces, typedefs, constants)
//! - The module arena (`ModuleTree`) produced by `idl_parse`
//!
//! # Design Philosophy
//!
//! - **Ids, not pointers**: modules live in an arena and refer to their parent
//!   and children through `ModuleId`, so the tree has no ownership cycles.
//! - **Declaration order**: every collection is a `Vec` filled in source order;
//!   consumers rely on that order being stable.
//! - **Unresolved names**: base names, typedef targets and case values are
//!   kept as written. Resolving them is a later stage's job.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod module_tree;
mod span;
mod token;

pub use ast::{
    Constant, Direction, Enum, EnumMember, Interface, Member, Method, MethodParameter, Struct,
    Type, TypeDef, Union, UnionMember,
};
pub use module_tree::{Directive, Module, ModuleId, ModuleTree, Walk};
pub use span::{LineCol, Span};
pub use token::{Token, TokenKind};
