//! Grammar productions.
//!
//! Each module extends `Parser` with methods for one family of productions:
//!
//! - [`ty`]: types, declarators and constant values, shared by everything else
//! - [`item`]: constructs that open a scope or declare into a module
//! - [`member`]: the contents of structs, enums, interfaces and unions
//! - [`directive`]: `#define` and `#include`

mod directive;
mod item;
mod member;
mod ty;

pub use ty::Declarator;
