//! AST node definitions.
//!
//! Aggregates are plain owned values. The parser appends them to the module
//! being populated and fills them in declaration order; once their closing
//! brace is consumed nothing mutates them again.

use std::fmt;

/// A type reference as written in source.
///
/// `name` may be several words (`unsigned long`, `long long`) or namespaced
/// (`A::B`). `template_parameters` is non-empty only when the name was
/// followed by `<...>`, e.g. `sequence<long, 10>`. `quantity` holds the
/// fixed-array size of the declarator this type was attached to (`x[3]`).
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Type {
    pub name: String,
    pub quantity: Option<String>,
    pub template_parameters: Vec<Type>,
}

impl Type {
    /// A plain, non-parameterized type.
    pub fn new(name: impl Into<String>) -> Self {
        Type {
            name: name.into(),
            quantity: None,
            template_parameters: Vec::new(),
        }
    }

    /// A parameterized type such as `sequence<long>`.
    pub fn with_parameters(name: impl Into<String>, parameters: Vec<Type>) -> Self {
        Type {
            name: name.into(),
            quantity: None,
            template_parameters: parameters,
        }
    }

    #[must_use]
    pub fn with_quantity(mut self, quantity: impl Into<String>) -> Self {
        self.quantity = Some(quantity.into());
        self
    }

    /// Whether the type was written with `<...>` parameters.
    pub fn is_template(&self) -> bool {
        !self.template_parameters.is_empty()
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if let Some((first, rest)) = self.template_parameters.split_first() {
            write!(f, "<{first}")?;
            for param in rest {
                write!(f, ", {param}")?;
            }
            f.write_str(">")?;
        }
        if let Some(quantity) = &self.quantity {
            write!(f, "[{quantity}]")?;
        }
        Ok(())
    }
}

/// A named, typed slot: a struct field or a typedef.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Member {
    pub name: String,
    pub ty: Type,
}

impl Member {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Member {
            name: name.into(),
            ty,
        }
    }
}

/// `typedef <ty> <name>;` binds `name` to `ty`.
pub type TypeDef = Member;

/// `const <ty> <name> = <value>;`
///
/// `value` is the raw literal text; string values keep their quotes.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Constant {
    pub name: String,
    pub ty: Type,
    pub value: String,
}

/// `struct Name : Base, ... { members }`
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Struct {
    pub name: String,
    /// Base struct names, unresolved.
    pub inherits: Vec<String>,
    pub members: Vec<Member>,
}

impl Struct {
    pub fn new(name: impl Into<String>) -> Self {
        Struct {
            name: name.into(),
            ..Struct::default()
        }
    }
}

/// A single enumerator.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct EnumMember {
    pub name: String,
}

/// `enum Name { A, B, C }`
///
/// Enumerators carry no explicit value. Their ordinal is their position:
/// the first is 0, the next 1, and so on.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Enum {
    pub name: String,
    pub members: Vec<EnumMember>,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Enum {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Implied ordinal of the enumerator called `name`.
    pub fn ordinal_of(&self, name: &str) -> Option<usize> {
        self.members.iter().position(|m| m.name == name)
    }

    /// Enumerators paired with their implied ordinals, in declaration order.
    pub fn ordinals(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.members
            .iter()
            .enumerate()
            .map(|(ordinal, m)| (ordinal, m.name.as_str()))
    }
}

/// Parameter-passing mode of an interface method parameter.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    In,
    Out,
    InOut,
}

impl Direction {
    /// Recognize a direction keyword.
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "in" => Some(Direction::In),
            "out" => Some(Direction::Out),
            "inout" => Some(Direction::InOut),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::In => "in",
            Direction::Out => "out",
            Direction::InOut => "inout",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `in long count`; the name is optional.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct MethodParameter {
    pub direction: Direction,
    pub ty: Type,
    pub name: Option<String>,
}

impl fmt::Display for MethodParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.direction, self.ty)?;
        if let Some(name) = &self.name {
            write!(f, " {name}")?;
        }
        Ok(())
    }
}

/// An interface operation: `Ret name(in T a, out U b);`
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Method {
    pub name: String,
    pub return_value: Type,
    pub parameters: Vec<MethodParameter>,
}

/// `interface Name : Base, ... { methods }`, or a forward declaration
/// `interface Name;` which registers an empty interface.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Interface {
    pub name: String,
    /// Base interface names, unresolved.
    pub inherits: Vec<String>,
    pub methods: Vec<Method>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Interface {
            name: name.into(),
            ..Interface::default()
        }
    }
}

/// `case (Value): Type name;`
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct UnionMember {
    /// The discriminant value selecting this member, as written.
    pub case_value: Type,
    pub member_type: Type,
    pub member_name: String,
}

/// `union Name switch (Discriminant) { cases }`
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Union {
    pub name: String,
    pub discriminant: Type,
    pub members: Vec<UnionMember>,
}

impl Union {
    pub fn new(name: impl Into<String>, discriminant: Type) -> Self {
        Union {
            name: name.into(),
            discriminant,
            members: Vec::new(),
        }
    }
}
