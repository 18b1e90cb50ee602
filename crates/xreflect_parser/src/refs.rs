//! Recording handles.
//!
//! Plain data implementations of the handle traits. They keep whatever
//! the parser writes so it can be inspected, compared, printed or
//! serialized before being handed to a real lookup.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use xreflect_foundation::Type;

use crate::handle::{
    ClassHandle, ConstructorHandle, FieldHandle, MemberHandle, MethodHandle, NamedHandle,
    NamedMemberHandle,
};

fn join_types(types: &[Type]) -> String {
    types
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A deferred class lookup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClassRef {
    /// Package path, if one was declared.
    pub package: Option<String>,
    /// Name segments, outermost first.
    pub name: Vec<String>,
}

impl ClassRef {
    /// Creates an empty class handle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The binary name (`a.b.Outer$Inner`).
    #[must_use]
    pub fn binary_name(&self) -> String {
        let simple = self.name.join("$");
        match &self.package {
            Some(package) => format!("{package}.{simple}"),
            None => simple,
        }
    }
}

impl NamedHandle for ClassRef {
    fn named(&mut self, segments: Vec<String>) {
        self.name = segments;
    }
}

impl ClassHandle for ClassRef {
    fn in_package(&mut self, package: String) {
        self.package = Some(package);
    }
}

impl fmt::Display for ClassRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "class {}", self.binary_name())
    }
}

/// A deferred field lookup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FieldRef {
    /// Name segments.
    pub name: Vec<String>,
    /// Declared type.
    pub field_type: Option<Type>,
    /// Whether access checks must be suppressed.
    pub accessible: bool,
    /// Whether the field is static.
    pub is_static: bool,
    /// Whether the field is final.
    pub is_final: bool,
}

impl FieldRef {
    /// Creates an empty field handle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl NamedHandle for FieldRef {
    fn named(&mut self, segments: Vec<String>) {
        self.name = segments;
    }
}

impl MemberHandle for FieldRef {
    fn make_accessible(&mut self) {
        self.accessible = true;
    }
}

impl NamedMemberHandle for FieldRef {
    fn as_static(&mut self) {
        self.is_static = true;
    }
}

impl FieldHandle for FieldRef {
    fn returns(&mut self, ty: Type) {
        self.field_type = Some(ty);
    }

    fn as_final(&mut self) {
        self.is_final = true;
    }
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.accessible {
            f.write_str("(accessible) ")?;
        }
        if self.is_static {
            f.write_str("static ")?;
        }
        if self.is_final {
            f.write_str("final ")?;
        }
        match &self.field_type {
            Some(ty) => write!(f, "{ty} ")?,
            None => f.write_str("? ")?,
        }
        write!(f, "{}", self.name.join("$"))
    }
}

/// A deferred method lookup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MethodRef {
    /// Name segments.
    pub name: Vec<String>,
    /// Return type.
    pub return_type: Option<Type>,
    /// Parameter types, in order.
    pub parameters: Vec<Type>,
    /// Whether access checks must be suppressed.
    pub accessible: bool,
    /// Whether the method is static.
    pub is_static: bool,
}

impl MethodRef {
    /// Creates an empty method handle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl NamedHandle for MethodRef {
    fn named(&mut self, segments: Vec<String>) {
        self.name = segments;
    }
}

impl MemberHandle for MethodRef {
    fn make_accessible(&mut self) {
        self.accessible = true;
    }
}

impl NamedMemberHandle for MethodRef {
    fn as_static(&mut self) {
        self.is_static = true;
    }
}

impl MethodHandle for MethodRef {
    fn returns(&mut self, ty: Type) {
        self.return_type = Some(ty);
    }

    fn parameters(&mut self, types: Vec<Type>) {
        self.parameters = types;
    }
}

impl fmt::Display for MethodRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.accessible {
            f.write_str("(accessible) ")?;
        }
        if self.is_static {
            f.write_str("static ")?;
        }
        match &self.return_type {
            Some(ty) => write!(f, "{ty} ")?,
            None => f.write_str("? ")?,
        }
        write!(
            f,
            "{}({})",
            self.name.join("$"),
            join_types(&self.parameters)
        )
    }
}

/// A deferred constructor lookup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConstructorRef {
    /// Parameter types, in order.
    pub parameters: Vec<Type>,
    /// Whether access checks must be suppressed.
    pub accessible: bool,
}

impl ConstructorRef {
    /// Creates an empty constructor handle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl MemberHandle for ConstructorRef {
    fn make_accessible(&mut self) {
        self.accessible = true;
    }
}

impl ConstructorHandle for ConstructorRef {
    fn parameters(&mut self, types: Vec<Type>) {
        self.parameters = types;
    }
}

impl fmt::Display for ConstructorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.accessible {
            f.write_str("(accessible) ")?;
        }
        write!(f, "<init>({})", join_types(&self.parameters))
    }
}
