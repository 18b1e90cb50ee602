//! Parsed declarations.
//!
//! Immutable results of matching and resolving one declaration. Each
//! signature knows how to write itself into the handle kind it belongs to.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use xreflect_foundation::{DeclarationKind, Modifier, Modifiers, Type};

use crate::handle::{
    ClassHandle, ConstructorHandle, FieldHandle, MemberHandle, MethodHandle, NamedMemberHandle,
};

/// Class-like declaration keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ClassKind {
    /// `class`
    Class,
    /// `interface`
    Interface,
    /// `enum`
    Enum,
}

impl ClassKind {
    /// Parses the keyword captured by the class grammar.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "class" => Some(Self::Class),
            "interface" => Some(Self::Interface),
            "enum" => Some(Self::Enum),
            _ => None,
        }
    }

    /// The source keyword.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Enum => "enum",
        }
    }
}

impl fmt::Display for ClassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A parsed class header.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClassHeader {
    /// Package path with aliases already substituted.
    pub package: Option<String>,
    /// Declared modifiers.
    pub modifiers: Modifiers,
    /// `class`, `interface` or `enum`.
    pub class_kind: ClassKind,
    /// Name segments split on `$`.
    pub name: Vec<String>,
    /// The `extends` clause, unresolved.
    pub superclass: Option<String>,
    /// The `implements` clause, unresolved.
    pub interface: Option<String>,
}

impl ClassHeader {
    /// Writes package and name into `handle`.
    pub fn apply<H: ClassHandle>(&self, handle: &mut H) {
        if let Some(package) = &self.package {
            handle.in_package(package.clone());
        }
        handle.named(self.name.clone());
    }
}

/// A parsed field declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FieldSignature {
    /// Declared modifiers.
    pub modifiers: Modifiers,
    /// Name segments split on `$`.
    pub name: Vec<String>,
    /// Resolved field type.
    pub field_type: Type,
}

impl FieldSignature {
    /// Writes flags, name and type into `handle`.
    pub fn apply<H: FieldHandle>(&self, handle: &mut H) {
        apply_named_member_flags(&self.modifiers, handle);
        if self.modifiers.contains(Modifier::Final) {
            handle.as_final();
        }
        handle.named(self.name.clone());
        handle.returns(self.field_type.clone());
    }
}

/// A parsed method signature.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MethodSignature {
    /// Declared modifiers.
    pub modifiers: Modifiers,
    /// Name segments split on `$`.
    pub name: Vec<String>,
    /// Resolved return type.
    pub return_type: Type,
    /// Resolved parameter types, in order.
    pub parameters: Vec<Type>,
}

impl MethodSignature {
    /// Writes flags, name, return type and parameters into `handle`.
    ///
    /// Parameters are only written when the declaration listed any.
    pub fn apply<H: MethodHandle>(&self, handle: &mut H) {
        apply_named_member_flags(&self.modifiers, handle);
        handle.named(self.name.clone());
        handle.returns(self.return_type.clone());
        if !self.parameters.is_empty() {
            handle.parameters(self.parameters.clone());
        }
    }
}

/// A parsed constructor signature.
///
/// The grammar's return-type and name captures are not kept.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConstructorSignature {
    /// Declared modifiers.
    pub modifiers: Modifiers,
    /// Resolved parameter types, in order.
    pub parameters: Vec<Type>,
}

impl ConstructorSignature {
    /// Writes flags and parameters into `handle`.
    pub fn apply<H: ConstructorHandle>(&self, handle: &mut H) {
        apply_member_flags(&self.modifiers, handle);
        if !self.parameters.is_empty() {
            handle.parameters(self.parameters.clone());
        }
    }
}

fn apply_member_flags<H: MemberHandle + ?Sized>(modifiers: &Modifiers, handle: &mut H) {
    if modifiers.contains_any(&[Modifier::Protected, Modifier::Private]) {
        handle.make_accessible();
    }
}

fn apply_named_member_flags<H: NamedMemberHandle + ?Sized>(modifiers: &Modifiers, handle: &mut H) {
    apply_member_flags(modifiers, handle);
    if modifiers.contains(Modifier::Static) {
        handle.as_static();
    }
}

/// Any parsed declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum Declaration {
    /// A class header.
    Class(ClassHeader),
    /// A field declaration.
    Field(FieldSignature),
    /// A method signature.
    Method(MethodSignature),
    /// A constructor signature.
    Constructor(ConstructorSignature),
}

impl Declaration {
    /// The kind this declaration was parsed as.
    #[must_use]
    pub const fn kind(&self) -> DeclarationKind {
        match self {
            Self::Class(_) => DeclarationKind::Class,
            Self::Field(_) => DeclarationKind::Field,
            Self::Method(_) => DeclarationKind::Method,
            Self::Constructor(_) => DeclarationKind::Constructor,
        }
    }

    /// The declared modifiers.
    #[must_use]
    pub const fn modifiers(&self) -> &Modifiers {
        match self {
            Self::Class(c) => &c.modifiers,
            Self::Field(f) => &f.modifiers,
            Self::Method(m) => &m.modifiers,
            Self::Constructor(c) => &c.modifiers,
        }
    }
}
