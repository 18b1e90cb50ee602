//! Java type descriptors.
//!
//! A [`Type`] is the concrete identity a declaration's type expression
//! resolves to. Generic arguments never survive resolution, so a `Type` is
//! always a raw (erased) type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A primitive type, including `void`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Primitive {
    /// `byte`
    Byte,
    /// `short`
    Short,
    /// `int`
    Int,
    /// `long`
    Long,
    /// `float`
    Float,
    /// `double`
    Double,
    /// `boolean`
    Boolean,
    /// `char`
    Char,
    /// `void`
    Void,
}

impl Primitive {
    /// Every primitive, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Byte,
        Self::Short,
        Self::Int,
        Self::Long,
        Self::Float,
        Self::Double,
        Self::Boolean,
        Self::Char,
        Self::Void,
    ];

    /// The source keyword (`int`, `boolean`, ...).
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::Boolean => "boolean",
            Self::Char => "char",
            Self::Void => "void",
        }
    }

    /// The single-character JVM descriptor.
    #[must_use]
    pub const fn descriptor(self) -> char {
        match self {
            Self::Byte => 'B',
            Self::Short => 'S',
            Self::Int => 'I',
            Self::Long => 'J',
            Self::Float => 'F',
            Self::Double => 'D',
            Self::Boolean => 'Z',
            Self::Char => 'C',
            Self::Void => 'V',
        }
    }

    /// The binary name of the wrapper class (`java.lang.Integer` for `int`).
    #[must_use]
    pub const fn boxed(self) -> &'static str {
        match self {
            Self::Byte => "java.lang.Byte",
            Self::Short => "java.lang.Short",
            Self::Int => "java.lang.Integer",
            Self::Long => "java.lang.Long",
            Self::Float => "java.lang.Float",
            Self::Double => "java.lang.Double",
            Self::Boolean => "java.lang.Boolean",
            Self::Char => "java.lang.Character",
            Self::Void => "java.lang.Void",
        }
    }

    /// Looks up a primitive by its source keyword.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.keyword() == keyword)
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A resolved type.
///
/// `Array` always has `dimensions >= 1` and a non-array element; use
/// [`Type::array`] to build one so nested arrays are flattened.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Type {
    /// A primitive or `void`.
    Primitive(Primitive),
    /// A class, interface, or enum, by binary name (`java.util.Map$Entry`).
    Class(String),
    /// An array of `element` with the given number of dimensions.
    Array {
        /// The scalar element type.
        element: Box<Type>,
        /// Number of `[]` pairs.
        dimensions: usize,
    },
}

impl Type {
    /// Creates a class type from its binary name.
    #[must_use]
    pub fn class(name: impl Into<String>) -> Self {
        Self::Class(name.into())
    }

    /// Wraps `element` in `dimensions` array levels.
    ///
    /// Wrapping an array adds to its depth; zero dimensions returns
    /// `element` unchanged.
    #[must_use]
    pub fn array(element: Type, dimensions: usize) -> Self {
        if dimensions == 0 {
            return element;
        }
        match element {
            Self::Array {
                element,
                dimensions: inner,
            } => Self::Array {
                element,
                dimensions: inner + dimensions,
            },
            scalar => Self::Array {
                element: Box::new(scalar),
                dimensions,
            },
        }
    }

    /// Array depth; 0 for scalar types.
    #[must_use]
    pub const fn dimensions(&self) -> usize {
        match self {
            Self::Array { dimensions, .. } => *dimensions,
            _ => 0,
        }
    }

    /// The scalar element type (the type itself when not an array).
    #[must_use]
    pub fn element(&self) -> &Type {
        match self {
            Self::Array { element, .. } => element,
            _ => self,
        }
    }

    /// Returns true for primitives and `void`.
    #[must_use]
    pub const fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(_))
    }

    /// Returns true for array types.
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array { .. })
    }

    /// The runtime name, as `Class.getName()` reports it.
    ///
    /// Scalars use their keyword or binary name; arrays use descriptor form
    /// with dots (`[I`, `[Ljava.lang.String;`).
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Primitive(p) => p.keyword().to_string(),
            Self::Class(name) => name.clone(),
            Self::Array { .. } => self.descriptor().replace('/', "."),
        }
    }

    /// The unqualified name, with nested class segments and array markers
    /// (`Entry[]` for `java.util.Map$Entry[]`).
    #[must_use]
    pub fn simple_name(&self) -> String {
        match self {
            Self::Primitive(p) => p.keyword().to_string(),
            Self::Class(name) => name
                .rsplit(['.', '$'])
                .next()
                .unwrap_or(name.as_str())
                .to_string(),
            Self::Array {
                element,
                dimensions,
            } => format!("{}{}", element.simple_name(), "[]".repeat(*dimensions)),
        }
    }

    /// The JVM field descriptor (`I`, `Ljava/lang/String;`, `[[D`).
    #[must_use]
    pub fn descriptor(&self) -> String {
        match self {
            Self::Primitive(p) => p.descriptor().to_string(),
            Self::Class(name) => format!("L{};", name.replace('.', "/")),
            Self::Array {
                element,
                dimensions,
            } => format!("{}{}", "[".repeat(*dimensions), element.descriptor()),
        }
    }
}

impl From<Primitive> for Type {
    fn from(primitive: Primitive) -> Self {
        Self::Primitive(primitive)
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type({self})")
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(p) => write!(f, "{p}"),
            Self::Class(name) => f.write_str(name),
            Self::Array {
                element,
                dimensions,
            } => write!(f, "{element}{}", "[]".repeat(*dimensions)),
        }
    }
}
