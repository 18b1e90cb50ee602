//! Global type lookup.
//!
//! The last resort of type resolution is asking the runtime type system for
//! a class by its fully qualified name. [`TypeRegistry`] is that seam;
//! [`ClassRegistry`] is the in-process implementation.

use std::collections::HashSet;

use crate::types::{Primitive, Type};

/// Binary names of the reference types the parser treats as built in.
pub const STANDARD_CLASSES: &[&str] = &[
    "java.lang.String",
    "java.lang.StringBuilder",
    "java.lang.StringBuffer",
    "java.util.Optional",
    "java.util.UUID",
];

/// Resolves fully qualified names and builds array types.
pub trait TypeRegistry {
    /// Resolves a fully qualified (binary) name, or `None` if no such type
    /// exists.
    fn for_name(&self, name: &str) -> Option<Type>;

    /// Produces the array type of `element` with `dimensions` levels.
    fn array_of(&self, element: Type, dimensions: usize) -> Type {
        Type::array(element, dimensions)
    }
}

impl<R: TypeRegistry + ?Sized> TypeRegistry for &R {
    fn for_name(&self, name: &str) -> Option<Type> {
        (**self).for_name(name)
    }

    fn array_of(&self, element: Type, dimensions: usize) -> Type {
        (**self).array_of(element, dimensions)
    }
}

/// A registry of known class names.
///
/// In strict mode only registered names resolve. In permissive mode any
/// well-formed qualified name (at least one dot, every segment an
/// identifier) resolves as well.
#[derive(Clone, Debug, Default)]
pub struct ClassRegistry {
    classes: HashSet<String>,
    permissive: bool,
}

impl ClassRegistry {
    /// Creates an empty, strict registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a strict registry holding the wrapper classes and
    /// [`STANDARD_CLASSES`].
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for primitive in Primitive::ALL {
            registry.register(primitive.boxed());
        }
        for class in STANDARD_CLASSES {
            registry.register(*class);
        }
        registry
    }

    /// Creates a standard registry that also accepts any well-formed
    /// qualified name.
    #[must_use]
    pub fn permissive() -> Self {
        Self {
            permissive: true,
            ..Self::standard()
        }
    }

    /// Registers a class by binary name.
    pub fn register(&mut self, name: impl Into<String>) {
        self.classes.insert(name.into());
    }

    /// Returns the registry with `name` registered.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>) -> Self {
        self.register(name);
        self
    }

    /// Returns true if `name` was registered explicitly.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains(name)
    }

    /// Returns true in permissive mode.
    #[must_use]
    pub const fn is_permissive(&self) -> bool {
        self.permissive
    }
}

impl TypeRegistry for ClassRegistry {
    fn for_name(&self, name: &str) -> Option<Type> {
        if self.classes.contains(name) || (self.permissive && is_qualified_name(name)) {
            Some(Type::class(name))
        } else {
            None
        }
    }
}

/// Returns true for dotted names whose segments are all identifiers.
#[must_use]
pub fn is_qualified_name(name: &str) -> bool {
    name.contains('.')
        && name.split('.').all(|segment| {
            !segment.is_empty()
                && !segment.starts_with(|c: char| c.is_ascii_digit())
                && segment
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        })
}
