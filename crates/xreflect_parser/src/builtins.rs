//! Built-in type names.
//!
//! Simple names that resolve without imports: the primitives, their
//! wrapper classes, and a handful of common library types.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use xreflect_foundation::{Primitive, STANDARD_CLASSES, Type};

static BUILTIN_TYPES: Lazy<HashMap<String, Type>> = Lazy::new(|| {
    let mut types = HashMap::new();
    for primitive in Primitive::ALL {
        types.insert(primitive.keyword().to_string(), Type::Primitive(primitive));
        insert_class(&mut types, primitive.boxed());
    }
    for class in STANDARD_CLASSES {
        insert_class(&mut types, class);
    }
    types
});

fn insert_class(types: &mut HashMap<String, Type>, binary_name: &str) {
    let ty = Type::class(binary_name);
    types.insert(ty.simple_name(), ty);
}

/// Looks up a built-in simple name (`int`, `Integer`, `String`, `UUID`).
#[must_use]
pub fn lookup(name: &str) -> Option<&'static Type> {
    BUILTIN_TYPES.get(name)
}

/// Every built-in simple name, sorted.
#[must_use]
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<_> = BUILTIN_TYPES.keys().map(String::as_str).collect();
    names.sort_unstable();
    names
}
