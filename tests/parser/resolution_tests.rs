//! Type resolution tests.
//!
//! Lookup order, array handling, generic erasure, and the one-time import
//! fetch.

use std::cell::Cell;

use xreflect_foundation::{
    ClassRegistry, ErrorKind, ImportTable, Namespace, Primitive, Type, TypeRegistry,
};
use xreflect_parser::{ResolutionContext, TypeExpression, builtins};

use crate::init_logging;

/// A namespace that counts how often it is asked for imports.
struct CountingNamespace {
    imports: ImportTable,
    calls: Cell<usize>,
}

impl CountingNamespace {
    fn new(imports: ImportTable) -> Self {
        Self {
            imports,
            calls: Cell::new(0),
        }
    }
}

impl Namespace for CountingNamespace {
    fn imports(&self) -> ImportTable {
        self.calls.set(self.calls.get() + 1);
        self.imports.clone()
    }
}

/// A registry that wraps every array in a marker class so tests can see
/// that `array_of` was used.
struct MarkingRegistry;

impl TypeRegistry for MarkingRegistry {
    fn for_name(&self, name: &str) -> Option<Type> {
        (name == "com.example.Known").then(|| Type::class(name))
    }

    fn array_of(&self, element: Type, dimensions: usize) -> Type {
        Type::class(format!("marked:{element}:{dimensions}"))
    }
}

// =============================================================================
// Type Expressions
// =============================================================================

#[test]
fn expression_parts() {
    let expr = TypeExpression::parse("java.util.Map<String, int[]>[][]");
    assert_eq!(expr.name, "java.util.Map");
    assert_eq!(expr.dimensions, 2);

    let expr = TypeExpression::parse("int");
    assert_eq!((expr.name, expr.dimensions), ("int", 0));
}

// =============================================================================
// Lookup Order
// =============================================================================

#[test]
fn builtin_table() {
    let names = builtins::names();
    for name in ["int", "void", "Integer", "Boolean", "String", "Optional", "UUID"] {
        assert!(names.contains(&name), "missing {name}");
    }
    assert!(!names.contains(&"Object"));
}

#[test]
fn int_array_two_dimensions() {
    let registry = ClassRegistry::new();
    let ctx = ResolutionContext::new(&registry);
    let ty = ctx.resolve("int[][]").unwrap();
    assert_eq!(ty, Type::array(Primitive::Int.into(), 2));
    assert_eq!(ty.dimensions(), 2);
}

#[test]
fn builtins_shadow_imports() {
    let registry = ClassRegistry::new();
    let imports = ImportTable::new().with("String", Type::class("com.example.String"));
    let ctx = ResolutionContext::new(&registry).with_namespace(Some(&imports));
    assert_eq!(ctx.resolve("String").unwrap(), Type::class("java.lang.String"));
}

#[test]
fn imported_generic_ignores_arguments() {
    init_logging();
    let registry = ClassRegistry::new();
    let imports = ImportTable::new().with("Foo", Type::class("com.example.Foo"));
    let ctx = ResolutionContext::new(&registry).with_namespace(Some(&imports));
    assert_eq!(ctx.resolve("Foo<Bar>").unwrap(), Type::class("com.example.Foo"));
    assert_eq!(
        ctx.resolve("Foo<Bar>[]").unwrap(),
        Type::array(Type::class("com.example.Foo"), 1)
    );
}

#[test]
fn imports_can_name_array_types() {
    let registry = ClassRegistry::new();
    let imports = ImportTable::new().with("Row", Type::array(Primitive::Int.into(), 1));
    let ctx = ResolutionContext::new(&registry).with_namespace(Some(&imports));
    assert_eq!(ctx.resolve("Row[]").unwrap().dimensions(), 2);
}

#[test]
fn dotted_names_go_straight_to_the_registry() {
    let registry = ClassRegistry::new().with("com.example.Foo");
    let namespace = CountingNamespace::new(ImportTable::new());
    let ctx = ResolutionContext::new(&registry).with_namespace(Some(&namespace));

    assert_eq!(
        ctx.resolve("com.example.Foo[]").unwrap(),
        Type::array(Type::class("com.example.Foo"), 1)
    );
    assert_eq!(namespace.calls.get(), 0);
}

#[test]
fn registry_builds_arrays() {
    let ctx = ResolutionContext::new(&MarkingRegistry);
    assert_eq!(
        ctx.resolve("com.example.Known[][]").unwrap(),
        Type::class("marked:com.example.Known:2")
    );
    assert_eq!(ctx.resolve("long").unwrap(), Type::from(Primitive::Long));
}

#[test]
fn permissive_registry_resolves_any_qualified_name() {
    let registry = ClassRegistry::permissive();
    let ctx = ResolutionContext::new(&registry);
    assert_eq!(
        ctx.resolve("org.example.Anything").unwrap(),
        Type::class("org.example.Anything")
    );
    assert!(ctx.resolve("Anything").is_err());
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn unknown_type_names_the_token() {
    let registry = ClassRegistry::standard();
    let ctx = ResolutionContext::new(&registry);
    let err = ctx.resolve("Widget[]").unwrap_err();
    match err.kind {
        ErrorKind::UnknownType { token, name } => {
            assert_eq!(token, "Widget[]");
            assert_eq!(name, "Widget");
        }
        other => panic!("expected UnknownType, got {other:?}"),
    }
}

#[test]
fn first_bad_parameter_fails_the_list() {
    let registry = ClassRegistry::standard();
    let ctx = ResolutionContext::new(&registry);
    let err = ctx.resolve_parameters("int a, Nope b, Worse c").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownType { ref name, .. } if name == "Nope"));
}

// =============================================================================
// Import Snapshot
// =============================================================================

#[test]
fn imports_fetched_at_most_once() {
    let registry = ClassRegistry::new();
    let namespace = CountingNamespace::new(
        ImportTable::new()
            .with("A", Type::class("x.A"))
            .with("B", Type::class("x.B")),
    );
    let ctx = ResolutionContext::new(&registry).with_namespace(Some(&namespace));

    assert!(!ctx.imports_fetched());
    ctx.resolve_parameters("A a, B b, A[] c").unwrap();
    assert!(ctx.imports_fetched());
    assert_eq!(namespace.calls.get(), 1);
}

#[test]
fn builtins_never_fetch_imports() {
    let registry = ClassRegistry::new();
    let namespace = CountingNamespace::new(ImportTable::new());
    let ctx = ResolutionContext::new(&registry).with_namespace(Some(&namespace));
    ctx.resolve_parameters("int a, String b, UUID c").unwrap();
    assert!(!ctx.imports_fetched());
}

#[test]
fn no_namespace_means_no_imports() {
    let registry = ClassRegistry::new();
    let ctx = ResolutionContext::new(&registry);
    assert!(ctx.imports().is_none());
    assert!(ctx.resolve("Foo").is_err());
}
