//! Type expression resolution.
//!
//! Turns the text of a type expression into a [`Type`]:
//!
//! 1. Trailing `[]` pairs are counted and stripped.
//! 2. A trailing `<...>` block is dropped; type arguments are never resolved.
//! 3. Names without a dot are looked up in the built-ins, then the imports.
//! 4. Anything still unresolved goes to the [`TypeRegistry`].
//! 5. Array depth is re-applied through [`TypeRegistry::array_of`].

use log::trace;
use once_cell::unsync::OnceCell;

use xreflect_foundation::{Error, ImportTable, Namespace, Result, Type, TypeRegistry};

use crate::builtins;

/// A type expression split into its bare name and array depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypeExpression<'t> {
    /// The expression as written (trimmed).
    pub token: &'t str,
    /// The name left after stripping arrays and generics.
    pub name: &'t str,
    /// Number of trailing `[]` pairs.
    pub dimensions: usize,
}

impl<'t> TypeExpression<'t> {
    /// Splits a type expression.
    #[must_use]
    pub fn parse(token: &'t str) -> Self {
        let token = token.trim();

        let mut name = token;
        let mut dimensions = 0;
        while let Some(rest) = name.strip_suffix("[]") {
            name = rest.trim_end();
            dimensions += 1;
        }

        if name.ends_with('>') {
            if let Some(open) = name.find('<') {
                name = name[..open].trim_end();
            }
        }

        Self {
            token,
            name,
            dimensions,
        }
    }
}

/// Per-parse resolution state.
///
/// Holds the collaborators and a lazily fetched import snapshot. The
/// namespace is asked for its imports at most once; every later lookup in
/// the same parse sees that same snapshot.
pub struct ResolutionContext<'a> {
    registry: &'a dyn TypeRegistry,
    namespace: Option<&'a dyn Namespace>,
    imports: OnceCell<Option<ImportTable>>,
}

impl<'a> ResolutionContext<'a> {
    /// Creates a context with no namespace.
    #[must_use]
    pub fn new(registry: &'a dyn TypeRegistry) -> Self {
        Self {
            registry,
            namespace: None,
            imports: OnceCell::new(),
        }
    }

    /// Sets the namespace imports are fetched from.
    #[must_use]
    pub fn with_namespace(mut self, namespace: Option<&'a dyn Namespace>) -> Self {
        self.namespace = namespace;
        self
    }

    /// The import snapshot, fetching it on first use.
    ///
    /// `None` when no namespace is bound.
    pub fn imports(&self) -> Option<&ImportTable> {
        self.imports
            .get_or_init(|| {
                self.namespace.map(|namespace| {
                    let imports = namespace.imports();
                    trace!("fetched {} imports", imports.len());
                    imports
                })
            })
            .as_ref()
    }

    /// Returns true once the import snapshot has been fetched.
    #[must_use]
    pub fn imports_fetched(&self) -> bool {
        self.imports.get().is_some()
    }

    /// Resolves a type expression.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::UnknownType`](xreflect_foundation::ErrorKind::UnknownType)
    /// naming both the expression and the reduced name if nothing resolves it.
    pub fn resolve(&self, token: &str) -> Result<Type> {
        let expr = TypeExpression::parse(token);
        let scalar = self
            .lookup(expr.name)
            .ok_or_else(|| Error::unknown_type(expr.token, expr.name))?;

        if expr.dimensions == 0 {
            return Ok(scalar);
        }
        Ok(self.registry.array_of(scalar, expr.dimensions))
    }

    /// Resolves every parameter type in a comma-separated parameter list
    /// (`String a, Map<K, V> b`), in order.
    ///
    /// # Errors
    ///
    /// Returns the first resolution failure.
    pub fn resolve_parameters(&self, parameters: &str) -> Result<Vec<Type>> {
        split_parameters(parameters)
            .into_iter()
            .map(|parameter| self.resolve(parameter_type(parameter)))
            .collect()
    }

    fn lookup(&self, name: &str) -> Option<Type> {
        if !name.contains('.') {
            if let Some(ty) = builtins::lookup(name) {
                trace!("`{name}` is built in: {ty}");
                return Some(ty.clone());
            }
            if let Some(ty) = self.imports().and_then(|imports| imports.get(name)) {
                trace!("`{name}` is imported: {ty}");
                return Some(ty.clone());
            }
        }

        let found = self.registry.for_name(name);
        trace!("`{name}` from registry: {found:?}");
        found
    }
}

/// Splits a parameter list on commas outside angle brackets.
#[must_use]
pub fn split_parameters(parameters: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, ch) in parameters.char_indices() {
        match ch {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(parameters[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }

    let last = parameters[start..].trim();
    if !last.is_empty() || !parts.is_empty() {
        parts.push(last);
    }
    parts
}

/// The type part of a `<type> <name>` parameter: everything before the last
/// whitespace run.
#[must_use]
pub fn parameter_type(parameter: &str) -> &str {
    let parameter = parameter.trim();
    parameter
        .rsplit_once(char::is_whitespace)
        .map_or(parameter, |(ty, _)| ty.trim_end())
}
