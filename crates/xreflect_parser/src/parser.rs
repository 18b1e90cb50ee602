//! Declaration parser.
//!
//! Orchestrates matching, modifier validation and type resolution for one
//! declaration string, then writes the result into a handle.

use log::debug;
use once_cell::sync::Lazy;

use xreflect_foundation::{
    ClassRegistry, DeclarationKind, Error, ErrorContext, Modifier, Modifiers, Namespace,
    PackageAliases, Result, TypeRegistry,
};

use crate::declaration::{
    ClassHeader, ClassKind, ConstructorSignature, Declaration, FieldSignature, MethodSignature,
};
use crate::grammar::{Grammar, GrammarMatch};
use crate::handle::{ClassHandle, ConstructorHandle, FieldHandle, MethodHandle};
use crate::resolver::ResolutionContext;

static STANDARD_REGISTRY: Lazy<ClassRegistry> = Lazy::new(ClassRegistry::standard);

/// Parses one declaration.
///
/// A parser is bound to a single declaration string. Every parse call is
/// independent: it builds its own [`ResolutionContext`], so the import
/// snapshot is fetched at most once per call and nothing carries over to
/// the next call.
///
/// # Example
///
/// ```
/// use xreflect_parser::{DeclarationParser, FieldRef};
///
/// let field = DeclarationParser::new("private static final int count;")
///     .parse_field(FieldRef::new())
///     .unwrap();
/// assert!(field.accessible && field.is_static && field.is_final);
/// ```
pub struct DeclarationParser<'a> {
    declaration: String,
    namespace: Option<&'a dyn Namespace>,
    aliases: Option<&'a PackageAliases>,
    registry: &'a dyn TypeRegistry,
}

impl<'a> DeclarationParser<'a> {
    /// Creates a parser for `declaration` with no imports, no package
    /// aliases, and the standard class registry.
    #[must_use]
    pub fn new(declaration: impl Into<String>) -> Self {
        Self {
            declaration: declaration.into(),
            namespace: None,
            aliases: None,
            registry: &*STANDARD_REGISTRY,
        }
    }

    /// Resolves simple names against `namespace`'s imports.
    #[must_use]
    pub fn imports(mut self, namespace: &'a dyn Namespace) -> Self {
        self.namespace = Some(namespace);
        self
    }

    /// Rewrites placeholder package segments in class headers.
    #[must_use]
    pub fn aliases(mut self, aliases: &'a PackageAliases) -> Self {
        self.aliases = Some(aliases);
        self
    }

    /// Resolves qualified names and builds arrays through `registry`.
    #[must_use]
    pub fn registry(mut self, registry: &'a dyn TypeRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// The declaration text.
    #[must_use]
    pub fn declaration(&self) -> &str {
        &self.declaration
    }

    /// Parses the declaration as `kind`.
    ///
    /// # Errors
    ///
    /// Returns an error if the declaration does not match the grammar for
    /// `kind`, repeats a modifier, has more than one visibility modifier,
    /// or names a type that cannot be resolved.
    pub fn parse(&self, kind: DeclarationKind) -> Result<Declaration> {
        Ok(match kind {
            DeclarationKind::Class => Declaration::Class(self.parse_class_header()?),
            DeclarationKind::Field => Declaration::Field(self.parse_field_signature()?),
            DeclarationKind::Method => Declaration::Method(self.parse_method_signature()?),
            DeclarationKind::Constructor => {
                Declaration::Constructor(self.parse_constructor_signature()?)
            }
        })
    }

    /// Parses a class header.
    ///
    /// # Errors
    ///
    /// See [`DeclarationParser::parse`].
    pub fn parse_class_header(&self) -> Result<ClassHeader> {
        self.run(DeclarationKind::Class, |m, modifiers, _| {
            let package = m.group("package").map(|package| match self.aliases {
                Some(aliases) => aliases.apply(package),
                None => package.to_string(),
            });
            let class_kind = ClassKind::from_keyword(m.required("class_kind"))
                .ok_or_else(|| Error::not_a_declaration(DeclarationKind::Class))?;

            Ok(ClassHeader {
                package,
                modifiers,
                class_kind,
                name: split_name(m.required("class_name")),
                superclass: m.group("superclass").map(String::from),
                interface: m.group("interface").map(String::from),
            })
        })
    }

    /// Parses a field declaration.
    ///
    /// # Errors
    ///
    /// See [`DeclarationParser::parse`].
    pub fn parse_field_signature(&self) -> Result<FieldSignature> {
        self.run(DeclarationKind::Field, |m, modifiers, ctx| {
            Ok(FieldSignature {
                modifiers,
                name: split_name(m.required("field_name")),
                field_type: ctx.resolve(m.required("field_type"))?,
            })
        })
    }

    /// Parses a method signature.
    ///
    /// # Errors
    ///
    /// See [`DeclarationParser::parse`].
    pub fn parse_method_signature(&self) -> Result<MethodSignature> {
        self.run(DeclarationKind::Method, |m, modifiers, ctx| {
            let return_type = ctx.resolve(m.required("return_type"))?;
            let parameters = match m.group("parameters") {
                Some(list) => ctx.resolve_parameters(list)?,
                None => Vec::new(),
            };

            Ok(MethodSignature {
                modifiers,
                name: split_name(m.required("method_name")),
                return_type,
                parameters,
            })
        })
    }

    /// Parses a constructor signature.
    ///
    /// Constructors share the method grammar, so a leading type-like token
    /// is still required; it is discarded along with the name.
    ///
    /// # Errors
    ///
    /// See [`DeclarationParser::parse`].
    pub fn parse_constructor_signature(&self) -> Result<ConstructorSignature> {
        self.run(DeclarationKind::Constructor, |m, modifiers, ctx| {
            let parameters = match m.group("parameters") {
                Some(list) => ctx.resolve_parameters(list)?,
                None => Vec::new(),
            };
            Ok(ConstructorSignature {
                modifiers,
                parameters,
            })
        })
    }

    /// Parses a class header into `handle`.
    ///
    /// # Errors
    ///
    /// See [`DeclarationParser::parse`]. The handle is untouched on error.
    pub fn parse_class<H: ClassHandle>(&self, mut handle: H) -> Result<H> {
        self.parse_class_header()?.apply(&mut handle);
        Ok(handle)
    }

    /// Parses a field declaration into `handle`.
    ///
    /// # Errors
    ///
    /// See [`DeclarationParser::parse`]. The handle is untouched on error.
    pub fn parse_field<H: FieldHandle>(&self, mut handle: H) -> Result<H> {
        self.parse_field_signature()?.apply(&mut handle);
        Ok(handle)
    }

    /// Parses a method signature into `handle`.
    ///
    /// # Errors
    ///
    /// See [`DeclarationParser::parse`]. The handle is untouched on error.
    pub fn parse_method<H: MethodHandle>(&self, mut handle: H) -> Result<H> {
        self.parse_method_signature()?.apply(&mut handle);
        Ok(handle)
    }

    /// Parses a constructor signature into `handle`.
    ///
    /// # Errors
    ///
    /// See [`DeclarationParser::parse`]. The handle is untouched on error.
    pub fn parse_constructor<H: ConstructorHandle>(&self, mut handle: H) -> Result<H> {
        self.parse_constructor_signature()?.apply(&mut handle);
        Ok(handle)
    }

    /// Matches the grammar for `kind`, validates modifiers, and hands the
    /// match to `build`. Every error leaves with full context attached.
    fn run<T>(
        &self,
        kind: DeclarationKind,
        build: impl FnOnce(&GrammarMatch<'_>, Modifiers, &ResolutionContext<'_>) -> Result<T>,
    ) -> Result<T> {
        let grammar = Grammar::for_kind(kind);
        let ctx = ResolutionContext::new(self.registry).with_namespace(self.namespace);
        debug!("parsing `{}` as {kind} with {grammar} grammar", self.declaration);

        let result = grammar
            .captures(&self.declaration)
            .ok_or_else(|| Error::not_a_declaration(kind))
            .and_then(|m| {
                let modifiers = parse_modifiers(m.group("flags"))?;
                build(&m, modifiers, &ctx)
            });

        result.map_err(|err| {
            let err = err.with_context(
                ErrorContext::new(self.declaration.as_str())
                    .with_grammar(grammar.pattern())
                    .with_imports(ctx.imports().cloned()),
            );
            debug!("rejected: {err}");
            err
        })
    }
}

/// Parses the `flags` capture into a modifier set.
///
/// # Errors
///
/// Returns an error if a keyword repeats or more than one visibility
/// modifier is present.
pub fn parse_modifiers(flags: Option<&str>) -> Result<Modifiers> {
    let mut modifiers = Modifiers::new();
    let Some(flags) = flags else {
        return Ok(modifiers);
    };

    for token in flags.split_whitespace() {
        let modifier: Modifier = token.parse()?;
        if !modifiers.insert(modifier) {
            return Err(Error::repeated_modifier(token));
        }
    }

    let visibilities = modifiers.visibilities();
    if visibilities.len() > 1 {
        return Err(Error::duplicate_visibility(visibilities));
    }
    Ok(modifiers)
}

/// Splits a name on the nested-class separator `$`, dropping trailing
/// empty segments.
#[must_use]
pub fn split_name(name: &str) -> Vec<String> {
    let mut segments: Vec<String> = name.split('$').map(String::from).collect();
    while segments.len() > 1 && segments.last().is_some_and(String::is_empty) {
        segments.pop();
    }
    segments
}
