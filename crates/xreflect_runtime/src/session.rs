//! Session state for the CLI and REPL.
//!
//! The session owns the registry, import table and package aliases that
//! every parse runs against. Imports can change between parses; each parse
//! sees the table as it was when the parse started.

use log::debug;

use xreflect_foundation::{
    ClassRegistry, DeclarationKind, Error, ImportTable, Namespace, PackageAliases, Result, Type,
};
use xreflect_parser::{
    ClassRef, ConstructorRef, Declaration, DeclarationParser, FieldRef, MethodRef,
    ResolutionContext,
};

use crate::config::Config;

/// How parse results are printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// The populated handle, rendered as a Java-like declaration.
    #[default]
    Text,
    /// The parsed declaration as JSON.
    Json,
}

/// Parsing state shared across declarations.
#[derive(Clone, Debug)]
pub struct Session {
    registry: ClassRegistry,
    imports: ImportTable,
    aliases: PackageAliases,
}

impl Session {
    /// Creates a session with the standard registry and no imports.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: ClassRegistry::standard(),
            imports: ImportTable::new(),
            aliases: PackageAliases::new(),
        }
    }

    /// Creates a session from a config.
    ///
    /// # Errors
    ///
    /// Returns a config error if an import does not resolve.
    pub fn from_config(config: &Config) -> Result<Self> {
        let registry = config.registry();
        let imports = config.import_table(&registry)?;
        Ok(Self {
            registry,
            imports,
            aliases: config.package_aliases(),
        })
    }

    /// The class registry.
    #[must_use]
    pub const fn registry(&self) -> &ClassRegistry {
        &self.registry
    }

    /// The current import table.
    #[must_use]
    pub const fn import_table(&self) -> &ImportTable {
        &self.imports
    }

    /// The package aliases.
    #[must_use]
    pub const fn aliases(&self) -> &PackageAliases {
        &self.aliases
    }

    /// Imports `expression` under `name`, replacing any previous import.
    ///
    /// # Errors
    ///
    /// Returns an error if the expression does not resolve.
    pub fn import(&mut self, name: impl Into<String>, expression: &str) -> Result<Type> {
        let ty = ResolutionContext::new(&self.registry)
            .with_namespace(Some(&self.imports))
            .resolve(expression)?;
        let name = name.into();
        debug!("import {name} = {ty}");
        self.imports.insert(name, ty.clone());
        Ok(ty)
    }

    /// Parses `declaration` as `kind` against this session.
    ///
    /// # Errors
    ///
    /// Returns the parser's error, with context.
    pub fn parse(&self, kind: DeclarationKind, declaration: &str) -> Result<Declaration> {
        self.parser(declaration).parse(kind)
    }

    /// Parses `declaration` and renders the result in `format`.
    ///
    /// # Errors
    ///
    /// Returns the parser's error, or an internal error if JSON encoding fails.
    pub fn render(
        &self,
        kind: DeclarationKind,
        declaration: &str,
        format: OutputFormat,
    ) -> Result<String> {
        match format {
            OutputFormat::Json => {
                let parsed = self.parse(kind, declaration)?;
                serde_json::to_string_pretty(&parsed).map_err(|e| Error::internal(e.to_string()))
            }
            OutputFormat::Text => self.render_handle(kind, declaration),
        }
    }

    fn render_handle(&self, kind: DeclarationKind, declaration: &str) -> Result<String> {
        let parser = self.parser(declaration);
        Ok(match kind {
            DeclarationKind::Class => parser.parse_class(ClassRef::new())?.to_string(),
            DeclarationKind::Field => parser.parse_field(FieldRef::new())?.to_string(),
            DeclarationKind::Method => parser.parse_method(MethodRef::new())?.to_string(),
            DeclarationKind::Constructor => {
                parser.parse_constructor(ConstructorRef::new())?.to_string()
            }
        })
    }

    fn parser<'s>(&'s self, declaration: &str) -> DeclarationParser<'s> {
        DeclarationParser::new(declaration)
            .imports(self)
            .aliases(&self.aliases)
            .registry(&self.registry)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Namespace for Session {
    fn imports(&self) -> ImportTable {
        self.imports.clone()
    }
}
