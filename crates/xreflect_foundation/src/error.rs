//! Error types for xreflect.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::imports::ImportTable;
use crate::kind::DeclarationKind;
use crate::modifier::Modifier;

/// The main error type for xreflect operations.
///
/// Parse failures always carry an [`ErrorContext`] naming the declaration,
/// the grammar that was applied, and the import snapshot in effect.
#[derive(Debug, Error)]
#[error("{kind}{}", render_context(.context.as_ref()))]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Where the error occurred.
    pub context: Option<ErrorContext>,
}

fn render_context(context: Option<&ErrorContext>) -> String {
    context.map(|c| format!(" {c}")).unwrap_or_default()
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a grammar mismatch error.
    #[must_use]
    pub fn not_a_declaration(kind: DeclarationKind) -> Self {
        Self::new(ErrorKind::NotADeclaration { kind })
    }

    /// Creates a repeated modifier error.
    #[must_use]
    pub fn repeated_modifier(token: impl Into<String>) -> Self {
        Self::new(ErrorKind::RepeatedModifier(token.into()))
    }

    /// Creates a duplicate visibility error.
    #[must_use]
    pub fn duplicate_visibility(modifiers: Vec<Modifier>) -> Self {
        Self::new(ErrorKind::DuplicateVisibility(modifiers))
    }

    /// Creates an unknown modifier error.
    #[must_use]
    pub fn unknown_modifier(token: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownModifier(token.into()))
    }

    /// Creates an unknown type error.
    #[must_use]
    pub fn unknown_type(token: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownType {
            token: token.into(),
            name: name.into(),
        })
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config(message.into()))
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }

    /// Returns true if this is a parse or resolution failure, as opposed
    /// to a configuration, I/O or internal problem.
    #[must_use]
    pub const fn is_parse_error(&self) -> bool {
        !matches!(
            self.kind,
            ErrorKind::Config(_) | ErrorKind::Io(_) | ErrorKind::Internal(_)
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The declaration does not match the grammar of the requested kind.
    #[error("not a {kind} declaration")]
    NotADeclaration {
        /// The kind that was attempted.
        kind: DeclarationKind,
    },

    /// A modifier keyword appears twice.
    #[error("repeated modifier: {0}")]
    RepeatedModifier(String),

    /// More than one of public, protected and private.
    #[error("duplicate visibility modifiers: {}", join(.0))]
    DuplicateVisibility(Vec<Modifier>),

    /// A modifier keyword outside the recognized set.
    #[error("unknown modifier: {0}")]
    UnknownModifier(String),

    /// A type expression that resolves to nothing.
    #[error("unknown type '{token}' -> '{name}'")]
    UnknownType {
        /// The type expression as written.
        token: String,
        /// The reduced name that was looked up.
        name: String,
    },

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Failure reading input.
    #[error("i/o error: {0}")]
    Io(String),

    /// Internal error (line editor failures, serialization).
    #[error("internal error: {0}")]
    Internal(String),
}

fn join(modifiers: &[Modifier]) -> String {
    modifiers
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Context about where a parse error occurred.
#[derive(Debug, Clone)]
pub struct ErrorContext {
    /// The declaration text being parsed.
    pub declaration: String,
    /// The grammar pattern that was applied.
    pub grammar: Option<String>,
    /// The import snapshot, if it had been fetched.
    pub imports: Option<ImportTable>,
}

impl ErrorContext {
    /// Creates a context for the given declaration text.
    #[must_use]
    pub fn new(declaration: impl Into<String>) -> Self {
        Self {
            declaration: declaration.into(),
            grammar: None,
            imports: None,
        }
    }

    /// Sets the grammar pattern.
    #[must_use]
    pub fn with_grammar(mut self, grammar: impl Into<String>) -> Self {
        self.grammar = Some(grammar.into());
        self
    }

    /// Sets the import snapshot.
    #[must_use]
    pub fn with_imports(mut self, imports: Option<ImportTable>) -> Self {
        self.imports = imports;
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "in: {}", self.declaration)?;
        match &self.grammar {
            Some(grammar) => write!(f, " (grammar: {grammar})")?,
            None => f.write_str(" (grammar: none)")?,
        }
        match &self.imports {
            Some(imports) => write!(f, ", (imports: {imports})"),
            None => f.write_str(", (imports: none)"),
        }
    }
}

/// Result alias used throughout xreflect.
pub type Result<T> = std::result::Result<T, Error>;
