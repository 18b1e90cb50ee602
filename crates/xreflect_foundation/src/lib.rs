//! Core types and collaborator interfaces for xreflect.
//!
//! This crate provides:
//! - [`Type`] - Resolved Java type descriptors
//! - [`Modifier`] / [`Modifiers`] - Declaration modifier keywords
//! - [`DeclarationKind`] - Which grammar a declaration is parsed with
//! - [`ImportTable`] / [`Namespace`] - Short-name imports
//! - [`PackageAliases`] - Placeholder package substitution
//! - [`TypeRegistry`] / [`ClassRegistry`] - Global lookup by qualified name
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod imports;
pub mod kind;
pub mod modifier;
pub mod registry;
pub mod types;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use imports::{ImportTable, Namespace, PackageAliases};
pub use kind::DeclarationKind;
pub use modifier::{Modifier, Modifiers};
pub use registry::{ClassRegistry, STANDARD_CLASSES, TypeRegistry, is_qualified_name};
pub use types::{Primitive, Type};
