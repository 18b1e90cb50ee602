//! Declaration parser for xreflect.
//!
//! This crate turns Java-like declaration strings such as
//! `"private static final int count;"` into resolved signatures, and writes
//! them into handles that later look up the real class or member.
//!
//! # Architecture
//!
//! ```text
//! "public String[] split(String s, int limit);"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ GRAMMAR         │  → flags="public ", return_type="String[]",
//! │ MATCHING        │    method_name="split", parameters="String s, int limit"
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MODIFIER        │  → {public}  (repeats and double visibility rejected)
//! │ VALIDATION      │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ TYPE            │  → java.lang.String[], [java.lang.String, int]
//! │ RESOLUTION      │    (built-ins → imports → registry)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ HANDLE          │  → MethodRef { name: ["split"], ... }
//! │ POPULATION      │
//! └─────────────────┘
//! ```
//!
//! Parsing is all-or-nothing: a declaration is fully matched and resolved
//! into a [`Declaration`] before any handle is touched.
//!
//! # Modules
//!
//! - [`grammar`] - Anchored regular expressions for each declaration kind
//! - [`builtins`] - Simple type names that resolve without imports
//! - [`resolver`] - Type expression resolution
//! - [`declaration`] - Parsed, resolved declarations
//! - [`handle`] - Capabilities the parser writes through
//! - [`refs`] - Recording handle implementations
//! - [`parser`] - Pipeline orchestration

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod builtins;
pub mod declaration;
pub mod grammar;
pub mod handle;
pub mod parser;
pub mod refs;
pub mod resolver;

// Re-export main types for convenience
pub use declaration::{
    ClassHeader, ClassKind, ConstructorSignature, Declaration, FieldSignature, MethodSignature,
};
pub use grammar::{Grammar, GrammarMatch};
pub use handle::{
    ClassHandle, ConstructorHandle, FieldHandle, MemberHandle, MethodHandle, NamedHandle,
    NamedMemberHandle,
};
pub use parser::{DeclarationParser, parse_modifiers, split_name};
pub use refs::{ClassRef, ConstructorRef, FieldRef, MethodRef};
pub use resolver::{ResolutionContext, TypeExpression};
