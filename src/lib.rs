//! xreflect - Java-like declaration parsing for reflection handles
//!
//! This crate re-exports all layers of the xreflect system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: xreflect_runtime    — REPL, CLI, JSON configuration
//! Layer 1: xreflect_parser     — Grammars, type resolution, handle population
//! Layer 0: xreflect_foundation — Core types (Type, Modifier, ImportTable, Error)
//! ```

pub use xreflect_foundation as foundation;
pub use xreflect_parser as parser;
pub use xreflect_runtime as runtime;
