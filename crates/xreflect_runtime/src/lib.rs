//! REPL, CLI, and configuration for xreflect.
//!
//! This crate provides:
//! - [`Config`] - JSON configuration for imports, aliases and the class registry
//! - [`Session`] - Parsing state shared across declarations
//! - [`Repl`] - Interactive read-eval-print loop
//! - [`cli`] - Command-line argument parsing

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cli;
pub mod config;
pub mod editor;
pub mod repl;
pub mod session;

pub use cli::{CliOptions, UsageError, parse_args};
pub use config::Config;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::{Outcome, Repl};
pub use session::{OutputFormat, Session};
