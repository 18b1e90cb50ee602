//! Command-line argument parsing.

use std::path::PathBuf;

use thiserror::Error;

use xreflect_foundation::DeclarationKind;

use crate::session::OutputFormat;

/// A malformed command line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    /// An option that takes a value was last on the line.
    #[error("{0} requires a value")]
    MissingValue(String),

    /// `--kind` named something other than a declaration kind.
    #[error("invalid --kind value: {0} (expected class, field, method or constructor)")]
    InvalidKind(String),

    /// An option that does not exist.
    #[error("unknown option: {0}")]
    UnknownOption(String),
}

/// CLI configuration parsed from arguments.
#[derive(Debug, PartialEq, Eq)]
pub struct CliOptions {
    /// Config file to load.
    pub config: Option<PathBuf>,
    /// Kind to parse command-line declarations as.
    pub kind: DeclarationKind,
    /// Output format.
    pub format: OutputFormat,
    /// Declarations to parse; the REPL starts when empty.
    pub declarations: Vec<String>,
    /// Print help and exit.
    pub show_help: bool,
    /// Print the version and exit.
    pub show_version: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            config: None,
            kind: DeclarationKind::Method,
            format: OutputFormat::Text,
            declarations: Vec::new(),
            show_help: false,
            show_version: false,
        }
    }
}

/// Parses `args`, not including the program name.
///
/// A lone `--` ends option parsing, so declarations that start with `-`
/// can still be passed.
///
/// # Errors
///
/// Returns a [`UsageError`] for unknown options or missing values.
pub fn parse_args<I>(args: I) -> Result<CliOptions, UsageError>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut options = CliOptions::default();
    let mut args = args.into_iter().map(Into::into);
    let mut only_declarations = false;

    while let Some(arg) = args.next() {
        if only_declarations {
            options.declarations.push(arg);
            continue;
        }
        match arg.as_str() {
            "-h" | "--help" => options.show_help = true,
            "-V" | "--version" => options.show_version = true,
            "--json" => options.format = OutputFormat::Json,
            "-c" | "--config" => {
                let path = args.next().ok_or(UsageError::MissingValue(arg))?;
                options.config = Some(PathBuf::from(path));
            }
            "-k" | "--kind" => {
                let value = args.next().ok_or(UsageError::MissingValue(arg))?;
                options.kind =
                    DeclarationKind::from_name(&value).ok_or(UsageError::InvalidKind(value))?;
            }
            "--" => only_declarations = true,
            flag if flag.starts_with('-') => {
                return Err(UsageError::UnknownOption(arg));
            }
            _ => options.declarations.push(arg),
        }
    }

    Ok(options)
}
