//! CLI argument parsing tests.

use std::path::PathBuf;

use xreflect_foundation::DeclarationKind;
use xreflect_runtime::{OutputFormat, UsageError, parse_args};

#[test]
fn declarations_default_to_methods() {
    let options = parse_args(["void run();", "int size();"]).unwrap();
    assert_eq!(options.kind, DeclarationKind::Method);
    assert_eq!(options.format, OutputFormat::Text);
    assert_eq!(options.declarations.len(), 2);
    assert!(options.config.is_none());
}

#[test]
fn short_and_long_flags() {
    let short = parse_args(["-k", "class", "-c", "a.json", "-V"]).unwrap();
    let long = parse_args(["--kind", "class", "--config", "a.json", "--version"]).unwrap();
    assert_eq!(short, long);
    assert_eq!(short.config, Some(PathBuf::from("a.json")));
    assert!(short.show_version);
}

#[test]
fn help_flag() {
    assert!(parse_args(["-h"]).unwrap().show_help);
    assert!(parse_args(["--help"]).unwrap().show_help);
}

#[test]
fn usage_errors_render() {
    assert_eq!(
        parse_args(["-c"]).unwrap_err().to_string(),
        "-c requires a value"
    );
    assert_eq!(
        parse_args(["--kind", "record"]).unwrap_err(),
        UsageError::InvalidKind("record".into())
    );
}
