//! xreflect CLI entry point.

use std::env;
use std::process::ExitCode;

use log::debug;
use xreflect_runtime::{CliOptions, Config, Repl, Session, parse_args};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(env::args().skip(1)) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

/// Returns `Ok(false)` if any command-line declaration failed to parse.
fn run(args: impl Iterator<Item = String>) -> Result<bool, Box<dyn std::error::Error>> {
    let options = parse_args(args)?;

    if options.show_help {
        print_help();
        return Ok(true);
    }

    if options.show_version {
        println!("xreflect {}", env!("CARGO_PKG_VERSION"));
        return Ok(true);
    }

    let session = match &options.config {
        Some(path) => Session::from_config(&Config::load(path)?)?,
        None => Session::new(),
    };

    if options.declarations.is_empty() {
        let mut repl = Repl::new()?.with_session(session).with_format(options.format);
        repl.run()?;
        return Ok(true);
    }

    Ok(parse_all(&session, &options))
}

fn parse_all(session: &Session, options: &CliOptions) -> bool {
    debug!(
        "parsing {} declarations as {}",
        options.declarations.len(),
        options.kind
    );

    let mut ok = true;
    for declaration in &options.declarations {
        match session.render(options.kind, declaration, options.format) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("\x1b[31mError: {e}\x1b[0m");
                ok = false;
            }
        }
    }
    ok
}

fn print_help() {
    println!(
        "\x1b[1mxreflect\x1b[0m - Parse Java-like member declarations into lookup handles

\x1b[1mUSAGE:\x1b[0m
    xreflect [OPTIONS] [DECLARATIONS...]

\x1b[1mARGUMENTS:\x1b[0m
    [DECLARATIONS...]    Declarations to parse; starts the REPL when omitted

\x1b[1mOPTIONS:\x1b[0m
    -h, --help           Print help information
    -V, --version        Print version information
    -c, --config FILE    Load imports, aliases and classes from a JSON file
    -k, --kind KIND      class, field, method or constructor (default: method)
    --json               Print parsed declarations as JSON
    --                   Treat every remaining argument as a declaration

\x1b[1mEXAMPLES:\x1b[0m
    xreflect 'public static String valueOf(int i);'
    xreflect -k field 'private final int count;'
    xreflect -k class 'package nms.world; public class Entity'
    xreflect -c xreflect.json --json -k constructor 'public Entity(World w);'

\x1b[1mREPL COMMANDS:\x1b[0m
    <kind> <declaration>     Parse a declaration
    :imports                 List the current imports
    :import <Name> <type>    Import a type under a simple name
    :help                    Show REPL help
    :quit                    Exit (also Ctrl+D)

Set RUST_LOG=xreflect_parser=trace to see type resolution steps."
    );
}
