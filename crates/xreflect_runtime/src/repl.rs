//! The interactive REPL.
//!
//! Each input line is `<kind> <declaration>`, for example
//! `field private static int count;`. Lines starting with `:` are commands.

use std::io::{self, Write};

use xreflect_foundation::{DeclarationKind, Error, Result};

use crate::editor::{LineEditor, ReadResult, RustylineEditor, default_keywords};
use crate::session::{OutputFormat, Session};

const HELP: &str = "\
<kind> <declaration>     Parse a declaration; kind is class, field, method or constructor
:imports                 List the current imports
:import <Name> <type>    Import a type under a simple name
:help                    Show this help
:quit                    Exit (also Ctrl+D)";

/// What the REPL does after evaluating a line.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Print this text and continue.
    Print(String),
    /// Nothing to print.
    Continue,
    /// Leave the loop.
    Quit,
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    editor: E,
    session: Session,
    format: OutputFormat,
    show_banner: bool,
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E) -> Self {
        Self {
            editor,
            session: Session::new(),
            format: OutputFormat::Text,
            show_banner: true,
            prompt: "xreflect> ".to_string(),
        }
    }

    /// Sets the session for this REPL.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self.refresh_keywords();
        self
    }

    /// Sets the output format.
    #[must_use]
    pub const fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Runs the REPL loop until EOF or `:quit`.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            print_banner();
        }

        loop {
            let line = match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => continue,
                ReadResult::Eof => break,
            };
            if line.trim().is_empty() {
                continue;
            }
            self.editor.add_history(&line);

            match self.eval(&line) {
                Ok(Outcome::Print(text)) => println!("{text}"),
                Ok(Outcome::Continue) => {}
                Ok(Outcome::Quit) => break,
                Err(e) => print_error(&e),
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Evaluates one input line.
    ///
    /// # Errors
    ///
    /// Returns an error if the line is malformed or the declaration does not
    /// parse.
    pub fn eval(&mut self, line: &str) -> Result<Outcome> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Outcome::Continue);
        }

        if let Some(command) = line.strip_prefix(':') {
            return self.eval_command(command);
        }

        let (word, declaration) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let kind = DeclarationKind::from_name(word)
            .ok_or_else(|| Error::internal(format!("unknown kind '{word}'; try :help")))?;
        self.session
            .render(kind, declaration.trim_start(), self.format)
            .map(Outcome::Print)
    }

    fn eval_command(&mut self, command: &str) -> Result<Outcome> {
        let mut words = command.split_whitespace();
        match words.next() {
            Some("quit" | "q") => Ok(Outcome::Quit),
            Some("help" | "h") => Ok(Outcome::Print(HELP.to_string())),
            Some("imports") => Ok(Outcome::Print(self.session.import_table().to_string())),
            Some("import") => {
                let (Some(name), Some(expression), None) = (words.next(), words.next(), words.next())
                else {
                    return Err(Error::internal("usage: :import <Name> <type>"));
                };
                let ty = self.session.import(name, expression)?;
                self.refresh_keywords();
                Ok(Outcome::Print(format!("{name} = {ty}")))
            }
            _ => Err(Error::internal(format!("unknown command ':{command}'; try :help"))),
        }
    }

    /// Offers imported names for completion alongside the defaults.
    fn refresh_keywords(&mut self) {
        let mut keywords = default_keywords();
        keywords.extend(self.session.import_table().iter().map(|(name, _)| name.clone()));
        self.editor.set_keywords(keywords);
    }
}

fn print_error(error: &Error) {
    eprintln!("\x1b[31mError: {error}\x1b[0m");
}

fn print_banner() {
    println!("\x1b[1;36mxreflect\x1b[0m v{}", env!("CARGO_PKG_VERSION"));
    println!("Type `<kind> <declaration>` to parse, :help for commands, Ctrl+D to exit.\n");
    let _ = io::stdout().flush();
}
