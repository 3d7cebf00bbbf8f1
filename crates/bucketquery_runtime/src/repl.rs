//! The interactive REPL.
//!
//! Every line is a raw argument string, exactly as it would follow the chat
//! command. Lines starting with `:` are REPL commands; a leading `::` stands
//! for a literal `:` so terms that begin with a colon can still be queried.

use crate::config::RuntimeConfig;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::Session;
use bucketquery_foundation::{Dialect, Error, Result};

/// What the REPL should do after a line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// Print these lines and keep reading.
    Continue(Vec<String>),
    /// Leave the loop.
    Quit,
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Dialect state.
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(config: &RuntimeConfig) -> Result<Self> {
        let editor = RustylineEditor::new(config.history_size)?;
        Ok(Self::with_editor(editor, config))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E, config: &RuntimeConfig) -> Self {
        Self {
            editor,
            session: Session::new(config),
            show_banner: config.show_banner,
            prompt: config.prompt.clone(),
        }
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Runs the REPL loop until `:quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        while self.read_eval_print()? {}

        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let line = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => return Ok(true),
            ReadResult::Eof => return Ok(false),
        };

        if line.trim().is_empty() {
            return Ok(true);
        }

        self.editor.add_history(&line);

        match self.eval_line(&line) {
            Ok(Step::Continue(output)) => {
                for out in output {
                    println!("{out}");
                }
                Ok(true)
            }
            Ok(Step::Quit) => Ok(false),
            Err(e) => {
                print_error(&e);
                Ok(true)
            }
        }
    }

    /// Evaluates one line: a REPL command or a raw argument string.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown dialect name or an input that renders
    /// no terms.
    pub fn eval_line(&mut self, line: &str) -> Result<Step> {
        let query = match line.trim_start().strip_prefix(':') {
            Some(escaped) if escaped.starts_with(':') => escaped,
            Some(command) => return self.eval_command(command.trim()),
            None => line,
        };

        let evaluation = self.session.eval(query)?;
        self.session.report(&evaluation.notices);
        Ok(Step::Continue(evaluation.lines(self.session.render_all())))
    }

    fn eval_command(&mut self, command: &str) -> Result<Step> {
        let (name, arg) = command
            .split_once(char::is_whitespace)
            .map_or((command, ""), |(name, arg)| (name, arg.trim()));

        let output = match name {
            "q" | "quit" | "exit" => return Ok(Step::Quit),
            "dialect" => {
                if !arg.is_empty() {
                    self.session.set_dialect(arg.parse::<Dialect>()?);
                }
                format!("dialect: {}", self.session.dialect())
            }
            "all" => {
                let render_all = !self.session.render_all();
                self.session.set_render_all(render_all);
                format!("render all: {}", if render_all { "on" } else { "off" })
            }
            "help" | "h" => return Ok(Step::Continue(help_lines())),
            other => format!("unknown command :{other} (try :help)"),
        };

        Ok(Step::Continue(vec![output]))
    }

    fn print_banner(&self) {
        println!("bucketquery {}", env!("CARGO_PKG_VERSION"));
        println!(
            "Join terms with || or &&. Rendering as {}. Type :help for commands.",
            self.session.dialect()
        );
        println!();
    }
}

fn help_lines() -> Vec<String> {
    [
        "<terms>            render terms joined by || (any) or && (all)",
        ":dialect [name]    show or set the dialect (category, monster)",
        ":all               toggle rendering under every dialect",
        ":help              show this help",
        ":quit              exit (also Ctrl-D)",
        "::<terms>          query terms that start with ':' (the first ':' is dropped)",
    ]
    .iter()
    .map(ToString::to_string)
    .collect()
}

fn print_error(error: &Error) {
    eprintln!("\x1b[31mError: {error}\x1b[0m");
    if let Some(context) = &error.context {
        eprintln!("  {context}");
    }
}
