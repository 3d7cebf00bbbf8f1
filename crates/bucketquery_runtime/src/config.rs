//! Runtime configuration.

use bucketquery_foundation::Dialect;

/// Settings shared by the one-shot CLI and the REPL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Dialect used when rendering a single expression.
    pub dialect: Dialect,

    /// Render every input under all dialects instead of just `dialect`.
    pub render_all: bool,

    /// Route notifications to the log instead of stderr.
    pub quiet: bool,

    /// Log verbosity: 0 = warnings, 3 and above = trace.
    pub verbosity: u8,

    /// Primary REPL prompt.
    pub prompt: String,

    /// Show the REPL welcome banner.
    pub show_banner: bool,

    /// Maximum number of REPL history entries kept in memory.
    pub history_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::Category,
            render_all: false,
            quiet: false,
            verbosity: 0,
            prompt: "bucket> ".to_string(),
            show_banner: true,
            history_size: 1000,
        }
    }
}

impl RuntimeConfig {
    /// Creates a configuration for scripted use: no banner, notifications only in the log.
    #[must_use]
    pub fn quiet() -> Self {
        Self {
            quiet: true,
            show_banner: false,
            ..Self::default()
        }
    }

    /// Creates a configuration that logs parse and render decisions.
    #[must_use]
    pub fn verbose() -> Self {
        Self {
            verbosity: 2,
            ..Self::default()
        }
    }

    /// Builder method to set the dialect.
    #[must_use]
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Builder method to render under every dialect.
    #[must_use]
    pub fn with_render_all(mut self, render_all: bool) -> Self {
        self.render_all = render_all;
        self
    }

    /// Builder method to enable/disable quiet mode.
    #[must_use]
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Builder method to set log verbosity.
    #[must_use]
    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Builder method to set the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Builder method to show/hide the banner.
    #[must_use]
    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    /// Builder method to set history size.
    #[must_use]
    pub fn with_history_size(mut self, size: usize) -> Self {
        self.history_size = size;
        self
    }

    /// The default log filter directive for this verbosity.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
