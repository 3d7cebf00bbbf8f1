//! Session state for evaluating command arguments.

use bucketquery_foundation::{AggregateTerms, Dialect, ErrorContext, Result};
use bucketquery_parser::{CollectingNotifier, Notifier, TracingNotifier, parse};
use bucketquery_render::{render, render_all};

use crate::config::RuntimeConfig;

/// The outcome of evaluating one raw argument string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Evaluation {
    /// The parsed term set (the ambiguous sentinel on malformed input).
    pub aggregate: AggregateTerms,
    /// Rendered expressions, one per requested dialect.
    pub renders: Vec<(Dialect, String)>,
    /// Messages meant for the user, in the order they were raised.
    pub notices: Vec<String>,
}

impl Evaluation {
    /// The lines to print: bare queries, or `dialect: query` when `labelled`.
    #[must_use]
    pub fn lines(&self, labelled: bool) -> Vec<String> {
        self.renders
            .iter()
            .map(|(dialect, query)| {
                if labelled {
                    format!("{dialect}: {query}")
                } else {
                    query.clone()
                }
            })
            .collect()
    }
}

/// Evaluation state: which dialect(s) to render into.
#[derive(Clone, Debug)]
pub struct Session {
    dialect: Dialect,
    render_all: bool,
    quiet: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&RuntimeConfig::default())
    }
}

impl Session {
    /// Creates a session from configuration.
    #[must_use]
    pub fn new(config: &RuntimeConfig) -> Self {
        Self {
            dialect: config.dialect,
            render_all: config.render_all,
            quiet: config.quiet,
        }
    }

    /// The active dialect.
    #[must_use]
    pub const fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Switches the active dialect.
    pub fn set_dialect(&mut self, dialect: Dialect) {
        self.dialect = dialect;
    }

    /// Whether every dialect is rendered.
    #[must_use]
    pub const fn render_all(&self) -> bool {
        self.render_all
    }

    /// Enables or disables rendering under every dialect.
    pub fn set_render_all(&mut self, render_all: bool) {
        self.render_all = render_all;
    }

    /// Parses and renders one raw argument string.
    ///
    /// Ambiguous input does not fail: it yields a notice and renders the
    /// sentinel.
    ///
    /// # Errors
    ///
    /// Returns `EmptyTermSet` if the input contains only separators.
    pub fn eval(&self, raw: &str) -> Result<Evaluation> {
        let mut notices = CollectingNotifier::new();
        let aggregate = parse(raw, &mut notices);

        let renders = if self.render_all {
            render_all(&aggregate)
        } else {
            render(&aggregate, self.dialect).map(|query| vec![(self.dialect, query)])
        }
        .map_err(|err| {
            err.with_context(
                ErrorContext::new()
                    .with_input(raw)
                    .with_dialect(self.dialect),
            )
        })?;

        Ok(Evaluation {
            aggregate,
            renders,
            notices: notices.drain(),
        })
    }

    /// Delivers notices to the user: stderr normally, the log when quiet.
    pub fn report(&self, notices: &[String]) {
        for notice in notices {
            if self.quiet {
                TracingNotifier.notify(notice);
            } else {
                eprintln!("\x1b[33m{notice}\x1b[0m");
            }
        }
    }
}
