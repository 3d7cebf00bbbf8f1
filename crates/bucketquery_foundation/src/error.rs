//! Error types for bucketquery.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::types::Dialect;

/// The main error type for bucketquery operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about the input that caused the error.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an ambiguous connective error for the given raw input.
    #[must_use]
    pub fn ambiguous_connective(input: impl Into<String>) -> Self {
        Self::new(ErrorKind::AmbiguousConnective {
            input: input.into(),
        })
    }

    /// Creates an empty term set error.
    #[must_use]
    pub fn empty_term_set(dialect: Dialect) -> Self {
        Self::new(ErrorKind::EmptyTermSet { dialect })
    }

    /// Creates an unknown dialect error.
    #[must_use]
    pub fn unknown_dialect(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownDialect(name.into()))
    }

    /// Creates a line editor error.
    #[must_use]
    pub fn editor(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Editor(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Input contained both `||` and `&&`.
    #[error("Input '{input}' cannot contain both '||' and '&&'.")]
    AmbiguousConnective {
        /// The raw input as the user typed it.
        input: String,
    },

    /// Rendering was asked to produce an expression from zero terms.
    #[error("no terms to render as {dialect}")]
    EmptyTermSet {
        /// The dialect that was requested.
        dialect: Dialect,
    },

    /// A dialect name did not match any known dialect.
    #[error("unknown dialect: {0}")]
    UnknownDialect(String),

    /// The interactive line editor failed.
    #[error("editor error: {0}")]
    Editor(String),
}

/// Context about which input an error relates to.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The raw argument string being processed.
    pub input: Option<String>,
    /// The dialect being rendered, if any.
    pub dialect: Option<Dialect>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the raw input.
    #[must_use]
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }

    /// Sets the dialect.
    #[must_use]
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = Some(dialect);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.input, self.dialect) {
            (Some(input), Some(dialect)) => write!(f, "while rendering '{input}' as {dialect}"),
            (Some(input), None) => write!(f, "while processing '{input}'"),
            (None, Some(dialect)) => write!(f, "while rendering as {dialect}"),
            (None, None) => Ok(()),
        }
    }
}
