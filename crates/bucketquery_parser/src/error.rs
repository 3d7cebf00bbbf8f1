//! Parse errors.

use bucketquery_foundation::{AggregateTerms, Error, ErrorContext};
use thiserror::Error;

/// An input the splitter refuses to interpret.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Both `||` and `&&` appear in the same input.
    #[error("Input '{input}' cannot contain both '||' and '&&'.")]
    AmbiguousConnective {
        /// The raw input, untrimmed.
        input: String,
    },
}

impl ParseError {
    /// The raw input that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            Self::AmbiguousConnective { input } => input,
        }
    }

    /// The value to continue with when degrading gracefully.
    #[must_use]
    pub fn fallback(&self) -> AggregateTerms {
        match self {
            Self::AmbiguousConnective { .. } => AggregateTerms::ambiguous_sentinel(),
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::AmbiguousConnective { input } => Error::ambiguous_connective(input.clone())
                .with_context(ErrorContext::new().with_input(input)),
        }
    }
}
