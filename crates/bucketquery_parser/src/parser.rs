//! Pipeline entry points.
//!
//! [`parse_terms`] is the pure pipeline. [`parse`] wraps it with the host's
//! recovery policy: report the problem, then carry on with a placeholder.

use bucketquery_foundation::AggregateTerms;
use tracing::debug;

use crate::error::ParseError;
use crate::notify::Notifier;
use crate::sanitize::sanitize_term;
use crate::splitter::split_terms;

/// Splits and sanitizes a raw argument string.
///
/// # Errors
///
/// Returns [`ParseError::AmbiguousConnective`] if the input contains both
/// `||` and `&&`.
pub fn parse_terms(raw: &str) -> Result<AggregateTerms, ParseError> {
    let split = split_terms(raw)?;
    let terms = split.pieces.into_iter().map(sanitize_term).collect();
    Ok(AggregateTerms::new(split.connective, terms))
}

/// Parses a raw argument string, reporting malformed input to `notifier`.
///
/// Never fails. Input with both connectives produces exactly one
/// notification and the [ambiguous sentinel](AggregateTerms::ambiguous_sentinel).
pub fn parse<N: Notifier + ?Sized>(raw: &str, notifier: &mut N) -> AggregateTerms {
    match parse_terms(raw) {
        Ok(aggregate) => {
            debug!(
                connective = %aggregate.connective(),
                terms = aggregate.len(),
                "parsed arguments"
            );
            aggregate
        }
        Err(err) => {
            debug!(input = raw, "falling back after ambiguous input");
            notifier.notify(&err.to_string());
            err.fallback()
        }
    }
}
