//! Connective detection and term splitting.
//!
//! Determines which connective joins the input and cuts it into raw,
//! unsanitized term substrings.

use bucketquery_foundation::{AND_MARKER, Connective, OR_MARKER};
use tracing::trace;

use crate::error::ParseError;

/// The connective and raw pieces of an input, borrowed from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitTerms<'a> {
    /// The connective the input uses.
    pub connective: Connective,
    /// Trimmed, non-empty pieces in input order. A marker-free input always
    /// yields exactly one piece, which may be empty.
    pub pieces: Vec<&'a str>,
}

/// Splits a raw argument string on whichever connective it contains.
///
/// - `||` only: OR over the non-empty trimmed pieces
/// - `&&` only: AND over the non-empty trimmed pieces
/// - neither: AND over the whole trimmed input
///
/// # Errors
///
/// Returns [`ParseError::AmbiguousConnective`] if both markers are present.
pub fn split_terms(input: &str) -> Result<SplitTerms<'_>, ParseError> {
    let has_or = input.contains(OR_MARKER);
    let has_and = input.contains(AND_MARKER);

    let split = match (has_or, has_and) {
        (true, true) => {
            return Err(ParseError::AmbiguousConnective {
                input: input.to_string(),
            });
        }
        (true, false) => split_on(input, Connective::Or),
        (false, true) => split_on(input, Connective::And),
        (false, false) => SplitTerms {
            connective: Connective::And,
            pieces: vec![trim(input)],
        },
    };

    trace!(connective = %split.connective, pieces = split.pieces.len(), "split input");
    Ok(split)
}

fn split_on(input: &str, connective: Connective) -> SplitTerms<'_> {
    let pieces = input
        .split(connective.marker())
        .map(trim)
        .filter(|piece| !piece.is_empty())
        .collect();
    SplitTerms { connective, pieces }
}

/// Strips leading and trailing spaces and ASCII control characters.
///
/// Anything at or below U+0020 counts as padding. Unicode whitespace beyond
/// that range is kept, since hosts pass it through as part of the term.
#[must_use]
pub fn trim(s: &str) -> &str {
    s.trim_matches(|c: char| c <= ' ')
}
