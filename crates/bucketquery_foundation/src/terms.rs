//! The aggregate term set produced by parsing and consumed by rendering.

use crate::types::Connective;

/// A connective together with the ordered terms it joins.
///
/// Built once per parse and never mutated afterwards. Term order is
/// significant: it is the order terms appear in the rendered expression.
/// An empty term list can be represented, but renderers reject it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AggregateTerms {
    connective: Connective,
    terms: Vec<String>,
}

impl AggregateTerms {
    /// Creates an aggregate from a connective and its terms.
    #[must_use]
    pub fn new(connective: Connective, terms: Vec<String>) -> Self {
        Self { connective, terms }
    }

    /// Creates a single-term aggregate. Lone terms are always AND-joined.
    #[must_use]
    pub fn single(term: impl Into<String>) -> Self {
        Self::new(Connective::And, vec![term.into()])
    }

    /// The degenerate value returned when input mixes both connectives.
    ///
    /// This is a placeholder, not a meaningful query: an AND over a single
    /// empty term.
    #[must_use]
    pub fn ambiguous_sentinel() -> Self {
        Self::single(String::new())
    }

    /// Returns true if this is the [`ambiguous_sentinel`](Self::ambiguous_sentinel) value.
    #[must_use]
    pub fn is_sentinel(&self) -> bool {
        self.connective == Connective::And && self.terms.len() == 1 && self.terms[0].is_empty()
    }

    /// The connective joining the terms.
    #[must_use]
    pub const fn connective(&self) -> Connective {
        self.connective
    }

    /// The terms, in input order.
    #[must_use]
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Consumes the aggregate, returning its parts.
    #[must_use]
    pub fn into_parts(self) -> (Connective, Vec<String>) {
        (self.connective, self.terms)
    }
}
