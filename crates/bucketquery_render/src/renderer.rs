//! The dialect renderer.
//!
//! A lone term renders through the dialect's single-term template with no
//! aggregator around it. Two or more terms each go through the multi-term
//! template, are joined with `, ` and wrapped in the connective's function:
//!
//! ```text
//! ["a"]        AND  CATEGORY  →  'Category:a'
//! ["a", "b"]   OR   CATEGORY  →  bucket.Or({'Category:a'}, {'Category:b'})
//! ```

use bucketquery_foundation::{AggregateTerms, Dialect, Error, Result};
use tracing::trace;

use crate::template::DialectTemplates;

/// Separator between rendered terms inside an aggregator call.
const TERM_SEPARATOR: &str = ", ";

/// Renders an aggregate under a fixed dialect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Renderer {
    dialect: Dialect,
}

impl Renderer {
    /// Creates a renderer for `dialect`.
    #[must_use]
    pub const fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    /// The dialect this renderer produces.
    #[must_use]
    pub const fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Renders `aggregate` into a query expression.
    ///
    /// # Errors
    ///
    /// Returns `EmptyTermSet` if `aggregate` has no terms.
    pub fn render(&self, aggregate: &AggregateTerms) -> Result<String> {
        let templates = DialectTemplates::for_dialect(self.dialect);

        let output = match aggregate.terms() {
            [] => return Err(Error::empty_term_set(self.dialect)),
            [term] => templates.single.apply(term),
            terms => {
                let function = aggregate.connective().function_name();
                let mut out = String::with_capacity(function.len() + terms.len() * 32);
                out.push_str(function);
                out.push('(');
                for (i, term) in terms.iter().enumerate() {
                    if i > 0 {
                        out.push_str(TERM_SEPARATOR);
                    }
                    templates.multi.write_to(&mut out, term);
                }
                out.push(')');
                out
            }
        };

        trace!(dialect = %self.dialect, terms = aggregate.len(), "rendered query");
        Ok(output)
    }
}

/// Renders `aggregate` under `dialect`.
///
/// # Errors
///
/// Returns `EmptyTermSet` if `aggregate` has no terms.
pub fn render(aggregate: &AggregateTerms, dialect: Dialect) -> Result<String> {
    Renderer::new(dialect).render(aggregate)
}

/// Renders `aggregate` under every dialect, in [`Dialect::ALL`] order.
///
/// # Errors
///
/// Returns `EmptyTermSet` if `aggregate` has no terms.
pub fn render_all(aggregate: &AggregateTerms) -> Result<Vec<(Dialect, String)>> {
    Dialect::ALL
        .into_iter()
        .map(|dialect| render(aggregate, dialect).map(|query| (dialect, query)))
        .collect()
}
