//! Rendering of aggregate term sets into bucket query expressions.
//!
//! ```
//! use bucketquery_foundation::{AggregateTerms, Connective, Dialect};
//! use bucketquery_render::render;
//!
//! let terms = AggregateTerms::new(Connective::Or, vec!["a".into(), "b".into()]);
//! let query = render(&terms, Dialect::Category).unwrap();
//! assert_eq!(query, "bucket.Or({'Category:a'}, {'Category:b'})");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod renderer;
pub mod template;

pub use renderer::{Renderer, render, render_all};
pub use template::{DialectTemplates, Template};
