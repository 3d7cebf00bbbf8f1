//! Core types and errors for bucketquery.
//!
//! This crate provides:
//! - [`Connective`] - The boolean operator joining terms
//! - [`Dialect`] - The output format a term set is rendered into
//! - [`AggregateTerms`] - A connective plus its ordered, sanitized terms
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod terms;
pub mod types;

pub use error::{Error, ErrorContext, ErrorKind};
pub use terms::AggregateTerms;
pub use types::{AND_MARKER, Connective, Dialect, OR_MARKER};

/// Result type alias using the bucketquery error.
pub type Result<T> = std::result::Result<T, Error>;
