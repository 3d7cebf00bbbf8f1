//! bucketquery - boolean term lists to bucket query expressions
//!
//! This crate re-exports all layers of the bucketquery system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: bucketquery_runtime    - CLI, REPL, configuration, logging
//! Layer 2: bucketquery_render     - Dialect templates and rendering
//! Layer 1: bucketquery_parser     - Splitting, sanitization, notifications
//! Layer 0: bucketquery_foundation - Core types (Connective, Dialect, AggregateTerms, Error)
//! ```

pub use bucketquery_foundation as foundation;
pub use bucketquery_parser as parser;
pub use bucketquery_render as render;
pub use bucketquery_runtime as runtime;
