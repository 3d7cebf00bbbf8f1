//! Parsing of raw command arguments into aggregate term sets.
//!
//! This crate turns input like `abyssal_demon || dust_devil` into an
//! [`AggregateTerms`](bucketquery_foundation::AggregateTerms) value that the
//! renderer can format.
//!
//! # Architecture
//!
//! ```text
//! "abyssal_demon || dust_devil"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   SPLITTER      │  → OR, ["abyssal_demon", "dust_devil"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   SANITIZER     │  → ["abyssal demon", "dust devil"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ AGGREGATE TERMS │  → AggregateTerms { OR, [...] }
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`splitter`] - Connective detection and term splitting
//! - [`sanitize`] - Underscore replacement and ECMAScript escaping
//! - [`parser`] - Pipeline entry points
//! - [`notify`] - Sinks for user-facing notifications
//! - [`error`] - Parse errors

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod notify;
pub mod parser;
pub mod sanitize;
pub mod splitter;

pub use error::ParseError;
pub use notify::{CollectingNotifier, Notifier, TracingNotifier};
pub use parser::{parse, parse_terms};
pub use sanitize::{escape_ecmascript, sanitize_term};
pub use splitter::{SplitTerms, split_terms};
