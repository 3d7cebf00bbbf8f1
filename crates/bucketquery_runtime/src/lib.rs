//! CLI, REPL, and configuration for bucketquery.
//!
//! This crate provides:
//! - [`RuntimeConfig`] - Settings shared by the CLI and the REPL
//! - [`Session`] - Parse-and-render evaluation with per-session dialect state
//! - [`Repl`] - Interactive read-eval-print loop
//! - [`render_once`] - The one-shot CLI path and its exit status
//! - Logging setup for the binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cli;
pub mod config;
pub mod editor;
pub mod logging;
pub mod repl;
pub mod session;

pub use cli::{EXIT_FAILURE, EXIT_SUCCESS, exit_status, render_once};
pub use config::RuntimeConfig;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use logging::init_logging;
pub use repl::{Repl, Step};
pub use session::{Evaluation, Session};
