//! The one-shot command line path: render one argument string, then exit.

use bucketquery_foundation::Result;

use crate::session::Session;

/// Exit status after a successful render, including the ambiguous-input fallback.
pub const EXIT_SUCCESS: u8 = 0;

/// Exit status when rendering fails.
pub const EXIT_FAILURE: u8 = 1;

/// Renders `raw` with the session's settings and returns the lines for stdout.
///
/// Notices (such as the ambiguous-connective message) are delivered through
/// [`Session::report`] before the lines are returned.
///
/// # Errors
///
/// Returns `EmptyTermSet` if the input contains only separators.
pub fn render_once(session: &Session, raw: &str) -> Result<Vec<String>> {
    let evaluation = session.eval(raw)?;
    session.report(&evaluation.notices);
    Ok(evaluation.lines(session.render_all()))
}

/// The process exit status for a command result.
#[must_use]
pub fn exit_status<T>(result: &Result<T>) -> u8 {
    match result {
        Ok(_) => EXIT_SUCCESS,
        Err(_) => EXIT_FAILURE,
    }
}
