//! Errors crossing the network seam.

use thiserror::Error;

/// Failure of a single request against one of the site endpoints.
///
/// Each variant carries enough text to be logged; none of them is fatal to
/// the page, the caller decides what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a response (offline, CORS, aborted).
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status code.
    #[error("HTTP error: {0}")]
    Http(u16),

    /// The response body was not the JSON shape we expected.
    #[error("Parse error: {0}")]
    Parse(String),
}
