//! Upstream client error types.

use thiserror::Error;

/// Errors raised while talking to the upstream fact-sheet service.
///
/// Calls are single-attempt: nothing here is retried or backed off; every
/// variant surfaces to the route handler, which converts it into a `502`
/// response for the browser to show.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// HTTP transport or body-decoding error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream returned a non-success status code.
    #[error("upstream error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the upstream service.
        status: u16,
        /// Response body text, as far as it could be read.
        message: String,
    },

    /// A list body matched none of the documented envelope shapes
    /// (bare array, `{results}`, `{data}`). Deliberately loud: an unknown
    /// shape must never decay into an empty list.
    #[error("unrecognized list envelope: {0}")]
    UnrecognizedShape(String),
}
