//! Error type for the color widget.

use thiserror::Error;

/// Errors surfaced to the widget's error box.
#[derive(Debug, Error)]
pub enum ColorError {
    /// The typed color did not validate; the message is user-facing.
    #[error("{0}")]
    InvalidInput(String),
    /// The HTTP request failed outright.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    /// The API answered with a non-success status.
    #[error("request failed: {status} {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, for the error box.
        body: String,
    },
}
