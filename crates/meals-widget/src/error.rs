//! Error type for the meals widget.

use thiserror::Error;

/// Errors surfaced to the widget's error line.
#[derive(Debug, Error)]
pub enum MealError {
    /// The typed query was blank; the message is user-facing.
    #[error("{0}")]
    InvalidQuery(String),
    /// The HTTP request failed outright.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    /// The API answered with a non-success status.
    #[error("request failed: {status} {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, for the error line.
        body: String,
    },
}
