//! Error type for the weather widget.

use thiserror::Error;

/// Errors surfaced to the widget's error box.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The typed city did not validate; the message is user-facing.
    #[error("{0}")]
    InvalidInput(String),
    /// Geocoding returned no candidates.
    #[error("Location not found. Please check the spelling.")]
    LocationNotFound,
    /// The HTTP request failed outright.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    /// The API answered with a non-success status.
    #[error("Error {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Status text plus the API's own message, when it sent one.
        message: String,
    },
}
