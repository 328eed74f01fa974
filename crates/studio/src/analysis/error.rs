//! Error types for the analysis client.

use thiserror::Error;

/// Errors that can occur when calling the analysis API.
///
/// None of these reach a user directly: the analysis entry point converts
/// every fault into a fixed user-facing string.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// No API key is configured; the integration is disabled.
    #[error("analysis API key not configured")]
    NotConfigured,

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned an error response.
    #[error("API error ({status}): {message}")]
    Api {
        /// Symbolic status from the API.
        status: String,
        /// Error message.
        message: String,
    },
}
