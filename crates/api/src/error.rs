use ssg_core::CoreError;

/// Errors from building, sending or reading an API request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request model could not produce a payload.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A builder precondition failed (bad endpoint, empty header key,
    /// missing path identifier).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// An environment variable held a value that cannot be used.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The transport could not deliver the request.
    #[error("Transport failed: {0}")]
    Transport(String),

    /// The API answered with a non-2xx status code.
    #[error("SSG API error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
