#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("Unknown {kind} code: '{value}'")]
    UnknownCode { kind: &'static str, value: String },

    #[error(
        "There are some required fields that are missing! Use validate() to find the missing fields!"
    )]
    NotReady { errors: Vec<String> },

    #[error("Unsupported: {0}")]
    Unsupported(String),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
