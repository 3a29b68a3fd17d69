use thiserror::Error;

/// Why a decode or encode request produced no result
///
/// Variants keep their details as strings so the error can travel inside
/// GUI messages, which must be `Clone`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InferenceError {
    /// The call never got a usable reply (DNS, TLS, connection reset, garbled envelope)
    #[error("transport error: {0}")]
    Transport(String),

    /// The provider answered with a non-success status
    #[error("provider returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The call succeeded but the model produced no text
    #[error("model reply carried no text")]
    EmptyResponse,

    /// The model's text is not a JSON translation record
    #[error("model reply is not a valid translation record: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for InferenceError {
    fn from(err: reqwest::Error) -> Self {
        InferenceError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for InferenceError {
    fn from(err: serde_json::Error) -> Self {
        InferenceError::MalformedResponse(err.to_string())
    }
}

// Convenient module-wide result type
pub type Result<T> = std::result::Result<T, InferenceError>;
