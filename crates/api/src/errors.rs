use thiserror::Error;

/// Failure of a single backend call.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx HTTP status.
    #[error("HTTP error ({status}): {body}")]
    Http { status: u16, body: String },
    /// 2xx response whose envelope carried a failure code.
    #[error("API error ({code}): {message}")]
    Api { code: i64, message: String },
    #[error("parse error: {0}")]
    Decode(String),
    #[error("login rejected: {0}")]
    LoginRejected(String),
}

impl ApiError {
    /// Whether the backend refused the call for lack of permission, either
    /// through the HTTP status or through the envelope code.
    pub fn is_forbidden(&self) -> bool {
        matches!(
            self,
            ApiError::Http { status: 403, .. } | ApiError::Api { code: 403, .. }
        )
    }
}
