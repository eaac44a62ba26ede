use reqwest::StatusCode;
use thiserror::Error;

/// Result alias for admin client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Failure modes of a single admin API call.
///
/// Every operation expects exactly one success status code; anything else
/// the server sends back becomes [`ClientError::UnexpectedStatus`] with the
/// raw body as the detail. No 4xx/5xx classification happens here and
/// nothing is retried.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },

    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("create response carried no usable Location header")]
    MissingLocation,
}

impl ClientError {
    /// The HTTP status the server answered with, when one was received.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::UnexpectedStatus { status, .. } => Some(*status),
            ClientError::Transport(err) => err.status(),
            _ => None,
        }
    }
}
