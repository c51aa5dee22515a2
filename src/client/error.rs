use thiserror::Error;

/// Errors raised while talking to the wishlist backend.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// Failed to reach the backend
    #[error("Connection failed for {endpoint}: {source}")]
    Connection {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the configured timeout
    #[error("Request to {endpoint} timed out")]
    Timeout { endpoint: &'static str },

    /// Backend answered with a non-success status
    #[error("Backend error: {status} - {message}")]
    Status { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Failed to decode {context}: {source}")]
    Decode {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    pub fn is_decode(&self) -> bool {
        matches!(self, ClientError::Decode { .. })
    }

    /// Map a transport error, separating timeouts from other failures.
    pub(crate) fn transport(endpoint: &'static str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout { endpoint }
        } else {
            ClientError::Connection {
                endpoint,
                source: err,
            }
        }
    }
}
