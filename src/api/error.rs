//! API error types.

/// Errors returned by `CatalogClient` operations.
#[derive(Debug)]
pub enum ApiError {
    /// The request never got an HTTP response (refused, DNS, timeout).
    Connection(String),
    /// The server answered with a non-2xx status. `message` carries the
    /// server's `{error}` text verbatim when the body was parseable,
    /// otherwise a generic fallback naming the status.
    Server { status: u16, message: String },
    /// A 2xx body that could not be decoded into the expected shape.
    Decode(String),
}

impl ApiError {
    /// The text a user-facing message region should display.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Connection(_) => {
                "Could not reach the server. Is the backend running?".to_string()
            }
            ApiError::Server { message, .. } => message.clone(),
            ApiError::Decode(_) => "Received an unreadable response from the server.".to_string(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Connection(e) => write!(f, "Connection error: {}", e),
            ApiError::Server { status, message } => {
                write!(f, "Server error ({}): {}", status, message)
            }
            ApiError::Decode(e) => write!(f, "Invalid response: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}
