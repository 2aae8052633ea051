//! Error types for webmail API calls.

/// Result type alias for API operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Webmail API error types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP transport error (connection refused, timeout, broken body).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the JSON we expected.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Server answered with a non-success status.
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// The `error` field of the response, or the status reason.
        message: String,
    },

    /// Base URL could not be parsed or joined.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}

impl Error {
    /// Creates a server error from a status code and message.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    /// Returns true if the request never produced a usable answer.
    ///
    /// Transport and parse failures are reported to users generically,
    /// while server errors carry a message worth showing verbatim.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Json(_))
    }
}
