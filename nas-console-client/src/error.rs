use serde::{Deserialize, Serialize};

/// Unified error type for all backend API operations.
///
/// All variants are serializable for structured error reporting; the
/// `message` carried by backend-originated variants has already been pulled
/// out of the response envelope by [`extract_error_message`](crate::extract_error_message).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ClientError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The backend rejected the session (HTTP 401/403).
    Unauthorized {
        /// Message extracted from the response body, if any.
        message: Option<String>,
    },

    /// The requested resource does not exist (HTTP 404).
    NotFound {
        /// Request path that was not found.
        resource: String,
        /// Message extracted from the response body, if any.
        message: Option<String>,
    },

    /// Any other non-success HTTP status.
    Http {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the response body.
        message: String,
    },

    /// The request succeeded at the HTTP level but the envelope reports failure
    /// (`ok: false` or a non-null `error`).
    Backend {
        /// Message extracted from the envelope.
        message: String,
    },

    /// Failed to parse the backend response.
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Details about the serialization failure.
        detail: String,
    },

    /// The client could not be constructed (bad base URL, TLS setup, ...).
    InvalidConfig {
        /// Details about the configuration problem.
        detail: String,
    },
}

impl ClientError {
    /// Whether the failure is an expected condition (expired session, missing
    /// resource, backend refusal). Used to pick the log level.
    ///
    /// `true` means log at `warn`, `false` at `error`.
    /// **Update this when adding a variant.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Unauthorized { .. } | Self::NotFound { .. } | Self::Backend { .. } => true,
            Self::Http { status, .. } => (400..500).contains(status),
            _ => false,
        }
    }

    /// The message a user should see, without the transport prefix.
    #[must_use]
    pub fn user_message(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { message } | Self::NotFound { message, .. } => message.as_deref(),
            Self::Http { message, .. } | Self::Backend { message } => Some(message.as_str()),
            _ => None,
        }
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { detail } => write!(f, "Network error: {detail}"),
            Self::Timeout { detail } => write!(f, "Request timeout: {detail}"),
            Self::Unauthorized { message } => {
                if let Some(msg) = message {
                    write!(f, "Unauthorized: {msg}")
                } else {
                    write!(f, "Unauthorized")
                }
            }
            Self::NotFound { resource, message } => {
                if let Some(msg) = message {
                    write!(f, "Resource '{resource}' not found: {msg}")
                } else {
                    write!(f, "Resource '{resource}' not found")
                }
            }
            Self::Http { status, message } => write!(f, "HTTP {status}: {message}"),
            Self::Backend { message } => write!(f, "{message}"),
            Self::ParseError { detail } => write!(f, "Parse error: {detail}"),
            Self::SerializationError { detail } => write!(f, "Serialization error: {detail}"),
            Self::InvalidConfig { detail } => write!(f, "Invalid client configuration: {detail}"),
        }
    }
}

impl std::error::Error for ClientError {}

/// Convenience type alias for `Result<T, ClientError>`.
pub type Result<T> = std::result::Result<T, ClientError>;
