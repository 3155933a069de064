//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

pub use nas_console_client::ClientError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Entity not found in the latest listing
    #[error("Entity not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Backend/transport error
    #[error("{0}")]
    Client(#[from] ClientError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.); used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::NotFound(_) | Self::ValidationError(_) => true,
            Self::Client(e) => e.is_expected(),
        }
    }

    /// Message to show the operator: the backend-supplied message when there is
    /// one, otherwise `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Client(e) => e.user_message().map_or_else(|| fallback.to_string(), str::to_string),
            Self::NotFound(_) | Self::ValidationError(_) => self.to_string(),
        }
    }

    /// Log the error at the level matching [`is_expected`](Self::is_expected).
    pub fn log(&self, context: &str) {
        if self.is_expected() {
            log::warn!("{context}: {self}");
        } else {
            log::error!("{context}: {self}");
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_message_preferred_over_fallback() {
        let err = CoreError::from(ClientError::Backend {
            message: "نام اشتراک تکراری است".to_string(),
        });
        assert_eq!(err.user_message("خطا"), "نام اشتراک تکراری است");
    }

    #[test]
    fn transport_error_uses_fallback() {
        let err = CoreError::from(ClientError::NetworkError {
            detail: "connection refused".to_string(),
        });
        assert_eq!(err.user_message("خطا در ارتباط"), "خطا در ارتباط");
        assert!(!err.is_expected());
    }

    #[test]
    fn serializes_with_code() {
        let err = CoreError::ValidationError("bad property".to_string());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "ValidationError");
        assert_eq!(json["details"], "bad property");
    }
}
