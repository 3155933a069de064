//! Generic HTTP client tools
//!
//! One request path for every endpoint: send, log, read the body, map the
//! status to a [`ClientError`], unwrap the envelope.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::envelope::{decode_payload, extract_error_message_from_text};
use crate::error::ClientError;
use crate::utils::log_sanitizer::sanitize_body_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns status code and response text.
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body)
    /// * `method_name` - request method name, for logs
    /// * `path` - request path, for logs and error context
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        path: &str,
    ) -> Result<(u16, String), ClientError> {
        log::debug!("{method_name} {path}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                ClientError::NetworkError {
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("{method_name} {path} -> {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| ClientError::NetworkError {
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!("Response Body: {}", sanitize_body_for_log(&response_text));

        Ok((status_code, response_text))
    }

    /// Map a finished exchange to its payload.
    ///
    /// Non-2xx statuses become typed errors carrying the message extracted from
    /// the body; 2xx bodies are parsed and unwrapped from their envelope. An
    /// empty 2xx body (e.g. `204 No Content`) yields `Value::Null`.
    pub fn into_payload(status: u16, text: &str, path: &str) -> Result<Value, ClientError> {
        match status {
            200..=299 => {
                if text.trim().is_empty() {
                    return Ok(Value::Null);
                }
                decode_payload(Self::parse_json(text)?)
            }
            401 | 403 => Err(ClientError::Unauthorized {
                message: Some(extract_error_message_from_text(text, "Unauthorized")),
            }),
            404 => Err(ClientError::NotFound {
                resource: path.to_string(),
                message: Some(extract_error_message_from_text(text, "Not found")),
            }),
            _ => Err(ClientError::Http {
                status,
                message: extract_error_message_from_text(text, &format!("HTTP {status}")),
            }),
        }
    }

    /// Parse JSON response
    pub fn parse_json<T>(response_text: &str) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("JSON parse failed: {e}");
            log::error!("Raw response: {}", sanitize_body_for_log(response_text));
            ClientError::ParseError {
                detail: e.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_unwraps_envelope() {
        let payload = HttpUtils::into_payload(200, r#"{"data": [1, 2]}"#, "/x").unwrap();
        assert_eq!(payload, json!([1, 2]));
    }

    #[test]
    fn no_content_is_null() {
        assert_eq!(HttpUtils::into_payload(204, "", "/x").unwrap(), Value::Null);
    }

    #[test]
    fn not_found_keeps_path_and_message() {
        let err = HttpUtils::into_payload(404, r#"{"detail": "no such pool"}"#, "/api/storage/pools/tank")
            .unwrap_err();
        assert_eq!(
            err,
            ClientError::NotFound {
                resource: "/api/storage/pools/tank".to_string(),
                message: Some("no such pool".to_string()),
            }
        );
    }

    #[test]
    fn server_error_without_body_uses_status_fallback() {
        let err = HttpUtils::into_payload(500, "", "/x").unwrap_err();
        assert_eq!(
            err,
            ClientError::Http {
                status: 500,
                message: "HTTP 500".to_string()
            }
        );
    }

    #[test]
    fn invalid_json_is_parse_error() {
        let err = HttpUtils::into_payload(200, "{not json", "/x").unwrap_err();
        assert!(matches!(err, ClientError::ParseError { .. }));
    }
}
