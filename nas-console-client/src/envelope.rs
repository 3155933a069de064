//! Response envelope handling
//!
//! The appliance API answers either with the bare payload or with an
//! envelope of the shape `{ data, ok?, error?, message? }`. Error bodies come
//! in several shapes depending on which backend layer produced them, so the
//! message is looked up through a fixed list of fields.

use serde_json::{Map, Value};

use crate::error::ClientError;
use crate::types::EntityKind;

/// Fields inspected, in order, when extracting a human-readable error message.
const ERROR_MESSAGE_FIELDS: [&str; 4] = ["detail", "message", "error", "errors"];

/// Envelope wrapping most API responses.
///
/// Fields are read leniently: a backend that sends `"ok": "false"` or a
/// structured `message` is still recognized.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiEnvelope {
    /// Payload, absent on some error responses.
    pub data: Option<Value>,
    /// Explicit success flag, when the backend sends one.
    pub ok: Option<bool>,
    /// Error description, `None` on success.
    pub error: Option<Value>,
    /// Informational or error message, in whatever shape it arrived.
    pub message: Option<Value>,
}

impl ApiEnvelope {
    /// Try to read `body` as an envelope.
    ///
    /// Only objects carrying at least one envelope field count; any other
    /// object is a bare payload.
    #[must_use]
    pub fn from_body(body: &Value) -> Option<Self> {
        let obj = body.as_object()?;
        let looks_wrapped = obj.contains_key("data")
            || (obj.contains_key("ok") && (obj.contains_key("error") || obj.contains_key("message")));
        if !looks_wrapped {
            return None;
        }
        Some(Self {
            data: present(obj, "data"),
            ok: obj.get("ok").and_then(flag),
            error: present(obj, "error"),
            message: present(obj, "message"),
        })
    }

    /// Whether the envelope reports failure.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.ok == Some(false) || self.error.as_ref().is_some_and(|e| !is_blank(e))
    }
}

fn present(obj: &Map<String, Value>, field: &str) -> Option<Value> {
    obj.get(field).filter(|v| !v.is_null()).cloned()
}

/// `ok` as sent by the various backend layers: `false`, `"false"`, `0`, ...
fn flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_i64().map(|i| i != 0),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "ok" => Some(true),
            "false" | "0" | "no" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Unwrap a successful response body into its payload.
///
/// Envelopes reporting failure become [`ClientError::Backend`]; a missing
/// `data` field becomes `Value::Null`.
pub fn decode_payload(body: Value) -> Result<Value, ClientError> {
    match ApiEnvelope::from_body(&body) {
        Some(envelope) if envelope.is_failure() => Err(ClientError::Backend {
            message: extract_error_message(&body, "Request failed"),
        }),
        Some(envelope) => Ok(envelope.data.unwrap_or(Value::Null)),
        None => Ok(body),
    }
}

/// Turn a payload into a list of entity records.
///
/// Tolerates every listing shape seen in the wild: a bare array, `null`
/// (treated as empty), an object wrapping the array under one of
/// [`EntityKind::collection_keys`], or a single object (singleton resources
/// such as the SNMP configuration).
#[must_use]
pub fn into_records(kind: EntityKind, payload: Value) -> Vec<Value> {
    match payload {
        Value::Array(items) => items,
        Value::Null => Vec::new(),
        Value::Object(mut obj) => {
            for key in kind.collection_keys() {
                if matches!(obj.get(*key), Some(Value::Array(_))) {
                    if let Some(Value::Array(items)) = obj.remove(*key) {
                        return items;
                    }
                }
            }
            vec![Value::Object(obj)]
        }
        other => {
            log::warn!("[{kind}] Unexpected listing payload, ignoring: {other}");
            Vec::new()
        }
    }
}

/// Extract a user-presentable error message from a response body.
///
/// Looks at `detail`, `message`, `error` and `errors`, in that order, and
/// returns the first non-empty message found. Nested shapes are unwrapped:
/// arrays of strings or of `{ msg | message }` objects are joined, and field
/// maps (`{ "errors": { "name": ["required"] } }`) are rendered as
/// `name: required`. Returns `fallback` when nothing usable is present.
#[must_use]
pub fn extract_error_message(body: &Value, fallback: &str) -> String {
    if let Value::String(s) = body {
        let s = s.trim();
        return if s.is_empty() { fallback.to_string() } else { s.to_string() };
    }
    ERROR_MESSAGE_FIELDS
        .iter()
        .filter_map(|field| body.get(*field))
        .find_map(message_from_value)
        .unwrap_or_else(|| fallback.to_string())
}

/// Extract an error message from raw response text, which may not be JSON.
#[must_use]
pub fn extract_error_message_from_text(text: &str, fallback: &str) -> String {
    match serde_json::from_str::<Value>(text) {
        Ok(body) => extract_error_message(&body, fallback),
        Err(_) => {
            let trimmed = text.trim();
            if trimmed.is_empty() || trimmed.starts_with('<') {
                fallback.to_string()
            } else {
                trimmed.to_string()
            }
        }
    }
}

fn message_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(message_from_value).collect();
            (!parts.is_empty()).then(|| parts.join("; "))
        }
        Value::Object(obj) => {
            for key in ["msg", "message", "detail", "error"] {
                if let Some(msg) = obj.get(key).and_then(message_from_value) {
                    return Some(msg);
                }
            }
            let parts: Vec<String> = obj
                .iter()
                .filter_map(|(field, v)| message_from_value(v).map(|m| format!("{field}: {m}")))
                .collect();
            (!parts.is_empty()).then(|| parts.join("; "))
        }
        _ => None,
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Bool(b) => !b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_payload_passes_through() {
        let body = json!([{"name": "media"}]);
        assert_eq!(decode_payload(body.clone()).unwrap(), body);
    }

    #[test]
    fn envelope_data_is_unwrapped() {
        let body = json!({"ok": true, "data": [{"name": "media"}], "error": null});
        assert_eq!(decode_payload(body).unwrap(), json!([{"name": "media"}]));
    }

    #[test]
    fn envelope_without_data_yields_null() {
        let body = json!({"data": null, "message": "nothing here"});
        assert_eq!(decode_payload(body).unwrap(), Value::Null);
    }

    #[test]
    fn failed_envelope_becomes_backend_error() {
        let body = json!({"ok": false, "data": null, "error": "pool busy"});
        let err = decode_payload(body).unwrap_err();
        assert_eq!(
            err,
            ClientError::Backend {
                message: "pool busy".to_string()
            }
        );
    }

    #[test]
    fn failure_with_structured_message() {
        let body = json!({"ok": false, "error": "pool busy", "message": {"code": 7}});
        assert_eq!(
            decode_payload(body).unwrap_err(),
            ClientError::Backend {
                message: "pool busy".to_string()
            }
        );
    }

    #[test]
    fn string_ok_flag() {
        let body = json!({"ok": "true", "data": [{"name": "tank"}]});
        assert_eq!(decode_payload(body).unwrap(), json!([{"name": "tank"}]));

        let body = json!({"ok": "false", "message": "scrub in progress"});
        assert_eq!(
            decode_payload(body).unwrap_err(),
            ClientError::Backend {
                message: "scrub in progress".to_string()
            }
        );
    }

    #[test]
    fn structured_error_is_a_failure() {
        let body = json!({"data": null, "error": {"msg": "dataset is busy"}});
        let envelope = ApiEnvelope::from_body(&body).unwrap();
        assert!(envelope.is_failure());
        assert_eq!(envelope.data, None);
        assert_eq!(
            decode_payload(body).unwrap_err(),
            ClientError::Backend {
                message: "dataset is busy".to_string()
            }
        );
    }

    #[test]
    fn detail_takes_precedence_over_message() {
        let body = json!({"detail": "share name taken", "message": "Bad Request"});
        assert_eq!(extract_error_message(&body, "fallback"), "share name taken");
    }

    #[test]
    fn validation_detail_array_is_joined() {
        let body = json!({"detail": [
            {"loc": ["body", "path"], "msg": "field required"},
            {"loc": ["body", "name"], "msg": "too long"}
        ]});
        assert_eq!(
            extract_error_message(&body, "fallback"),
            "field required; too long"
        );
    }

    #[test]
    fn errors_field_map_is_rendered() {
        let body = json!({"errors": {"path": ["must be absolute"]}});
        assert_eq!(
            extract_error_message(&body, "fallback"),
            "path: must be absolute"
        );
    }

    #[test]
    fn empty_fields_fall_back() {
        let body = json!({"detail": "", "message": "   ", "error": null});
        assert_eq!(extract_error_message(&body, "fallback"), "fallback");
    }

    #[test]
    fn html_error_page_falls_back() {
        assert_eq!(
            extract_error_message_from_text("<html>502</html>", "Bad gateway"),
            "Bad gateway"
        );
        assert_eq!(
            extract_error_message_from_text("upstream closed", "x"),
            "upstream closed"
        );
    }

    #[test]
    fn records_from_every_listing_shape() {
        let kind = EntityKind::SambaShare;
        assert_eq!(into_records(kind, json!([{"a": 1}])).len(), 1);
        assert!(into_records(kind, Value::Null).is_empty());
        assert_eq!(
            into_records(kind, json!({"shares": [{"a": 1}, {"a": 2}]})).len(),
            2
        );
        let single = into_records(EntityKind::SnmpConfig, json!({"community": "public"}));
        assert_eq!(single, vec![json!({"community": "public"})]);
    }
}
