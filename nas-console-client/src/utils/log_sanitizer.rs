//! Log sanitization utilities
//!
//! Samba user listings carry password hashes and SNMP configs carry
//! community strings; neither may reach a log file in full.

use serde_json::Value;

/// Maximum number of characters to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// Keys whose values are replaced before a body is logged.
const SECRET_KEYS: [&str; 8] = [
    "password",
    "passwd",
    "nt_hash",
    "lm_hash",
    "nt_passwd",
    "community",
    "auth_password",
    "priv_password",
];

const REDACTED: &str = "***";

fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a string for safe logging.
///
/// Returns the original string if it's within the limit,
/// otherwise returns the first `TRUNCATE_LIMIT` bytes (on a char boundary)
/// with a suffix indicating the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Replace secret-looking values anywhere in a JSON document.
pub fn redact_secrets(value: &mut Value) {
    match value {
        Value::Object(obj) => {
            for (key, v) in obj.iter_mut() {
                let lower = key.to_ascii_lowercase();
                if SECRET_KEYS.iter().any(|secret| lower.contains(secret)) && !v.is_null() {
                    *v = Value::String(REDACTED.to_string());
                } else {
                    redact_secrets(v);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(redact_secrets),
        _ => {}
    }
}

/// Prepare a response body for the debug log: redact, then truncate.
///
/// Bodies that are not JSON are only truncated.
pub fn sanitize_body_for_log(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(mut value) => {
            redact_secrets(&mut value);
            truncate_for_log(&value.to_string())
        }
        Err(_) => truncate_for_log(body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn short_string_unchanged() {
        let s = "hello world";
        assert_eq!(truncate_for_log(s), s);
    }

    #[test]
    fn over_limit_truncated() {
        let s = "a".repeat(TRUNCATE_LIMIT + 100);
        let result = truncate_for_log(&s);
        assert!(result.contains(&format!("{} bytes]", TRUNCATE_LIMIT + 100)));
        assert!(result.len() < s.len());
    }

    #[test]
    fn multibyte_chars_safe() {
        let s = "ش".repeat(200);
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total"));
    }

    #[test]
    fn nested_secrets_are_redacted() {
        let mut body = json!({
            "data": [
                {"username": "alice", "nt_hash": "8846F7EAEE8FB117AD06BDD830B7586C"},
                {"username": "bob", "password": null}
            ],
            "snmp": {"community": "private", "location": "rack 4"}
        });
        redact_secrets(&mut body);
        assert_eq!(body["data"][0]["nt_hash"], "***");
        assert_eq!(body["data"][0]["username"], "alice");
        assert_eq!(body["data"][1]["password"], Value::Null);
        assert_eq!(body["snmp"]["community"], "***");
        assert_eq!(body["snmp"]["location"], "rack 4");
    }

    #[test]
    fn non_json_body_only_truncated() {
        assert_eq!(sanitize_body_for_log("plain text"), "plain text");
    }
}
