//! Value formatting.
//!
//! Every function here is total: anything that cannot be interpreted falls
//! back to its JSON text.

use serde_json::Value;

use crate::detail::{NO, YES};
use crate::utils::datetime::{format_datetime, parse_timestamp_value, ParsedTimestamp};

/// Localized "never" token.
pub const NEVER: &str = "هرگز";

// ========== Booleans ==========

/// Tokens read as `true`. Matching is case-insensitive.
pub const TRUTHY_TOKENS: &[&str] = &["yes", "true", "on", "enabled", "enable", "y", "1", YES];
/// Tokens read as `false`.
pub const FALSY_TOKENS: &[&str] = &["no", "false", "off", "disabled", "disable", "n", "0", NO];

/// Classify a string as a boolean token.
#[must_use]
pub fn parse_bool_token(s: &str) -> Option<bool> {
    let token = s.trim().to_lowercase();
    if TRUTHY_TOKENS.contains(&token.as_str()) {
        Some(true)
    } else if FALSY_TOKENS.contains(&token.as_str()) {
        Some(false)
    } else {
        None
    }
}

/// Read any JSON value as a boolean, if it looks like one.
#[must_use]
pub fn value_as_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => parse_bool_token(s),
        Value::Number(n) => match n.as_i64() {
            Some(1) => Some(true),
            Some(0) => Some(false),
            _ => None,
        },
        _ => None,
    }
}

#[must_use]
pub fn format_bool(b: bool) -> &'static str {
    if b {
        YES
    } else {
        NO
    }
}

// ========== Numbers ==========

fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Group thousands with `,`, keep at most two fraction digits.
#[must_use]
pub fn format_number(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        let grouped = group_digits(&i.unsigned_abs().to_string());
        return if i < 0 { format!("-{grouped}") } else { grouped };
    }
    if let Some(u) = n.as_u64() {
        return group_digits(&u.to_string());
    }
    n.as_f64().map_or_else(|| n.to_string(), format_float)
}

fn format_float(f: f64) -> String {
    if !f.is_finite() {
        return f.to_string();
    }
    let fixed = format!("{:.2}", f.abs());
    let (int_part, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac.trim_end_matches('0');
    let sign = if f < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };
    if frac.is_empty() {
        format!("{sign}{}", group_digits(int_part))
    } else {
        format!("{sign}{}.{frac}", group_digits(int_part))
    }
}

/// Human-readable IEC size.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_bytes(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = KIB * 1024;
    const GIB: u64 = MIB * 1024;
    const TIB: u64 = GIB * 1024;
    const PIB: u64 = TIB * 1024;

    if bytes >= PIB {
        format!("{:.2} PiB", bytes as f64 / PIB as f64)
    } else if bytes >= TIB {
        format!("{:.2} TiB", bytes as f64 / TIB as f64)
    } else if bytes >= GIB {
        format!("{:.2} GiB", bytes as f64 / GIB as f64)
    } else if bytes >= MIB {
        format!("{:.2} MiB", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{:.2} KiB", bytes as f64 / KIB as f64)
    } else {
        format!("{bytes} B")
    }
}

/// Byte count if the value is a non-negative integer (or an integer string).
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn value_as_bytes(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0 && f.is_finite()).map(|f| f as u64)),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }
}

// ========== Timestamps ==========

/// Canonical keys holding timestamps. Spellings from `pdbedit -Lv`, the
/// Samba JSON API and ZFS properties are all listed.
pub const TIMESTAMP_KEYS: &[&str] = &[
    "logon_time",
    "logontime",
    "logoff_time",
    "logofftime",
    "kickoff_time",
    "kickofftime",
    "password_last_set",
    "pass_last_set_time",
    "password_can_change",
    "pass_can_change_time",
    "password_must_change",
    "pass_must_change_time",
    "last_bad_password",
    "bad_password_time",
    "created_at",
    "updated_at",
    "modified_at",
    "last_modified",
    "creation",
];

#[must_use]
pub fn is_timestamp_key(key: &str) -> bool {
    TIMESTAMP_KEYS.contains(&key)
}

/// Format a timestamp-like value; `"never"` becomes [`NEVER`], unparseable
/// input is shown as-is.
#[must_use]
pub fn format_timestamp(value: &Value) -> String {
    match parse_timestamp_value(value) {
        Some(ParsedTimestamp::Never) => NEVER.to_string(),
        Some(ParsedTimestamp::At(dt)) => format_datetime(&dt),
        None => format_value(value).unwrap_or_default(),
    }
}

// ========== Generic ==========

/// Format any JSON value; `None` for `null`.
#[must_use]
pub fn format_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(format_bool(*b).to_string()),
        Value::Number(n) => Some(format_number(n)),
        // string tokens are only booleans on known boolean fields
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(format_value)
                .collect::<Vec<_>>()
                .join(", "),
        ),
        Value::Object(_) => {
            Some(serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bool_round_trip() {
        for b in [true, false] {
            assert_eq!(parse_bool_token(format_bool(b)), Some(b));
        }
    }

    #[test]
    fn bool_tokens() {
        assert_eq!(parse_bool_token("Enabled"), Some(true));
        assert_eq!(parse_bool_token(" NO "), Some(false));
        assert_eq!(parse_bool_token("0"), Some(false));
        assert_eq!(parse_bool_token("maybe"), None);
    }

    #[test]
    fn numbers() {
        assert_eq!(format_value(&json!(42)), Some("42".to_string()));
        assert_eq!(format_value(&json!(1_234_567)), Some("1,234,567".to_string()));
        assert_eq!(format_value(&json!(-1234)), Some("-1,234".to_string()));
        assert_eq!(format_value(&json!(1234.5)), Some("1,234.5".to_string()));
        assert_eq!(format_value(&json!(0.126)), Some("0.13".to_string()));
        assert_eq!(format_value(&json!(2.0)), Some("2".to_string()));
    }

    #[test]
    fn arrays_and_objects() {
        assert_eq!(
            format_value(&json!(["a", null, 3])),
            Some("a, 3".to_string())
        );
        assert_eq!(
            format_value(&json!({"a": 1})),
            Some("{\n  \"a\": 1\n}".to_string())
        );
        assert_eq!(format_value(&Value::Null), None);
    }

    #[test]
    fn strings_are_not_guessed_as_booleans() {
        assert_eq!(format_value(&json!("yes")), Some("yes".to_string()));
        assert_eq!(format_value(&json!("n")), Some("n".to_string()));
        assert_eq!(format_value(&json!(true)), Some(YES.to_string()));
    }

    #[test]
    fn bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(1536), "1.50 KiB");
        assert_eq!(format_bytes(3 * 1024 * 1024 * 1024), "3.00 GiB");
        assert_eq!(value_as_bytes(&json!("2048")), Some(2048));
        assert_eq!(value_as_bytes(&json!("1.5T")), None);
    }

    #[test]
    fn timestamps() {
        assert_eq!(format_timestamp(&json!("Never")), NEVER);
        assert_eq!(format_timestamp(&json!(1_700_000_000)), "1402/08/24 01:43:20");
        assert_eq!(format_timestamp(&json!(1_700_000_000_000_i64)), "1402/08/24 01:43:20");
        assert_eq!(format_timestamp(&json!("garbage")), "garbage");
    }
}
