//! Timestamp parsing and Solar Hijri formatting.
//!
//! Backend timestamps arrive as Unix seconds, Unix milliseconds, ISO-ish
//! strings with or without a zone, Samba/ZFS ctime strings, or the literal
//! `"never"`. Everything is displayed in Tehran time on the Solar Hijri
//! calendar.

use chrono::{
    DateTime, Datelike, FixedOffset, NaiveDateTime, Offset, TimeZone, Timelike, Utc,
};
use serde_json::Value;

/// Values with a magnitude below this are Unix seconds, otherwise milliseconds.
pub const SECONDS_THRESHOLD: f64 = 1e12;

/// Tehran offset (UTC+03:30; no DST since 2022).
const DISPLAY_OFFSET_SECS: i32 = 3 * 3600 + 30 * 60;

/// Naive layouts tried after RFC 3339 / RFC 2822; interpreted in display time.
const NAIVE_FORMATS: [&str; 5] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%a %b %e %H:%M:%S %Y",
    "%a %b %e %H:%M %Y",
];

/// A timestamp-like value after parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedTimestamp {
    /// The backend's explicit "never" marker.
    Never,
    /// A concrete instant.
    At(DateTime<Utc>),
}

/// The fixed display zone.
#[must_use]
pub fn display_offset() -> FixedOffset {
    FixedOffset::east_opt(DISPLAY_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Unix timestamp with second/millisecond auto-detection.
///
/// `|value| < 1e12` is seconds and is scaled by 1000; anything larger is
/// already milliseconds.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn from_unix(value: f64) -> Option<DateTime<Utc>> {
    if !value.is_finite() {
        return None;
    }
    let millis = if value.abs() < SECONDS_THRESHOLD {
        value * 1000.0
    } else {
        value
    };
    DateTime::from_timestamp_millis(millis.round() as i64)
}

/// Parse a date string.
///
/// Numeric strings are Unix timestamps. Otherwise the string is parsed as-is
/// (RFC 3339, RFC 2822, then naive layouts in display time) and, failing
/// that, retried with a trailing `Z`.
#[must_use]
pub fn parse_datetime_str(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(n) = s.parse::<f64>() {
        return from_unix(n);
    }
    parse_direct(s).or_else(|| {
        let normalized = s.replacen(' ', "T", 1);
        DateTime::parse_from_rfc3339(&format!("{normalized}Z"))
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    })
}

fn parse_direct(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NAIVE_FORMATS.iter().find_map(|fmt| {
        NaiveDateTime::parse_from_str(s, fmt)
            .ok()
            .and_then(|naive| display_offset().from_local_datetime(&naive).single())
            .map(|dt| dt.with_timezone(&Utc))
    })
}

/// Parse any JSON value that may hold a timestamp.
///
/// `"never"` (any case) short-circuits to [`ParsedTimestamp::Never`] without
/// attempting a parse.
#[must_use]
pub fn parse_timestamp_value(value: &Value) -> Option<ParsedTimestamp> {
    match value {
        Value::Number(n) => n.as_f64().and_then(from_unix).map(ParsedTimestamp::At),
        Value::String(s) if s.trim().eq_ignore_ascii_case("never") => Some(ParsedTimestamp::Never),
        Value::String(s) => parse_datetime_str(s).map(ParsedTimestamp::At),
        _ => None,
    }
}

/// Convert a Gregorian date to the Solar Hijri (Jalali) calendar.
#[must_use]
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub fn gregorian_to_jalali(gy: i32, gm: u32, gd: u32) -> (i32, u32, u32) {
    const DAYS_BEFORE_MONTH: [i64; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

    let gy = i64::from(gy);
    let gy2 = if gm > 2 { gy + 1 } else { gy };
    let month_index = (gm.clamp(1, 12) - 1) as usize;
    let mut days = 355_666 + 365 * gy + (gy2 + 3).div_euclid(4) - (gy2 + 99).div_euclid(100)
        + (gy2 + 399).div_euclid(400)
        + i64::from(gd)
        + DAYS_BEFORE_MONTH[month_index];

    let mut jy = -1595 + 33 * days.div_euclid(12_053);
    days = days.rem_euclid(12_053);
    jy += 4 * days.div_euclid(1461);
    days = days.rem_euclid(1461);
    if days > 365 {
        jy += (days - 1) / 365;
        days = (days - 1) % 365;
    }
    let (jm, jd) = if days < 186 {
        (1 + days / 31, 1 + days % 31)
    } else {
        (7 + (days - 186) / 30, 1 + (days - 186) % 30)
    };

    (jy as i32, jm as u32, jd as u32)
}

/// Format an instant in display time on the Solar Hijri calendar:
/// `YYYY/MM/DD HH:MM:SS`.
#[must_use]
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    let local = dt.with_timezone(&display_offset());
    let (jy, jm, jd) = gregorian_to_jalali(local.year(), local.month(), local.day());
    format!(
        "{jy:04}/{jm:02}/{jd:02} {:02}:{:02}:{:02}",
        local.hour(),
        local.minute(),
        local.second()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn seconds_are_scaled_to_millis() {
        let dt = from_unix(1_700_000_000.0).unwrap();
        assert_eq!(dt.year(), 2023);
        assert_eq!(dt.timestamp_millis(), 1_700_000_000_000);
    }

    #[test]
    fn display_zone_is_tehran() {
        assert_eq!(display_offset().local_minus_utc(), 12_600);
    }

    #[test]
    fn millis_are_not_rescaled() {
        let dt = from_unix(1_700_000_000_000.0).unwrap();
        assert_eq!(dt.year(), 2023);
        assert_eq!(dt.timestamp_millis(), 1_700_000_000_000);
    }

    #[test]
    fn never_is_not_parsed() {
        for raw in ["never", "NEVER", " Never "] {
            assert_eq!(
                parse_timestamp_value(&json!(raw)),
                Some(ParsedTimestamp::Never)
            );
        }
    }

    #[test]
    fn naive_iso_string_retried_with_z() {
        let dt = parse_datetime_str("2023-11-14T22:13:20.123456").unwrap();
        assert_eq!(dt.timestamp(), 1_700_000_000);
    }

    #[test]
    fn rfc3339_with_offset() {
        let dt = parse_datetime_str("2023-11-15T01:43:20+03:30").unwrap();
        assert_eq!(dt.timestamp(), 1_700_000_000);
    }

    #[test]
    fn numeric_string_is_unix_time() {
        assert_eq!(
            parse_timestamp_value(&json!("1700000000")),
            Some(ParsedTimestamp::At(from_unix(1_700_000_000.0).unwrap()))
        );
    }

    #[test]
    fn zfs_creation_string_in_display_time() {
        let dt = parse_datetime_str("Wed Nov 15 01:43 2023").unwrap();
        assert_eq!(dt.timestamp(), 1_700_000_000 - 20);
    }

    #[test]
    fn garbage_is_none() {
        assert_eq!(parse_timestamp_value(&json!("not a date")), None);
        assert_eq!(parse_timestamp_value(&json!(true)), None);
    }

    #[test]
    fn jalali_conversion() {
        assert_eq!(gregorian_to_jalali(2023, 11, 15), (1402, 8, 24));
        assert_eq!(gregorian_to_jalali(2024, 3, 20), (1403, 1, 1));
        assert_eq!(gregorian_to_jalali(2024, 3, 19), (1402, 12, 29));
    }

    #[test]
    fn formats_in_tehran_time() {
        let dt = from_unix(1_700_000_000.0).unwrap();
        assert_eq!(format_datetime(&dt), "1402/08/24 01:43:20");
    }
}
