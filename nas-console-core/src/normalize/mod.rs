//! Attribute normalizers
//!
//! Turn one raw backend record into an [`AttributeMap`] of translated labels
//! and formatted values. Normalizers never fail: values that cannot be
//! interpreted are shown as their JSON text.

mod file_system;
pub mod format;
pub mod labels;
mod nfs_share;
mod pool;
mod samba_share;
mod samba_user;
mod snmp;

pub use file_system::{build_file_system_detail_values, FILE_SYSTEM_LAYOUT};
pub use nfs_share::{
    build_nfs_share_detail_values, parse_export_clients, ExportClient, NFS_SHARE_LAYOUT,
};
pub use pool::{build_pool_detail_values, POOL_LAYOUT, POOL_TOGGLE_KEYS};
pub use samba_share::{build_samba_share_detail_values, SAMBA_SHARE_LAYOUT};
pub use samba_user::{build_samba_user_detail_values, decode_account_flags, SAMBA_USER_LAYOUT};
pub use snmp::{build_snmp_detail_values, SNMP_LAYOUT};

use serde_json::Value;

use crate::detail::{AttributeMap, CellValue, DetailLayoutConfig, PropertyToggle};
use crate::types::EntityKind;
use format::{
    format_bool, format_bytes, format_timestamp, format_value, is_timestamp_key, value_as_bool,
    value_as_bytes,
};
use labels::{canonical_key, label_for};

/// Per-entity-type normalization rules. All keys are canonical.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizeOptions {
    /// Never shown.
    pub excluded_keys: &'static [&'static str],
    /// Left to the entity-specific builder.
    pub custom_keys: &'static [&'static str],
    /// Objects whose entries are lifted to the top level (`properties`, ...).
    pub flatten_keys: &'static [&'static str],
    /// Fields whose string tokens (`yes`, `off`, `1`, ...) mean yes/no.
    /// Elsewhere only JSON booleans do.
    pub boolean_keys: &'static [&'static str],
    /// Booleans rendered as interactive toggles.
    pub toggle_keys: &'static [&'static str],
    /// Integer byte counts rendered as IEC sizes.
    pub byte_keys: &'static [&'static str],
}

/// Normalize one record with `options`.
#[must_use]
pub fn normalize_record(raw: &Value, options: &NormalizeOptions) -> AttributeMap {
    let mut map = AttributeMap::new();
    let Some(object) = raw.as_object() else {
        if let Some(text) = format_value(raw) {
            map.insert("value", "مقدار", CellValue::Text(text));
        }
        return map;
    };

    let mut lifted = Vec::new();
    for (raw_key, value) in object {
        let key = canonical_key(raw_key);
        if options.flatten_keys.contains(&key.as_str()) {
            if let Some(inner) = value.as_object() {
                lifted.extend(inner.iter());
                continue;
            }
        }
        insert_attribute(&mut map, raw_key, value, options);
    }
    for (raw_key, value) in lifted {
        if !map.contains_key(&canonical_key(raw_key)) {
            insert_attribute(&mut map, raw_key, value, options);
        }
    }
    map
}

fn insert_attribute(map: &mut AttributeMap, raw_key: &str, value: &Value, options: &NormalizeOptions) {
    if raw_key.starts_with('_') {
        return;
    }
    let key = canonical_key(raw_key);
    if key.is_empty()
        || options.excluded_keys.contains(&key.as_str())
        || options.custom_keys.contains(&key.as_str())
    {
        return;
    }
    if let Some(cell) = format_attribute(&key, value, options) {
        map.insert(key, label_for(raw_key), cell);
    }
}

/// Format one attribute under `options`; `None` when the value is null.
#[must_use]
pub fn format_attribute(key: &str, value: &Value, options: &NormalizeOptions) -> Option<CellValue> {
    // ZFS-style `{ "value": "on", "source": "default" }`
    let value = value
        .as_object()
        .and_then(|o| o.get("value"))
        .unwrap_or(value);
    if value.is_null() {
        return None;
    }

    if options.toggle_keys.contains(&key) {
        if let Some(enabled) = value_as_bool(value) {
            return Some(CellValue::Toggle(PropertyToggle {
                property: key.to_string(),
                enabled,
            }));
        }
    }
    if options.byte_keys.contains(&key) {
        if let Some(bytes) = value_as_bytes(value) {
            return Some(CellValue::Text(format_bytes(bytes)));
        }
    }
    if is_timestamp_key(key) {
        return Some(CellValue::Text(format_timestamp(value)));
    }
    if options.boolean_keys.contains(&key) || options.toggle_keys.contains(&key) {
        if let Some(b) = value_as_bool(value) {
            return Some(CellValue::text(format_bool(b)));
        }
    }
    format_value(value).map(CellValue::Text)
}

/// First non-null value among the aliases in `keys`, in alias order.
pub(crate) fn pick<'a>(raw: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    let object = raw.as_object()?;
    keys.iter().find_map(|alias| {
        object
            .iter()
            .find(|(k, v)| !v.is_null() && canonical_key(k) == *alias)
            .map(|(_, v)| v)
    })
}

/// Format the raw `keys` an entity builder could not interpret, the same way
/// any other attribute is formatted.
pub(crate) fn insert_unhandled(
    map: &mut AttributeMap,
    raw: &Value,
    keys: &[&str],
    options: &NormalizeOptions,
) {
    let Some(object) = raw.as_object() else {
        return;
    };
    for (raw_key, value) in object {
        let key = canonical_key(raw_key);
        if !keys.contains(&key.as_str()) || map.contains_key(&key) {
            continue;
        }
        if let Some(cell) = format_attribute(&key, value, options) {
            map.insert(key, label_for(raw_key), cell);
        }
    }
}

/// Scalar text of a JSON value, for ids and titles inside nested tables.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Attribute map of any entity kind.
#[must_use]
pub fn build_detail_values(kind: EntityKind, raw: &Value) -> AttributeMap {
    match kind {
        EntityKind::SambaShare => build_samba_share_detail_values(raw),
        EntityKind::NfsShare => build_nfs_share_detail_values(raw),
        EntityKind::SambaUser => build_samba_user_detail_values(raw),
        EntityKind::SnmpConfig => build_snmp_detail_values(raw),
        EntityKind::Pool => build_pool_detail_values(raw),
        EntityKind::FileSystem => build_file_system_detail_values(raw),
    }
}

/// Static layout of an entity kind.
#[must_use]
pub fn layout_for(kind: EntityKind) -> &'static DetailLayoutConfig {
    match kind {
        EntityKind::SambaShare => &SAMBA_SHARE_LAYOUT,
        EntityKind::NfsShare => &NFS_SHARE_LAYOUT,
        EntityKind::SambaUser => &SAMBA_USER_LAYOUT,
        EntityKind::SnmpConfig => &SNMP_LAYOUT,
        EntityKind::Pool => &POOL_LAYOUT,
        EntityKind::FileSystem => &FILE_SYSTEM_LAYOUT,
    }
}
