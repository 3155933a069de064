//! NFS exports.
//!
//! Export options are per client, so the client list is rendered as a
//! nested table with one column per client and one row per option.

use serde_json::{Map, Value};

use super::labels::{canonical_key, label_for};
use super::{
    format_attribute, insert_unhandled, normalize_record, pick, scalar_text, NormalizeOptions,
};
use crate::detail::{
    AttributeMap, CellValue, DetailLayoutConfig, DetailSection, NestedColumn, NestedDetailTable,
    SecondaryOrder,
};

const CLIENT_KEYS: &[&str] = &["clients", "client", "host", "hosts"];

const OPTIONS: NormalizeOptions = NormalizeOptions {
    excluded_keys: &["id"],
    custom_keys: &["clients", "client", "host", "hosts", "options"],
    flatten_keys: &[],
    boolean_keys: &["enabled", "active"],
    toggle_keys: &[],
    byte_keys: &[],
};

const CLIENT_OPTIONS: NormalizeOptions = NormalizeOptions {
    excluded_keys: &[],
    custom_keys: &[],
    flatten_keys: &[],
    boolean_keys: &[],
    toggle_keys: &[],
    byte_keys: &[],
};

/// Row order of the per-client option table.
const OPTION_PRIORITY: &[&str] = &[
    "rw",
    "ro",
    "sync",
    "async",
    "root_squash",
    "no_root_squash",
    "all_squash",
    "no_all_squash",
    "subtree_check",
    "no_subtree_check",
    "secure",
    "insecure",
    "anonuid",
    "anongid",
    "sec",
    "fsid",
];

pub const NFS_SHARE_LAYOUT: DetailLayoutConfig = DetailLayoutConfig {
    sections: &[
        DetailSection {
            id: "general",
            title: "مشخصات اشتراک",
            keys: &["path", "export", "export_path", "comment", "fsid", "enabled"],
            optional: false,
        },
        DetailSection {
            id: "clients",
            title: "کلاینت‌ها و گزینه‌ها",
            keys: &["clients"],
            optional: true,
        },
    ],
    comparison_priority: &["path", "export", "comment", "clients"],
    secondary_order: SecondaryOrder::ValueLength,
    excluded_keys: &["id"],
};

/// One client entry of an export.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportClient {
    pub host: String,
    /// Options as `(raw key, value)`; flags are `true`.
    pub options: Vec<(String, Value)>,
}

#[must_use]
pub fn build_nfs_share_detail_values(raw: &Value) -> AttributeMap {
    let mut map = normalize_record(raw, &OPTIONS);

    let clients = parse_export_clients(raw);
    if clients.is_empty() {
        insert_unhandled(&mut map, raw, OPTIONS.custom_keys, &OPTIONS);
    } else {
        let columns = clients
            .into_iter()
            .map(|client| {
                let mut values = AttributeMap::new();
                for (raw_key, value) in &client.options {
                    let key = canonical_key(raw_key);
                    if let Some(cell) = format_attribute(&key, value, &CLIENT_OPTIONS) {
                        values.insert(key, label_for(raw_key), cell);
                    }
                }
                NestedColumn {
                    id: client.host.clone(),
                    title: client.host,
                    values,
                }
            })
            .collect();
        map.insert(
            "clients",
            label_for("clients"),
            CellValue::Nested(NestedDetailTable::new(
                columns,
                OPTION_PRIORITY,
                SecondaryOrder::ValueLength,
            )),
        );
    }
    map
}

/// Client list of an export record.
///
/// Accepts a `clients` array of objects or of `host(opts)` strings, a single
/// client object, an `/etc/exports`-style string
/// (`"10.0.0.0/24(rw,sync) *(ro)"`), or a top-level `client` plus `options`.
#[must_use]
pub fn parse_export_clients(raw: &Value) -> Vec<ExportClient> {
    let top_options = pick(raw, &["options"]);
    // bare hosts share the export-wide options
    let with_defaults = |mut client: ExportClient| {
        if client.options.is_empty() {
            client.options = top_options.map(parse_options).unwrap_or_default();
        }
        client
    };

    match pick(raw, CLIENT_KEYS) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(client_from_value)
            .map(with_defaults)
            .collect(),
        Some(Value::String(s)) if s.contains('(') => parse_exports_line(s),
        Some(value @ Value::Object(_)) => client_from_value(value)
            .map(with_defaults)
            .into_iter()
            .collect(),
        Some(value) => scalar_text(value)
            .map(|host| ExportClient {
                host,
                options: top_options.map(parse_options).unwrap_or_default(),
            })
            .into_iter()
            .collect(),
        None => top_options
            .map(|options| ExportClient {
                host: "*".to_string(),
                options: parse_options(options),
            })
            .into_iter()
            .collect(),
    }
}

fn client_from_value(value: &Value) -> Option<ExportClient> {
    match value {
        Value::String(s) => parse_client_spec(s),
        Value::Object(object) => {
            let host = ["client", "host", "name", "address", "network"]
                .iter()
                .find_map(|k| object.get(*k).and_then(scalar_text))
                .unwrap_or_else(|| "*".to_string());
            let options = object.get("options").map(parse_options).unwrap_or_else(|| {
                // options inlined next to the host
                inline_options(object)
            });
            Some(ExportClient { host, options })
        }
        _ => None,
    }
}

fn inline_options(object: &Map<String, Value>) -> Vec<(String, Value)> {
    object
        .iter()
        .filter(|(k, _)| !matches!(k.as_str(), "client" | "host" | "name" | "address" | "network"))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// `host(opt,opt)` or a bare host.
fn parse_client_spec(spec: &str) -> Option<ExportClient> {
    let spec = spec.trim();
    if spec.is_empty() {
        return None;
    }
    let (host, options) = match spec.split_once('(') {
        Some((host, rest)) => (host, rest.trim_end_matches(')')),
        None => (spec, ""),
    };
    let host = if host.is_empty() { "*" } else { host };
    Some(ExportClient {
        host: host.to_string(),
        options: parse_option_list(options),
    })
}

fn parse_exports_line(line: &str) -> Vec<ExportClient> {
    line.split_whitespace().filter_map(parse_client_spec).collect()
}

fn parse_options(value: &Value) -> Vec<(String, Value)> {
    match value {
        Value::String(s) => parse_option_list(s),
        Value::Array(items) => items
            .iter()
            .filter_map(|item| item.as_str().and_then(parse_option))
            .collect(),
        Value::Object(object) => object.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
        _ => Vec::new(),
    }
}

fn parse_option_list(list: &str) -> Vec<(String, Value)> {
    list.split(',').filter_map(parse_option).collect()
}

/// `rw` → `(rw, true)`, `anonuid=1000` → `(anonuid, "1000")`.
fn parse_option(token: &str) -> Option<(String, Value)> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    Some(match token.split_once('=') {
        Some((key, value)) => (key.trim().to_string(), Value::String(value.trim().to_string())),
        None => (token.to_string(), Value::Bool(true)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detail::YES;
    use serde_json::json;

    fn nested(map: &AttributeMap) -> &NestedDetailTable {
        match &map.get("clients").unwrap().value {
            CellValue::Nested(table) => table,
            other => panic!("expected nested table, got {other:?}"),
        }
    }

    #[test]
    fn clients_become_nested_columns() {
        let map = build_nfs_share_detail_values(&json!({
            "path": "/srv/media",
            "clients": [
                {"client": "10.0.0.0/24", "options": ["rw", "sync", "anonuid=1000"]},
                {"host": "*", "options": "ro,sync"},
            ],
        }));
        assert_eq!(map.get("path").unwrap().value, CellValue::text("/srv/media"));
        let table = nested(&map);
        assert_eq!(table.columns.len(), 2);
        assert_eq!(table.columns[0].title, "10.0.0.0/24");
        assert_eq!(
            table.columns[0].values.get("rw").unwrap().value,
            CellValue::text(YES)
        );
        assert_eq!(
            table.columns[0].values.get("anonuid").unwrap().value,
            CellValue::text("1000")
        );

        let rows = table.compare();
        assert_eq!(rows[0].key, "rw");
        let sync = rows.iter().find(|r| r.key == "sync").unwrap();
        assert!(!sync.different);
        let ro = rows.iter().find(|r| r.key == "ro").unwrap();
        assert!(ro.different);
    }

    #[test]
    fn exports_line() {
        let clients = parse_export_clients(&json!({
            "path": "/srv",
            "clients": "192.168.1.0/24(rw,no_root_squash) *(ro)",
        }));
        assert_eq!(clients.len(), 2);
        assert_eq!(clients[0].host, "192.168.1.0/24");
        assert_eq!(clients[0].options[1].0, "no_root_squash");
        assert_eq!(clients[1].host, "*");
    }

    #[test]
    fn top_level_options_without_clients() {
        let clients = parse_export_clients(&json!({"path": "/srv", "options": "rw"}));
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].host, "*");
    }

    #[test]
    fn missing_clients_is_not_an_error() {
        let map = build_nfs_share_detail_values(&json!({"path": "/srv", "clients": null}));
        assert!(!map.contains_key("clients"));
    }

    #[test]
    fn single_client_object() {
        let map = build_nfs_share_detail_values(&json!({
            "path": "/x",
            "clients": {"host": "10.0.0.1"},
            "options": "ro",
        }));
        let table = nested(&map);
        assert_eq!(table.columns[0].title, "10.0.0.1");
        assert!(table.columns[0].values.contains_key("ro"));
    }

    #[test]
    fn unreadable_clients_are_kept_as_text() {
        let map = build_nfs_share_detail_values(&json!({"path": "/x", "clients": [42, null]}));
        let keys: Vec<_> = map.keys().collect();
        assert_eq!(keys, vec!["clients", "path"]);
        assert_eq!(map.get("clients").unwrap().value, CellValue::text("42"));
    }
}
