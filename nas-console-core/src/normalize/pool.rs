//! Storage pools.
//!
//! Boolean pool properties are interactive toggles; vdevs and disks are a
//! nested table with one column per device.

use serde_json::Value;

use super::format::format_value;
use super::labels::label_for;
use super::{insert_unhandled, normalize_record, pick, scalar_text, NormalizeOptions};
use crate::detail::{
    AttributeMap, CellValue, DetailLayoutConfig, DetailSection, NestedColumn, NestedDetailTable,
    SecondaryOrder,
};

/// Pool properties that can be flipped from the detail panel.
pub const POOL_TOGGLE_KEYS: &[&str] = &[
    "autoexpand",
    "autoreplace",
    "autotrim",
    "multihost",
    "listsnapshots",
    "readonly",
];

const BYTE_KEYS: &[&str] = &[
    "size",
    "allocated",
    "alloc",
    "free",
    "used",
    "avail",
    "available",
    "expandsize",
    "freeing",
    "leaked",
];

const DEVICE_KEYS: &[&str] = &["vdevs", "devices", "disks", "topology"];

const OPTIONS: NormalizeOptions = NormalizeOptions {
    excluded_keys: &["id"],
    custom_keys: DEVICE_KEYS,
    flatten_keys: &["properties", "props"],
    boolean_keys: &[],
    toggle_keys: POOL_TOGGLE_KEYS,
    byte_keys: BYTE_KEYS,
};

const DEVICE_OPTIONS: NormalizeOptions = NormalizeOptions {
    excluded_keys: &["name", "children", "disks", "devices", "vdevs"],
    custom_keys: &[],
    flatten_keys: &["stats"],
    boolean_keys: &[],
    toggle_keys: &[],
    byte_keys: BYTE_KEYS,
};

pub const POOL_LAYOUT: DetailLayoutConfig = DetailLayoutConfig {
    sections: &[
        DetailSection {
            id: "general",
            title: "مشخصات استخر",
            keys: &["name", "pool_name", "health", "state", "status", "guid"],
            optional: false,
        },
        DetailSection {
            id: "capacity",
            title: "ظرفیت",
            keys: &[
                "size",
                "allocated",
                "alloc",
                "free",
                "used",
                "avail",
                "available",
                "capacity",
                "usage_percent",
                "fragmentation",
                "frag",
                "dedupratio",
                "dedup_ratio",
            ],
            optional: true,
        },
        DetailSection {
            id: "properties",
            title: "ویژگی‌ها",
            keys: &[
                "autoexpand",
                "autoreplace",
                "autotrim",
                "multihost",
                "listsnapshots",
                "readonly",
                "failmode",
                "ashift",
                "altroot",
            ],
            optional: true,
        },
        DetailSection {
            id: "topology",
            title: "ساختار دستگاه‌ها",
            keys: &["vdevs"],
            optional: true,
        },
        DetailSection {
            id: "health",
            title: "پویش و خطاها",
            keys: &["scan", "errors", "read_errors", "write_errors", "checksum_errors"],
            optional: true,
        },
    ],
    comparison_priority: &[
        "name",
        "health",
        "state",
        "size",
        "allocated",
        "free",
        "capacity",
    ],
    secondary_order: SecondaryOrder::ValueLength,
    excluded_keys: &["id"],
};

#[must_use]
pub fn build_pool_detail_values(raw: &Value) -> AttributeMap {
    let mut map = normalize_record(raw, &OPTIONS);

    match device_table(raw) {
        Some(table) => map.insert("vdevs", label_for("vdevs"), CellValue::Nested(table)),
        None => insert_unhandled(&mut map, raw, DEVICE_KEYS, &OPTIONS),
    }
    map
}

fn device_table(raw: &Value) -> Option<NestedDetailTable> {
    let Some(Value::Array(devices)) = pick(raw, DEVICE_KEYS) else {
        return None;
    };
    let columns: Vec<NestedColumn> = devices
        .iter()
        .enumerate()
        .map(|(index, device)| device_column(index, device))
        .collect();
    if columns.is_empty() {
        return None;
    }
    Some(NestedDetailTable::new(
        columns,
        &[
            "type",
            "state",
            "health",
            "size",
            "read_errors",
            "write_errors",
            "checksum_errors",
        ],
        SecondaryOrder::ValueLength,
    ))
}

fn device_column(index: usize, device: &Value) -> NestedColumn {
    let name = ["name", "path", "device", "guid"]
        .iter()
        .find_map(|k| device.get(*k).and_then(scalar_text))
        .or_else(|| scalar_text(device))
        .unwrap_or_else(|| (index + 1).to_string());

    // bare device names carry no attributes
    let mut values = if device.is_object() {
        normalize_record(device, &DEVICE_OPTIONS)
    } else {
        AttributeMap::new()
    };
    // one level only: children are listed by name
    if let Some(Value::Array(children)) = ["children", "disks", "devices"]
        .iter()
        .find_map(|k| device.get(*k))
    {
        let names: Vec<String> = children
            .iter()
            .filter_map(|child| {
                child
                    .get("name")
                    .and_then(scalar_text)
                    .or_else(|| scalar_text(child))
                    .or_else(|| format_value(child))
            })
            .collect();
        if !names.is_empty() {
            values.insert("disks", label_for("disks"), CellValue::Text(names.join(", ")));
        }
    }

    NestedColumn {
        id: format!("{index}:{name}"),
        title: name,
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detail::PropertyToggle;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "name": "tank",
            "health": "ONLINE",
            "size": 4_000_787_030_016_u64,
            "free": 1_073_741_824,
            "capacity": "45%",
            "properties": {
                "autotrim": {"value": "on", "source": "local"},
                "autoexpand": "off",
                "failmode": "wait",
            },
            "vdevs": [
                {"name": "mirror-0", "type": "mirror", "state": "ONLINE",
                 "children": [{"name": "sda"}, {"name": "sdb"}]},
                {"name": "mirror-1", "type": "mirror", "state": "DEGRADED",
                 "children": ["sdc", "sdd"]},
            ],
        })
    }

    #[test]
    fn toggles_and_sizes() {
        let map = build_pool_detail_values(&sample());
        assert_eq!(
            map.get("autotrim").unwrap().value,
            CellValue::Toggle(PropertyToggle {
                property: "autotrim".to_string(),
                enabled: true,
            })
        );
        assert_eq!(map.toggles().count(), 2);
        assert_eq!(map.get("free").unwrap().value, CellValue::text("1.00 GiB"));
        assert_eq!(map.get("size").unwrap().value, CellValue::text("3.64 TiB"));
        assert_eq!(map.get("capacity").unwrap().value, CellValue::text("45%"));
        assert_eq!(map.get("failmode").unwrap().value, CellValue::text("wait"));
    }

    #[test]
    fn vdevs_nested() {
        let map = build_pool_detail_values(&sample());
        let CellValue::Nested(table) = &map.get("vdevs").unwrap().value else {
            panic!("expected nested table");
        };
        assert_eq!(table.columns.len(), 2);
        assert_eq!(table.columns[0].title, "mirror-0");
        assert_eq!(
            table.columns[1].values.get("disks").unwrap().value,
            CellValue::text("sdc, sdd")
        );
        let rows = table.compare();
        assert_eq!(rows[0].key, "type");
        assert!(!rows[0].different);
        assert!(rows[1].different);
    }

    #[test]
    fn unexpected_topology_shape_is_kept_as_text() {
        let map = build_pool_detail_values(&json!({
            "name": "tank",
            "topology": {"data": [{"name": "mirror-0"}]},
        }));
        let keys: Vec<_> = map.keys().collect();
        assert_eq!(keys, vec!["name", "topology"]);
        let CellValue::Text(text) = &map.get("topology").unwrap().value else {
            panic!("expected text");
        };
        assert!(text.contains("mirror-0"));
    }

    #[test]
    fn empty_vdev_list_is_kept_as_text() {
        let map = build_pool_detail_values(&json!({"name": "tank", "vdevs": []}));
        assert_eq!(map.get("vdevs").unwrap().value, CellValue::text(""));
    }
}
