//! Filesystems / datasets.

use serde_json::Value;

use super::{normalize_record, NormalizeOptions};
use crate::detail::{AttributeMap, DetailLayoutConfig, DetailSection, SecondaryOrder};

const OPTIONS: NormalizeOptions = NormalizeOptions {
    excluded_keys: &["id"],
    custom_keys: &[],
    flatten_keys: &["properties", "props", "usage"],
    boolean_keys: &["mounted", "readonly", "read_only"],
    toggle_keys: &[],
    byte_keys: &[
        "size",
        "used",
        "avail",
        "available",
        "free",
        "referenced",
        "quota",
        "refquota",
        "reservation",
        "refreservation",
        "recordsize",
        "usedbysnapshots",
        "usedbydataset",
    ],
};

pub const FILE_SYSTEM_LAYOUT: DetailLayoutConfig = DetailLayoutConfig {
    sections: &[
        DetailSection {
            id: "general",
            title: "مشخصات فایل‌سیستم",
            keys: &[
                "name",
                "dataset",
                "mountpoint",
                "mount_point",
                "mounted",
                "fstype",
                "type",
                "device",
                "filesystem",
            ],
            optional: false,
        },
        DetailSection {
            id: "usage",
            title: "مصرف فضا",
            keys: &[
                "size",
                "used",
                "avail",
                "available",
                "free",
                "referenced",
                "usage_percent",
                "capacity",
            ],
            optional: true,
        },
        DetailSection {
            id: "properties",
            title: "ویژگی‌ها",
            keys: &[
                "compression",
                "compressratio",
                "recordsize",
                "atime",
                "quota",
                "refquota",
                "reservation",
                "refreservation",
                "readonly",
                "read_only",
                "sharenfs",
                "sharesmb",
            ],
            optional: true,
        },
        DetailSection {
            id: "timestamps",
            title: "زمان‌ها",
            keys: &["creation", "created_at", "updated_at"],
            optional: true,
        },
    ],
    comparison_priority: &["name", "mountpoint", "size", "used", "available", "avail"],
    secondary_order: SecondaryOrder::Locale,
    excluded_keys: &["id"],
};

#[must_use]
pub fn build_file_system_detail_values(raw: &Value) -> AttributeMap {
    normalize_record(raw, &OPTIONS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detail::CellValue;
    use serde_json::json;

    #[test]
    fn zfs_dataset() {
        let map = build_file_system_detail_values(&json!({
            "name": "tank/media",
            "mountpoint": "/mnt/tank/media",
            "used": 1_610_612_736,
            "avail": "unknown",
            "properties": {
                "recordsize": {"value": "131072"},
                "compression": "lz4",
                "readonly": "off",
                "creation": "Wed Nov 15 01:43 2023",
            },
        }));
        assert_eq!(map.get("used").unwrap().value, CellValue::text("1.50 GiB"));
        assert_eq!(map.get("avail").unwrap().value, CellValue::text("unknown"));
        assert_eq!(map.get("recordsize").unwrap().value, CellValue::text("128.00 KiB"));
        assert_eq!(map.get("readonly").unwrap().value, CellValue::text("خیر"));
        assert_eq!(
            map.get("creation").unwrap().value,
            CellValue::text("1402/08/24 01:43:00")
        );
        assert_eq!(map.get_by_label("نقطه اتصال").unwrap().value, CellValue::text("/mnt/tank/media"));
    }
}
