//! Samba shares.
//!
//! Shares come either flat or with their `smb.conf` parameters under
//! `parameters` / `options`; both shapes end up in the same map.

use serde_json::Value;

use super::{normalize_record, NormalizeOptions};
use crate::detail::{AttributeMap, DetailLayoutConfig, DetailSection, SecondaryOrder};

const OPTIONS: NormalizeOptions = NormalizeOptions {
    excluded_keys: &["id"],
    custom_keys: &[],
    flatten_keys: &["parameters", "options", "config"],
    boolean_keys: &[
        "read_only",
        "writable",
        "writeable",
        "browseable",
        "browsable",
        "guest_ok",
        "public",
        "available",
        "inherit_permissions",
        "inherit_acls",
        "guest_only",
        "printable",
        "oplocks",
        "hide_dot_files",
        "follow_symlinks",
        "wide_links",
        "ea_support",
        "store_dos_attributes",
        "enabled",
    ],
    toggle_keys: &[],
    byte_keys: &[],
};

pub const SAMBA_SHARE_LAYOUT: DetailLayoutConfig = DetailLayoutConfig {
    sections: &[
        DetailSection {
            id: "general",
            title: "مشخصات اشتراک",
            keys: &[
                "name",
                "share_name",
                "path",
                "full_path",
                "comment",
                "available",
                "browseable",
                "browsable",
            ],
            optional: false,
        },
        DetailSection {
            id: "access",
            title: "دسترسی",
            keys: &[
                "valid_users",
                "invalid_users",
                "valid_groups",
                "admin_users",
                "read_list",
                "write_list",
                "read_only",
                "writable",
                "writeable",
                "guest_ok",
                "public",
                "hosts_allow",
                "hosts_deny",
            ],
            optional: true,
        },
        DetailSection {
            id: "permissions",
            title: "مالکیت و مجوزها",
            keys: &[
                "owner",
                "group",
                "permissions",
                "create_mask",
                "directory_mask",
                "force_user",
                "force_group",
                "inherit_permissions",
            ],
            optional: true,
        },
        DetailSection {
            id: "timestamps",
            title: "زمان‌ها",
            keys: &["created_at", "updated_at"],
            optional: true,
        },
    ],
    comparison_priority: &[
        "name",
        "path",
        "full_path",
        "comment",
        "valid_users",
        "read_only",
        "writable",
        "browseable",
        "guest_ok",
    ],
    secondary_order: SecondaryOrder::Locale,
    excluded_keys: &["id"],
};

#[must_use]
pub fn build_samba_share_detail_values(raw: &Value) -> AttributeMap {
    normalize_record(raw, &OPTIONS)
}
