//! SNMP agent configuration.

use serde_json::Value;

use super::labels::label_for;
use super::{insert_unhandled, normalize_record, pick, scalar_text, NormalizeOptions};
use crate::detail::{
    AttributeMap, CellValue, DetailLayoutConfig, DetailSection, NestedColumn, NestedDetailTable,
    SecondaryOrder,
};

const V3_KEYS: &[&str] = &["v3_users", "users", "snmpv3_users"];

const SECRET_KEYS: &[&str] = &[
    "auth_password",
    "auth_passphrase",
    "priv_password",
    "priv_passphrase",
    "password",
];

const OPTIONS: NormalizeOptions = NormalizeOptions {
    excluded_keys: SECRET_KEYS,
    custom_keys: V3_KEYS,
    flatten_keys: &["system", "agent"],
    boolean_keys: &["enabled", "running", "active"],
    toggle_keys: &[],
    byte_keys: &[],
};

const V3_USER_OPTIONS: NormalizeOptions = NormalizeOptions {
    excluded_keys: SECRET_KEYS,
    custom_keys: &[],
    flatten_keys: &[],
    boolean_keys: &[],
    toggle_keys: &[],
    byte_keys: &[],
};

pub const SNMP_LAYOUT: DetailLayoutConfig = DetailLayoutConfig {
    sections: &[
        DetailSection {
            id: "system",
            title: "اطلاعات سیستم",
            keys: &[
                "sys_name",
                "sys_location",
                "sys_contact",
                "sys_descr",
                "location",
                "contact",
            ],
            optional: false,
        },
        DetailSection {
            id: "agent",
            title: "عامل SNMP",
            keys: &[
                "enabled",
                "running",
                "service_status",
                "port",
                "listen_address",
                "agent_address",
                "version",
                "versions",
            ],
            optional: true,
        },
        DetailSection {
            id: "access",
            title: "دسترسی",
            keys: &[
                "community",
                "ro_community",
                "rw_community",
                "allowed_hosts",
                "trap_host",
                "trap_community",
            ],
            optional: true,
        },
        DetailSection {
            id: "v3",
            title: "کاربران SNMPv3",
            keys: &["v3_users"],
            optional: true,
        },
    ],
    comparison_priority: &["sys_name", "enabled", "port", "community", "versions", "allowed_hosts"],
    secondary_order: SecondaryOrder::Locale,
    excluded_keys: SECRET_KEYS,
};

#[must_use]
pub fn build_snmp_detail_values(raw: &Value) -> AttributeMap {
    let mut map = normalize_record(raw, &OPTIONS);
    match v3_user_table(raw) {
        Some(table) => map.insert("v3_users", label_for("v3_users"), CellValue::Nested(table)),
        None => insert_unhandled(&mut map, raw, V3_KEYS, &OPTIONS),
    }
    map
}

fn v3_user_table(raw: &Value) -> Option<NestedDetailTable> {
    let Some(Value::Array(users)) = pick(raw, V3_KEYS) else {
        return None;
    };
    let columns: Vec<NestedColumn> = users
        .iter()
        .enumerate()
        .filter(|(_, user)| user.is_object())
        .map(|(index, user)| {
            let name = ["username", "name", "user"]
                .iter()
                .find_map(|k| user.get(*k).and_then(scalar_text))
                .unwrap_or_else(|| (index + 1).to_string());
            NestedColumn {
                id: name.clone(),
                title: name,
                values: normalize_record(user, &V3_USER_OPTIONS),
            }
        })
        .collect();
    if columns.is_empty() {
        return None;
    }
    Some(NestedDetailTable::new(
        columns,
        &["username", "security_level", "auth_protocol", "priv_protocol", "access"],
        SecondaryOrder::Locale,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn v3_users_nested_without_secrets() {
        let map = build_snmp_detail_values(&json!({
            "sys_name": "nas01",
            "community": "public",
            "enabled": "1",
            "v3_users": [
                {"username": "monitor", "security_level": "authPriv", "auth_password": "s3cret"},
                {"username": "ops", "security_level": "authNoPriv"},
            ],
        }));
        assert_eq!(map.get("enabled").unwrap().value, CellValue::text("بله"));
        let CellValue::Nested(table) = &map.get("v3_users").unwrap().value else {
            panic!("expected nested table");
        };
        assert_eq!(table.columns.len(), 2);
        assert!(table.columns[0].values.get("auth_password").is_none());
        let rows = table.compare();
        assert_eq!(rows[0].key, "username");
        assert!(rows.iter().all(|r| r.key != "auth_password"));
    }

    #[test]
    fn system_block_is_lifted() {
        let map = build_snmp_detail_values(&json!({
            "system": {"sys_location": "rack 4", "sys_contact": "ops@example.com"},
        }));
        assert_eq!(
            map.get("sys_location").unwrap().value,
            CellValue::text("rack 4")
        );
    }

    #[test]
    fn plain_user_list_is_kept_as_text() {
        let map = build_snmp_detail_values(&json!({"community": "public", "users": "admin"}));
        let keys: Vec<_> = map.keys().collect();
        assert_eq!(keys, vec!["community", "users"]);
        assert_eq!(map.get("users").unwrap().value, CellValue::text("admin"));

        let map = build_snmp_detail_values(&json!({"v3_users": ["monitor", "ops"]}));
        assert_eq!(map.get("v3_users").unwrap().value, CellValue::text("monitor, ops"));
    }
}
