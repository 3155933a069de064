//! Samba user accounts (`pdbedit -Lv` fields).

use serde_json::Value;

use super::labels::label_for;
use super::{insert_unhandled, normalize_record, pick, NormalizeOptions};
use crate::detail::{AttributeMap, CellValue, DetailLayoutConfig, DetailSection, SecondaryOrder};

const FLAG_KEYS: &[&str] = &["account_flags", "acct_flags"];

const OPTIONS: NormalizeOptions = NormalizeOptions {
    excluded_keys: &[
        "password",
        "passwd",
        "nt_hash",
        "lm_hash",
        "nt_passwd",
        "lm_passwd",
        "nt_password_hash",
        "lm_password_hash",
    ],
    custom_keys: FLAG_KEYS,
    flatten_keys: &["details", "info"],
    boolean_keys: &["enabled", "disabled", "locked"],
    toggle_keys: &[],
    byte_keys: &[],
};

pub const SAMBA_USER_LAYOUT: DetailLayoutConfig = DetailLayoutConfig {
    sections: &[
        DetailSection {
            id: "identity",
            title: "هویت",
            keys: &[
                "username",
                "unix_username",
                "nt_username",
                "full_name",
                "uid",
                "gid",
                "user_sid",
                "primary_group_sid",
                "group_sid",
                "domain",
            ],
            optional: false,
        },
        DetailSection {
            id: "account",
            title: "وضعیت حساب",
            keys: &["account_flags", "account_desc", "enabled", "disabled", "locked"],
            optional: true,
        },
        DetailSection {
            id: "profile",
            title: "پروفایل",
            keys: &[
                "home_directory",
                "home_dir_drive",
                "home_drive",
                "logon_script",
                "profile_path",
                "workstations",
                "munged_dial",
            ],
            optional: true,
        },
        DetailSection {
            id: "times",
            title: "زمان‌ها و گذرواژه",
            keys: &[
                "logon_time",
                "logoff_time",
                "kickoff_time",
                "password_last_set",
                "password_can_change",
                "password_must_change",
                "last_bad_password",
                "bad_password_count",
                "logon_hours",
            ],
            optional: true,
        },
    ],
    comparison_priority: &[
        "username",
        "unix_username",
        "full_name",
        "uid",
        "account_flags",
        "password_last_set",
        "logon_time",
    ],
    secondary_order: SecondaryOrder::Locale,
    excluded_keys: &["password", "nt_hash", "lm_hash"],
};

/// Samba account control bits.
const ACCOUNT_FLAGS: &[(char, &str)] = &[
    ('U', "حساب کاربری عادی"),
    ('D', "غیرفعال"),
    ('L', "قفل‌شده"),
    ('N', "بدون نیاز به گذرواژه"),
    ('X', "گذرواژه بدون انقضا"),
    ('H', "نیازمند پوشه خانگی"),
    ('T', "حساب تکراری موقت"),
    ('M', "کاربر ورود MNS"),
    ('W', "حساب اعتماد ایستگاه کاری"),
    ('S', "حساب اعتماد سرور"),
    ('I', "حساب اعتماد دامنه"),
];

/// Decode `[UX         ]`-style account flags. Unknown letters are kept.
#[must_use]
pub fn decode_account_flags(flags: &str) -> Vec<String> {
    flags
        .trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| {
            ACCOUNT_FLAGS
                .iter()
                .find(|(flag, _)| *flag == c.to_ascii_uppercase())
                .map_or_else(|| c.to_string(), |(_, label)| (*label).to_string())
        })
        .collect()
}

#[must_use]
pub fn build_samba_user_detail_values(raw: &Value) -> AttributeMap {
    let mut map = normalize_record(raw, &OPTIONS);

    if let Some(Value::String(flags)) = pick(raw, FLAG_KEYS) {
        let decoded = decode_account_flags(flags);
        let text = if decoded.is_empty() {
            flags.trim().to_string()
        } else {
            decoded.join(", ")
        };
        map.insert("account_flags", label_for("account_flags"), CellValue::Text(text));
    } else {
        insert_unhandled(&mut map, raw, FLAG_KEYS, &OPTIONS);
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::format::NEVER;
    use serde_json::json;

    #[test]
    fn pdbedit_fields() {
        let map = build_samba_user_detail_values(&json!({
            "Unix username": "alice",
            "Account Flags": "[UX         ]",
            "Logon time": 0,
            "Kickoff time": "never",
            "Password last set": 1_700_000_000,
            "NT hash": "8846F7EAEE8FB117AD06BDD830B7586C",
        }));
        assert_eq!(
            map.get("unix_username").unwrap().value,
            CellValue::text("alice")
        );
        assert_eq!(
            map.get("account_flags").unwrap().value,
            CellValue::text("حساب کاربری عادی, گذرواژه بدون انقضا")
        );
        assert_eq!(map.get("kickoff_time").unwrap().value, CellValue::text(NEVER));
        assert_eq!(
            map.get("password_last_set").unwrap().value,
            CellValue::text("1402/08/24 01:43:20")
        );
        assert!(!map.contains_key("nt_hash"));
    }

    #[test]
    fn unknown_flag_letters_kept() {
        assert_eq!(decode_account_flags("[DZ]"), vec!["غیرفعال", "Z"]);
        assert!(decode_account_flags("[           ]").is_empty());
    }

    #[test]
    fn non_string_flags_are_kept() {
        let map = build_samba_user_detail_values(&json!({
            "username": "bob",
            "acct_flags": ["U", "X"],
        }));
        assert_eq!(map.get("acct_flags").unwrap().value, CellValue::text("U, X"));
    }
}
