use std::collections::HashSet;

use serde::Serialize;
use serde_json::Value;

use nas_console_client::EntityKind;

use crate::detail::{AttributeMap, ColumnStatus, DetailColumnInput};
use crate::normalize::build_detail_values;

/// One row of an entity listing: the raw backend record plus the id and
/// title the detail views are keyed by.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityRecord {
    pub kind: EntityKind,
    /// Stable id used by the selection/pin store.
    pub id: String,
    /// Column / row heading.
    pub title: String,
    /// Untouched backend payload.
    pub raw: Value,
}

impl EntityRecord {
    /// Resolve id and title from a raw record.
    ///
    /// Falls back to the list index when none of the kind's id keys hold a
    /// scalar value.
    #[must_use]
    pub fn from_raw(kind: EntityKind, index: usize, raw: Value) -> Self {
        let id = first_scalar(&raw, id_keys(kind)).unwrap_or_else(|| index.to_string());
        let title = first_scalar(&raw, title_keys(kind)).unwrap_or_else(|| id.clone());
        Self {
            kind,
            id,
            title,
            raw,
        }
    }

    /// Normalized attributes of this record.
    #[must_use]
    pub fn detail_values(&self) -> AttributeMap {
        build_detail_values(self.kind, &self.raw)
    }

    /// This record as a ready detail column.
    #[must_use]
    pub fn detail_column(&self) -> DetailColumnInput {
        DetailColumnInput::new(
            self.id.clone(),
            self.title.clone(),
            ColumnStatus::Ready(self.detail_values()),
        )
    }

    /// Backend name of the entity (`name` attribute), used in mutation
    /// paths. Unlike [`Self::title`] it never falls back to an index.
    #[must_use]
    pub fn backend_name(&self) -> Option<String> {
        first_scalar(&self.raw, name_keys(self.kind))
    }

    /// Build records for a whole listing.
    ///
    /// Duplicate ids get a `-{index}` suffix so pinning one never pins both.
    #[must_use]
    pub fn from_list(kind: EntityKind, raws: Vec<Value>) -> Vec<Self> {
        let mut seen = HashSet::new();
        raws.into_iter()
            .enumerate()
            .map(|(index, raw)| {
                let mut record = Self::from_raw(kind, index, raw);
                if !seen.insert(record.id.clone()) {
                    record.id = format!("{}-{index}", record.id);
                    seen.insert(record.id.clone());
                }
                record
            })
            .collect()
    }
}

fn id_keys(kind: EntityKind) -> &'static [&'static str] {
    match kind {
        EntityKind::SambaShare => &["name", "share_name", "shareName", "path"],
        EntityKind::NfsShare => &["path", "export", "export_path", "name", "id"],
        EntityKind::SambaUser => &["username", "user", "name", "unix_username"],
        EntityKind::SnmpConfig => &["id", "name", "sys_name", "sysName", "community"],
        EntityKind::Pool => &["name", "pool_name", "poolName", "guid"],
        EntityKind::FileSystem => &["name", "dataset", "mountpoint", "path", "id"],
    }
}

fn title_keys(kind: EntityKind) -> &'static [&'static str] {
    match kind {
        EntityKind::SambaShare => &["name", "share_name", "shareName"],
        EntityKind::NfsShare => &["path", "export", "export_path", "name"],
        EntityKind::SambaUser => &["username", "user", "name", "full_name"],
        EntityKind::SnmpConfig => &["sys_name", "sysName", "name", "location", "id"],
        EntityKind::Pool => &["name", "pool_name", "poolName"],
        EntityKind::FileSystem => &["name", "dataset", "mountpoint", "path"],
    }
}

fn name_keys(kind: EntityKind) -> &'static [&'static str] {
    match kind {
        EntityKind::SambaShare => &["name", "share_name", "shareName"],
        EntityKind::SambaUser => &["username", "name"],
        EntityKind::Pool => &["name", "pool_name", "poolName"],
        EntityKind::NfsShare | EntityKind::SnmpConfig | EntityKind::FileSystem => &["name"],
    }
}

fn first_scalar(raw: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match raw.get(*key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nfs_record_keyed_by_path() {
        let record = EntityRecord::from_raw(
            EntityKind::NfsShare,
            0,
            json!({"path": "/srv/media", "clients": []}),
        );
        assert_eq!(record.id, "/srv/media");
        assert_eq!(record.title, "/srv/media");
    }

    #[test]
    fn falls_back_to_index() {
        let record = EntityRecord::from_raw(EntityKind::Pool, 3, json!({"size": 10}));
        assert_eq!(record.id, "3");
        assert_eq!(record.title, "3");
    }

    #[test]
    fn blank_id_is_skipped() {
        let record =
            EntityRecord::from_raw(EntityKind::SambaUser, 0, json!({"username": " ", "name": "bob"}));
        assert_eq!(record.id, "bob");
    }

    #[test]
    fn backend_name_does_not_fall_back() {
        let records = EntityRecord::from_list(
            EntityKind::Pool,
            vec![json!({"name": "tank"}), json!({"name": "tank"}), json!({"guid": "123"})],
        );
        assert_eq!(records[1].backend_name().as_deref(), Some("tank"));
        assert_eq!(records[2].title, "123");
        assert_eq!(records[2].backend_name(), None);
    }

    #[test]
    fn duplicate_ids_are_disambiguated() {
        let records = EntityRecord::from_list(
            EntityKind::SambaShare,
            vec![json!({"name": "docs"}), json!({"name": "docs"})],
        );
        assert_eq!(records[0].id, "docs");
        assert_eq!(records[1].id, "docs-1");
        assert_eq!(records[1].title, "docs");
    }
}
