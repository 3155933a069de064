use serde::{Deserialize, Serialize};

// ============ Entity kinds ============

/// The kinds of entity the appliance API exposes as listings.
///
/// Each kind maps to one collection endpoint and one detail view id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Samba (SMB/CIFS) share.
    SambaShare,
    /// NFS export.
    NfsShare,
    /// Samba user account.
    SambaUser,
    /// SNMP agent configuration.
    SnmpConfig,
    /// Storage pool (ZFS-style).
    Pool,
    /// Mounted filesystem.
    FileSystem,
}

impl EntityKind {
    /// All kinds, in navigation order.
    pub const ALL: [EntityKind; 6] = [
        EntityKind::SambaShare,
        EntityKind::NfsShare,
        EntityKind::SambaUser,
        EntityKind::SnmpConfig,
        EntityKind::Pool,
        EntityKind::FileSystem,
    ];

    /// Stable identifier, used in logs and config.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SambaShare => "samba_share",
            Self::NfsShare => "nfs_share",
            Self::SambaUser => "samba_user",
            Self::SnmpConfig => "snmp_config",
            Self::Pool => "pool",
            Self::FileSystem => "file_system",
        }
    }

    /// Collection endpoint, relative to the API base URL.
    #[must_use]
    pub fn path(&self) -> &'static str {
        match self {
            Self::SambaShare => "/api/samba/shares",
            Self::NfsShare => "/api/nfs/shares",
            Self::SambaUser => "/api/samba/users",
            Self::SnmpConfig => "/api/snmp/config",
            Self::Pool => "/api/storage/pools",
            Self::FileSystem => "/api/storage/filesystems",
        }
    }

    /// Detail view id scoping the selection/pin state of this kind's page.
    #[must_use]
    pub fn view_id(&self) -> &'static str {
        match self {
            Self::SambaShare => "samba-shares",
            Self::NfsShare => "nfs-shares",
            Self::SambaUser => "samba-users",
            Self::SnmpConfig => "snmp-info",
            Self::Pool => "storage-pools",
            Self::FileSystem => "file-systems",
        }
    }

    /// Keys under which a wrapped listing may hide its array
    /// (`{ "shares": [...] }` instead of a bare array).
    #[must_use]
    pub fn collection_keys(&self) -> &'static [&'static str] {
        match self {
            Self::SambaShare | Self::NfsShare => &["shares", "items", "results"],
            Self::SambaUser => &["users", "items", "results"],
            Self::SnmpConfig => &["configs", "items", "results"],
            Self::Pool => &["pools", "items", "results"],
            Self::FileSystem => &["filesystems", "file_systems", "items", "results"],
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============ Mutations ============

/// Request body for flipping a boolean pool property (`autotrim`, `autoexpand`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolPropertyUpdate {
    /// Property name as the backend spells it.
    pub property: String,
    /// Backend value, `"on"` or `"off"`.
    pub value: String,
}

impl PoolPropertyUpdate {
    /// Build an update from a boolean.
    #[must_use]
    pub fn new(property: impl Into<String>, enabled: bool) -> Self {
        Self {
            property: property.into(),
            value: if enabled { "on" } else { "off" }.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_ids_are_unique() {
        let mut ids: Vec<_> = EntityKind::ALL.iter().map(EntityKind::view_id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), EntityKind::ALL.len());
    }

    #[test]
    fn pool_property_update_uses_on_off() {
        let update = PoolPropertyUpdate::new("autotrim", true);
        assert_eq!(update.value, "on");
        let json = serde_json::to_value(PoolPropertyUpdate::new("autotrim", false)).unwrap();
        assert_eq!(json, serde_json::json!({"property": "autotrim", "value": "off"}));
    }
}
