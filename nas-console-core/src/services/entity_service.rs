//! Entity listing and pool mutation service

use std::sync::Arc;

use nas_console_client::DashboardBackend;

use crate::detail::DetailStore;
use crate::error::{CoreError, CoreResult};
use crate::normalize::POOL_TOGGLE_KEYS;
use crate::types::{EntityKind, EntityRecord, PoolPropertyUpdate};

/// Lists entities and applies the pool property mutation.
pub struct EntityService {
    backend: Arc<dyn DashboardBackend>,
}

impl EntityService {
    #[must_use]
    pub fn new(backend: Arc<dyn DashboardBackend>) -> Self {
        Self { backend }
    }

    /// Fetch one listing.
    pub async fn list(&self, kind: EntityKind) -> CoreResult<Vec<EntityRecord>> {
        match self.backend.list_entities(kind).await {
            Ok(raws) => Ok(EntityRecord::from_list(kind, raws)),
            Err(e) => {
                let err = CoreError::from(e);
                err.log(&format!("list {kind}"));
                Err(err)
            }
        }
    }

    /// Prune `kind`'s view against a fresh listing.
    pub fn prune_selection(store: &mut DetailStore, kind: EntityKind, records: &[EntityRecord]) {
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        store.prune(kind.view_id(), &ids);
    }

    /// Flip a boolean pool property.
    pub async fn set_pool_property(
        &self,
        pool: &str,
        property: &str,
        enabled: bool,
    ) -> CoreResult<()> {
        if pool.trim().is_empty() {
            return Err(CoreError::ValidationError("pool name is empty".to_string()));
        }
        if !POOL_TOGGLE_KEYS.contains(&property) {
            return Err(CoreError::ValidationError(format!(
                "property '{property}' cannot be toggled"
            )));
        }

        let update = PoolPropertyUpdate::new(property, enabled);
        self.backend
            .set_pool_property(pool, &update)
            .await
            .map_err(|e| {
                let err = CoreError::from(e);
                err.log(&format!("set {property} on pool {pool}"));
                err
            })
    }
}
