use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::types::{EntityKind, PoolPropertyUpdate};

/// Backend API Trait
///
/// Implementations:
/// - [`NasClient`](crate::NasClient): the appliance REST API over HTTP
/// - test doubles in downstream crates
#[async_trait]
pub trait DashboardBackend: Send + Sync {
    /// Fetch every record of one entity kind.
    ///
    /// Records are returned as raw JSON objects; the caller owns their
    /// interpretation.
    async fn list_entities(&self, kind: EntityKind) -> Result<Vec<Value>>;

    /// Apply a boolean pool property change.
    ///
    /// # Arguments
    /// * `pool` - pool name
    /// * `update` - property and new value
    async fn set_pool_property(&self, pool: &str, update: &PoolPropertyUpdate) -> Result<()>;
}
