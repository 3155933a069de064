//! Test helpers
//!
//! Provides an in-memory mock backend.

use std::collections::HashMap;

use async_trait::async_trait;
use nas_console_client::{ClientError, DashboardBackend, Result};
use serde_json::Value;
use tokio::sync::RwLock;

use crate::types::{EntityKind, PoolPropertyUpdate};

// ===== MockBackend =====

pub struct MockBackend {
    listings: RwLock<HashMap<EntityKind, Vec<Value>>>,
    updates: RwLock<Vec<(String, PoolPropertyUpdate)>>,
    /// When `Some`, every call fails with this error
    error: RwLock<Option<ClientError>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            listings: RwLock::new(HashMap::new()),
            updates: RwLock::new(Vec::new()),
            error: RwLock::new(None),
        }
    }

    pub async fn set_listing(&self, kind: EntityKind, records: Vec<Value>) {
        self.listings.write().await.insert(kind, records);
    }

    pub async fn set_error(&self, err: Option<ClientError>) {
        *self.error.write().await = err;
    }

    pub async fn updates(&self) -> Vec<(String, PoolPropertyUpdate)> {
        self.updates.read().await.clone()
    }
}

#[async_trait]
impl DashboardBackend for MockBackend {
    async fn list_entities(&self, kind: EntityKind) -> Result<Vec<Value>> {
        if let Some(ref err) = *self.error.read().await {
            return Err(err.clone());
        }
        Ok(self
            .listings
            .read()
            .await
            .get(&kind)
            .cloned()
            .unwrap_or_default())
    }

    async fn set_pool_property(&self, pool: &str, update: &PoolPropertyUpdate) -> Result<()> {
        if let Some(ref err) = *self.error.read().await {
            return Err(err.clone());
        }
        self.updates
            .write()
            .await
            .push((pool.to_string(), update.clone()));
        Ok(())
    }
}
