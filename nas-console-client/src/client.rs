//! HTTP implementation of [`DashboardBackend`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method};
use serde::Serialize;
use serde_json::Value;

use crate::envelope::into_records;
use crate::error::{ClientError, Result};
use crate::http_client::HttpUtils;
use crate::traits::DashboardBackend;
use crate::types::{EntityKind, PoolPropertyUpdate};

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for [`NasClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL, e.g. `http://nas.local:8000`
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl ClientConfig {
    /// Settings with the default timeout.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// REST client for the appliance management API
pub struct NasClient {
    client: Client,
    base_url: String,
}

impl NasClient {
    /// Build a client; fails on an empty or non-HTTP base URL.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ClientError::InvalidConfig {
                detail: format!("base URL must start with http:// or https://: '{base_url}'"),
            });
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::InvalidConfig {
                detail: e.to_string(),
            })?;

        Ok(Self { client, base_url })
    }

    /// Base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Send a JSON body and return the unwrapped payload.
    pub async fn send_json<B>(&self, method: Method, path: &str, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(body).map_err(|e| ClientError::SerializationError {
            detail: e.to_string(),
        })?;
        let request = self
            .client
            .request(method.clone(), self.url(path))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body);
        let (status, text) = HttpUtils::execute_request(request, method.as_str(), path).await?;
        HttpUtils::into_payload(status, &text, path)
    }
}

#[async_trait]
impl DashboardBackend for NasClient {
    async fn list_entities(&self, kind: EntityKind) -> Result<Vec<Value>> {
        let request = self.client.get(self.url(kind.path()));
        let (status, text) = HttpUtils::execute_request(request, "GET", kind.path()).await?;
        let records = listing_records(kind, status, &text)?;
        log::debug!("[{kind}] fetched {} record(s)", records.len());
        Ok(records)
    }

    async fn set_pool_property(&self, pool: &str, update: &PoolPropertyUpdate) -> Result<()> {
        let path = pool_properties_path(pool);
        self.send_json(Method::PATCH, &path, update).await?;
        log::info!("[pool] {pool}: {} = {}", update.property, update.value);
        Ok(())
    }
}

/// Records of a finished listing exchange.
fn listing_records(kind: EntityKind, status: u16, text: &str) -> Result<Vec<Value>> {
    let payload = HttpUtils::into_payload(status, text, kind.path())?;
    Ok(into_records(kind, payload))
}

fn pool_properties_path(pool: &str) -> String {
    format!(
        "{}/{}/properties",
        EntityKind::Pool.path(),
        urlencoding::encode(pool)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_http_base_url() {
        let result = NasClient::new(&ClientConfig::new("nas.local:8000"));
        assert!(matches!(result, Err(ClientError::InvalidConfig { .. })));
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = NasClient::new(&ClientConfig::new("http://nas.local:8000/")).unwrap();
        assert_eq!(client.base_url(), "http://nas.local:8000");
        assert_eq!(
            client.url("/api/nfs/shares"),
            "http://nas.local:8000/api/nfs/shares"
        );
    }

    #[test]
    fn pool_name_is_percent_encoded() {
        assert_eq!(
            pool_properties_path("tank/data set"),
            "/api/storage/pools/tank%2Fdata%20set/properties"
        );
    }

    #[test]
    fn listing_unwraps_envelope_and_collection() {
        let body = r#"{"ok": true, "data": {"pools": [{"name": "tank"}, {"name": "backup"}]}}"#;
        let records = listing_records(EntityKind::Pool, 200, body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["name"], "tank");
    }

    #[test]
    fn listing_failure_envelope_is_an_error_not_a_record() {
        let body = r#"{"ok": false, "error": "pool busy", "message": {"code": 7}}"#;
        let err = listing_records(EntityKind::Pool, 200, body).unwrap_err();
        assert_eq!(
            err,
            ClientError::Backend {
                message: "pool busy".to_string()
            }
        );
    }

    #[test]
    fn listing_http_error_keeps_status() {
        let err = listing_records(EntityKind::SambaUser, 502, "<html>bad gateway</html>")
            .unwrap_err();
        assert_eq!(
            err,
            ClientError::Http {
                status: 502,
                message: "HTTP 502".to_string()
            }
        );
    }
}
