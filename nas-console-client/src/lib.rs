//! # nas-console-client
//!
//! REST client for the NAS appliance management API.
//!
//! ## Endpoints
//!
//! | Entity | Endpoint |
//! |--------|----------|
//! | Samba shares | `GET /api/samba/shares` |
//! | NFS exports | `GET /api/nfs/shares` |
//! | Samba users | `GET /api/samba/users` |
//! | SNMP configuration | `GET /api/snmp/config` |
//! | Storage pools | `GET /api/storage/pools`, `PATCH /api/storage/pools/{name}/properties` |
//! | Filesystems | `GET /api/storage/filesystems` |
//!
//! Responses are accepted bare or wrapped in `{ data, ok?, error?, message? }`.
//! Error bodies are reduced to one message via [`extract_error_message`].
//!
//! ## Feature Flags
//!
//! - **`rustls`** *(default)*: Use rustls.
//! - **`native-tls`**: Use the platform's native TLS implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use nas_console_client::{ClientConfig, DashboardBackend, EntityKind, NasClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = NasClient::new(&ClientConfig::new("http://nas.local:8000"))?;
//!     for share in client.list_entities(EntityKind::NfsShare).await? {
//!         println!("{share}");
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod envelope;
mod error;
mod http_client;
mod traits;
mod types;
pub mod utils;

pub use client::{ClientConfig, DEFAULT_TIMEOUT, NasClient};
pub use envelope::{
    ApiEnvelope, decode_payload, extract_error_message, extract_error_message_from_text,
    into_records,
};
pub use error::{ClientError, Result};
pub use http_client::HttpUtils;
pub use traits::DashboardBackend;
pub use types::{EntityKind, PoolPropertyUpdate};
