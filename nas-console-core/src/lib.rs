//! NAS Console Core Library
//!
//! Domain logic of the NAS console, independent of any front end:
//! - Selection/pin store per detail view ([`detail::DetailStore`])
//! - Attribute normalizers per entity kind ([`normalize`])
//! - Single-detail and comparison view model ([`detail::build_detail_view`])
//! - Entity listing and pool property mutation ([`services::EntityService`])
//!
//! The backend is reached through the [`nas_console_client::DashboardBackend`]
//! trait, so everything here can be driven by a mock in tests.

pub mod detail;
pub mod error;
pub mod normalize;
pub mod services;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use detail::{build_detail_view, DetailStore, DetailView};
pub use error::{CoreError, CoreResult};
pub use normalize::{build_detail_values, layout_for};
pub use services::EntityService;
pub use types::{EntityKind, EntityRecord};
