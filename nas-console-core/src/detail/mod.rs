//! Detail / comparison view model
//!
//! - [`store`]: which entity is active and which are pinned, per view id
//! - [`value`]: normalized attribute maps and cell values
//! - [`layout`]: static per-entity layouts
//! - [`compare`]: key ordering and difference flags
//! - [`view`]: single-detail vs comparison view assembly

pub mod compare;
pub mod layout;
pub mod store;
pub mod value;
pub mod view;

pub use compare::{
    canonical, is_different, locale_compare, sort_attribute_keys, ComparisonRow, SecondaryOrder,
};
pub use layout::{DetailLayoutConfig, DetailSection};
pub use store::{DetailStore, DetailViewState};
pub use value::{
    AttributeEntry, AttributeMap, CellValue, NestedColumn, NestedDetailTable, PropertyToggle, NO,
    YES,
};
pub use view::{
    build_detail_view, ColumnBody, ColumnStatus, ComparisonColumn, ComparisonTable,
    DetailAction, DetailColumnInput, DetailRow, DetailView, SectionView, SingleBody,
    SingleDetail, EMPTY_PLACEHOLDER, MISSING_CELL,
};
