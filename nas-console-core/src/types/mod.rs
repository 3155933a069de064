//! 类型定义模块

mod record;

pub use record::EntityRecord;

// Re-export client 库的公共类型
pub use nas_console_client::{EntityKind, PoolPropertyUpdate};
