//!
//! src/view/mod.rs
//! View 层：只读 Model，渲染到 ratatui Frame
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 标题栏 / 导航 / 内容 / 状态栏 / 弹窗
//!         mod components;     // 可复用组件（含详情面板）
//!         mod pages;          // 首页、实体页
//!         pub mod theme;      // 颜色与样式
//!

mod components;
mod layout;
mod pages;
pub mod theme;

use nas_console_core::EntityKind;

use crate::i18n::t;

pub use layout::render;

/// 实体类型的导航 / 页面标题
pub(crate) fn kind_title(kind: EntityKind) -> &'static str {
    let nav = &t().nav;
    match kind {
        EntityKind::SambaShare => nav.samba_shares,
        EntityKind::NfsShare => nav.nfs_shares,
        EntityKind::SambaUser => nav.samba_users,
        EntityKind::SnmpConfig => nav.snmp,
        EntityKind::Pool => nav.pools,
        EntityKind::FileSystem => nav.file_systems,
    }
}
