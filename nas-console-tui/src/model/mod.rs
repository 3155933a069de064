//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 这一层只包含数据结构和简单的状态方法，所有状态变更都通过 Update 层触发。
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（Navigation / Content）
//!         mod navigation;     // 导航栏状态
//!         mod page;           // 页面路由状态
//!         pub mod state;      // 页面数据状态（实体列表、弹窗）
//!
//!     Page 只标识当前位置（Home / Entities(kind)）；
//!     EntityPageState 保存该页的列表、光标与请求状态；
//!     激活 / 固定的实体 id 放在 `App::detail`（nas-console-core 的 DetailStore），
//!     按 `EntityKind::view_id()` 区分视图。
//!
//! 数据流：
//!     用户按 p（焦点在内容区）
//!         ↓
//!     event/handler.rs 返回 Content(TogglePin)
//!         ↓
//!     update/content.rs 调用 DetailAction::TogglePin(id).apply(&mut app.detail, view_id)
//!         ↓
//!     view/components/detail_panel.rs 调用 build_detail_view，渲染单项或对比视图
//!

mod app;
mod focus;
mod navigation;
mod page;
pub mod state;

pub use app::{App, StatusLevel};
pub use focus::FocusPanel;
pub use navigation::{NavItemId, NavigationState};
pub use page::Page;
pub use state::{EntityPageState, EntityPages, Modal, ModalState, QueryState};
