//! 可复用 UI 组件

pub mod detail_panel;
pub mod modal;
pub mod navigation;
pub mod statusbar;
