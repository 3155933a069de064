//! Util 层：基础设施和工具函数
//!
//! 与业务逻辑无关的基础设施代码：
//!     - terminal.rs   终端的初始化和恢复（raw mode + 备用屏幕）
//!     - text.rs       按显示宽度截断/填充文本
//!
//! 注意：无论 `app::run` 成功与否，main.rs 都必须调用 `restore_terminal`，
//!       否则终端会保持在原始模式。

mod terminal;
mod text;

pub use terminal::{init_terminal, restore_terminal, Term};
pub use text::{pad_to_width, truncate_to_width};
