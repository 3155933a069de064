//!
//! src/event/mod.rs
//! Event 层：终端事件 → AppMessage
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 轮询与按键翻译
//!         mod keymap;         // 默认快捷键
//!
//!     按键优先级：弹窗 > 全局快捷键 > 当前焦点面板。
//!     Event 层只读取 Model，不修改它。
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
