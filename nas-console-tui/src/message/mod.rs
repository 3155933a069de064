//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁，所有用户操作和后端结果都通过 Message 表达。
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // AppMessage 主消息
//!         mod content;        // 内容面板子消息（光标、固定）
//!         mod modal;          // 弹窗子消息
//!         mod navigation;     // 导航栏子消息
//!
//!     两个来源：
//!         - event/handler.rs 把按键翻译成 AppMessage
//!         - app.rs 把后端 channel 收到的 BackendEvent 包装成 AppMessage::Backend
//!

mod app;
mod content;
mod modal;
mod navigation;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;
