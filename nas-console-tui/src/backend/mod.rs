//! Backend 层：业务服务
//!
//! Backend 层与 UI 完全解耦。Update 层只把 [`BackendCommand`] 放进
//! `App::commands` 队列；主循环取出后交给 [`CoreService`] 在 tokio runtime
//! 上执行，结果以 [`BackendEvent`] 经 channel 回到主循环，再作为
//! `AppMessage::Backend` 交给 Update 层。
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置文件（JSON）+ 环境变量覆盖
//!         mod core_service;       // 核心服务入口（EntityService + runtime）
//!
//! 数据流：
//!     用户按 Alt+r
//!         ↓
//!     Update 层：page.begin_fetch() → commands.push(Fetch { kind, seq })
//!         ↓
//!     app.rs：backend.dispatch(command)
//!         ↓
//!     CoreService → EntityService::list → NasClient（HTTP）
//!         ↓
//!     BackendEvent::Fetched { kind, seq, result }
//!         ↓
//!     Update 层：只接受最新 seq 的结果，修剪选择状态
//!         ↓
//!     View 层重新渲染

mod config_service;
mod core_service;

pub use config_service::{AppConfig, ConfigService, JsonConfigService, API_URL_ENV};
pub use core_service::{BackendCommand, BackendEvent, CoreService};
