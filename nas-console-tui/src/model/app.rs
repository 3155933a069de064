//! 应用主状态结构

use std::time::{Duration, Instant};

use nas_console_core::DetailStore;

use super::{EntityPages, FocusPanel, ModalState, NavigationState, Page};
use crate::backend::BackendCommand;

/// 状态栏消息的显示时长
pub const TOAST_TTL: Duration = Duration::from_secs(4);

/// 状态栏消息级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Error,
}

/// 状态栏消息（toast）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub shown_at: Instant,
}

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 导航状态
    pub navigation: NavigationState,

    /// 当前页面
    pub current_page: Page,

    /// 状态栏消息
    pub status: Option<StatusMessage>,

    /// 后端地址（首页展示）
    pub backend_url: String,

    // === 各页面状态 ===
    /// 实体列表页面
    pub pages: EntityPages,
    /// 每个视图的激活 / 固定状态
    pub detail: DetailStore,

    /// 弹窗状态
    pub modal: ModalState,

    /// 待执行的后端命令，由主循环取出
    pub commands: Vec<BackendCommand>,
}

impl App {
    /// 创建新的应用实例
    pub fn new(backend_url: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            navigation: NavigationState::new(),
            current_page: Page::Home,
            status: None,
            backend_url: backend_url.into(),
            pages: EntityPages::new(),
            detail: DetailStore::new(),
            modal: ModalState::new(),
            commands: Vec::new(),
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.show_status(message.into(), StatusLevel::Info);
    }

    /// 设置错误消息
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.show_status(message.into(), StatusLevel::Error);
    }

    fn show_status(&mut self, text: String, level: StatusLevel) {
        self.status = Some(StatusMessage {
            text,
            level,
            shown_at: Instant::now(),
        });
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// 清除已过期的状态消息
    pub fn expire_status(&mut self, now: Instant) {
        if self
            .status
            .as_ref()
            .is_some_and(|s| now.duration_since(s.shown_at) >= TOAST_TTL)
        {
            self.status = None;
        }
    }

    /// 取出全部待执行命令
    pub fn take_commands(&mut self) -> Vec<BackendCommand> {
        std::mem::take(&mut self.commands)
    }
}
