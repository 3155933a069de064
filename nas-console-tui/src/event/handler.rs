//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::{App, Modal};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 窗口大小改变时下一轮自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，避免 Windows 终端上的重复按键
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    // 全局快捷键
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }
    if DefaultKeymap::FOCUS_SWITCH.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    if app.focus.is_navigation() {
        if DefaultKeymap::FOCUS_RIGHT.matches(&key) {
            return AppMessage::ToggleFocus;
        }
        handle_navigation_keys(key)
    } else {
        if DefaultKeymap::FOCUS_LEFT.matches(&key) {
            return AppMessage::ToggleFocus;
        }
        handle_content_keys(key, app)
    }
}

/// 处理导航面板的按键
fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Navigation(NavigationMessage::SelectNext),
        KeyCode::Enter => AppMessage::Navigation(NavigationMessage::Confirm),
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

/// 处理内容面板的按键（首页没有可操作的内容）
fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    if app.current_page.entity_kind().is_none() {
        return AppMessage::Noop;
    }

    if DefaultKeymap::PIN.matches(&key) {
        return AppMessage::Content(ContentMessage::TogglePin);
    }
    if DefaultKeymap::UNPIN.matches(&key) {
        return AppMessage::Content(ContentMessage::Unpin);
    }
    if DefaultKeymap::CLEAR_PINS.matches(&key) {
        return AppMessage::Content(ContentMessage::ClearPins);
    }
    if DefaultKeymap::POOL_TOGGLES.matches(&key) {
        return AppMessage::Content(ContentMessage::ShowToggles);
    }
    if DefaultKeymap::COLUMN_PREV.matches(&key) {
        return AppMessage::Content(ContentMessage::PreviousColumn);
    }
    if DefaultKeymap::COLUMN_NEXT.matches(&key) {
        return AppMessage::Content(ContentMessage::NextColumn);
    }
    if DefaultKeymap::COLUMN_ACTION.matches(&key) {
        return AppMessage::Content(ContentMessage::ColumnAction);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        // Enter: 与 p 相同
        KeyCode::Enter => AppMessage::Content(ContentMessage::TogglePin),
        _ => AppMessage::Noop,
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    // Esc 和 Ctrl+C 始终可以关闭弹窗
    if DefaultKeymap::BACK.matches(&key) || DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Modal(ModalMessage::Close);
    }

    match app.modal.active {
        Some(Modal::PoolToggles { .. }) => match key.code {
            KeyCode::Up | KeyCode::Char('k') => AppMessage::Modal(ModalMessage::SelectPrevious),
            KeyCode::Down | KeyCode::Char('j') => AppMessage::Modal(ModalMessage::SelectNext),
            KeyCode::Enter | KeyCode::Char(' ') => AppMessage::Modal(ModalMessage::Confirm),
            _ => AppMessage::Noop,
        },
        // 帮助弹窗只响应关闭按键
        Some(Modal::Help) => match key.code {
            KeyCode::Enter | KeyCode::Char('?') | KeyCode::Char('q') => {
                AppMessage::Modal(ModalMessage::Close)
            }
            _ => AppMessage::Noop,
        },
        None => AppMessage::Noop,
    }
}
