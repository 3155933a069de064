//! 快捷键配置

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::key(KeyCode::Char('?'));
    pub const REFRESH: KeyBinding = KeyBinding::alt(KeyCode::Char('r'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // 面板切换
    pub const FOCUS_SWITCH: KeyBinding = KeyBinding::key(KeyCode::Tab);
    pub const FOCUS_LEFT: KeyBinding = KeyBinding::key(KeyCode::Left);
    pub const FOCUS_RIGHT: KeyBinding = KeyBinding::key(KeyCode::Right);

    // 选择 / 固定
    pub const PIN: KeyBinding = KeyBinding::key(KeyCode::Char('p'));
    pub const UNPIN: KeyBinding = KeyBinding::key(KeyCode::Char('x'));
    pub const CLEAR_PINS: KeyBinding = KeyBinding::key(KeyCode::Char('c'));

    // 对比表列
    pub const COLUMN_PREV: KeyBinding = KeyBinding::key(KeyCode::Char('['));
    pub const COLUMN_NEXT: KeyBinding = KeyBinding::key(KeyCode::Char(']'));
    pub const COLUMN_ACTION: KeyBinding = KeyBinding::key(KeyCode::Char('d'));

    // 存储池
    pub const POOL_TOGGLES: KeyBinding = KeyBinding::key(KeyCode::Char('t'));
}
