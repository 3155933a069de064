//! 主题和样式定义
//!
//! 主题在启动时由配置决定，渲染代码通过 [`colors`] 读取当前调色板。

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU8, Ordering};

static CURRENT_THEME: AtomicU8 = AtomicU8::new(Theme::Dark as u8);

/// 主题枚举（配置文件中为 `"dark"` / `"light"`）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Theme {
    #[default]
    Dark = 0,
    Light = 1,
}

impl Theme {
    fn from_u8(value: u8) -> Self {
        if value == Theme::Light as u8 {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    /// 该主题的调色板
    pub const fn palette(self) -> ThemeColors {
        match self {
            Theme::Dark => ThemeColors::DARK,
            Theme::Light => ThemeColors::LIGHT,
        }
    }
}

/// 设置当前主题
pub fn set_theme(theme: Theme) {
    CURRENT_THEME.store(theme as u8, Ordering::Relaxed);
}

/// 当前主题的调色板
pub fn colors() -> ThemeColors {
    Theme::from_u8(CURRENT_THEME.load(Ordering::Relaxed)).palette()
}

/// 调色板
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    /// 标题栏、状态栏背景与分区标题
    pub highlight: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub muted: Color,
    /// 对比表中取值不同的行
    pub diff: Color,
}

impl ThemeColors {
    pub const DARK: Self = Self {
        fg: Color::Rgb(220, 223, 228),
        border: Color::Rgb(70, 76, 84),
        border_focused: Color::Rgb(64, 186, 170),
        highlight: Color::Rgb(38, 110, 120),
        selected_bg: Color::Rgb(44, 72, 84),
        selected_fg: Color::White,
        success: Color::Rgb(126, 198, 120),
        warning: Color::Rgb(229, 192, 123),
        error: Color::Rgb(232, 110, 110),
        muted: Color::Rgb(132, 138, 146),
        diff: Color::Rgb(240, 170, 90),
    };

    pub const LIGHT: Self = Self {
        fg: Color::Rgb(40, 44, 52),
        border: Color::Rgb(196, 200, 206),
        border_focused: Color::Rgb(0, 128, 118),
        highlight: Color::Rgb(0, 110, 120),
        selected_bg: Color::Rgb(206, 236, 232),
        selected_fg: Color::Black,
        success: Color::Rgb(40, 130, 60),
        warning: Color::Rgb(170, 120, 0),
        error: Color::Rgb(200, 40, 50),
        muted: Color::Rgb(120, 124, 130),
        diff: Color::Rgb(180, 90, 0),
    };
}

/// 常用样式
pub struct Styles;

impl Styles {
    /// 面板边框（按焦点着色）
    pub fn border(focused: bool) -> Style {
        let c = colors();
        Style::default().fg(if focused { c.border_focused } else { c.border })
    }

    pub fn selected() -> Style {
        let c = colors();
        Style::default()
            .bg(c.selected_bg)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title() -> Style {
        Style::default().fg(colors().fg).add_modifier(Modifier::BOLD)
    }

    pub fn statusbar() -> Style {
        Style::default().bg(colors().highlight).fg(Color::White)
    }

    /// 状态栏里的按键
    pub fn hint_key() -> Style {
        Style::default()
            .fg(colors().warning)
            .add_modifier(Modifier::BOLD)
    }

    /// 状态栏里的按键说明
    pub fn hint_desc() -> Style {
        Style::default().fg(Color::Rgb(230, 232, 235))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_round_trips_through_atomic() {
        for theme in [Theme::Light, Theme::Dark] {
            set_theme(theme);
            assert_eq!(colors(), theme.palette());
        }
    }

    #[test]
    fn config_spelling() {
        let theme: Theme = serde_json::from_str("\"light\"").unwrap_or_default();
        assert_eq!(theme, Theme::Light);
    }
}
