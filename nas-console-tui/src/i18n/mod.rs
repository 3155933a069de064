//! 国际化（i18n）模块
//!
//! 纯 Rust 结构体方案，编译期类型检查，零运行时开销。
//! 属性名和属性值来自 core 的规范化器，始终为波斯语；
//! 这里只翻译界面本身。

use std::sync::atomic::{AtomicUsize, Ordering};

mod en_us;
mod fa_ir;
pub mod keys;

pub use keys::*;

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// 波斯语（伊朗）
    #[default]
    FaIr,
    /// 英语（美国）
    EnUs,
}

impl Language {
    /// 获取语言的显示名称（使用该语言本身的文字）
    pub fn display_name(self) -> &'static str {
        match self {
            Language::FaIr => "فارسی",
            Language::EnUs => "English",
        }
    }

    /// 获取语言代码（BCP 47 标准）
    pub fn code(self) -> &'static str {
        match self {
            Language::FaIr => "fa-IR",
            Language::EnUs => "en-US",
        }
    }

    /// 从语言代码解析
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "fa-IR" | "fa" => Some(Language::FaIr),
            "en-US" | "en" => Some(Language::EnUs),
            _ => None,
        }
    }
}

/// 当前语言索引（原子操作，线程安全）
static CURRENT_LANGUAGE: AtomicUsize = AtomicUsize::new(0); // 0 = FaIr

/// 获取当前语言的翻译
pub fn t() -> &'static Translations {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => &en_us::TRANSLATIONS,
        _ => &fa_ir::TRANSLATIONS,
    }
}

/// 设置当前语言
pub fn set_language(lang: Language) {
    let index = match lang {
        Language::FaIr => 0,
        Language::EnUs => 1,
    };
    CURRENT_LANGUAGE.store(index, Ordering::Relaxed);
}

/// 获取当前语言
pub fn current_language() -> Language {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => Language::EnUs,
        _ => Language::FaIr,
    }
}
