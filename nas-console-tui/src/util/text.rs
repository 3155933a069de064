//! 显示宽度相关的文本工具
//!
//! 波斯语标签混有宽字符和零宽字符（ZWNJ），截断按显示列宽计算，
//! 而不是字节数或字符数。

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// 把 `text` 截断到最多 `max_width` 列，有截断时以 `…` 结尾
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push(ELLIPSIS);
    out
}

/// 用空格把 `text` 补齐到 `width` 列
pub fn pad_to_width(text: &str, width: usize) -> String {
    let current = text.width();
    if current >= width {
        text.to_string()
    } else {
        format!("{text}{}", " ".repeat(width - current))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_untouched() {
        assert_eq!(truncate_to_width("tank", 10), "tank");
    }

    #[test]
    fn long_text_gets_ellipsis() {
        let out = truncate_to_width("/mnt/tank/media/archive", 10);
        assert_eq!(out, "/mnt/tank…");
        assert_eq!(out.width(), 10);
    }

    #[test]
    fn wide_characters_count_double() {
        assert_eq!(truncate_to_width("存储池名称", 5), "存储…");
    }

    #[test]
    fn zwnj_takes_no_column() {
        let label = "ویژگی‌ها";
        assert_eq!(truncate_to_width(label, label.width()), label);
        assert_eq!(pad_to_width(label, label.width() + 2).width(), label.width() + 2);
    }
}
