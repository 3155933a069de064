//! 弹窗渲染

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use nas_console_core::detail::PropertyToggle;
use nas_console_core::normalize::labels::label_for;

use crate::i18n::t;
use crate::model::{App, Modal};
use crate::view::theme::{colors, Styles};

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Help => render_help(frame),
        Modal::PoolToggles {
            pool,
            toggles,
            selected,
        } => render_pool_toggles(frame, pool, toggles, *selected),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(true))
}

fn render_help(frame: &mut Frame) {
    let texts = t();
    let lines_src = texts.modal.help_lines;
    let height = u16::try_from(lines_src.len()).unwrap_or(u16::MAX).saturating_add(4);
    let area = centered_rect(56, height, frame.area());
    frame.render_widget(Clear, area);

    let mut lines = vec![Line::from("")];
    lines.extend(lines_src.iter().map(|(key, desc)| {
        Line::from(vec![
            Span::styled(format!("  {key:<14}"), Styles::hint_key()),
            Span::raw(*desc),
        ])
    }));

    let paragraph = Paragraph::new(lines).block(modal_block(texts.modal.help_title));
    frame.render_widget(paragraph, area);
}

fn render_pool_toggles(frame: &mut Frame, pool: &str, toggles: &[PropertyToggle], selected: usize) {
    let texts = t();
    let c = colors();
    let rows = toggles.len().max(1);
    let height = u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(4);
    let area = centered_rect(48, height, frame.area());
    frame.render_widget(Clear, area);

    let mut lines = vec![Line::from("")];
    if toggles.is_empty() {
        lines.push(Line::styled(
            format!("  {}", texts.modal.no_toggles),
            Style::default().fg(c.muted),
        ));
    }
    for (i, toggle) in toggles.iter().enumerate() {
        let mark = if toggle.enabled { "[x]" } else { "[ ]" };
        let text = format!("  {mark} {}", label_for(&toggle.property));
        let style = if i == selected {
            Styles::selected()
        } else {
            Style::default().fg(c.fg)
        };
        lines.push(Line::styled(text, style));
    }

    let title = format!("{} · {pool}", texts.modal.toggles_title);
    let paragraph = Paragraph::new(lines).block(modal_block(&title));
    frame.render_widget(paragraph, area);
}
