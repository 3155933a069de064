//! 状态栏：快捷键提示 + toast

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use nas_console_core::EntityKind;

use crate::i18n::t;
use crate::model::{App, FocusPanel, Modal, Page, StatusLevel};
use crate::view::theme::{colors, Styles};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let mut spans = Vec::new();

    for (i, (key, desc)) in get_hints(app).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(c.muted)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    if let Some(ref status) = app.status {
        let color = match status.level {
            StatusLevel::Info => c.warning,
            StatusLevel::Error => c.error,
        };
        spans.push(Span::styled(" │ ", Style::default().fg(c.muted)));
        spans.push(Span::styled(status.text.clone(), Style::default().fg(color)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let h = &t().hints;

    match app.modal.active {
        Some(Modal::PoolToggles { .. }) => {
            return vec![("↑↓", h.select), ("Enter", h.apply), ("Esc", h.close)];
        }
        Some(Modal::Help) => return vec![("Esc", h.close)],
        None => {}
    }

    let mut hints = vec![("Tab", h.switch_panel)];
    match (app.focus, app.current_page) {
        (FocusPanel::Navigation, _) | (FocusPanel::Content, Page::Home) => {
            hints.push(("↑↓", h.navigate));
            hints.push(("Enter", h.open));
        }
        (FocusPanel::Content, Page::Entities(kind)) => {
            hints.push(("↑↓", h.select));
            hints.push(("p", h.pin));
            hints.push(("x", h.unpin));
            hints.push(("c", h.clear_pins));
            if app.detail.view(kind.view_id()).is_comparing() {
                hints.push(("[ ]", h.column));
                hints.push(("d", h.column_action));
            }
            if kind == EntityKind::Pool {
                hints.push(("t", h.toggles));
            }
        }
    }
    hints.push(("Alt+r", h.refresh));
    hints.push(("?", h.help));
    hints.push(("q", h.quit));
    hints
}
