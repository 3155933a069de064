//! 首页：后端地址与各类实体的加载概况

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::{current_language, t};
use crate::model::{App, QueryState};
use crate::view::kind_title;
use crate::view::theme::colors;

/// 渲染首页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(1)])
        .split(area);

    let welcome = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", texts.home.welcome),
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("  {}: ", texts.home.backend), Style::default().fg(c.muted)),
            Span::raw(app.backend_url.clone()),
            Span::styled(
                format!("  ({})", current_language().display_name()),
                Style::default().fg(c.muted),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(welcome), layout[0]);

    // 每类实体一行：数量 + 固定数
    let lines: Vec<Line> = app
        .pages
        .iter()
        .map(|page| {
            let pinned = app.detail.view(page.kind.view_id()).pinned_item_ids.len();
            let (status, color) = match &page.query {
                QueryState::Idle => (texts.home.not_loaded.to_string(), c.muted),
                QueryState::Loading => (texts.common.loading.to_string(), c.muted),
                QueryState::Failed(message) => (message.clone(), c.error),
                QueryState::Ready => (
                    format!("{} {}", page.records.len(), texts.home.items),
                    c.success,
                ),
            };
            let mut spans = vec![
                Span::styled(
                    format!("  {:<18}", kind_title(page.kind)),
                    Style::default().fg(c.fg),
                ),
                Span::styled(status, Style::default().fg(color)),
            ];
            if pinned > 0 {
                spans.push(Span::styled(
                    format!("  · {pinned} {}", texts.home.pinned),
                    Style::default().fg(c.warning),
                ));
            }
            Line::from(spans)
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border));
    frame.render_widget(Paragraph::new(lines).block(block), layout[1]);
}
