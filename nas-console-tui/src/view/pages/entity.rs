//! 实体页：左侧列表 + 右侧详情 / 对比面板

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use nas_console_core::EntityKind;

use crate::i18n::t;
use crate::model::{App, EntityPageState, QueryState};
use crate::util::truncate_to_width;
use crate::view::components::detail_panel;
use crate::view::theme::{colors, Styles};

/// 渲染实体页
pub fn render(app: &App, kind: EntityKind, frame: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    render_list(app, app.pages.get(kind), frame, columns[0]);
    detail_panel::render(app, kind, frame, columns[1]);
}

fn render_list(app: &App, page: &EntityPageState, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let block = Block::default()
        .title(format!(" {} ", texts.entity.list_title))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_content()));

    let placeholder = match &page.query {
        QueryState::Idle | QueryState::Loading => {
            Some((texts.common.loading.to_string(), c.muted))
        }
        QueryState::Failed(message) => Some((format!("{}: {message}", texts.common.error), c.error)),
        QueryState::Ready if page.records.is_empty() => {
            Some((texts.entity.empty_list.to_string(), c.muted))
        }
        QueryState::Ready => None,
    };
    if let Some((text, color)) = placeholder {
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(color))
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let view = app.detail.view(page.kind.view_id());
    // 边框 2 列 + 前缀 4 列
    let width = usize::from(area.width.saturating_sub(6));

    let items: Vec<ListItem> = page
        .records
        .iter()
        .map(|record| {
            let marker = if view.is_pinned(&record.id) {
                texts.entity.pinned_marker
            } else {
                " "
            };
            let style = if view.active_item_id.as_deref() == Some(record.id.as_str()) {
                Style::default().fg(c.highlight)
            } else {
                Style::default().fg(c.fg)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{marker} "), Style::default().fg(c.warning)),
                Span::styled(truncate_to_width(&record.title, width), style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Styles::selected())
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(page.selected));
    frame.render_stateful_widget(list, area, &mut state);
}
