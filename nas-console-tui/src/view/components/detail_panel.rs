//! 详情面板：单项详情或多项对比表

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
    Frame,
};

use nas_console_core::detail::{
    CellValue, ColumnBody, ComparisonRow, ComparisonTable, DetailView, SingleBody, SingleDetail,
    EMPTY_PLACEHOLDER, MISSING_CELL,
};
use nas_console_core::{build_detail_view, layout_for, EntityKind};

use crate::i18n::t;
use crate::model::App;
use crate::util::pad_to_width;
use crate::view::theme::{colors, Styles};

/// 属性名列宽
const LABEL_WIDTH: u16 = 22;

/// 渲染当前实体类型的详情面板
pub fn render(app: &App, kind: EntityKind, frame: &mut Frame, area: Rect) {
    let texts = t();
    let state = app.detail.view(kind.view_id());
    let page = app.pages.get(kind);
    let columns = page.detail_columns(state);

    match build_detail_view(layout_for(kind), state, &columns) {
        DetailView::Empty => {
            let block = panel_block(texts.entity.detail_title.to_string());
            let hint = Paragraph::new(texts.entity.select_hint)
                .style(Style::default().fg(colors().muted))
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(hint, area);
        }
        DetailView::Single(detail) => render_single(frame, area, &detail),
        DetailView::Comparison(table) => {
            let focused = page.focused_column(table.columns.len());
            render_comparison(frame, area, &table, focused);
        }
    }
}

fn panel_block(title: String) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(false))
}

// ========== 单项详情 ==========

fn render_single(frame: &mut Frame, area: Rect, detail: &SingleDetail) {
    let texts = t();
    let c = colors();
    let block = panel_block(format!("{} · {}", texts.entity.detail_title, detail.title));

    let lines = match &detail.body {
        SingleBody::Loading => vec![Line::styled(texts.common.loading, Style::default().fg(c.muted))],
        SingleBody::Failed(message) => vec![Line::styled(
            format!("{}: {message}", texts.common.error),
            Style::default().fg(c.error),
        )],
        SingleBody::Empty => vec![Line::styled(EMPTY_PLACEHOLDER, Style::default().fg(c.muted))],
        SingleBody::Sections(sections) => {
            let mut lines = Vec::new();
            for section in sections {
                if !lines.is_empty() {
                    lines.push(Line::from(""));
                }
                lines.push(Line::styled(
                    section.title.clone(),
                    Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
                ));
                for row in &section.rows {
                    push_value_lines(&mut lines, &row.label, &row.value, 1);
                }
            }
            lines
        }
    };

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(block);
    frame.render_widget(paragraph, area);
}

/// 一行 `label: value`；嵌套表展开为缩进的子行
fn push_value_lines(lines: &mut Vec<Line<'static>>, label: &str, value: &CellValue, depth: usize) {
    let c = colors();
    let indent = "  ".repeat(depth);
    let label_span = Span::styled(
        format!("{indent}{}", pad_to_width(label, usize::from(LABEL_WIDTH))),
        Style::default().fg(c.muted),
    );

    match value {
        CellValue::Text(text) => {
            lines.push(Line::from(vec![label_span, Span::raw(text.clone())]));
        }
        CellValue::Toggle(toggle) => {
            let mark = if toggle.enabled { "[x] " } else { "[ ] " };
            let color = if toggle.enabled { c.success } else { c.fg };
            lines.push(Line::from(vec![
                label_span,
                Span::styled(format!("{mark}{}", value.display_text()), Style::default().fg(color)),
            ]));
        }
        CellValue::Nested(table) => {
            lines.push(Line::from(label_span));
            let rows = table.compare();
            for column in &table.columns {
                lines.push(Line::styled(
                    format!("{indent}  {}", column.title),
                    Style::default().add_modifier(Modifier::BOLD),
                ));
                for row in &rows {
                    let Some(entry) = column.values.get(&row.key) else {
                        continue;
                    };
                    push_value_lines(lines, &entry.label, &entry.value, depth + 2);
                }
            }
        }
    }
}

// ========== 对比表 ==========

fn render_comparison(
    frame: &mut Frame,
    area: Rect,
    table: &ComparisonTable,
    focused: Option<usize>,
) {
    let texts = t();
    let c = colors();
    let block = panel_block(texts.entity.comparison_title.to_string());

    let mut header = vec![Cell::from(texts.entity.attribute)];
    header.extend(table.columns.iter().enumerate().map(|(index, column)| {
        let marker = if column.pinned {
            texts.entity.pinned_marker
        } else {
            texts.entity.preview
        };
        let cell = Cell::from(format!("{} {marker}", column.title));
        if focused == Some(index) {
            cell.style(Styles::selected())
        } else {
            cell
        }
    }));
    let header = Row::new(header).style(Styles::title().add_modifier(Modifier::UNDERLINED));

    let mut rows = Vec::new();

    // 加载中 / 失败 / 无数据的列用一行状态说明代替数据
    if table.columns.iter().any(|col| col.body != ColumnBody::Values) {
        let mut cells = vec![Cell::from("")];
        cells.extend(table.columns.iter().map(|column| match &column.body {
            ColumnBody::Loading => {
                Cell::from(texts.common.loading).style(Style::default().fg(c.muted))
            }
            ColumnBody::Failed(message) => {
                Cell::from(message.clone()).style(Style::default().fg(c.error))
            }
            ColumnBody::Empty => Cell::from(EMPTY_PLACEHOLDER).style(Style::default().fg(c.muted)),
            ColumnBody::Values => Cell::from(""),
        }));
        rows.push(Row::new(cells));
    }

    push_comparison_rows(&mut rows, &table.rows, 0);

    let mut widths = vec![Constraint::Length(LABEL_WIDTH)];
    widths.extend(table.columns.iter().map(|_| Constraint::Fill(1)));

    let widget = Table::new(rows, widths)
        .header(header)
        .column_spacing(2)
        .block(block);
    frame.render_widget(widget, area);
}

/// 对比行；嵌套表的子行缩进跟在父行之后
fn push_comparison_rows(rows: &mut Vec<Row<'static>>, source: &[ComparisonRow], depth: usize) {
    let texts = t();
    let c = colors();
    let indent = "  ".repeat(depth);

    for row in source {
        let label = if row.different {
            format!("{indent}{} {}", texts.entity.different_marker, row.label)
        } else {
            format!("{indent}{}", row.label)
        };
        let mut cells = vec![Cell::from(label)];
        cells.extend(row.cells.iter().map(|cell| {
            Cell::from(
                cell.as_ref()
                    .map_or_else(|| MISSING_CELL.to_string(), CellValue::display_text),
            )
        }));
        let style = if row.different {
            Style::default().fg(c.diff)
        } else {
            Style::default().fg(c.fg)
        };
        rows.push(Row::new(cells).style(style));
        push_comparison_rows(rows, &row.children, depth + 1);
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use nas_console_core::EntityRecord;
    use ratatui::{backend::TestBackend, Terminal};
    use serde_json::{json, Value};

    const KIND: EntityKind = EntityKind::NfsShare;

    fn exports() -> Vec<Value> {
        vec![
            json!({"path": "/srv/a", "clients": "10.0.0.0/24(rw,sync)"}),
            json!({"path": "/srv/b", "clients": "10.0.0.0/24(ro) 192.168.9.0/24(rw)"}),
        ]
    }

    /// 固定 /srv/a，预览 /srv/b
    fn comparing_app() -> App {
        let mut app = App::new("http://nas");
        let page = app.pages.get_mut(KIND);
        let seq = page.begin_fetch();
        page.apply_fetch(seq, Ok(EntityRecord::from_list(KIND, exports())));
        app.detail.toggle_pinned_item(KIND.view_id(), "/srv/a");
        app.detail
            .set_active_item_id(KIND.view_id(), Some("/srv/b".to_string()));
        app
    }

    /// 渲染详情面板并取出整屏文本
    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|frame| render(app, KIND, frame, frame.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn nested_clients_render_as_sub_rows() {
        let text = screen(&comparing_app());

        assert!(text.contains("/srv/a"));
        assert!(text.contains("10.0.0.0/24 ·"));
        assert!(text.contains("192.168.9.0/24 ·"));
    }

    #[test]
    fn loading_column_hides_cached_rows() {
        let mut app = comparing_app();
        app.pages.get_mut(KIND).begin_fetch();

        let text = screen(&app);
        assert!(text.contains(t().common.loading));
        assert!(!text.contains("10.0.0.0/24 ·"));
    }

    #[test]
    fn failed_column_shows_message() {
        let mut app = comparing_app();
        let page = app.pages.get_mut(KIND);
        let seq = page.begin_fetch();
        page.apply_fetch(seq, Err("export list unavailable".to_string()));

        let text = screen(&app);
        assert!(text.contains("export list unavailable"));
        assert!(!text.contains("192.168.9.0/24"));
    }
}
