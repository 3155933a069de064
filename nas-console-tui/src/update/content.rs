//! 内容面板更新逻辑
//!
//! 光标移动即设置激活项；固定操作委托给核心库的 `DetailAction`。

use nas_console_core::detail::{ComparisonColumn, DetailAction, DetailView};
use nas_console_core::{build_detail_view, layout_for, EntityKind};

use crate::i18n::t;
use crate::message::ContentMessage;
use crate::model::App;

use super::sync_active;

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) {
    let Some(kind) = app.current_page.entity_kind() else {
        return;
    };

    match msg {
        // ========== 列表导航 ==========
        ContentMessage::SelectPrevious => {
            app.pages.get_mut(kind).select_previous();
            sync_active(app, kind);
        }
        ContentMessage::SelectNext => {
            app.pages.get_mut(kind).select_next();
            sync_active(app, kind);
        }
        ContentMessage::SelectFirst => {
            app.pages.get_mut(kind).select_first();
            sync_active(app, kind);
        }
        ContentMessage::SelectLast => {
            app.pages.get_mut(kind).select_last();
            sync_active(app, kind);
        }

        // ========== 选择 / 固定 ==========
        ContentMessage::TogglePin => {
            if let Some(id) = active_id(app, kind) {
                DetailAction::TogglePin(id).apply(&mut app.detail, kind.view_id());
            }
        }
        ContentMessage::Unpin => {
            if let Some(id) = active_id(app, kind) {
                DetailAction::Remove(id).apply(&mut app.detail, kind.view_id());
            }
        }
        ContentMessage::ClearPins => {
            if app.detail.view(kind.view_id()).is_comparing() {
                app.detail.clear_pinned_items(kind.view_id());
                app.set_status(t().toast.pins_cleared);
            }
        }

        // ========== 对比表列 ==========
        ContentMessage::PreviousColumn => {
            let count = comparison_columns(app, kind).len();
            let page = app.pages.get_mut(kind);
            page.column = page.focused_column(count).unwrap_or(0).saturating_sub(1);
        }
        ContentMessage::NextColumn => {
            let count = comparison_columns(app, kind).len();
            let page = app.pages.get_mut(kind);
            page.column = page
                .focused_column(count)
                .map_or(0, |column| (column + 1).min(count - 1));
        }
        ContentMessage::ColumnAction => {
            let columns = comparison_columns(app, kind);
            let focused = app.pages.get(kind).focused_column(columns.len());
            if let Some(action) = focused
                .and_then(|index| columns.get(index))
                .and_then(|column| column.actions().into_iter().next())
            {
                action.apply(&mut app.detail, kind.view_id());
            }
        }

        // ========== 存储池 ==========
        ContentMessage::ShowToggles => handle_show_toggles(app, kind),
    }
}

/// 当前对比表的列（非对比模式时为空）
fn comparison_columns(app: &App, kind: EntityKind) -> Vec<ComparisonColumn> {
    let state = app.detail.view(kind.view_id());
    let inputs = app.pages.get(kind).detail_columns(state);
    match build_detail_view(layout_for(kind), state, &inputs) {
        DetailView::Comparison(table) => table.columns,
        DetailView::Empty | DetailView::Single(_) => Vec::new(),
    }
}

fn active_id(app: &App, kind: EntityKind) -> Option<String> {
    app.detail.view(kind.view_id()).active_item_id.clone()
}

fn handle_show_toggles(app: &mut App, kind: EntityKind) {
    if kind != EntityKind::Pool {
        app.set_status(t().toast.not_a_pool);
        return;
    }
    let Some(record) = app.pages.get(kind).selected_record() else {
        return;
    };

    let Some(pool) = record.backend_name() else {
        log::warn!("pool record {} has no name, cannot edit properties", record.id);
        app.set_error(t().common.generic_error);
        return;
    };
    let toggles = record.detail_values().toggles().cloned().collect();
    app.modal.show_pool_toggles(pool, toggles);
}
