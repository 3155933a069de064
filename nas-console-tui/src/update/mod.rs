//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod backend;            // 后端结果处理
//!         mod content;            // 内容面板子消息处理（光标、固定）
//!         mod modal;              // 弹窗子消息处理
//!         mod navigation;         // 导航子消息处理
//!
//! 需要访问后端时，Update 层只向 `app.commands` 推入 BackendCommand，
//! 由主循环（app.rs）交给 CoreService 异步执行；结果以
//! `AppMessage::Backend` 的形式回到这里。
//!

mod backend;
mod content;
mod modal;
mod navigation;

use nas_console_core::EntityKind;

use crate::backend::BackendCommand;
use crate::i18n::t;
use crate::message::AppMessage;
use crate::model::{App, FocusPanel, Page};

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg);
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::Backend(event) => {
            backend::update(app, event);
        }

        AppMessage::GoBack => {
            // 如果有弹窗打开，先关闭弹窗
            if app.modal.is_open() {
                app.modal.close();
            } else {
                app.focus = FocusPanel::Navigation;
            }
        }

        AppMessage::Refresh => {
            app.set_status(t().toast.refreshing);
            match app.current_page {
                Page::Entities(kind) => request_fetch(app, kind),
                Page::Home => {
                    for kind in EntityKind::ALL {
                        request_fetch(app, kind);
                    }
                }
            }
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::Noop => {}
    }
}

/// 发起列表请求；同类旧请求的结果会被丢弃
pub(crate) fn request_fetch(app: &mut App, kind: EntityKind) {
    let seq = app.pages.get_mut(kind).begin_fetch();
    app.commands.push(BackendCommand::Fetch { kind, seq });
}

/// 把列表光标所在的实体设为该视图的激活项
pub(crate) fn sync_active(app: &mut App, kind: EntityKind) {
    let Some(id) = app
        .pages
        .get(kind)
        .selected_record()
        .map(|record| record.id.clone())
    else {
        return;
    };
    app.detail.set_active_item_id(kind.view_id(), Some(id));
}
