//! 后端结果处理

use nas_console_core::{EntityKind, EntityService};

use crate::backend::BackendEvent;
use crate::i18n::t;
use crate::model::App;

use super::{request_fetch, sync_active};

/// 处理后端事件
pub fn update(app: &mut App, event: BackendEvent) {
    match event {
        BackendEvent::Fetched { kind, seq, result } => {
            let page = app.pages.get_mut(kind);
            let succeeded = result.is_ok();
            if !page.apply_fetch(seq, result) {
                return;
            }
            // 加载失败时错误就地显示，不修剪选择状态
            if succeeded {
                EntityService::prune_selection(&mut app.detail, kind, &page.records);
                sync_active(app, kind);
            }
        }

        BackendEvent::PoolPropertySet {
            pool,
            property,
            enabled,
            result,
        } => match result {
            Ok(()) => {
                log::info!("pool {pool}: {property} set to {enabled}");
                app.set_status(format!("{}: {property}", t().toast.property_updated));
                request_fetch(app, EntityKind::Pool);
            }
            Err(message) => {
                app.set_error(message);
            }
        },
    }
}
