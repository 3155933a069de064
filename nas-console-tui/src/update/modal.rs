//! 弹窗更新逻辑

use crate::backend::BackendCommand;
use crate::message::ModalMessage;
use crate::model::{App, Modal};

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    if msg == ModalMessage::Close {
        app.modal.close();
        return;
    }

    let Some(Modal::PoolToggles {
        pool,
        toggles,
        selected,
    }) = app.modal.active.as_mut()
    else {
        // 帮助弹窗：任意确认键关闭
        if msg == ModalMessage::Confirm {
            app.modal.close();
        }
        return;
    };

    match msg {
        ModalMessage::SelectPrevious => {
            *selected = selected.saturating_sub(1);
        }
        ModalMessage::SelectNext => {
            if *selected + 1 < toggles.len() {
                *selected += 1;
            }
        }
        ModalMessage::Confirm => {
            if let Some(toggle) = toggles.get(*selected) {
                let command = BackendCommand::SetPoolProperty {
                    pool: pool.clone(),
                    property: toggle.property.clone(),
                    enabled: !toggle.enabled,
                };
                app.commands.push(command);
            }
            app.modal.close();
        }
        ModalMessage::Close => {}
    }
}
