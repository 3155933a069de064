//! 应用主循环

use std::time::{Duration, Instant};

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::{BackendEvent, CoreService};
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    core: &CoreService,
    events: &mut UnboundedReceiver<BackendEvent>,
) -> Result<()> {
    loop {
        // 1. 交给后台执行 Update 层产生的命令
        for command in app.take_commands() {
            core.dispatch(command);
        }

        // 2. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 3. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 4. 收取已完成的后端结果
        while let Ok(backend_event) = events.try_recv() {
            update::update(app, AppMessage::Backend(backend_event));
        }
        app.expire_status(Instant::now());

        // 5. 轮询事件（100ms 超时）并更新状态
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }
    }

    Ok(())
}
