//! NAS Console 终端界面
//!
//! 启动顺序：日志 → 配置 → 语言 / 主题 → 后端服务 → 终端 → 主循环。
//! 终端被 TUI 占用，日志写入 `<cache_dir>/nas-console/nas-console.log`，
//! 级别由 `RUST_LOG` 控制，默认 `info`。

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::fs::{self, File};
use std::sync::Mutex;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use backend::{ConfigService, CoreService, JsonConfigService, API_URL_ENV};
use util::{init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. 日志
    init_logging();

    // 2. 配置
    let config_service = JsonConfigService::new();
    let mut config = if config_service.path().exists() {
        config_service.load()?
    } else {
        let config = backend::AppConfig::default();
        if let Err(e) = config_service.save(&config) {
            log::warn!("could not write default config: {e:#}");
        }
        config
    };
    config.apply_env_override(std::env::var(API_URL_ENV).ok());

    i18n::set_language(config.language());
    view::theme::set_theme(config.theme);

    // 3. 后端服务
    let (core, mut events) = CoreService::new(&config)?;
    tracing::info!("nas-console started, backend {}", config.api_base_url);

    // 4. 终端与主循环
    let mut terminal = init_terminal()?;
    let mut app = model::App::new(config.api_base_url.clone());
    let result = app::run(&mut terminal, &mut app, &core, &mut events);

    // 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    result
}

/// 日志写入文件；stdout 归终端界面使用
fn init_logging() {
    let Some(dir) = dirs::cache_dir().map(|d| d.join("nas-console")) else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = File::create(dir.join("nas-console.log")) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(filter)
        .try_init();
}
