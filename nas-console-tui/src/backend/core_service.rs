//! 核心服务
//!
//! 封装 nas-console-core 的 `EntityService`，在独立的 tokio runtime 上执行
//! 后端请求，结果通过 channel 回传给 UI 主循环。

use std::sync::Arc;

use anyhow::Result;
use nas_console_client::{DashboardBackend, NasClient};
use nas_console_core::{CoreError, EntityKind, EntityRecord, EntityService};
use tokio::runtime::Runtime;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::config_service::AppConfig;
use crate::i18n::t;

/// UI 请求的后端操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    /// 拉取某类实体列表；`seq` 用于丢弃过期响应
    Fetch { kind: EntityKind, seq: u64 },
    /// 切换存储池布尔属性
    SetPoolProperty {
        pool: String,
        property: String,
        enabled: bool,
    },
}

/// 后端操作结果，错误已转换为可展示的消息
#[derive(Debug, Clone, PartialEq)]
pub enum BackendEvent {
    Fetched {
        kind: EntityKind,
        seq: u64,
        result: Result<Vec<EntityRecord>, String>,
    },
    PoolPropertySet {
        pool: String,
        property: String,
        enabled: bool,
        result: Result<(), String>,
    },
}

/// TUI 核心服务
pub struct CoreService {
    runtime: Runtime,
    service: Arc<EntityService>,
    events: UnboundedSender<BackendEvent>,
}

impl CoreService {
    /// 基于配置创建 HTTP 后端
    pub fn new(config: &AppConfig) -> Result<(Self, UnboundedReceiver<BackendEvent>)> {
        let client = NasClient::new(&config.client_config())?;
        Self::with_backend(Arc::new(client))
    }

    /// 使用任意后端实现（测试时注入 mock）
    pub fn with_backend(
        backend: Arc<dyn DashboardBackend>,
    ) -> Result<(Self, UnboundedReceiver<BackendEvent>)> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("nas-console-backend")
            .enable_all()
            .build()?;
        let (events, receiver) = mpsc::unbounded_channel();

        Ok((
            Self {
                runtime,
                service: Arc::new(EntityService::new(backend)),
                events,
            },
            receiver,
        ))
    }

    /// 在后台执行命令
    pub fn dispatch(&self, command: BackendCommand) {
        let service = Arc::clone(&self.service);
        let events = self.events.clone();

        match command {
            BackendCommand::Fetch { kind, seq } => {
                log::debug!("fetch {kind} (seq {seq})");
                self.runtime.spawn(async move {
                    let result = service.list(kind).await.map_err(|e| display_error(&e));
                    send(&events, BackendEvent::Fetched { kind, seq, result });
                });
            }
            BackendCommand::SetPoolProperty {
                pool,
                property,
                enabled,
            } => {
                log::debug!("set {property}={enabled} on pool {pool}");
                self.runtime.spawn(async move {
                    let result = service
                        .set_pool_property(&pool, &property, enabled)
                        .await
                        .map_err(|e| display_error(&e));
                    send(
                        &events,
                        BackendEvent::PoolPropertySet {
                            pool,
                            property,
                            enabled,
                            result,
                        },
                    );
                });
            }
        }
    }
}

fn display_error(err: &CoreError) -> String {
    err.user_message(t().common.generic_error)
}

fn send(events: &UnboundedSender<BackendEvent>, event: BackendEvent) {
    if events.send(event).is_err() {
        log::debug!("UI loop gone, dropping backend event");
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use async_trait::async_trait;
    use nas_console_client::{ClientError, PoolPropertyUpdate};
    use serde_json::{json, Value};

    struct StaticBackend {
        fail: bool,
    }

    #[async_trait]
    impl DashboardBackend for StaticBackend {
        async fn list_entities(&self, _kind: EntityKind) -> nas_console_client::Result<Vec<Value>> {
            if self.fail {
                return Err(ClientError::Backend {
                    message: "سرویس در دسترس نیست".to_string(),
                });
            }
            Ok(vec![json!({"name": "tank"}), json!({"name": "backup"})])
        }

        async fn set_pool_property(
            &self,
            _pool: &str,
            _update: &PoolPropertyUpdate,
        ) -> nas_console_client::Result<()> {
            if self.fail {
                return Err(ClientError::NetworkError {
                    detail: "connection refused".to_string(),
                });
            }
            Ok(())
        }
    }

    #[test]
    fn fetch_reports_back_with_seq() {
        let (service, mut events) =
            CoreService::with_backend(Arc::new(StaticBackend { fail: false })).unwrap();
        service.dispatch(BackendCommand::Fetch {
            kind: EntityKind::Pool,
            seq: 7,
        });

        let event = tokio_test::block_on(events.recv()).expect("event");
        let BackendEvent::Fetched { kind, seq, result } = event else {
            panic!("unexpected event");
        };
        assert_eq!(kind, EntityKind::Pool);
        assert_eq!(seq, 7);
        let ids: Vec<String> = result.unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["tank", "backup"]);
    }

    #[test]
    fn backend_message_reaches_ui() {
        let (service, mut events) =
            CoreService::with_backend(Arc::new(StaticBackend { fail: true })).unwrap();
        service.dispatch(BackendCommand::Fetch {
            kind: EntityKind::NfsShare,
            seq: 1,
        });

        let event = tokio_test::block_on(events.recv()).expect("event");
        let BackendEvent::Fetched { result, .. } = event else {
            panic!("unexpected event");
        };
        assert_eq!(result.unwrap_err(), "سرویس در دسترس نیست");
    }

    #[test]
    fn transport_failure_uses_fallback() {
        let (service, mut events) =
            CoreService::with_backend(Arc::new(StaticBackend { fail: true })).unwrap();
        service.dispatch(BackendCommand::SetPoolProperty {
            pool: "tank".to_string(),
            property: "autotrim".to_string(),
            enabled: true,
        });

        let event = tokio_test::block_on(events.recv()).expect("event");
        let BackendEvent::PoolPropertySet { result, .. } = event else {
            panic!("unexpected event");
        };
        assert_eq!(result.unwrap_err(), t().common.generic_error);
    }
}
