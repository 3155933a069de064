//! 配置服务
//!
//! 配置文件位置：`<config_dir>/nas-console/config.json`
//! `NAS_CONSOLE_API_URL` 覆盖文件中的 `apiBaseUrl`。

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use nas_console_client::ClientConfig;
use serde::{Deserialize, Serialize};

use crate::i18n::Language;
use crate::view::theme::Theme;

/// 覆盖后端地址的环境变量
pub const API_URL_ENV: &str = "NAS_CONSOLE_API_URL";

const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    /// BCP 47 代码，`fa-IR` 或 `en-US`
    pub language: String,
    pub theme: Theme,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            language: Language::default().code().to_string(),
            theme: Theme::default(),
        }
    }
}

impl AppConfig {
    /// REST 客户端配置
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.api_base_url.clone())
            .with_timeout(Duration::from_secs(self.request_timeout_secs.max(1)))
    }

    /// 界面语言；未知代码回退到默认语言
    pub fn language(&self) -> Language {
        Language::from_code(&self.language).unwrap_or_default()
    }

    /// 应用 [`API_URL_ENV`] 的值（已设置且非空时）
    pub fn apply_env_override(&mut self, value: Option<String>) {
        if let Some(url) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
            log::info!("API base URL overridden by {API_URL_ENV}: {url}");
            self.api_base_url = url;
        }
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 基于 JSON 文件的配置服务
pub struct JsonConfigService {
    path: PathBuf,
}

impl JsonConfigService {
    /// 使用平台配置目录
    pub fn new() -> Self {
        let dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("nas-console");
        Self::with_path(dir.join("config.json"))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for JsonConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("invalid config file {}", self.path.display()))?;
        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }
        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = JsonConfigService::with_path(dir.path().join("config.json"));
        let config = service.load().unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.language(), Language::FaIr);
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let service = JsonConfigService::with_path(dir.path().join("nested").join("config.json"));
        let config = AppConfig {
            api_base_url: "https://nas.local".to_string(),
            request_timeout_secs: 5,
            language: "en-US".to_string(),
            theme: Theme::Light,
        };
        service.save(&config).unwrap();
        assert_eq!(service.load().unwrap(), config);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"apiBaseUrl": "http://10.0.0.2:8000"}"#).unwrap();

        let config = JsonConfigService::with_path(&path).load().unwrap();
        assert_eq!(config.api_base_url, "http://10.0.0.2:8000");
        assert_eq!(config.request_timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.theme, Theme::Dark);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{not json").unwrap();
        assert!(JsonConfigService::with_path(&path).load().is_err());
    }

    #[test]
    fn env_override() {
        let mut config = AppConfig::default();
        config.apply_env_override(Some("   ".to_string()));
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        config.apply_env_override(Some(" http://nas:9000 ".to_string()));
        assert_eq!(config.api_base_url, "http://nas:9000");
        config.apply_env_override(None);
        assert_eq!(config.api_base_url, "http://nas:9000");
    }

    #[test]
    fn zero_timeout_is_clamped() {
        let config = AppConfig {
            request_timeout_secs: 0,
            ..AppConfig::default()
        };
        assert_eq!(config.client_config().timeout, Duration::from_secs(1));
    }
}
