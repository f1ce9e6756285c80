//! Settings module - handles application settings
//! - Read from `<config_dir>/neo-folio/settings.json` (JSON)
//! - Every field is optional; missing file or fields fall back to defaults
//! - Read-only: the app never writes settings back

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use neo_folio::chat::gemini::{self, GeminiConfig};
use neo_folio::Language;

const CONFIG_FILE_NAME: &str = "settings.json";
const APP_NAME: &str = "neo-folio";

/// Chat backend settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChatSettings {
    pub endpoint: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            endpoint: gemini::DEFAULT_ENDPOINT.to_string(),
            model: gemini::DEFAULT_MODEL.to_string(),
            timeout_secs: gemini::DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Application settings (combines all settings)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// 启动语言
    pub language: Language,
    /// 数字雨 / 解密 / 打字机动画
    pub effects_enabled: bool,
    /// 自定义内容文件，缺省使用内置内容
    pub content_path: Option<PathBuf>,
    pub chat: ChatSettings,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            language: Language::En,
            effects_enabled: true,
            content_path: None,
            chat: ChatSettings::default(),
        }
    }
}

impl AppSettings {
    /// Get config file path
    pub fn config_file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join(APP_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load settings from the config file, or defaults when it is missing or broken
    pub fn load() -> Self {
        let Some(path) = Self::config_file_path() else {
            tracing::warn!("no config directory on this platform, using default settings");
            return Self::default();
        };
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Self::default();
        }
        match Self::load_from_file(&path) {
            Ok(settings) => {
                tracing::info!(path = %path.display(), "loaded settings");
                settings
            }
            Err(e) => {
                tracing::warn!("{:#}, using default settings", e);
                Self::default()
            }
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid settings file {}", path.display()))
    }

    pub fn gemini_config(&self, api_key: Option<String>) -> GeminiConfig {
        GeminiConfig {
            endpoint: self.chat.endpoint.clone(),
            model: self.chat.model.clone(),
            timeout: Duration::from_secs(self.chat.timeout_secs.max(1)),
            api_key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn write_settings(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = write_settings(r#"{ "language": "zh", "chat": { "model": "gemini-2.0-flash" } }"#);
        let settings = AppSettings::load_from_file(file.path()).unwrap();
        assert_eq!(settings.language, Language::Zh);
        assert!(settings.effects_enabled);
        assert_eq!(settings.content_path, None);
        assert_eq!(settings.chat.model, "gemini-2.0-flash");
        assert_eq!(settings.chat.endpoint, gemini::DEFAULT_ENDPOINT);
        assert_eq!(settings.chat.timeout_secs, 30);
    }

    #[test]
    fn test_full_file() {
        let file = write_settings(
            r#"{
                "language": "en",
                "effects_enabled": false,
                "content_path": "/tmp/content.json",
                "chat": { "endpoint": "http://localhost:8080", "model": "m", "timeout_secs": 5 }
            }"#,
        );
        let settings = AppSettings::load_from_file(file.path()).unwrap();
        assert!(!settings.effects_enabled);
        assert_eq!(settings.content_path, Some(PathBuf::from("/tmp/content.json")));

        let config = settings.gemini_config(Some("k".to_string()));
        assert_eq!(config.endpoint, "http://localhost:8080");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.api_key.as_deref(), Some("k"));
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let file = write_settings("{ language: ");
        assert!(AppSettings::load_from_file(file.path()).is_err());
    }

    #[test]
    fn test_zero_timeout_is_raised() {
        let settings = AppSettings {
            chat: ChatSettings { timeout_secs: 0, ..ChatSettings::default() },
            ..AppSettings::default()
        };
        assert_eq!(settings.gemini_config(None).timeout, Duration::from_secs(1));
    }
}
