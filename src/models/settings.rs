// Settings 配置数据结构

use serde::{Deserialize, Serialize};

// ======================== 主配置结构 ========================

/// 应用设置（持久化用）
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub theme: ThemeSettings,
}

// ======================== 服务端设置 ========================

/// 默认服务端地址
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ApiSettings {
    /// 服务端根地址（不含 /api）
    pub endpoint: String,
    /// 已登录会话的 session cookie 值
    #[serde(default)]
    pub session_cookie: Option<String>,
    /// 请求超时（秒）
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
}

fn default_timeout() -> u64 {
    30
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            session_cookie: None,
            request_timeout_secs: default_timeout(),
        }
    }
}

impl ApiSettings {
    /// 应用环境变量覆盖（AQASEND_ENDPOINT / AQASEND_SESSION）
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(endpoint) = std::env::var("AQASEND_ENDPOINT") {
            if !endpoint.trim().is_empty() {
                self.endpoint = endpoint.trim().to_string();
            }
        }
        if let Ok(session) = std::env::var("AQASEND_SESSION") {
            if !session.trim().is_empty() {
                self.session_cookie = Some(session.trim().to_string());
            }
        }
        self
    }
}

// ======================== 主题设置 ========================

#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub enum Language {
    Chinese,
    #[default]
    English,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ThemeSettings {
    #[serde(default)]
    pub mode: ThemeMode,
    #[serde(default)]
    pub language: Language,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings: AppSettings =
            serde_json::from_str(r#"{"api":{"endpoint":"https://send.example"}}"#).unwrap();
        assert_eq!(settings.api.endpoint, "https://send.example");
        assert_eq!(settings.api.session_cookie, None);
        assert_eq!(settings.api.request_timeout_secs, 30);
        assert_eq!(settings.theme.language, Language::English);
    }
}
