// 本地数据持久化服务

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::models::AppSettings;

/// 获取配置目录路径
/// macOS: ~/Library/Application Support/aqasend
/// Linux: ~/.config/aqasend
/// Windows: C:\Users\<用户名>\AppData\Roaming\aqasend
pub fn get_config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("无法获取系统配置目录")?
        .join("aqasend");
    if !config_dir.exists() {
        fs::create_dir_all(&config_dir).context("无法创建配置目录")?;
    }
    Ok(config_dir)
}

/// 获取设置配置文件路径
pub fn get_settings_file() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("settings.json"))
}

/// 加载应用设置
pub fn load_settings() -> Result<AppSettings> {
    load_settings_from(&get_settings_file()?)
}

/// 保存应用设置
pub fn save_settings(settings: &AppSettings) -> Result<()> {
    save_settings_to(&get_settings_file()?, settings)
}

pub fn load_settings_from(path: &Path) -> Result<AppSettings> {
    if !path.exists() {
        return Ok(AppSettings::default());
    }
    let content = fs::read_to_string(path).context("无法读取设置配置文件")?;
    let settings: AppSettings = serde_json::from_str(&content).context("无法解析设置配置文件")?;
    Ok(settings)
}

pub fn save_settings_to(path: &Path, settings: &AppSettings) -> Result<()> {
    let content = serde_json::to_string_pretty(settings).context("无法序列化设置配置")?;
    fs::write(path, content).context("无法写入设置配置文件")?;
    Ok(())
}

/// 启动时使用的设置：读取失败时回退默认值，并应用环境变量覆盖
pub fn load_effective_settings() -> AppSettings {
    let mut settings = load_settings().unwrap_or_else(|e| {
        warn!("[Storage] 加载设置失败，使用默认值: {:#}", e);
        AppSettings::default()
    });
    settings.api = settings.api.with_env_overrides();
    settings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::Language;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings_from(&dir.path().join("settings.json")).unwrap();
        assert_eq!(settings.api, AppSettings::default().api);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut settings = AppSettings::default();
        settings.api.endpoint = "https://send.example".to_string();
        settings.api.session_cookie = Some("abc".to_string());
        settings.theme.language = Language::Chinese;
        save_settings_to(&path, &settings).unwrap();

        let loaded = load_settings_from(&path).unwrap();
        assert_eq!(loaded.api, settings.api);
        assert_eq!(loaded.theme.language, Language::Chinese);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{not json").unwrap();
        assert!(load_settings_from(&path).is_err());
    }
}
