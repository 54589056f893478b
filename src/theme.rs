use gpui::*;
use gpui_component::theme::{Theme, ThemeMode as GpuiThemeMode};
use gpui_component::ActiveTheme;
use std::rc::Rc;

use crate::models::settings::ThemeMode;

/// 按设置切换明暗模式（System 保持跟随系统）
pub fn apply_mode(mode: &ThemeMode, cx: &mut App) {
    match mode {
        ThemeMode::Light => Theme::change(GpuiThemeMode::Light, None, cx),
        ThemeMode::Dark => Theme::change(GpuiThemeMode::Dark, None, cx),
        ThemeMode::System => {}
    }
}

/// 初始化全局主题配置
/// 深色模式使用青绿色主色调，浅色模式保持默认背景
pub fn init(cx: &mut App) {
    let (mut dark_config, mut light_config) = {
        let theme = Theme::global(cx);
        ((*theme.dark_theme).clone(), (*theme.light_theme).clone())
    };

    // ================== Dark Mode ==================
    dark_config.colors.background = Some("#1c2128".into());
    dark_config.colors.popover = Some("#242b33".into());
    dark_config.colors.sidebar = Some("#161b22".into());
    dark_config.colors.title_bar = Some("#161b22".into());
    dark_config.colors.muted_foreground = Some("#8b949e".into());
    dark_config.colors.border = Some("#3b444f".into());
    dark_config.colors.title_bar_border = Some("#3b444f".into());
    dark_config.colors.list_hover = Some("#2d3640".into());
    dark_config.colors.primary = Some("#0d9488".into()); // Teal 600
    dark_config.colors.primary_hover = Some("#0f766e".into());
    dark_config.colors.primary_foreground = Some("#ffffff".into());
    dark_config.colors.secondary = Some("#2d3640".into());
    dark_config.colors.secondary_hover = Some("#3b444f".into());
    dark_config.colors.secondary_foreground = Some("#e6edf3".into());

    // ================== Light Mode ==================
    light_config.colors.primary = Some("#0d9488".into());
    light_config.colors.primary_hover = Some("#0f766e".into());
    light_config.colors.primary_foreground = Some("#ffffff".into());
    light_config.colors.secondary = Some("#f1f5f9".into());
    light_config.colors.secondary_hover = Some("#e2e8f0".into());
    light_config.colors.secondary_foreground = Some("#0f172a".into());

    let theme = Theme::global_mut(cx);
    theme.dark_theme = Rc::new(dark_config);
    theme.light_theme = Rc::new(light_config);

    if theme.mode.is_dark() {
        theme.apply_config(&theme.dark_theme.clone());
    } else {
        theme.apply_config(&theme.light_theme.clone());
    }
}

pub fn sidebar_color(cx: &App) -> Hsla {
    cx.theme().sidebar
}

pub fn titlebar_color(cx: &App) -> Hsla {
    cx.theme().title_bar
}

/// 状态提示框：成功
pub fn success_color(cx: &App) -> Hsla {
    cx.theme().success
}

/// 状态提示框：失败
pub fn failure_color(cx: &App) -> Hsla {
    cx.theme().danger
}
