// aQaSend - 文件分享桌面客户端
// 应用入口

// Windows 下 release 模式隐藏终端窗口
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use gpui::*;
use gpui_component::Root;

mod components;
mod constants;
mod i18n;
mod keybindings;
mod models;
mod pages;
mod services;
mod state;
mod theme;

use components::upload_form::UploadFormState;
use pages::HomePage;
use services::api::ApiManager;
use services::storage;
use state::AppState;

fn main() {
    // 通过 RUST_LOG 控制日志级别，例如 RUST_LOG=debug
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_target(false)
        .init();

    let app = Application::new().with_assets(gpui_component_assets::Assets);

    // 点击 Dock/任务栏图标时恢复窗口
    app.on_reopen(|cx| {
        cx.activate(true);
    });

    app.run(|cx: &mut App| {
        // gpui-component 必须先于任何组件初始化
        gpui_component::init(cx);
        crate::keybindings::init(cx);

        let settings = storage::load_effective_settings();
        if let Err(e) = ApiManager::global().configure(&settings.api) {
            // 客户端未就绪时列表显示为空，上传会报错
            tracing::error!("[App] {}", e);
        }

        crate::theme::apply_mode(&settings.theme.mode, cx);
        crate::theme::init(cx);

        let upload_form = match UploadFormState::new() {
            Ok(form) => form,
            Err(e) => {
                tracing::error!("[App] Failed to build upload form: {}", e);
                cx.quit();
                return;
            }
        };

        let app_state = cx.new(|_| AppState::new(&settings));
        state::load_current_user(app_state.clone(), cx);

        let bounds = Bounds::centered(None, size(px(1000.), px(720.)), cx);
        let opened = cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                titlebar: Some(TitlebarOptions {
                    title: Some("aQaSend".into()),
                    ..Default::default()
                }),
                ..Default::default()
            },
            |window, cx| {
                let view = cx.new(|cx| HomePage::new(app_state, upload_form, cx));
                // gpui-component 要求用 Root 包装视图
                cx.new(|cx| Root::new(view, window, cx))
            },
        );

        if let Err(e) = opened {
            tracing::error!("[App] Failed to open window: {:#}", e);
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
