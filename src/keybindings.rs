// 应用级快捷键

use gpui::{actions, App, KeyBinding};

actions!(aqasend, [Quit]);

/// 注册退出快捷键；Escape 由密码弹窗自己处理
pub fn init(cx: &mut App) {
    #[cfg(target_os = "macos")]
    cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);

    #[cfg(not(target_os = "macos"))]
    cx.bind_keys([KeyBinding::new("ctrl-q", Quit, None)]);

    cx.on_action(|_: &Quit, cx| {
        tracing::info!("[App] Quit requested");
        cx.quit();
    });
}
