// 状态提示框组件

use gpui::*;
use gpui_component::ActiveTheme;

use crate::components::common::icon::render_icon;
use crate::constants::icons;
use crate::models::status::{StatusDisplay, StatusKind};

/// 隐藏时返回 None
pub fn render_status_box(
    status: &StatusDisplay,
    on_dismiss: impl Fn(&mut App) + 'static,
    cx: &App,
) -> Option<AnyElement> {
    let kind = status.kind()?;
    let text = status.text()?.to_string();

    let (accent, icon) = match kind {
        StatusKind::Success => (crate::theme::success_color(cx), icons::CHECK),
        StatusKind::Failure => (crate::theme::failure_color(cx), icons::X),
    };

    Some(
        div()
            .id("status-box")
            .w_full()
            .px_4()
            .py_3()
            .rounded_md()
            .border_1()
            .border_color(accent)
            .bg(accent.opacity(0.12))
            .flex()
            .items_center()
            .gap_3()
            .child(render_icon(icon, accent))
            .child(
                div()
                    .flex_1()
                    .text_sm()
                    .text_color(cx.theme().foreground)
                    .child(text),
            )
            .child(
                div()
                    .id("status-box-dismiss")
                    .cursor_pointer()
                    .on_click(move |_, _, cx| on_dismiss(cx))
                    .child(render_icon(icons::X, cx.theme().muted_foreground)),
            )
            .into_any_element(),
    )
}
