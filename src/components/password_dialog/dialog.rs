// 密码弹窗渲染组件

use gpui::*;
use gpui_component::input::Input;
use gpui_component::ActiveTheme;

use super::state::PasswordDialogState;
use crate::components::common::button::{primary_button, secondary_button};
use crate::components::common::icon::render_icon;
use crate::constants::icons;
use crate::i18n;
use crate::models::settings::Language;

/// 渲染密码弹窗覆盖层
pub fn render_password_dialog_overlay(
    state: Entity<PasswordDialogState>,
    lang: &Language,
    cx: &App,
) -> impl IntoElement {
    let state_read = state.read(cx);
    let filename = state_read.pending_filename().unwrap_or_default().to_string();
    let input = state_read.input().cloned();

    let state_key = state.clone();
    let state_cancel = state.clone();
    let state_confirm = state;

    let foreground = cx.theme().foreground;
    let muted_foreground = cx.theme().muted_foreground;

    div()
        .id("password-dialog-overlay")
        .absolute()
        .top_0()
        .left_0()
        .size_full()
        .bg(gpui::black().opacity(0.5))
        .flex()
        .items_center()
        .justify_center()
        .key_context("PasswordDialog")
        .on_key_down(move |event, window, cx| {
            if event.keystroke.key.as_str() == "escape" {
                state_key.update(cx, |s, cx| s.cancel(window, cx));
                cx.stop_propagation();
            }
        })
        .on_mouse_down(MouseButton::Left, move |_, _, cx| {
            cx.stop_propagation();
        })
        .child(
            div()
                .w(px(400.))
                .bg(cx.theme().popover)
                .rounded_lg()
                .border_1()
                .border_color(cx.theme().border)
                .p_6()
                .flex()
                .flex_col()
                .gap_4()
                .child(
                    div()
                        .flex()
                        .items_center()
                        .gap_2()
                        .child(render_icon(icons::LOCK, foreground))
                        .child(
                            div()
                                .text_lg()
                                .font_weight(FontWeight::BOLD)
                                .text_color(foreground)
                                .child(i18n::t(lang, "password.title")),
                        ),
                )
                .child(
                    div()
                        .text_sm()
                        .text_color(muted_foreground)
                        .child(i18n::password_prompt(lang, &filename)),
                )
                .child(match &input {
                    Some(input) => Input::new(input).into_any_element(),
                    None => div()
                        .text_sm()
                        .text_color(muted_foreground)
                        .child(i18n::t(lang, "common.loading"))
                        .into_any_element(),
                })
                .child(
                    div()
                        .flex()
                        .justify_end()
                        .gap_3()
                        .pt_2()
                        .child(secondary_button(
                            "password-cancel-btn",
                            i18n::t(lang, "common.cancel"),
                            cx,
                            move |_, window, cx| {
                                state_cancel.update(cx, |s, cx| s.cancel(window, cx));
                            },
                        ))
                        .child(primary_button(
                            "password-confirm-btn",
                            i18n::t(lang, "common.confirm"),
                            cx,
                            move |_, window, cx| {
                                state_confirm.update(cx, |s, cx| s.confirm(window, cx));
                            },
                        )),
                ),
        )
}
