// 标题栏组件

use gpui::*;
use gpui_component::ActiveTheme;

use crate::components::common::icon::render_icon;
use crate::constants::icons;
use crate::i18n;
use crate::state::AppState;

/// 渲染标题栏：左侧当前用户，右侧语言切换
pub fn render_titlebar(app_state: Entity<AppState>, cx: &App) -> impl IntoElement {
    let app = app_state.read(cx);
    let lang = app.language;
    let bg = crate::theme::titlebar_color(cx);
    let border = cx.theme().title_bar_border;
    let muted = cx.theme().muted_foreground;
    let hover_bg = cx.theme().list_hover;

    let user_text = match &app.current_user {
        Some(name) => i18n::signed_in_as(&lang, name.trim()),
        None => i18n::t(&lang, "titlebar.guest").to_string(),
    };

    div()
        .h(px(44.))
        .w_full()
        .bg(bg)
        .border_b_1()
        .border_color(border)
        .flex()
        .items_center()
        .px_4()
        .justify_between()
        .child(
            div()
                .flex()
                .items_center()
                .gap_2()
                .child(render_icon(icons::USER, muted))
                .child(div().text_sm().text_color(muted).child(user_text)),
        )
        .child(
            div()
                .id("titlebar-language-btn")
                .px_2()
                .py_1()
                .rounded_md()
                .cursor_pointer()
                .hover(move |s| s.bg(hover_bg))
                .flex()
                .items_center()
                .gap_1()
                .on_click(move |_, _, cx| {
                    app_state.update(cx, |s, cx| {
                        s.toggle_language();
                        cx.notify();
                    });
                })
                .child(render_icon(icons::LANGUAGE, muted))
                .child(
                    div()
                        .text_sm()
                        .text_color(muted)
                        .child(i18n::t(&lang, "titlebar.switch_language")),
                ),
        )
}
