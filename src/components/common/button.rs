// 按钮与选项标签

use gpui::*;
use gpui_component::ActiveTheme;

/// 主按钮
pub fn primary_button(
    id: impl Into<ElementId>,
    label: impl Into<SharedString>,
    cx: &App,
    on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> Stateful<Div> {
    let hover_bg = cx.theme().primary_hover;
    div()
        .id(id)
        .px_4()
        .py_2()
        .bg(cx.theme().primary)
        .rounded_md()
        .cursor_pointer()
        .hover(move |s| s.bg(hover_bg))
        .on_click(on_click)
        .child(
            div()
                .text_sm()
                .text_color(cx.theme().primary_foreground)
                .child(label.into()),
        )
}

/// 次要按钮
pub fn secondary_button(
    id: impl Into<ElementId>,
    label: impl Into<SharedString>,
    cx: &App,
    on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> Stateful<Div> {
    let hover_bg = cx.theme().secondary_hover;
    div()
        .id(id)
        .px_4()
        .py_2()
        .bg(cx.theme().secondary)
        .border_1()
        .border_color(cx.theme().border)
        .rounded_md()
        .cursor_pointer()
        .hover(move |s| s.bg(hover_bg))
        .on_click(on_click)
        .child(
            div()
                .text_sm()
                .text_color(cx.theme().secondary_foreground)
                .child(label.into()),
        )
}

/// 单选选项标签
pub fn chip(
    id: impl Into<ElementId>,
    label: impl Into<SharedString>,
    selected: bool,
    cx: &App,
    on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> Stateful<Div> {
    let (bg, fg, border) = if selected {
        (
            cx.theme().primary,
            cx.theme().primary_foreground,
            cx.theme().primary,
        )
    } else {
        (
            cx.theme().background,
            cx.theme().foreground,
            cx.theme().border,
        )
    };
    let hover_bg = if selected {
        cx.theme().primary_hover
    } else {
        cx.theme().list_hover
    };

    div()
        .id(id)
        .px_3()
        .py_1()
        .rounded_md()
        .border_1()
        .border_color(border)
        .bg(bg)
        .cursor_pointer()
        .hover(move |s| s.bg(hover_bg))
        .on_click(on_click)
        .child(div().text_xs().text_color(fg).child(label.into()))
}
