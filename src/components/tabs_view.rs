// 标签头组件
// 只渲染标签头；标签内容由调用方按 current_label 渲染

use std::fmt::Debug;
use std::rc::Rc;

use gpui::*;
use gpui_component::ActiveTheme;

use crate::models::tabs::TabbedContainer;

pub fn render_tab_header<L>(
    id_prefix: &'static str,
    tabs: &TabbedContainer<L>,
    label_of: impl Fn(&L) -> SharedString,
    on_select: impl Fn(L, &mut App) + 'static,
    cx: &App,
) -> impl IntoElement
where
    L: Clone + PartialEq + Debug + 'static,
{
    let on_select = Rc::new(on_select);
    let active_color = cx.theme().primary;
    let idle_color = cx.theme().muted_foreground;

    div()
        .flex()
        .items_end()
        .gap_1()
        .border_b_1()
        .border_color(cx.theme().border)
        .children(tabs.tabs().iter().enumerate().map(|(index, label)| {
            let active = tabs.is_visible(label);
            let on_select = on_select.clone();
            let target = label.clone();

            div()
                .id(SharedString::from(format!("{}-{}", id_prefix, index)))
                .px_4()
                .py_2()
                .cursor_pointer()
                .border_b_2()
                .border_color(if active {
                    active_color
                } else {
                    gpui::transparent_black()
                })
                .on_click(move |_, _, cx| on_select(target.clone(), cx))
                .child(
                    div()
                        .text_sm()
                        .text_color(if active { active_color } else { idle_color })
                        .child(label_of(label)),
                )
        }))
}
