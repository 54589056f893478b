// 主页左侧菜单栏

use gpui::*;
use gpui_component::ActiveTheme;

use crate::components::common::icon::render_icon;
use crate::constants::icons;
use crate::i18n;
use crate::models::file_list::ListScope;
use crate::models::settings::Language;

/// 菜单类型
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuType {
    Upload,
    AllFiles,
    MyFiles,
}

impl MenuType {
    pub const ALL: [MenuType; 3] = [MenuType::Upload, MenuType::AllFiles, MenuType::MyFiles];

    pub fn id(&self) -> &'static str {
        match self {
            MenuType::Upload => "menu-upload",
            MenuType::AllFiles => "menu-all-files",
            MenuType::MyFiles => "menu-my-files",
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            MenuType::Upload => "nav.upload",
            MenuType::AllFiles => "nav.all_files",
            MenuType::MyFiles => "nav.my_files",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            MenuType::Upload => icons::UPLOAD,
            MenuType::AllFiles => icons::GLOBE,
            MenuType::MyFiles => icons::FOLDER,
        }
    }

    /// 文件列表页面对应的范围
    pub fn list_scope(&self) -> Option<ListScope> {
        match self {
            MenuType::Upload => None,
            MenuType::AllFiles => Some(ListScope::All),
            MenuType::MyFiles => Some(ListScope::Mine),
        }
    }
}

/// 侧边栏状态
pub struct SidebarState {
    pub selected_menu: MenuType,
}

/// 渲染侧边栏
/// on_select 在菜单切换后调用，用于触发列表加载
pub fn render_sidebar(
    state: Entity<SidebarState>,
    selected_menu: MenuType,
    lang: &Language,
    on_select: impl Fn(MenuType, &mut App) + Clone + 'static,
    cx: &App,
) -> impl IntoElement {
    div()
        .w(px(200.))
        .h_full()
        .bg(crate::theme::sidebar_color(cx))
        .border_r_1()
        .border_color(cx.theme().border)
        .flex()
        .flex_col()
        .child(
            div()
                .h(px(44.))
                .px_4()
                .flex()
                .items_center()
                .text_lg()
                .font_weight(FontWeight::BOLD)
                .text_color(cx.theme().primary)
                .child("aQaSend"),
        )
        .child(
            div()
                .p_2()
                .flex()
                .flex_col()
                .gap_1()
                .children(MenuType::ALL.into_iter().map(|menu| {
                    render_menu_item(
                        menu,
                        selected_menu,
                        state.clone(),
                        lang,
                        on_select.clone(),
                        cx,
                    )
                })),
        )
}

fn render_menu_item(
    menu: MenuType,
    selected_menu: MenuType,
    state: Entity<SidebarState>,
    lang: &Language,
    on_select: impl Fn(MenuType, &mut App) + 'static,
    cx: &App,
) -> impl IntoElement {
    let selected = selected_menu == menu;
    let theme = cx.theme();
    let bg_color = if selected {
        theme.list_hover
    } else {
        gpui::transparent_black()
    };
    let hover_bg = theme.list_hover;
    let color = if selected {
        theme.primary
    } else {
        theme.foreground
    };

    div()
        .id(menu.id())
        .px_3()
        .py_2()
        .rounded_md()
        .bg(bg_color)
        .hover(move |s| s.bg(hover_bg))
        .cursor_pointer()
        .flex()
        .items_center()
        .gap_2()
        .on_click(move |_event, _window, cx| {
            cx.update_entity(&state, |s, cx| {
                s.selected_menu = menu;
                cx.notify();
            });
            on_select(menu, cx);
        })
        .child(render_icon(menu.icon(), color))
        .child(
            div()
                .text_sm()
                .text_color(color)
                .child(i18n::t(lang, menu.label_key())),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::prelude::v1::test;

    #[test]
    fn only_file_pages_have_a_scope() {
        assert_eq!(MenuType::Upload.list_scope(), None);
        assert_eq!(MenuType::AllFiles.list_scope(), Some(ListScope::All));
        assert_eq!(MenuType::MyFiles.list_scope(), Some(ListScope::Mine));
    }
}
