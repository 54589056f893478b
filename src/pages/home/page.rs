// HomePage 主页组件

use gpui::*;
use gpui_component::ActiveTheme;

use super::sidebar::{render_sidebar, MenuType, SidebarState};
use super::titlebar::render_titlebar;
use crate::components::file_list::render_file_list;
use crate::components::password_dialog::{render_password_dialog_overlay, PasswordDialogState};
use crate::components::upload_form::{render_upload_form, UploadFormState};
use crate::state::{load_files, AppState};

/// 主页状态
pub struct HomePage {
    pub app_state: Entity<AppState>,
    pub upload_form: Entity<UploadFormState>,
    pub password_dialog: Entity<PasswordDialogState>,
    pub sidebar_state: Entity<SidebarState>,
}

impl HomePage {
    pub fn new(
        app_state: Entity<AppState>,
        upload_form: UploadFormState,
        cx: &mut Context<Self>,
    ) -> Self {
        let upload_form = cx.new(|_| upload_form);
        let password_dialog = cx.new(|_| PasswordDialogState::new());
        let sidebar_state = cx.new(|_| SidebarState {
            selected_menu: MenuType::Upload,
        });

        // 子状态变化时重新渲染整个页面
        cx.observe(&app_state, |_, _, cx| cx.notify()).detach();
        cx.observe(&upload_form, |_, _, cx| cx.notify()).detach();
        cx.observe(&password_dialog, |_, _, cx| cx.notify()).detach();
        cx.observe(&sidebar_state, |_, _, cx| cx.notify()).detach();

        Self {
            app_state,
            upload_form,
            password_dialog,
            sidebar_state,
        }
    }

    fn render_content(&self, selected_menu: MenuType, cx: &Context<Self>) -> AnyElement {
        match selected_menu.list_scope() {
            None => render_upload_form(self.app_state.clone(), self.upload_form.clone(), cx)
                .into_any_element(),
            Some(scope) => render_file_list(
                self.app_state.clone(),
                self.password_dialog.clone(),
                scope,
                cx,
            )
            .into_any_element(),
        }
    }
}

impl Render for HomePage {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let lang = self.app_state.read(cx).language;

        // 输入框需要 Window，只能在渲染时创建
        self.upload_form.update(cx, |form, cx| {
            form.ensure_inputs_created(&lang, window, cx);
        });
        self.password_dialog.update(cx, |dialog, cx| {
            dialog.ensure_input_created(&lang, window, cx);
        });

        let selected_menu = self.sidebar_state.read(cx).selected_menu;
        let dialog_open = self.password_dialog.read(cx).is_open();

        let app_for_select = self.app_state.clone();
        let on_select = move |menu: MenuType, cx: &mut App| {
            if let Some(scope) = menu.list_scope() {
                load_files(app_for_select.clone(), scope, cx);
            }
        };

        div()
            .size_full()
            .relative()
            .bg(cx.theme().background)
            .flex()
            .child(render_sidebar(
                self.sidebar_state.clone(),
                selected_menu,
                &lang,
                on_select,
                cx,
            ))
            .child(
                div()
                    .flex_1()
                    .h_full()
                    .flex()
                    .flex_col()
                    .child(render_titlebar(self.app_state.clone(), cx))
                    .child(
                        div()
                            .flex_1()
                            .min_h_0()
                            .child(self.render_content(selected_menu, cx)),
                    ),
            )
            .children(dialog_open.then(|| {
                render_password_dialog_overlay(self.password_dialog.clone(), &lang, cx)
            }))
    }
}
