// 文件列表组件
// "所有文件"和"我的文件"共用，删除按钮只在可删除的条目上出现

use gpui::*;
use gpui_component::ActiveTheme;

use crate::components::common::button::{primary_button, secondary_button};
use crate::components::common::icon::{render_icon, render_small_icon};
use crate::components::password_dialog::PasswordDialogState;
use crate::components::status_box::render_status_box;
use crate::constants::icons;
use crate::i18n;
use crate::models::file_list::{FileEntryView, ListScope};
use crate::models::settings::Language;
use crate::state::{delete_entry, download_entry, load_files, AppState};

pub fn render_file_list(
    app_state: Entity<AppState>,
    dialog: Entity<PasswordDialogState>,
    scope: ListScope,
    cx: &App,
) -> impl IntoElement {
    let app = app_state.read(cx);
    let lang = app.language;
    let list = app.list(scope);
    let loading = app.is_loading(scope);
    let muted = cx.theme().muted_foreground;

    let title = match scope {
        ListScope::All => i18n::t(&lang, "nav.all_files"),
        ListScope::Mine => i18n::t(&lang, "nav.my_files"),
    };

    let app_for_refresh = app_state.clone();
    let header = div()
        .flex()
        .items_center()
        .justify_between()
        .child(
            div()
                .text_xl()
                .font_weight(FontWeight::BOLD)
                .text_color(cx.theme().foreground)
                .child(title),
        )
        .child(secondary_button(
            SharedString::from(format!("files-refresh-{:?}", scope)),
            i18n::t(&lang, "files.refresh"),
            cx,
            move |_, _, cx| {
                load_files(app_for_refresh.clone(), scope, cx);
            },
        ));

    let app_for_dismiss = app_state.clone();
    let status = render_status_box(
        &app.status,
        move |cx| {
            app_for_dismiss.update(cx, |s, cx| {
                s.status.hide();
                cx.notify();
            });
        },
        cx,
    );

    // 未登录时"我的文件"只给提示
    let guest_hint = (scope == ListScope::Mine && app.current_user.is_none()).then(|| {
        div()
            .text_sm()
            .text_color(muted)
            .child(i18n::t(&lang, "files.mine.guest_hint"))
    });

    let body: AnyElement = if loading {
        render_placeholder(i18n::t(&lang, "common.loading"), muted).into_any_element()
    } else if list.is_empty() {
        render_placeholder(i18n::t(&lang, "files.empty"), muted).into_any_element()
    } else {
        div()
            .flex()
            .flex_col()
            .gap_2()
            .children(list.entries().iter().enumerate().map(|(index, entry)| {
                render_entry(
                    app_state.clone(),
                    dialog.clone(),
                    scope,
                    index,
                    entry,
                    &lang,
                    cx,
                )
            }))
            .into_any_element()
    };

    div()
        .id(SharedString::from(format!("file-list-scroll-{:?}", scope)))
        .size_full()
        .overflow_y_scroll()
        .p_6()
        .flex()
        .flex_col()
        .gap_4()
        .child(header)
        .children(status)
        .children(guest_hint)
        .child(body)
}

fn render_placeholder(text: &'static str, color: Hsla) -> impl IntoElement {
    div()
        .py_8()
        .flex()
        .justify_center()
        .text_sm()
        .text_color(color)
        .child(text)
}

fn render_badge(icon: &'static str, text: &'static str, color: Hsla) -> impl IntoElement {
    div()
        .px_2()
        .py_0p5()
        .rounded_sm()
        .border_1()
        .border_color(color)
        .flex()
        .items_center()
        .gap_1()
        .child(render_small_icon(icon, color))
        .child(div().text_xs().text_color(color).child(text))
}

fn render_entry(
    app_state: Entity<AppState>,
    dialog: Entity<PasswordDialogState>,
    scope: ListScope,
    index: usize,
    entry: &FileEntryView,
    lang: &Language,
    cx: &App,
) -> impl IntoElement {
    let foreground = cx.theme().foreground;
    let muted = cx.theme().muted_foreground;
    let list_hover = cx.theme().list_hover;

    let meta = format!(
        "{}: {}  ·  {}: {}  ·  {}: {}",
        i18n::t(lang, "files.lifetime"),
        entry.lifetime_text,
        i18n::t(lang, "files.uploaded"),
        entry.upload_date_text,
        i18n::t(lang, "files.downloads"),
        entry.download_count_text,
    );

    let app_for_download = app_state.clone();
    let file_id = entry.id.clone();
    let download = primary_button(
        SharedString::from(format!("file-download-{:?}-{}", scope, index)),
        i18n::t(lang, "files.download"),
        cx,
        move |_, _, cx| {
            download_entry(
                app_for_download.clone(),
                dialog.clone(),
                scope,
                file_id.clone(),
                cx,
            );
        },
    );

    let delete = entry.can_delete.then(|| {
        let file_id = entry.id.clone();
        let filename = entry.filename.clone();
        secondary_button(
            SharedString::from(format!("file-delete-{:?}-{}", scope, index)),
            i18n::t(lang, "files.delete"),
            cx,
            move |_, _, cx| {
                delete_entry(app_state.clone(), file_id.clone(), filename.clone(), cx);
            },
        )
    });

    div()
        .id(SharedString::from(format!("file-row-{:?}-{}", scope, index)))
        .px_4()
        .py_3()
        .rounded_md()
        .border_1()
        .border_color(cx.theme().border)
        .hover(move |s| s.bg(list_hover))
        .flex()
        .items_center()
        .gap_3()
        .child(render_icon(icons::FILE, muted))
        .child(
            div()
                .flex_1()
                .min_w_0()
                .flex()
                .flex_col()
                .gap_1()
                .child(
                    div()
                        .flex()
                        .items_center()
                        .gap_2()
                        .child(
                            div()
                                .text_sm()
                                .font_weight(FontWeight::MEDIUM)
                                .text_color(foreground)
                                .truncate()
                                .child(entry.filename.clone()),
                        )
                        .children(entry.is_private.then(|| {
                            render_badge(icons::USER, i18n::t(lang, "files.private"), muted)
                        }))
                        .children(entry.password_protected.then(|| {
                            render_badge(icons::LOCK, i18n::t(lang, "files.protected"), muted)
                        })),
                )
                .child(div().text_xs().text_color(muted).child(meta)),
        )
        .child(
            div()
                .flex()
                .items_center()
                .gap_2()
                .child(download)
                .children(delete),
        )
}
