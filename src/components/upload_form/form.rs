// 上传表单渲染组件

use gpui::*;
use gpui_component::input::Input;
use gpui_component::ActiveTheme;

use super::state::UploadFormState;
use crate::components::common::button::{chip, primary_button, secondary_button};
use crate::components::common::icon::render_icon;
use crate::components::status_box::render_status_box;
use crate::components::tabs_view::render_tab_header;
use crate::constants::icons;
use crate::i18n;
use crate::models::file_record::Visibility;
use crate::models::settings::Language;
use crate::models::upload::{DownloadLimit, LifetimePolicy, UploadMode};
use crate::state::{pick_files, submit_upload, AppState};

pub fn render_upload_form(
    app_state: Entity<AppState>,
    form: Entity<UploadFormState>,
    cx: &App,
) -> impl IntoElement {
    let app = app_state.read(cx);
    let lang = app.language;
    let state = form.read(cx);
    let mode = *state.tabs.current_label();

    let form_for_tabs = form.clone();
    let tab_header = render_tab_header(
        "upload-tab",
        &state.tabs,
        move |m| {
            let key = match m {
                UploadMode::Files => "upload.tab.files",
                UploadMode::Text => "upload.tab.text",
            };
            i18n::t(&lang, key).into()
        },
        move |m, cx| {
            form_for_tabs.update(cx, |f, cx| {
                f.tabs.activate(&m);
                cx.notify();
            });
        },
        cx,
    );

    // 只渲染当前标签的内容
    let panel = match mode {
        UploadMode::Files => {
            render_files_panel(app_state.clone(), form.clone(), state, &lang, cx).into_any_element()
        }
        UploadMode::Text => render_text_panel(state, &lang, cx).into_any_element(),
    };

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

    let app_for_submit = app_state.clone();
    let form_for_submit = form.clone();

    div()
        .id("upload-form-scroll")
        .size_full()
        .overflow_y_scroll()
        .p_6()
        .flex()
        .flex_col()
        .gap_5()
        .child(
            div()
                .text_xl()
                .font_weight(FontWeight::BOLD)
                .text_color(cx.theme().foreground)
                .child(i18n::t(&lang, "upload.title")),
        )
        .child(tab_header)
        .child(panel)
        .child(render_options(form.clone(), state, &lang, cx))
        .child(
            div()
                .flex()
                .flex_col()
                .gap_2()
                .child(render_label(i18n::t(&lang, "upload.password"), cx))
                .children(state.password_input.as_ref().map(|i| Input::new(i))),
        )
        .child(
            div().flex().child(primary_button(
                "upload-submit-btn",
                i18n::t(&lang, "upload.submit"),
                cx,
                move |_, _, cx| {
                    submit_upload(app_for_submit.clone(), form_for_submit.clone(), cx);
                },
            )),
        )
        .children(status)
}

fn render_label(text: &'static str, cx: &App) -> impl IntoElement {
    div()
        .text_sm()
        .text_color(cx.theme().muted_foreground)
        .child(text)
}

fn render_files_panel(
    app_state: Entity<AppState>,
    form: Entity<UploadFormState>,
    state: &UploadFormState,
    lang: &Language,
    cx: &App,
) -> impl IntoElement {
    let form_for_pick = form.clone();
    let form_for_clear = form;
    let muted = cx.theme().muted_foreground;
    let foreground = cx.theme().foreground;

    let file_rows: Vec<AnyElement> = if state.files.is_empty() {
        vec![div()
            .text_sm()
            .text_color(muted)
            .child(i18n::t(lang, "upload.no_files_selected"))
            .into_any_element()]
    } else {
        state
            .files
            .iter()
            .map(|file| {
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(render_icon(icons::FILE, muted))
                    .child(
                        div()
                            .text_sm()
                            .text_color(foreground)
                            .child(file.name.clone()),
                    )
                    .into_any_element()
            })
            .collect()
    };

    div()
        .flex()
        .flex_col()
        .gap_3()
        .child(
            div()
                .flex()
                .gap_2()
                .child(secondary_button(
                    "upload-pick-btn",
                    i18n::t(lang, "upload.pick_files"),
                    cx,
                    move |_, _, cx| {
                        pick_files(app_state.clone(), form_for_pick.clone(), cx);
                    },
                ))
                .children((!state.files.is_empty()).then(|| {
                    secondary_button(
                        "upload-clear-btn",
                        i18n::t(lang, "upload.clear_files"),
                        cx,
                        move |_, _, cx| {
                            form_for_clear.update(cx, |f, cx| {
                                f.clear_files();
                                cx.notify();
                            });
                        },
                    )
                })),
        )
        .child(
            div()
                .p_3()
                .rounded_md()
                .border_1()
                .border_color(cx.theme().border)
                .flex()
                .flex_col()
                .gap_1()
                .children(file_rows),
        )
}

fn render_text_panel(state: &UploadFormState, lang: &Language, cx: &App) -> impl IntoElement {
    div()
        .flex()
        .flex_col()
        .gap_3()
        .child(
            div()
                .flex()
                .flex_col()
                .gap_2()
                .child(render_label(i18n::t(lang, "upload.text.filename"), cx))
                .children(state.filename_input.as_ref().map(|i| Input::new(i))),
        )
        .children(state.text_input.as_ref().map(|i| Input::new(i)))
}

fn render_options(
    form: Entity<UploadFormState>,
    state: &UploadFormState,
    lang: &Language,
    cx: &App,
) -> impl IntoElement {
    let visibility_chips = Visibility::ALL.into_iter().enumerate().map(|(i, v)| {
        let form = form.clone();
        let label = match v {
            Visibility::Public => i18n::t(lang, "upload.visibility.public"),
            Visibility::Private => i18n::t(lang, "upload.visibility.private"),
        };
        chip(
            SharedString::from(format!("visibility-{}", i)),
            label,
            state.visibility == v,
            cx,
            move |_, _, cx| {
                form.update(cx, |f, cx| {
                    f.visibility = v;
                    cx.notify();
                });
            },
        )
    });

    let count_chips = DownloadLimit::ALL.into_iter().enumerate().map(|(i, limit)| {
        let form = form.clone();
        let label: SharedString = match limit {
            DownloadLimit::Infinite => i18n::t(lang, "upload.download_count.infinite").into(),
            other => other.directive().into(),
        };
        chip(
            SharedString::from(format!("download-count-{}", i)),
            label,
            state.download_limit == limit,
            cx,
            move |_, _, cx| {
                form.update(cx, |f, cx| {
                    f.download_limit = limit;
                    cx.notify();
                });
            },
        )
    });

    let lifetime_chips = LifetimePolicy::ALL.into_iter().enumerate().map(|(i, policy)| {
        let form = form.clone();
        chip(
            SharedString::from(format!("lifetime-{}", i)),
            i18n::t(lang, policy.label_key()),
            state.lifetime == policy,
            cx,
            move |_, _, cx| {
                form.update(cx, |f, cx| {
                    f.lifetime = policy;
                    cx.notify();
                });
            },
        )
    });

    div()
        .flex()
        .flex_col()
        .gap_4()
        .child(render_option_row(
            i18n::t(lang, "upload.visibility"),
            visibility_chips,
            cx,
        ))
        .child(render_option_row(
            i18n::t(lang, "upload.download_count"),
            count_chips,
            cx,
        ))
        .child(render_option_row(
            i18n::t(lang, "upload.lifetime"),
            lifetime_chips,
            cx,
        ))
}

fn render_option_row(
    label: &'static str,
    chips: impl IntoIterator<Item = Stateful<Div>>,
    cx: &App,
) -> impl IntoElement {
    div()
        .flex()
        .flex_col()
        .gap_2()
        .child(render_label(label, cx))
        .child(div().flex().flex_wrap().gap_2().children(chips))
}
