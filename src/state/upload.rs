// 上传相关的异步操作

use gpui::{App, AppContext, Entity};
use tracing::{error, info};

use super::{spawn_api, AppState};
use crate::components::upload_form::UploadFormState;
use crate::i18n;
use crate::services::api::ApiManager;
use crate::services::upload::{apply_event, apply_form_error, build_request, run_upload};

/// 打开系统文件选择器（多选），结果写入上传表单
pub fn pick_files(state: Entity<AppState>, form: Entity<UploadFormState>, cx: &mut App) {
    let title = i18n::t(&state.read(cx).language, "upload.pick_files");

    cx.to_async()
        .spawn(async move |async_cx| {
            let picked = rfd::AsyncFileDialog::new()
                .set_title(title)
                .pick_files()
                .await;

            let Some(handles) = picked else {
                info!("[Upload] File selection cancelled");
                return;
            };

            let paths: Vec<_> = handles.iter().map(|h| h.path().to_path_buf()).collect();
            let _ = async_cx.update(|cx| {
                form.update(cx, |f, cx| {
                    f.set_files(paths);
                    cx.notify();
                });
            });
        })
        .detach();
}

/// 提交上传表单
/// 读取文件与发送请求都在 API 运行时执行，进度事件按顺序写入状态提示框
pub fn submit_upload(state: Entity<AppState>, form: Entity<UploadFormState>, cx: &mut App) {
    let (snapshot, mode) = form.read(cx).snapshot(cx);

    state.update(cx, |s, cx| {
        s.status.hide();
        cx.notify();
    });

    let built = match spawn_api(move |_api| build_request(snapshot, mode)) {
        Ok(receiver) => receiver,
        Err(e) => {
            error!("[Upload] {}", e);
            state.update(cx, |s, cx| {
                let text = i18n::upload_failed(&s.language, None);
                s.status.show_failure(text);
                cx.notify();
            });
            return;
        }
    };

    cx.to_async()
        .spawn(async move |async_cx| {
            let request = match built.await {
                Ok(Ok(request)) => request,
                Ok(Err(e)) => {
                    info!("[Upload] Form rejected: {}", e);
                    let _ = async_cx.update(|cx| {
                        state.update(cx, |s, cx| {
                            let lang = s.language;
                            apply_form_error(&mut s.status, &e, &lang);
                            cx.notify();
                        });
                    });
                    return;
                }
                Err(_) => {
                    error!("[Upload] Request builder was dropped");
                    return;
                }
            };

            let manager = ApiManager::global();
            let api = match manager.client() {
                Ok(api) => api,
                Err(e) => {
                    error!("[Upload] {}", e);
                    let _ = async_cx.update(|cx| {
                        state.update(cx, |s, cx| {
                            let text = i18n::upload_failed(&s.language, None);
                            s.status.show_failure(text);
                            cx.notify();
                        });
                    });
                    return;
                }
            };

            let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
            manager.runtime().spawn(run_upload(api, request, tx));

            while let Some(event) = rx.recv().await {
                let _ = async_cx.update(|cx| {
                    state.update(cx, |s, cx| {
                        let lang = s.language;
                        apply_event(&mut s.status, &event, &lang);
                        cx.notify();
                    });
                });
            }
        })
        .detach();
}
