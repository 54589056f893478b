// 文件列表相关的异步操作
// 网络请求在 API 运行时执行，结果回到 GPUI 线程更新状态

use std::sync::Arc;

use gpui::{App, AppContext, Entity};
use tracing::{debug, error, warn};

use super::{spawn_api, AppState};
use crate::components::password_dialog::PasswordDialogState;
use crate::i18n;
use crate::models::challenge::ChallengeError;
use crate::models::file_list::ListScope;
use crate::services::api::ApiManager;
use crate::services::files::{
    apply_delete_result, apply_deleting, finish_protected_download, start_download,
    DownloadStart, SystemOpener,
};

/// 加载当前用户（whoami）
pub fn load_current_user(state: Entity<AppState>, cx: &mut App) {
    let receiver = match spawn_api(|api| async move { api.who_am_i().await }) {
        Ok(receiver) => receiver,
        Err(e) => {
            warn!("[Files] whoami skipped: {}", e);
            return;
        }
    };

    cx.to_async()
        .spawn(async move |async_cx| {
            let user = receiver.await.ok().flatten();
            debug!("[Files] Current user: {:?}", user);
            let _ = async_cx.update(|cx| {
                state.update(cx, |s, cx| {
                    s.current_user = user;
                    cx.notify();
                });
            });
        })
        .detach();
}

/// 加载文件列表；失败时显示为空列表
pub fn load_files(state: Entity<AppState>, scope: ListScope, cx: &mut App) {
    let started = state.update(cx, |s, cx| {
        let started = s.begin_load(scope);
        cx.notify();
        started
    });
    if !started {
        debug!("[Files] {:?} already loading, reload queued", scope);
        return;
    }

    let only_mine = scope.only_mine();
    let receiver = match spawn_api(move |api| async move { api.list_files(only_mine).await }) {
        Ok(receiver) => receiver,
        Err(e) => {
            warn!("[Files] Listing skipped: {}", e);
            state.update(cx, |s, cx| {
                s.finish_load(scope);
                s.list_mut(scope).clear();
                cx.notify();
            });
            return;
        }
    };

    cx.to_async()
        .spawn(async move |async_cx| {
            let files = receiver.await.unwrap_or_default();
            let _ = async_cx.update(|cx| {
                let api = ApiManager::global().client().ok();
                let reload = state.update(cx, |s, cx| {
                    let reload = s.finish_load(scope);
                    match api {
                        Some(api) => s
                            .list_mut(scope)
                            .render(&files, |id| api.download_url(id, None)),
                        None => s.list_mut(scope).clear(),
                    }
                    cx.notify();
                    reload
                });
                if reload {
                    load_files(state.clone(), scope, cx);
                }
            });
        })
        .detach();
}

/// 点击下载：未加密直接打开，加密则弹出密码框并等待结果
pub fn download_entry(
    state: Entity<AppState>,
    dialog: Entity<PasswordDialogState>,
    scope: ListScope,
    file_id: String,
    cx: &mut App,
) {
    let Some(entry) = state.read(cx).list(scope).entry(&file_id).cloned() else {
        warn!("[Files] Unknown entry {}", file_id);
        return;
    };

    let started = dialog.update(cx, |d, cx| {
        let result = start_download(&entry, d.challenge_mut(), &SystemOpener);
        if matches!(result, Ok(DownloadStart::AwaitingPassword(_))) {
            d.request_focus();
        }
        cx.notify();
        result
    });

    match started {
        Ok(DownloadStart::Opened) => {}
        Ok(DownloadStart::AwaitingPassword(ticket)) => {
            let api = match ApiManager::global().client() {
                Ok(api) => api,
                Err(e) => {
                    error!("[Files] {}", e);
                    return;
                }
            };
            // 只等待 oneshot，放在 GPUI 线程即可
            cx.to_async()
                .spawn(async move |_async_cx| {
                    finish_protected_download(api, file_id, ticket, Arc::new(SystemOpener)).await;
                })
                .detach();
        }
        Err(e) => {
            warn!("[Files] {}", e);
            let ChallengeError::Busy { pending } = e;
            state.update(cx, |s, cx| {
                let text = i18n::challenge_busy(&s.language, &pending);
                s.status.show_failure(text);
                cx.notify();
            });
        }
    }
}

/// 删除"我的文件"中的条目，成功后刷新列表
pub fn delete_entry(state: Entity<AppState>, file_id: String, filename: String, cx: &mut App) {
    state.update(cx, |s, cx| {
        let lang = s.language;
        apply_deleting(&mut s.status, &filename, &lang);
        cx.notify();
    });

    let id = file_id.clone();
    let receiver = match spawn_api(move |api| async move { api.delete_file(&id).await }) {
        Ok(receiver) => receiver,
        Err(e) => {
            state.update(cx, |s, cx| {
                let lang = s.language;
                apply_delete_result(&mut s.status, &Err(e), &lang);
                cx.notify();
            });
            return;
        }
    };

    cx.to_async()
        .spawn(async move |async_cx| {
            let result = match receiver.await {
                Ok(result) => result,
                Err(_) => {
                    error!("[Files] Delete task for {} was dropped", file_id);
                    return;
                }
            };
            let _ = async_cx.update(|cx| {
                let reload = state.update(cx, |s, cx| {
                    let lang = s.language;
                    let reload = apply_delete_result(&mut s.status, &result, &lang);
                    cx.notify();
                    reload
                });
                if reload {
                    load_files(state.clone(), ListScope::Mine, cx);
                }
            });
        })
        .detach();
}
