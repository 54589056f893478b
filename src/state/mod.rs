// 全局 AppState 模块
// 按功能拆分为多个子模块

mod files;
mod upload;

pub use files::{delete_entry, download_entry, load_current_user, load_files};
pub use upload::{pick_files, submit_upload};

use std::collections::HashSet;
use std::future::Future;
use std::sync::Arc;

use tokio::sync::oneshot;
use tracing::warn;

use crate::models::file_list::{FileList, ListScope};
use crate::models::settings::{AppSettings, Language};
use crate::models::status::StatusDisplay;
use crate::services::api::{ApiError, ApiManager, FileApi};
use crate::services::storage;

/// 窗口共享状态
pub struct AppState {
    pub language: Language,
    /// whoami 返回的用户名
    pub current_user: Option<String>,
    /// 整个窗口共用一个状态提示框
    pub status: StatusDisplay,
    all_files: FileList,
    my_files: FileList,
    loading: HashSet<ListScope>,
    /// 加载期间又请求了刷新的列表
    reload_pending: HashSet<ListScope>,
}

impl AppState {
    pub fn new(settings: &AppSettings) -> Self {
        Self {
            language: settings.theme.language,
            current_user: None,
            status: StatusDisplay::new(),
            all_files: FileList::new(ListScope::All),
            my_files: FileList::new(ListScope::Mine),
            loading: HashSet::new(),
            reload_pending: HashSet::new(),
        }
    }

    pub fn list(&self, scope: ListScope) -> &FileList {
        match scope {
            ListScope::All => &self.all_files,
            ListScope::Mine => &self.my_files,
        }
    }

    pub fn list_mut(&mut self, scope: ListScope) -> &mut FileList {
        match scope {
            ListScope::All => &mut self.all_files,
            ListScope::Mine => &mut self.my_files,
        }
    }

    pub fn is_loading(&self, scope: ListScope) -> bool {
        self.loading.contains(&scope)
    }

    /// 开始加载；已在加载时记下一次补刷新并返回 false
    pub fn begin_load(&mut self, scope: ListScope) -> bool {
        if self.loading.insert(scope) {
            true
        } else {
            self.reload_pending.insert(scope);
            false
        }
    }

    /// 结束加载；返回是否需要补一次刷新
    pub fn finish_load(&mut self, scope: ListScope) -> bool {
        self.loading.remove(&scope);
        self.reload_pending.remove(&scope)
    }

    /// 切换界面语言并写回设置文件
    pub fn toggle_language(&mut self) {
        self.language = match self.language {
            Language::Chinese => Language::English,
            Language::English => Language::Chinese,
        };
        let mut settings = storage::load_settings().unwrap_or_default();
        settings.theme.language = self.language;
        if let Err(e) = storage::save_settings(&settings) {
            warn!("[Settings] 保存语言设置失败: {:#}", e);
        }
    }
}

/// 在 API 运行时执行任务，结果通过 oneshot 送回 UI
pub(crate) fn spawn_api<T, F, Fut>(task: F) -> Result<oneshot::Receiver<T>, ApiError>
where
    F: FnOnce(Arc<dyn FileApi>) -> Fut + Send + 'static,
    Fut: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    let manager = ApiManager::global();
    let api = manager.client()?;
    let (tx, rx) = oneshot::channel();
    manager.runtime().spawn(async move {
        let _ = tx.send(task(api).await);
    });
    Ok(rx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reload_during_load_is_queued_once() {
        let mut state = AppState::new(&AppSettings::default());
        assert!(state.begin_load(ListScope::Mine));
        assert!(state.is_loading(ListScope::Mine));

        // 刷新按钮和删除后的重载同时到达
        assert!(!state.begin_load(ListScope::Mine));
        assert!(!state.begin_load(ListScope::Mine));
        // 其它列表不受影响
        assert!(state.begin_load(ListScope::All));

        assert!(state.finish_load(ListScope::Mine));
        assert!(!state.is_loading(ListScope::Mine));

        // 补刷新完成后不再重复
        assert!(state.begin_load(ListScope::Mine));
        assert!(!state.finish_load(ListScope::Mine));
        assert!(!state.finish_load(ListScope::All));
    }
}
