// 文件条目操作：下载与删除

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::i18n;
use crate::models::challenge::{
    ChallengeError, ChallengeRequester, ChallengeTicket, PasswordChallenge,
};
use crate::models::file_list::{DownloadAction, FileEntryView};
use crate::models::settings::Language;
use crate::models::status::StatusDisplay;
use crate::services::api::{ApiError, FileApi};

/// 打开下载链接（系统浏览器）
pub trait LinkOpener: Send + Sync {
    fn open_link(&self, url: &str) -> std::io::Result<()>;
}

pub struct SystemOpener;

impl LinkOpener for SystemOpener {
    fn open_link(&self, url: &str) -> std::io::Result<()> {
        open::that(url)
    }
}

/// 点击下载后的结果
#[derive(Debug)]
pub enum DownloadStart {
    /// 已直接打开下载链接
    Opened,
    /// 等待用户输入密码
    AwaitingPassword(ChallengeTicket),
}

/// 开始下载：未加密直接打开，加密则弹出密码框
pub fn start_download(
    entry: &FileEntryView,
    challenge: &mut PasswordChallenge,
    opener: &dyn LinkOpener,
) -> Result<DownloadStart, ChallengeError> {
    match &entry.action {
        DownloadAction::Direct(url) => {
            open_logged(opener, url, &entry.id);
            Ok(DownloadStart::Opened)
        }
        DownloadAction::PasswordRequired => {
            let ticket = challenge.request_password(ChallengeRequester {
                file_id: entry.id.clone(),
                filename: entry.filename.clone(),
            })?;
            Ok(DownloadStart::AwaitingPassword(ticket))
        }
    }
}

/// 等待密码并打开带密码的下载链接；取消时返回 false
pub async fn finish_protected_download(
    api: Arc<dyn FileApi>,
    file_id: String,
    ticket: ChallengeTicket,
    opener: Arc<dyn LinkOpener>,
) -> bool {
    match ticket.wait().await {
        Some(password) => {
            let url = api.download_url(&file_id, Some(&password));
            open_logged(opener.as_ref(), &url, &file_id);
            true
        }
        None => {
            info!("[Files] Download of {} cancelled", file_id);
            false
        }
    }
}

fn open_logged(opener: &dyn LinkOpener, url: &str, file_id: &str) {
    info!("[Files] Opening download for {}", file_id);
    if let Err(e) = opener.open_link(url) {
        error!("[Files] Failed to open download link for {}: {}", file_id, e);
    }
}

/// 删除前的提示
pub fn apply_deleting(status: &mut StatusDisplay, filename: &str, lang: &Language) {
    status.show_success(i18n::deleting(lang, filename));
}

/// 删除结果提示；返回是否需要刷新列表
pub fn apply_delete_result(
    status: &mut StatusDisplay,
    result: &Result<(), ApiError>,
    lang: &Language,
) -> bool {
    match result {
        Ok(()) => {
            status.show_success(i18n::t(lang, "files.delete.success"));
            true
        }
        Err(e) => {
            warn!("[Files] Delete failed: {}", e);
            let text = e
                .server_message()
                .map(str::to_string)
                .unwrap_or_else(|| i18n::t(lang, "files.delete.failed").to_string());
            status.show_failure(text);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::file_list::{FileList, ListScope};
    use crate::models::status::StatusKind;
    use crate::models::upload::{UploadDirectives, UploadPayload};
    use crate::models::FileRecord;
    use crate::services::api::{ProgressSink, UploadOutcome};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct FakeApi;

    #[async_trait]
    impl FileApi for FakeApi {
        async fn list_files(&self, _only_mine: bool) -> Vec<FileRecord> {
            Vec::new()
        }

        async fn who_am_i(&self) -> Option<String> {
            None
        }

        async fn upload(
            &self,
            _payload: UploadPayload,
            _directives: &UploadDirectives,
            _progress: ProgressSink,
        ) -> Result<UploadOutcome, ApiError> {
            Ok(UploadOutcome::default())
        }

        fn download_url(&self, id: &str, password: Option<&str>) -> String {
            match password {
                Some(pw) => format!("http://host/api/download/{}?password={}", id, pw),
                None => format!("http://host/api/download/{}", id),
            }
        }

        async fn delete_file(&self, _id: &str) -> Result<(), ApiError> {
            Ok(())
        }
    }

    /// 统计打开次数的下载器
    #[derive(Default)]
    struct CountingOpener {
        opened: Mutex<Vec<String>>,
        calls: AtomicUsize,
    }

    impl LinkOpener for CountingOpener {
        fn open_link(&self, url: &str) -> std::io::Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.opened.lock().unwrap().push(url.to_string());
            Ok(())
        }
    }

    fn list() -> FileList {
        let records: Vec<FileRecord> = serde_json::from_str(
            r#"[
                {"id":"open1","filename":"a.txt","passwordProtected":false,"uploadDate":1700000000},
                {"id":"lock1","filename":"b.txt","passwordProtected":true,"uploadDate":1700000000},
                {"id":"lock2","filename":"c.txt","passwordProtected":true,"uploadDate":1700000000}
            ]"#,
        )
        .unwrap();
        let mut list = FileList::new(ListScope::All);
        list.render(&records, |id| FakeApi.download_url(id, None));
        list
    }

    #[tokio::test]
    async fn test_direct_download_opens_once() {
        let list = list();
        let opener = CountingOpener::default();
        let mut challenge = PasswordChallenge::new();

        let start = start_download(list.entry("open1").unwrap(), &mut challenge, &opener).unwrap();
        assert!(matches!(start, DownloadStart::Opened));
        assert!(!challenge.is_open());
        assert_eq!(
            *opener.opened.lock().unwrap(),
            vec!["http://host/api/download/open1".to_string()]
        );
    }

    #[tokio::test]
    async fn test_protected_download_waits_for_password() {
        let list = list();
        let opener = Arc::new(CountingOpener::default());
        let mut challenge = PasswordChallenge::new();

        let start =
            start_download(list.entry("lock1").unwrap(), &mut challenge, opener.as_ref()).unwrap();
        let DownloadStart::AwaitingPassword(ticket) = start else {
            panic!("expected a password challenge");
        };
        assert_eq!(opener.calls.load(Ordering::SeqCst), 0);

        challenge.confirm("pw");
        let opened = finish_protected_download(
            Arc::new(FakeApi),
            "lock1".to_string(),
            ticket,
            opener.clone(),
        )
        .await;
        assert!(opened);
        assert_eq!(opener.calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            opener.opened.lock().unwrap()[0],
            "http://host/api/download/lock1?password=pw"
        );
    }

    #[tokio::test]
    async fn test_cancelled_challenge_makes_no_request() {
        let list = list();
        let opener = Arc::new(CountingOpener::default());
        let mut challenge = PasswordChallenge::new();

        let start =
            start_download(list.entry("lock1").unwrap(), &mut challenge, opener.as_ref()).unwrap();
        let DownloadStart::AwaitingPassword(ticket) = start else {
            panic!("expected a password challenge");
        };
        challenge.cancel();
        let opened =
            finish_protected_download(Arc::new(FakeApi), "lock1".to_string(), ticket, opener.clone())
                .await;
        assert!(!opened);
        assert_eq!(opener.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_second_protected_entry_is_rejected_while_open() {
        let list = list();
        let opener = CountingOpener::default();
        let mut challenge = PasswordChallenge::new();

        let _first = start_download(list.entry("lock1").unwrap(), &mut challenge, &opener).unwrap();
        let second = start_download(list.entry("lock2").unwrap(), &mut challenge, &opener);
        assert!(matches!(second, Err(ChallengeError::Busy { .. })));
        assert_eq!(
            challenge.pending_requester().map(|r| r.file_id.as_str()),
            Some("lock1")
        );
    }

    #[test]
    fn test_delete_messages() {
        let mut status = StatusDisplay::new();
        apply_deleting(&mut status, "a.txt", &Language::English);
        assert_eq!(status.text(), Some("Deleting a.txt"));

        assert!(apply_delete_result(&mut status, &Ok(()), &Language::English));
        assert_eq!(status.kind(), Some(StatusKind::Success));
        assert_eq!(status.text(), Some("Deleted successfully"));

        let refused = Err(ApiError::Server {
            status: 403,
            message: Some("Not your file".to_string()),
        });
        assert!(!apply_delete_result(&mut status, &refused, &Language::English));
        assert_eq!(status.kind(), Some(StatusKind::Failure));
        assert_eq!(status.text(), Some("Not your file"));

        let silent = Err(ApiError::Transport("reset".to_string()));
        apply_delete_result(&mut status, &silent, &Language::English);
        assert_eq!(status.text(), Some("Failed to delete"));
    }
}
