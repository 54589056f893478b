// 上传编排
// 表单 -> 请求 -> API -> 状态提示

use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;
use tracing::{error, info, warn};

use crate::i18n;
use crate::models::settings::Language;
use crate::models::status::StatusDisplay;
use crate::models::upload::{
    PayloadPart, UploadForm, UploadMode, UploadPayload, UploadProgress, UploadRequest,
};
use crate::services::api::{ApiError, FileApi, ProgressSink};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UploadFormError {
    #[error("no files selected")]
    NoFiles,
    #[error("file name is empty")]
    EmptyFileName,
    #[error("failed to read {name}: {message}")]
    ReadFile { name: String, message: String },
}

/// 上传过程中发回 UI 的事件，进度事件总在结束事件之前
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadEvent {
    Progress(u8),
    /// 成功时为上传的文件数
    Finished(Result<usize, ApiError>),
}

/// 按当前标签构建负载，未激活标签的输入被忽略
pub async fn build_request(
    form: UploadForm,
    mode: UploadMode,
) -> Result<UploadRequest, UploadFormError> {
    let directives = form.directives();
    let parts = match mode {
        UploadMode::Files => {
            let mut parts = Vec::with_capacity(form.files.len());
            for file in &form.files {
                let data = tokio::fs::read(&file.path).await.map_err(|e| {
                    UploadFormError::ReadFile {
                        name: file.name.clone(),
                        message: e.to_string(),
                    }
                })?;
                parts.push(PayloadPart::from_bytes(file.name.clone(), data));
            }
            parts
        }
        UploadMode::Text => {
            let name = form.text_file_name.trim();
            if name.is_empty() {
                return Err(UploadFormError::EmptyFileName);
            }
            vec![PayloadPart::from_text(name, &form.text)]
        }
    };
    let payload = UploadPayload::new(parts).ok_or(UploadFormError::NoFiles)?;
    Ok(UploadRequest::new(directives, payload))
}

/// 执行上传并通过 tx 发送进度与结果
pub async fn run_upload(
    api: Arc<dyn FileApi>,
    request: UploadRequest,
    tx: mpsc::UnboundedSender<UploadEvent>,
) {
    let UploadRequest {
        id,
        directives,
        payload,
    } = request;
    info!(
        "[Upload] {} starting: {} files, {} bytes",
        id,
        payload.len(),
        payload.total_bytes()
    );

    let progress = Arc::new(Mutex::new(UploadProgress::new()));
    let progress_tx = tx.clone();
    let sink: ProgressSink = Arc::new(move |sent, total| {
        let mut progress = progress.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(percent) = progress.advance(sent, total) {
            let _ = progress_tx.send(UploadEvent::Progress(percent));
        }
    });

    let result = api
        .upload(payload, &directives, sink)
        .await
        .map(|outcome| outcome.count());
    match &result {
        Ok(count) => info!("[Upload] {} finished: {} files", id, count),
        Err(ApiError::Server { status, .. }) => warn!("[Upload] {} rejected: {}", id, status),
        Err(e) => error!("[Upload] {} failed: {}", id, e),
    }
    let _ = tx.send(UploadEvent::Finished(result));
}

/// 把上传事件写入状态提示框（进度原地覆盖）
pub fn apply_event(status: &mut StatusDisplay, event: &UploadEvent, lang: &Language) {
    match event {
        UploadEvent::Progress(percent) => {
            status.show_success(i18n::upload_progress(lang, *percent));
        }
        UploadEvent::Finished(Ok(count)) => {
            status.show_success(i18n::upload_success(lang, *count));
        }
        UploadEvent::Finished(Err(e)) => {
            status.show_failure(i18n::upload_failed(lang, e.server_message()));
        }
    }
}

/// 表单校验失败时的提示
pub fn apply_form_error(status: &mut StatusDisplay, err: &UploadFormError, lang: &Language) {
    let text = match err {
        UploadFormError::NoFiles => i18n::t(lang, "upload.error.no_files").to_string(),
        UploadFormError::EmptyFileName => i18n::t(lang, "upload.error.no_filename").to_string(),
        UploadFormError::ReadFile { name, .. } => i18n::read_failed(lang, name),
    };
    status.show_failure(text);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::file_record::Visibility;
    use crate::models::status::StatusKind;
    use crate::models::tabs::TabbedContainer;
    use crate::models::upload::{DownloadLimit, LifetimePolicy, SelectedFile, UploadDirectives};
    use crate::models::FileRecord;
    use crate::services::api::{UploadOutcome, UploadedFile};
    use async_trait::async_trait;

    /// 记录上传内容，并按给定序列回报进度
    struct FakeApi {
        progress_steps: Vec<(u64, u64)>,
        result: Result<usize, ApiError>,
        received: Mutex<Vec<(UploadPayload, UploadDirectives)>>,
    }

    impl FakeApi {
        fn new(progress_steps: Vec<(u64, u64)>, result: Result<usize, ApiError>) -> Arc<Self> {
            Arc::new(Self {
                progress_steps,
                result,
                received: Mutex::new(Vec::new()),
            })
        }
    }

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
            payload: UploadPayload,
            directives: &UploadDirectives,
            progress: ProgressSink,
        ) -> Result<UploadOutcome, ApiError> {
            for (sent, total) in &self.progress_steps {
                progress(*sent, *total);
            }
            self.received
                .lock()
                .unwrap()
                .push((payload, directives.clone()));
            self.result.clone().map(|count| UploadOutcome {
                files: (0..count)
                    .map(|i| UploadedFile {
                        uuid: format!("u{}", i),
                        filename: format!("f{}", i),
                    })
                    .collect(),
            })
        }

        fn download_url(&self, id: &str, _password: Option<&str>) -> String {
            id.to_string()
        }

        async fn delete_file(&self, _id: &str) -> Result<(), ApiError> {
            Ok(())
        }
    }

    fn text_form(text: &str) -> UploadForm {
        UploadForm {
            text: text.to_string(),
            text_file_name: "note.txt".to_string(),
            ..Default::default()
        }
    }

    async fn drain(mut rx: mpsc::UnboundedReceiver<UploadEvent>) -> Vec<UploadEvent> {
        let mut events = Vec::new();
        while let Some(event) = rx.recv().await {
            events.push(event);
        }
        events
    }

    #[tokio::test]
    async fn test_text_mode_payload_is_utf8_of_text() {
        let mut form = text_form("zażółć gęślą jaźń");
        form.files = vec![SelectedFile::from_path("/does/not/exist.bin".into())];

        let tabs = TabbedContainer::new(vec![UploadMode::Files, UploadMode::Text], UploadMode::Text)
            .unwrap();
        let request = build_request(form, *tabs.current_label()).await.unwrap();

        let parts = request.payload.parts();
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].file_name, "note.txt");
        assert_eq!(parts[0].data, "zażółć gęślą jaźń".as_bytes());
    }

    #[tokio::test]
    async fn test_files_mode_keeps_names_and_order() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("b.bin");
        let second = dir.path().join("a.txt");
        std::fs::write(&first, [0u8, 159, 146, 150]).unwrap();
        std::fs::write(&second, b"hello").unwrap();

        let form = UploadForm {
            files: vec![
                SelectedFile::from_path(first),
                SelectedFile::from_path(second),
            ],
            text: "ignored".to_string(),
            ..Default::default()
        };
        let request = build_request(form, UploadMode::Files).await.unwrap();

        let names: Vec<&str> = request
            .payload
            .parts()
            .iter()
            .map(|p| p.file_name.as_str())
            .collect();
        assert_eq!(names, vec!["b.bin", "a.txt"]);
        assert_eq!(request.payload.parts()[0].data, vec![0u8, 159, 146, 150]);
    }

    #[tokio::test]
    async fn test_form_errors() {
        let err = build_request(UploadForm::default(), UploadMode::Files)
            .await
            .unwrap_err();
        assert_eq!(err, UploadFormError::NoFiles);

        let mut form = text_form("x");
        form.text_file_name = "  ".to_string();
        let err = build_request(form, UploadMode::Text).await.unwrap_err();
        assert_eq!(err, UploadFormError::EmptyFileName);

        let form = UploadForm {
            files: vec![SelectedFile::from_path("/does/not/exist.bin".into())],
            ..Default::default()
        };
        let err = build_request(form, UploadMode::Files).await.unwrap_err();
        assert!(matches!(err, UploadFormError::ReadFile { .. }));
    }

    #[tokio::test]
    async fn test_directives_are_forwarded() {
        let api = FakeApi::new(vec![], Ok(1));
        let mut form = text_form("x");
        form.visibility = Visibility::Private;
        form.download_limit = DownloadLimit::Ten;
        form.lifetime = LifetimePolicy::OneDay;
        form.password = "pw".to_string();
        let request = build_request(form, UploadMode::Text).await.unwrap();

        let (tx, rx) = mpsc::unbounded_channel();
        run_upload(api.clone(), request, tx).await;
        drain(rx).await;

        let received = api.received.lock().unwrap();
        let (_, directives) = &received[0];
        assert_eq!(directives.visibility, Visibility::Private);
        assert_eq!(directives.download_limit, DownloadLimit::Ten);
        assert_eq!(directives.lifetime, LifetimePolicy::OneDay);
        assert_eq!(directives.password.as_deref(), Some("pw"));
    }

    #[tokio::test]
    async fn test_progress_is_monotonic_and_precedes_finish() {
        let api = FakeApi::new(
            vec![(0, 200), (50, 200), (30, 200), (250, 200), (200, 200)],
            Ok(2),
        );
        let request = build_request(text_form("hi"), UploadMode::Text)
            .await
            .unwrap();
        let (tx, rx) = mpsc::unbounded_channel();
        run_upload(api, request, tx).await;
        let events = drain(rx).await;

        let percents: Vec<u8> = events
            .iter()
            .filter_map(|e| match e {
                UploadEvent::Progress(p) => Some(*p),
                _ => None,
            })
            .collect();
        assert_eq!(percents, vec![0, 25, 100]);
        assert!(percents.windows(2).all(|w| w[0] <= w[1]));
        assert!(percents.iter().all(|p| *p <= 100));
        assert_eq!(events.last(), Some(&UploadEvent::Finished(Ok(2))));
    }

    #[tokio::test]
    async fn test_success_message_mentions_count() {
        let api = FakeApi::new(vec![(4, 4)], Ok(2));
        let request = build_request(text_form("data"), UploadMode::Text)
            .await
            .unwrap();
        let (tx, rx) = mpsc::unbounded_channel();
        run_upload(api, request, tx).await;

        let mut status = StatusDisplay::new();
        for event in drain(rx).await {
            apply_event(&mut status, &event, &Language::English);
        }
        assert_eq!(status.kind(), Some(StatusKind::Success));
        assert_eq!(status.text(), Some("Successfully uploaded 2 files"));
    }

    #[tokio::test]
    async fn test_failure_messages() {
        let api = FakeApi::new(
            vec![],
            Err(ApiError::Server {
                status: 413,
                message: Some("quota exceeded".to_string()),
            }),
        );
        let request = build_request(text_form("data"), UploadMode::Text)
            .await
            .unwrap();
        let (tx, rx) = mpsc::unbounded_channel();
        run_upload(api, request, tx).await;

        let mut status = StatusDisplay::new();
        for event in drain(rx).await {
            apply_event(&mut status, &event, &Language::English);
        }
        assert_eq!(status.kind(), Some(StatusKind::Failure));
        assert_eq!(status.text(), Some("Upload failed: quota exceeded"));

        apply_event(
            &mut status,
            &UploadEvent::Finished(Err(ApiError::Transport("reset".into()))),
            &Language::English,
        );
        assert_eq!(status.text(), Some("Upload failed"));
    }
}
