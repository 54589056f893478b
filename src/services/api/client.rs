// 基于 reqwest 的 API 客户端

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::header::COOKIE;
use reqwest::multipart::{Form, Part};
use reqwest::{Body, Method, RequestBuilder, StatusCode, Url};
use tracing::{debug, info, warn};

use super::error::{parse_error_message, ApiError};
use super::{FileApi, ProgressSink, UploadOutcome, UploadedFile};
use crate::constants::SESSION_COOKIE;
use crate::models::settings::ApiSettings;
use crate::models::upload::{encode_uri_component, PayloadPart, UploadDirectives, UploadPayload};
use crate::models::FileRecord;

/// 上传时每次推送的块大小
const UPLOAD_CHUNK_SIZE: usize = 64 * 1024;

pub struct ApiClient {
    http: reqwest::Client,
    /// 以 / 结尾的服务端根地址
    base: Url,
    session_cookie: Option<String>,
    request_timeout: Duration,
}

impl ApiClient {
    pub fn new(settings: &ApiSettings) -> Result<Self, ApiError> {
        let base = normalize_endpoint(&settings.endpoint)?;
        let request_timeout = Duration::from_secs(settings.request_timeout_secs.max(1));
        // 上传可能很久，总超时只加在普通请求上
        let http = reqwest::Client::builder()
            .connect_timeout(request_timeout)
            .build()?;
        Ok(Self {
            http,
            base,
            session_cookie: settings
                .session_cookie
                .clone()
                .filter(|s| !s.trim().is_empty()),
            request_timeout,
        })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}api/{}", self.base, path)
    }

    /// 附带会话 cookie
    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let builder = self.http.request(method, url);
        match &self.session_cookie {
            Some(value) => builder.header(COOKIE, format!("{}={}", SESSION_COOKIE, value)),
            None => builder,
        }
    }

    async fn fetch_files(&self, only_mine: bool) -> Result<Vec<FileRecord>, ApiError> {
        let mut url = self.api_url("list.json");
        if only_mine {
            url.push_str("?uploader=me");
        }
        let response = self
            .request(Method::GET, &url)
            .timeout(self.request_timeout)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Server {
                status: status.as_u16(),
                message: parse_error_message(&body),
            });
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl FileApi for ApiClient {
    async fn list_files(&self, only_mine: bool) -> Vec<FileRecord> {
        match self.fetch_files(only_mine).await {
            Ok(files) => {
                debug!("[Api] Listed {} files (mine: {})", files.len(), only_mine);
                files
            }
            Err(e) => {
                warn!("[Api] Listing failed: {}", e);
                Vec::new()
            }
        }
    }

    async fn who_am_i(&self) -> Option<String> {
        let response = self
            .request(Method::GET, &self.api_url("whoami"))
            .timeout(self.request_timeout)
            .send()
            .await;
        match response {
            // 200 时响应体原样作为用户名
            Ok(response) if response.status() == StatusCode::OK => response.text().await.ok(),
            Ok(response) => {
                debug!("[Api] whoami returned {}", response.status());
                None
            }
            Err(e) => {
                warn!("[Api] whoami failed: {}", e);
                None
            }
        }
    }

    async fn upload(
        &self,
        payload: UploadPayload,
        directives: &UploadDirectives,
        progress: ProgressSink,
    ) -> Result<UploadOutcome, ApiError> {
        let total = payload.total_bytes();
        let sent = Arc::new(AtomicU64::new(0));
        progress(0, total);

        let mut form = Form::new();
        for part in payload.into_parts() {
            form = form.part("file", progress_part(part, sent.clone(), total, progress.clone())?);
        }

        let mut request = self.request(Method::POST, &self.api_url("upload"));
        for (name, value) in directives.headers() {
            request = request.header(name, value);
        }

        let response = request.multipart(form).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if status == StatusCode::OK {
            let files: Vec<UploadedFile> =
                serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))?;
            info!("[Api] Uploaded {} files", files.len());
            Ok(UploadOutcome { files })
        } else {
            Err(ApiError::Server {
                status: status.as_u16(),
                message: parse_error_message(&body),
            })
        }
    }

    fn download_url(&self, id: &str, password: Option<&str>) -> String {
        let mut url = self.api_url(&format!("download/{}", encode_uri_component(id)));
        if let Some(password) = password {
            url.push_str("?password=");
            url.push_str(&encode_uri_component(password));
        }
        url
    }

    async fn delete_file(&self, id: &str) -> Result<(), ApiError> {
        let url = self.api_url(&format!("delete/{}", encode_uri_component(id)));
        let response = self
            .request(Method::DELETE, &url)
            .timeout(self.request_timeout)
            .send()
            .await?;
        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            info!("[Api] Deleted {}", id);
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Server {
            status: status.as_u16(),
            message: parse_error_message(&body),
        })
    }
}

/// 校验服务端地址并补齐结尾的 /
pub fn normalize_endpoint(endpoint: &str) -> Result<Url, ApiError> {
    let trimmed = endpoint.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    };
    let url = Url::parse(&with_slash)
        .map_err(|e| ApiError::InvalidEndpoint(format!("{}: {}", trimmed, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ApiError::InvalidEndpoint(format!(
            "{}: unsupported scheme {}",
            trimmed, other
        ))),
    }
}

/// 把文件包装为流式 multipart 分段，每推送一块就上报进度
fn progress_part(
    part: PayloadPart,
    sent: Arc<AtomicU64>,
    total: u64,
    progress: ProgressSink,
) -> Result<Part, ApiError> {
    let length = part.data.len() as u64;
    let chunks: Vec<Result<Vec<u8>, std::io::Error>> = part
        .data
        .chunks(UPLOAD_CHUNK_SIZE)
        .map(|chunk| Ok(chunk.to_vec()))
        .collect();

    let stream = futures::stream::iter(chunks).map(move |chunk| {
        if let Ok(bytes) = &chunk {
            let len = bytes.len() as u64;
            let now = sent.fetch_add(len, Ordering::SeqCst) + len;
            progress(now, total);
        }
        chunk
    });

    Part::stream_with_length(Body::wrap_stream(stream), length)
        .file_name(part.file_name)
        .mime_str(&part.content_type)
        .map_err(ApiError::from)
}
