// 上传相关类型
// 定义上传参数（directive）、负载和进度

use std::path::PathBuf;
use std::time::Duration;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::constants::headers;
use crate::models::file_record::Visibility;

/// 与 encodeURIComponent 一致的保留字符集
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// 上传表单的输入模式（对应上传页的两个标签）
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UploadMode {
    Files,
    Text,
}

/// 可下载次数上限
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DownloadLimit {
    #[default]
    One,
    Five,
    Ten,
    Hundred,
    Infinite,
}

impl DownloadLimit {
    pub const ALL: [DownloadLimit; 5] = [
        DownloadLimit::One,
        DownloadLimit::Five,
        DownloadLimit::Ten,
        DownloadLimit::Hundred,
        DownloadLimit::Infinite,
    ];

    /// aqa-download-count 头的取值
    pub fn directive(&self) -> &'static str {
        match self {
            DownloadLimit::One => "1",
            DownloadLimit::Five => "5",
            DownloadLimit::Ten => "10",
            DownloadLimit::Hundred => "100",
            DownloadLimit::Infinite => "infinite",
        }
    }
}

/// 文件有效期策略
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LifetimePolicy {
    #[default]
    OneHour,
    OneDay,
    OneWeek,
    OneMonth,
    Infinite,
}

impl LifetimePolicy {
    pub const ALL: [LifetimePolicy; 5] = [
        LifetimePolicy::OneHour,
        LifetimePolicy::OneDay,
        LifetimePolicy::OneWeek,
        LifetimePolicy::OneMonth,
        LifetimePolicy::Infinite,
    ];

    pub fn duration(&self) -> Option<Duration> {
        const HOUR: u64 = 60 * 60;
        match self {
            LifetimePolicy::OneHour => Some(Duration::from_secs(HOUR)),
            LifetimePolicy::OneDay => Some(Duration::from_secs(24 * HOUR)),
            LifetimePolicy::OneWeek => Some(Duration::from_secs(7 * 24 * HOUR)),
            LifetimePolicy::OneMonth => Some(Duration::from_secs(30 * 24 * HOUR)),
            LifetimePolicy::Infinite => None,
        }
    }

    /// aqa-lifetime 头的取值：infinite 或秒数
    pub fn directive(&self) -> String {
        match self.duration() {
            Some(duration) => duration.as_secs().to_string(),
            None => "infinite".to_string(),
        }
    }

    /// i18n 键
    pub fn label_key(&self) -> &'static str {
        match self {
            LifetimePolicy::OneHour => "upload.lifetime.hour",
            LifetimePolicy::OneDay => "upload.lifetime.day",
            LifetimePolicy::OneWeek => "upload.lifetime.week",
            LifetimePolicy::OneMonth => "upload.lifetime.month",
            LifetimePolicy::Infinite => "upload.lifetime.infinite",
        }
    }
}

/// 随上传请求以请求头发送的参数
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadDirectives {
    pub visibility: Visibility,
    pub download_limit: DownloadLimit,
    pub lifetime: LifetimePolicy,
    /// None 表示不设密码
    pub password: Option<String>,
}

impl UploadDirectives {
    /// 空白密码视为未设置
    pub fn new(
        visibility: Visibility,
        download_limit: DownloadLimit,
        lifetime: LifetimePolicy,
        password: &str,
    ) -> Self {
        let password = if password.trim().is_empty() {
            None
        } else {
            Some(password.to_string())
        };
        Self {
            visibility,
            download_limit,
            lifetime,
            password,
        }
    }

    /// 生成请求头（密码做百分号转义）
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let mut result = vec![
            (headers::VISIBILITY, self.visibility.directive().to_string()),
            (
                headers::DOWNLOAD_COUNT,
                self.download_limit.directive().to_string(),
            ),
            (headers::LIFETIME, self.lifetime.directive()),
        ];
        if let Some(password) = &self.password {
            result.push((headers::PASSWORD, encode_uri_component(password)));
        }
        result
    }
}

pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// multipart 中的一个文件
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PayloadPart {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl PayloadPart {
    pub fn from_bytes(file_name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: "application/octet-stream".to_string(),
            data,
        }
    }

    /// 文本按 UTF-8 编码为单个文件
    pub fn from_text(file_name: impl Into<String>, text: &str) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: "text/plain; charset=utf-8".to_string(),
            data: text.as_bytes().to_vec(),
        }
    }
}

/// 上传负载（至少包含一个文件）
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadPayload {
    parts: Vec<PayloadPart>,
}

impl UploadPayload {
    /// 空列表返回 None
    pub fn new(parts: Vec<PayloadPart>) -> Option<Self> {
        if parts.is_empty() {
            None
        } else {
            Some(Self { parts })
        }
    }

    pub fn parts(&self) -> &[PayloadPart] {
        &self.parts
    }

    pub fn into_parts(self) -> Vec<PayloadPart> {
        self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn total_bytes(&self) -> u64 {
        self.parts.iter().map(|p| p.data.len() as u64).sum()
    }
}

/// 一次上传请求，提交后即丢弃
#[derive(Clone, Debug)]
pub struct UploadRequest {
    /// 仅用于日志关联
    pub id: String,
    pub directives: UploadDirectives,
    pub payload: UploadPayload,
}

impl UploadRequest {
    pub fn new(directives: UploadDirectives, payload: UploadPayload) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            directives,
            payload,
        }
    }
}

/// 用户选择的本地文件
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub path: PathBuf,
}

impl SelectedFile {
    pub fn from_path(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());
        Self { name, path }
    }
}

/// 上传表单快照（与渲染层无关）
#[derive(Clone, Debug, Default)]
pub struct UploadForm {
    pub visibility: Visibility,
    pub download_limit: DownloadLimit,
    pub lifetime: LifetimePolicy,
    pub password: String,
    pub files: Vec<SelectedFile>,
    pub text: String,
    pub text_file_name: String,
}

impl UploadForm {
    pub fn directives(&self) -> UploadDirectives {
        UploadDirectives::new(
            self.visibility,
            self.download_limit,
            self.lifetime,
            &self.password,
        )
    }
}

/// 计算进度百分比；总量未知（0）时视为 100
pub fn percentage(transferred: u64, total: u64) -> u8 {
    if total == 0 {
        return 100;
    }
    let percent = (transferred as u128 * 100) / total as u128;
    percent.min(100) as u8
}

/// 单次上传的进度，只增不减
#[derive(Clone, Debug, Default)]
pub struct UploadProgress {
    last_reported: Option<u8>,
}

impl UploadProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// 返回需要展示的新百分比；未增长时返回 None
    pub fn advance(&mut self, transferred: u64, total: u64) -> Option<u8> {
        let percent = percentage(transferred, total);
        match self.last_reported {
            Some(last) if percent <= last => None,
            _ => {
                self.last_reported = Some(percent);
                Some(percent)
            }
        }
    }

    pub fn percent(&self) -> u8 {
        self.last_reported.unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_password_is_not_sent() {
        let directives = UploadDirectives::new(
            Visibility::Public,
            DownloadLimit::Five,
            LifetimePolicy::Infinite,
            "   ",
        );
        assert_eq!(directives.password, None);
        let headers = directives.headers();
        assert_eq!(headers.len(), 3);
        assert!(headers.contains(&("aqa-visibility", "public".to_string())));
        assert!(headers.contains(&("aqa-download-count", "5".to_string())));
        assert!(headers.contains(&("aqa-lifetime", "infinite".to_string())));
    }

    #[test]
    fn test_password_is_percent_escaped() {
        let directives = UploadDirectives::new(
            Visibility::Private,
            DownloadLimit::Infinite,
            LifetimePolicy::OneHour,
            "p@ss word/ż",
        );
        let headers = directives.headers();
        assert!(headers.contains(&("aqa-lifetime", "3600".to_string())));
        assert!(headers.contains(&("aqa-password", "p%40ss%20word%2F%C5%BC".to_string())));
    }

    #[test]
    fn test_encode_uri_component_keeps_unreserved() {
        assert_eq!(encode_uri_component("a-b_c.d!e~f*g'h(i)"), "a-b_c.d!e~f*g'h(i)");
    }

    #[test]
    fn test_payload_requires_parts() {
        assert!(UploadPayload::new(Vec::new()).is_none());
        let payload = UploadPayload::new(vec![
            PayloadPart::from_text("a.txt", "héllo"),
            PayloadPart::from_bytes("b.bin", vec![0, 1, 2]),
        ])
        .unwrap();
        assert_eq!(payload.len(), 2);
        assert_eq!(payload.total_bytes(), 6 + 3);
    }

    #[test]
    fn test_percentage_bounds() {
        assert_eq!(percentage(0, 0), 100);
        assert_eq!(percentage(0, 200), 0);
        assert_eq!(percentage(50, 200), 25);
        assert_eq!(percentage(300, 200), 100);
        assert_eq!(percentage(u64::MAX, u64::MAX), 100);
    }

    #[test]
    fn test_progress_is_monotonic() {
        let mut progress = UploadProgress::new();
        assert_eq!(progress.advance(0, 100), Some(0));
        assert_eq!(progress.advance(40, 100), Some(40));
        assert_eq!(progress.advance(40, 100), None);
        assert_eq!(progress.advance(10, 100), None);
        assert_eq!(progress.percent(), 40);
        assert_eq!(progress.advance(100, 100), Some(100));
    }
}
