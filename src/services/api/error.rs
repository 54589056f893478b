// API 错误类型定义

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 网络层失败（连接、超时、请求被中断）
    #[error("Network error: {0}")]
    Transport(String),

    /// 服务端返回非成功状态码
    #[error("Server returned {status}")]
    Server {
        status: u16,
        message: Option<String>,
    },

    /// 响应体无法解析
    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

impl ApiError {
    /// 服务端给出的错误消息
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Server { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

#[derive(Deserialize)]
struct ErrorJsonBody {
    message: String,
}

/// 从错误响应体提取消息：优先 JSON 的 message 字段，其次非空纯文本
pub fn parse_error_message(body: &str) -> Option<String> {
    if let Ok(parsed) = serde_json::from_str::<ErrorJsonBody>(body) {
        let message = parsed.message.trim();
        return (!message.is_empty()).then(|| message.to_string());
    }
    let text = body.trim();
    if text.is_empty() || text.starts_with('<') {
        None
    } else {
        Some(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message() {
        assert_eq!(
            parse_error_message(r#"{"status":413,"message":"quota exceeded"}"#),
            Some("quota exceeded".to_string())
        );
        assert_eq!(parse_error_message("  Not found \n"), Some("Not found".to_string()));
        assert_eq!(parse_error_message(""), None);
        assert_eq!(parse_error_message(r#"{"message":""}"#), None);
        assert_eq!(parse_error_message("<h1>500<h1><br><h3>oops</h3>"), None);
    }

    #[test]
    fn test_server_message_accessor() {
        let err = ApiError::Server {
            status: 403,
            message: Some("forbidden".to_string()),
        };
        assert_eq!(err.server_message(), Some("forbidden"));
        assert_eq!(ApiError::Transport("reset".into()).server_message(), None);
    }
}
