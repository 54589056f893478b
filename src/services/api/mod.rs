// 远程文件服务 API
// 列表、当前用户、上传、下载地址、删除

mod client;
mod error;
mod manager;

pub use client::ApiClient;
pub use error::{parse_error_message, ApiError};
pub use manager::ApiManager;

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::models::upload::{UploadDirectives, UploadPayload};
use crate::models::FileRecord;

/// 上传进度回调：(已发送字节, 总字节)
pub type ProgressSink = Arc<dyn Fn(u64, u64) + Send + Sync>;

/// 上传成功后服务端返回的单个文件
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct UploadedFile {
    #[serde(alias = "id")]
    pub uuid: String,
    pub filename: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadOutcome {
    pub files: Vec<UploadedFile>,
}

impl UploadOutcome {
    pub fn count(&self) -> usize {
        self.files.len()
    }
}

#[async_trait]
pub trait FileApi: Send + Sync {
    /// 获取文件列表；任何失败都返回空列表
    async fn list_files(&self, only_mine: bool) -> Vec<FileRecord>;

    /// 当前登录用户名；未登录或请求失败返回 None
    async fn who_am_i(&self) -> Option<String>;

    async fn upload(
        &self,
        payload: UploadPayload,
        directives: &UploadDirectives,
        progress: ProgressSink,
    ) -> Result<UploadOutcome, ApiError>;

    /// 下载地址；仅在提供密码时附带 password 参数
    fn download_url(&self, id: &str, password: Option<&str>) -> String;

    /// 删除文件，服务端以 204 表示成功
    async fn delete_file(&self, id: &str) -> Result<(), ApiError>;
}
