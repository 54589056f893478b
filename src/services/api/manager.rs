// 全局 API 管理器
// 持有 Tokio 运行时和当前的 API 客户端

use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;
use tokio::runtime::Runtime;
use tracing::{error, info};

use super::client::ApiClient;
use super::{ApiError, FileApi};
use crate::models::settings::ApiSettings;

pub struct ApiManager {
    /// 所有网络任务都在此运行时执行
    runtime: Runtime,
    client: RwLock<Option<Arc<dyn FileApi>>>,
}

impl ApiManager {
    fn new() -> Self {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .thread_name("api-worker")
            .build()
            .unwrap_or_else(|e| {
                error!("[Api] Failed to create Tokio runtime: {}", e);
                std::process::exit(1);
            });

        Self {
            runtime,
            client: RwLock::new(None),
        }
    }

    /// 获取全局单例
    pub fn global() -> &'static ApiManager {
        static MANAGER: Lazy<ApiManager> = Lazy::new(ApiManager::new);
        &MANAGER
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    /// 根据设置（重新）创建客户端
    pub fn configure(&self, settings: &ApiSettings) -> Result<(), ApiError> {
        let client = ApiClient::new(settings)?;
        info!("[Api] Using endpoint {}", client.base());
        let mut slot = self.client.write().unwrap_or_else(|e| e.into_inner());
        *slot = Some(Arc::new(client));
        Ok(())
    }

    /// 当前客户端；未配置时返回 InvalidEndpoint
    pub fn client(&self) -> Result<Arc<dyn FileApi>, ApiError> {
        self.client
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
            .ok_or_else(|| ApiError::InvalidEndpoint("API client is not configured".to_string()))
    }
}
