// 服务层

pub mod api;
pub mod files;
pub mod storage;
pub mod upload;
