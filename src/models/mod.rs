// 数据模型模块

pub mod challenge;
pub mod file_list;
pub mod file_record;
pub mod settings;
pub mod status;
pub mod tabs;
pub mod upload;

pub use file_record::FileRecord;
pub use settings::AppSettings;
