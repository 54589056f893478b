// UI 组件

pub mod common;
pub mod file_list;
pub mod password_dialog;
pub mod status_box;
pub mod tabs_view;
pub mod upload_form;
