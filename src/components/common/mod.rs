// 通用组件

pub mod button;
pub mod icon;
