// 页面模块

mod home;

pub use home::HomePage;
