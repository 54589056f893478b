// 主页：侧边栏 + 标题栏 + 内容区

mod page;
mod sidebar;
mod titlebar;

pub use page::HomePage;
