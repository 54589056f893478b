// 常量定义

/// 会话 cookie 名称
pub const SESSION_COOKIE: &str = "session";

/// 上传参数请求头
pub mod headers {
    pub const VISIBILITY: &str = "aqa-visibility";
    pub const DOWNLOAD_COUNT: &str = "aqa-download-count";
    pub const LIFETIME: &str = "aqa-lifetime";
    pub const PASSWORD: &str = "aqa-password";
}

// 图标路径常量（由 gpui-component-assets 提供）
pub mod icons {
    pub const UPLOAD: &str = "icons/arrow-up.svg";
    pub const GLOBE: &str = "icons/globe.svg";
    pub const USER: &str = "icons/user.svg";
    pub const FILE: &str = "icons/file.svg";
    pub const FOLDER: &str = "icons/folder.svg";
    pub const LOCK: &str = "icons/eye-off.svg";
    pub const CHECK: &str = "icons/check.svg";
    pub const X: &str = "icons/close.svg";
    pub const LANGUAGE: &str = "icons/globe.svg";
}
