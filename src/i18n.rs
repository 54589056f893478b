use crate::models::settings::Language;

pub fn t(lang: &Language, key: &'static str) -> &'static str {
    match lang {
        Language::Chinese => zh_cn(key),
        Language::English => en_us(key),
    }
}

// ======================== 带参数的消息 ========================

pub fn upload_progress(lang: &Language, percent: u8) -> String {
    match lang {
        Language::Chinese => format!("正在上传: {}%", percent),
        Language::English => format!("Uploading: {}%", percent),
    }
}

pub fn upload_success(lang: &Language, count: usize) -> String {
    match lang {
        Language::Chinese => format!("成功上传 {} 个文件", count),
        Language::English => format!("Successfully uploaded {} files", count),
    }
}

/// 无服务端消息时使用通用失败文案
pub fn upload_failed(lang: &Language, message: Option<&str>) -> String {
    match (lang, message) {
        (Language::Chinese, Some(message)) => format!("上传失败: {}", message),
        (Language::English, Some(message)) => format!("Upload failed: {}", message),
        (_, None) => t(lang, "upload.failed").to_string(),
    }
}

pub fn read_failed(lang: &Language, name: &str) -> String {
    match lang {
        Language::Chinese => format!("无法读取文件 {}", name),
        Language::English => format!("Could not read {}", name),
    }
}

pub fn deleting(lang: &Language, filename: &str) -> String {
    match lang {
        Language::Chinese => format!("正在删除 {}", filename),
        Language::English => format!("Deleting {}", filename),
    }
}

pub fn signed_in_as(lang: &Language, name: &str) -> String {
    match lang {
        Language::Chinese => format!("已登录: {}", name),
        Language::English => format!("Signed in as {}", name),
    }
}

pub fn password_prompt(lang: &Language, filename: &str) -> String {
    match lang {
        Language::Chinese => format!("{} 需要密码才能下载", filename),
        Language::English => format!("{} requires a password to download", filename),
    }
}

pub fn challenge_busy(lang: &Language, pending: &str) -> String {
    match lang {
        Language::Chinese => format!("请先处理 {} 的密码输入", pending),
        Language::English => format!("Finish entering the password for {} first", pending),
    }
}

fn zh_cn(key: &'static str) -> &'static str {
    match key {
        // 通用
        "common.confirm" => "确认",
        "common.cancel" => "取消",
        "common.loading" => "加载中...",

        // 标题栏
        "titlebar.guest" => "未登录",
        "titlebar.switch_language" => "English",

        // 侧边栏
        "nav.upload" => "上传",
        "nav.all_files" => "所有文件",
        "nav.my_files" => "我的文件",

        // 上传
        "upload.title" => "上传文件",
        "upload.tab.files" => "文件",
        "upload.tab.text" => "文本",
        "upload.pick_files" => "选择文件",
        "upload.clear_files" => "清空",
        "upload.no_files_selected" => "尚未选择文件",
        "upload.text.placeholder" => "在此输入要分享的文本...",
        "upload.text.filename" => "文件名",
        "upload.text.filename_placeholder" => "例如 note.txt",
        "upload.visibility" => "可见性",
        "upload.visibility.public" => "公开",
        "upload.visibility.private" => "私有",
        "upload.download_count" => "下载次数",
        "upload.download_count.infinite" => "不限",
        "upload.lifetime" => "有效期",
        "upload.lifetime.hour" => "1 小时",
        "upload.lifetime.day" => "1 天",
        "upload.lifetime.week" => "1 周",
        "upload.lifetime.month" => "30 天",
        "upload.lifetime.infinite" => "永久",
        "upload.password" => "密码",
        "upload.password.placeholder" => "留空表示不设密码",
        "upload.submit" => "上传",
        "upload.failed" => "上传失败",
        "upload.error.no_files" => "请至少选择一个文件",
        "upload.error.no_filename" => "请输入文件名",

        // 文件列表
        "files.refresh" => "刷新",
        "files.empty" => "没有文件",
        "files.lifetime" => "有效期",
        "files.uploaded" => "上传时间",
        "files.downloads" => "剩余下载",
        "files.private" => "私有",
        "files.protected" => "需密码",
        "files.download" => "下载",
        "files.delete" => "删除",
        "files.delete.success" => "删除成功",
        "files.delete.failed" => "删除失败",
        "files.mine.guest_hint" => "登录后可在此查看自己上传的文件",

        // 密码弹窗
        "password.title" => "需要密码",
        "password.placeholder" => "输入下载密码",

        _ => key,
    }
}

fn en_us(key: &'static str) -> &'static str {
    match key {
        // Common
        "common.confirm" => "Confirm",
        "common.cancel" => "Cancel",
        "common.loading" => "Loading...",

        // Title bar
        "titlebar.guest" => "Not signed in",
        "titlebar.switch_language" => "中文",

        // Sidebar
        "nav.upload" => "Upload",
        "nav.all_files" => "All files",
        "nav.my_files" => "My files",

        // Upload
        "upload.title" => "Upload files",
        "upload.tab.files" => "Files",
        "upload.tab.text" => "Text",
        "upload.pick_files" => "Choose files",
        "upload.clear_files" => "Clear",
        "upload.no_files_selected" => "No files selected",
        "upload.text.placeholder" => "Type the text to share...",
        "upload.text.filename" => "File name",
        "upload.text.filename_placeholder" => "e.g. note.txt",
        "upload.visibility" => "Visibility",
        "upload.visibility.public" => "Public",
        "upload.visibility.private" => "Private",
        "upload.download_count" => "Download count",
        "upload.download_count.infinite" => "Unlimited",
        "upload.lifetime" => "Lifetime",
        "upload.lifetime.hour" => "1 hour",
        "upload.lifetime.day" => "1 day",
        "upload.lifetime.week" => "1 week",
        "upload.lifetime.month" => "30 days",
        "upload.lifetime.infinite" => "Forever",
        "upload.password" => "Password",
        "upload.password.placeholder" => "Leave empty for no password",
        "upload.submit" => "Upload",
        "upload.failed" => "Upload failed",
        "upload.error.no_files" => "Select at least one file",
        "upload.error.no_filename" => "Enter a file name",

        // File list
        "files.refresh" => "Refresh",
        "files.empty" => "No files",
        "files.lifetime" => "Lifetime",
        "files.uploaded" => "Uploaded",
        "files.downloads" => "Downloads left",
        "files.private" => "Private",
        "files.protected" => "Password",
        "files.download" => "Download",
        "files.delete" => "Delete",
        "files.delete.success" => "Deleted successfully",
        "files.delete.failed" => "Failed to delete",
        "files.mine.guest_hint" => "Sign in to see the files you uploaded",

        // Password dialog
        "password.title" => "Password required",
        "password.placeholder" => "Enter the download password",

        _ => key,
    }
}
