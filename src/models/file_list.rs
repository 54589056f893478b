// 文件列表视图模型

use crate::models::file_record::FileRecord;

/// 列表范围
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListScope {
    /// 所有公开文件
    All,
    /// 当前用户上传的文件
    Mine,
}

impl ListScope {
    /// 是否带 uploader=me 过滤
    pub fn only_mine(&self) -> bool {
        matches!(self, ListScope::Mine)
    }

    /// 仅"我的文件"允许删除
    pub fn allows_delete(&self) -> bool {
        matches!(self, ListScope::Mine)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DownloadAction {
    /// 直接打开的下载地址
    Direct(String),
    /// 需要先询问密码
    PasswordRequired,
}

/// 单个文件条目的展示数据
#[derive(Clone, Debug)]
pub struct FileEntryView {
    pub id: String,
    pub filename: String,
    pub content_type: String,
    pub is_private: bool,
    pub password_protected: bool,
    pub lifetime_text: String,
    pub upload_date_text: String,
    pub download_count_text: String,
    pub action: DownloadAction,
    pub can_delete: bool,
}

impl FileEntryView {
    fn from_record(
        record: &FileRecord,
        scope: ListScope,
        url_for: &impl Fn(&str) -> String,
    ) -> Self {
        let action = if record.password_protected() {
            DownloadAction::PasswordRequired
        } else {
            DownloadAction::Direct(url_for(record.id()))
        };
        Self {
            id: record.id().to_string(),
            filename: record.filename().to_string(),
            content_type: record.content_type().to_string(),
            is_private: record.is_private(),
            password_protected: record.password_protected(),
            lifetime_text: record.lifetime().display_text(),
            upload_date_text: record.upload_date().display_local(),
            download_count_text: record.download_count().to_string(),
            action,
            can_delete: scope.allows_delete(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct FileList {
    scope: ListScope,
    entries: Vec<FileEntryView>,
}

impl FileList {
    pub fn new(scope: ListScope) -> Self {
        Self {
            scope,
            entries: Vec::new(),
        }
    }

    /// 整体替换条目，保持服务端顺序
    pub fn render(&mut self, files: &[FileRecord], url_for: impl Fn(&str) -> String) {
        self.entries = files
            .iter()
            .map(|record| FileEntryView::from_record(record, self.scope, &url_for))
            .collect();
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn scope(&self) -> ListScope {
        self.scope
    }

    pub fn entries(&self) -> &[FileEntryView] {
        &self.entries
    }

    pub fn entry(&self, id: &str) -> Option<&FileEntryView> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<FileRecord> {
        serde_json::from_str(
            r#"[
                {"id":"a1","filename":"report.pdf","contentType":"application/pdf",
                 "visibility":"public","passwordProtected":false,"downloadCount":5,
                 "lifetime":null,"uploadDate":1700000000},
                {"id":"b2","filename":"secret.zip","contentType":"application/zip",
                 "visibility":"private","passwordProtected":true,"downloadCount":"infinite",
                 "lifetime":3600,"uploadDate":1700000100},
                {"id":"c3","filename":"notes.txt","contentType":"text/plain",
                 "visibility":"public","passwordProtected":false,"downloadCount":1,
                 "lifetime":90061,"uploadDate":1700000200}
            ]"#,
        )
        .unwrap()
    }

    fn url_for(id: &str) -> String {
        format!("http://host/api/download/{}", id)
    }

    #[test]
    fn test_one_entry_per_record_in_order() {
        let mut list = FileList::new(ListScope::All);
        list.render(&records(), url_for);
        let ids: Vec<&str> = list.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a1", "b2", "c3"]);

        // 再次渲染替换而非追加
        list.render(&records()[..1], url_for);
        assert_eq!(list.entries().len(), 1);
    }

    #[test]
    fn test_entry_display_fields() {
        let mut list = FileList::new(ListScope::Mine);
        list.render(&records(), url_for);

        let first = list.entry("a1").unwrap();
        assert_eq!(
            first.action,
            DownloadAction::Direct("http://host/api/download/a1".to_string())
        );
        assert_eq!(first.lifetime_text, "Infinite");
        assert_eq!(first.download_count_text, "5");
        assert!(first.can_delete);

        let second = list.entry("b2").unwrap();
        assert_eq!(second.action, DownloadAction::PasswordRequired);
        assert!(second.is_private);
        assert_eq!(second.lifetime_text, "1 hour");
        assert_eq!(second.download_count_text, "infinite");

        let third = list.entry("c3").unwrap();
        assert_eq!(third.lifetime_text, "1 day, 1 hour, 1 minute, 1 second");
    }

    #[test]
    fn test_delete_only_in_mine_scope() {
        let mut list = FileList::new(ListScope::All);
        list.render(&records(), url_for);
        assert!(list.entries().iter().all(|e| !e.can_delete));
        assert!(!ListScope::All.only_mine());
    }
}
