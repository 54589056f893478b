// 上传表单状态管理

use std::path::PathBuf;

use gpui::{App, AppContext, Context, Entity, Window};
use gpui_component::input::InputState;

use crate::i18n;
use crate::models::file_record::Visibility;
use crate::models::settings::Language;
use crate::models::tabs::{TabbedContainer, TabsError};
use crate::models::upload::{
    DownloadLimit, LifetimePolicy, SelectedFile, UploadForm, UploadMode,
};

pub struct UploadFormState {
    pub tabs: TabbedContainer<UploadMode>,
    pub visibility: Visibility,
    pub download_limit: DownloadLimit,
    pub lifetime: LifetimePolicy,
    /// 按选择顺序保存
    pub files: Vec<SelectedFile>,
    pub text_input: Option<Entity<InputState>>,
    pub filename_input: Option<Entity<InputState>>,
    pub password_input: Option<Entity<InputState>>,
}

impl UploadFormState {
    pub fn new() -> Result<Self, TabsError> {
        Ok(Self {
            tabs: TabbedContainer::new(vec![UploadMode::Files, UploadMode::Text], UploadMode::Files)?,
            visibility: Visibility::default(),
            download_limit: DownloadLimit::default(),
            lifetime: LifetimePolicy::default(),
            files: Vec::new(),
            text_input: None,
            filename_input: None,
            password_input: None,
        })
    }

    /// 确保输入框已创建（在 Window 上下文中调用）
    pub fn ensure_inputs_created(
        &mut self,
        lang: &Language,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if self.text_input.is_none() {
            let placeholder = i18n::t(lang, "upload.text.placeholder");
            self.text_input = Some(cx.new(|cx| {
                InputState::new(window, cx)
                    .placeholder(placeholder)
                    .auto_grow(6, 14)
            }));
        }
        if self.filename_input.is_none() {
            let placeholder = i18n::t(lang, "upload.text.filename_placeholder");
            self.filename_input =
                Some(cx.new(|cx| InputState::new(window, cx).placeholder(placeholder)));
        }
        if self.password_input.is_none() {
            let placeholder = i18n::t(lang, "upload.password.placeholder");
            self.password_input = Some(cx.new(|cx| {
                InputState::new(window, cx)
                    .placeholder(placeholder)
                    .masked(true)
            }));
        }
    }

    pub fn set_files(&mut self, paths: Vec<PathBuf>) {
        self.files = paths.into_iter().map(SelectedFile::from_path).collect();
    }

    pub fn clear_files(&mut self) {
        self.files.clear();
    }

    fn input_text(input: &Option<Entity<InputState>>, cx: &App) -> String {
        input
            .as_ref()
            .map(|i| i.read(cx).value().to_string())
            .unwrap_or_default()
    }

    /// 生成与渲染层无关的表单快照和当前模式
    pub fn snapshot(&self, cx: &App) -> (UploadForm, UploadMode) {
        let form = UploadForm {
            visibility: self.visibility,
            download_limit: self.download_limit,
            lifetime: self.lifetime,
            password: Self::input_text(&self.password_input, cx),
            files: self.files.clone(),
            text: Self::input_text(&self.text_input, cx),
            text_file_name: Self::input_text(&self.filename_input, cx),
        };
        (form, *self.tabs.current_label())
    }
}
