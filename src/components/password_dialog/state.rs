// 密码弹窗状态
// 包装 PasswordChallenge，并持有输入框

use gpui::{AppContext, Context, Entity, Window};
use gpui_component::input::{InputEvent, InputState};

use crate::i18n;
use crate::models::challenge::{ChallengeOutcome, PasswordChallenge};
use crate::models::settings::Language;

#[derive(Default)]
pub struct PasswordDialogState {
    challenge: PasswordChallenge,
    input: Option<Entity<InputState>>,
    /// 下一次渲染时聚焦输入框
    needs_focus: bool,
}

impl PasswordDialogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn challenge_mut(&mut self) -> &mut PasswordChallenge {
        &mut self.challenge
    }

    pub fn is_open(&self) -> bool {
        self.challenge.is_open()
    }

    pub fn pending_filename(&self) -> Option<&str> {
        self.challenge
            .pending_requester()
            .map(|r| r.filename.as_str())
    }

    pub fn input(&self) -> Option<&Entity<InputState>> {
        self.input.as_ref()
    }

    pub fn request_focus(&mut self) {
        self.needs_focus = true;
    }

    /// 确保输入框已创建（在 Window 上下文中调用）
    pub fn ensure_input_created(
        &mut self,
        lang: &Language,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if self.input.is_none() {
            let placeholder = i18n::t(lang, "password.placeholder");
            let input = cx.new(|cx| {
                InputState::new(window, cx)
                    .placeholder(placeholder)
                    .masked(true)
            });

            // 回车即确认
            cx.subscribe_in(&input, window, |this, _input, event: &InputEvent, window, cx| {
                if let InputEvent::PressEnter { .. } = event {
                    this.confirm(window, cx);
                }
            })
            .detach();

            self.input = Some(input);
        }

        if self.needs_focus {
            self.needs_focus = false;
            if let Some(input) = &self.input {
                input.update(cx, |i, cx| i.focus(window, cx));
            }
        }
    }

    /// 提交输入的密码；空输入视为取消
    pub fn confirm(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let password = self
            .input
            .as_ref()
            .map(|i| i.read(cx).value().to_string())
            .unwrap_or_default();
        self.clear_input(window, cx);
        if self.challenge.confirm(&password) == ChallengeOutcome::Cancelled {
            tracing::debug!("[Challenge] Empty password, treated as cancel");
        }
        cx.notify();
    }

    /// 取消按钮或 Escape
    pub fn cancel(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.clear_input(window, cx);
        self.challenge.cancel();
        cx.notify();
    }

    fn clear_input(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if let Some(input) = &self.input {
            input.update(cx, |i, cx| i.set_value("", window, cx));
        }
    }
}
