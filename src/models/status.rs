// 状态提示框
// 单条消息，无队列，后调用覆盖先调用

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Failure,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusDisplay {
    current: Option<(StatusKind, String)>,
}

impl StatusDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_success(&mut self, text: impl Into<String>) {
        self.current = Some((StatusKind::Success, text.into()));
    }

    pub fn show_failure(&mut self, text: impl Into<String>) {
        self.current = Some((StatusKind::Failure, text.into()));
    }

    pub fn hide(&mut self) {
        self.current = None;
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    pub fn kind(&self) -> Option<StatusKind> {
        self.current.as_ref().map(|(kind, _)| *kind)
    }

    pub fn text(&self) -> Option<&str> {
        self.current.as_ref().map(|(_, text)| text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initially_hidden() {
        let status = StatusDisplay::new();
        assert!(!status.is_visible());
        assert_eq!(status.text(), None);
    }

    #[test]
    fn test_last_call_wins() {
        let mut status = StatusDisplay::new();
        status.show_success("Uploading: 10%");
        status.show_failure("Upload failed");
        assert_eq!(status.kind(), Some(StatusKind::Failure));
        assert_eq!(status.text(), Some("Upload failed"));

        status.hide();
        assert!(!status.is_visible());
    }
}
