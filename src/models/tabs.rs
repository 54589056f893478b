// 标签容器
// 同一时刻恰好一个标签可见

use std::fmt::Debug;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TabsError {
    #[error("tab container has no tabs")]
    Empty,
    #[error("initially active tab {0} is not one of the tabs")]
    UnknownActive(String),
}

#[derive(Clone, Debug)]
pub struct TabbedContainer<L> {
    tabs: Vec<L>,
    active: usize,
}

impl<L: Clone + PartialEq + Debug> TabbedContainer<L> {
    /// 配置错误在构造时直接报出
    pub fn new(tabs: Vec<L>, initially_active: L) -> Result<Self, TabsError> {
        if tabs.is_empty() {
            return Err(TabsError::Empty);
        }
        let active = tabs
            .iter()
            .position(|t| *t == initially_active)
            .ok_or_else(|| TabsError::UnknownActive(format!("{:?}", initially_active)))?;
        Ok(Self { tabs, active })
    }

    /// 切换标签；未知标签返回 false，当前标签不变
    pub fn activate(&mut self, label: &L) -> bool {
        match self.tabs.iter().position(|t| t == label) {
            Some(index) => {
                self.active = index;
                true
            }
            None => false,
        }
    }

    pub fn current_label(&self) -> &L {
        &self.tabs[self.active]
    }

    pub fn is_visible(&self, label: &L) -> bool {
        self.current_label() == label
    }

    pub fn tabs(&self) -> &[L] {
        &self.tabs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_errors() {
        let empty: Result<TabbedContainer<&str>, _> = TabbedContainer::new(vec![], "files");
        assert_eq!(empty.unwrap_err(), TabsError::Empty);

        let unknown = TabbedContainer::new(vec!["files", "text"], "links");
        assert!(matches!(unknown, Err(TabsError::UnknownActive(_))));
    }

    #[test]
    fn test_exactly_one_visible() {
        let mut tabs = TabbedContainer::new(vec!["files", "text"], "files").unwrap();
        assert!(tabs.is_visible(&"files"));
        assert!(!tabs.is_visible(&"text"));

        assert!(tabs.activate(&"text"));
        assert_eq!(*tabs.current_label(), "text");
        let visible = tabs.tabs().iter().filter(|t| tabs.is_visible(t)).count();
        assert_eq!(visible, 1);

        assert!(!tabs.activate(&"links"));
        assert_eq!(*tabs.current_label(), "text");
    }
}
