//! 焦点面板

/// 当前焦点面板
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 搜索框
    Search,
    /// 列表表格
    #[default]
    Table,
}

impl FocusPanel {
    /// 切换焦点
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Search => Self::Table,
            Self::Table => Self::Search,
        }
    }

    /// 焦点是否在搜索框
    #[must_use]
    pub fn is_search(self) -> bool {
        matches!(self, Self::Search)
    }

    /// 焦点是否在表格
    #[must_use]
    pub fn is_table(self) -> bool {
        matches!(self, Self::Table)
    }
}
