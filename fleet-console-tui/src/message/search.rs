//! 搜索框消息类型

/// 搜索框相关消息
#[derive(Debug, Clone)]
pub enum SearchMessage {
    /// 输入字符
    Input(char),

    /// 删除字符（Backspace）
    Backspace,

    /// 提交搜索（页码重置为 1 后刷新）
    Submit,

    /// 清空输入并把焦点交还表格
    Clear,
}
