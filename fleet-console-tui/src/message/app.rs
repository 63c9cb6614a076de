//! 应用主消息枚举

use super::{ContentMessage, ModalMessage, SearchMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点面板（搜索框 ⇄ 表格）
    ToggleFocus,

    /// 搜索框相关消息
    Search(SearchMessage),

    /// 表格面板相关消息
    Content(ContentMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 刷新当前列表
    Refresh,

    /// 关闭当前通知
    DismissNotice,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
