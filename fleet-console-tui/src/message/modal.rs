//! 弹窗消息类型

/// 弹窗相关消息
///
/// 同一条消息在不同弹窗里由 update 层按上下文解释：
/// 例如 `Confirm` 在编辑表单中是保存，在确认删除弹窗中
/// 按当前按钮焦点决定确认或取消。
#[derive(Debug, Clone)]
pub enum ModalMessage {
    /// 关闭弹窗
    Close,

    /// 下一个输入字段 / 下一个配置项
    NextField,

    /// 上一个输入字段 / 上一个配置项
    PrevField,

    /// 在确认删除弹窗中切换按钮焦点
    ToggleDeleteFocus,

    /// 确认/提交
    Confirm,

    /// 输入字符
    Input(char),

    /// 删除字符（Backspace）
    Backspace,

    /// 命令查看器向上滚动
    ScrollUp,

    /// 命令查看器向下滚动
    ScrollDown,

    /// 保存结构化配置
    Save,
}
