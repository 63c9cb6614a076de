//! 表格面板消息类型

/// 表格面板相关消息
#[derive(Debug, Clone)]
pub enum ContentMessage {
    /// 选择上一行
    SelectPrevious,

    /// 选择下一行
    SelectNext,

    /// 选择第一行
    SelectFirst,

    /// 选择最后一行
    SelectLast,

    /// 上一页
    PrevPage,

    /// 下一页
    NextPage,

    /// 新建机器人
    Add,

    /// 编辑选中行
    Edit,

    /// 请求删除选中行（仅打开确认弹窗，不发请求）
    Delete,

    /// 查看选中行的原始命令
    ShowCommand,

    /// 编辑选中行的结构化配置
    ShowConfig,
}
