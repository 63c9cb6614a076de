//! 弹窗的瞬时 UI 状态
//!
//! 弹窗的开关由核心状态推导（编辑草稿是否存在、删除门是否打开、
//! 配置视图是否可见），本结构只保存与网络状态无关的
//! 字段焦点与滚动位置，在弹窗打开时重置。

/// 编辑表单字段数（地址 + CA + KEY + CRT）
pub const EDITOR_FIELDS: usize = 4;

/// 弹窗瞬时 UI 状态
#[derive(Debug, Default)]
pub struct ModalUi {
    /// 编辑表单当前焦点字段：0=地址, 1=CA, 2=KEY, 3=CRT
    pub editor_focus: usize,
    /// 确认删除弹窗焦点：0=取消, 1=确认
    pub confirm_focus: usize,
    /// 命令查看器滚动行
    pub viewer_scroll: u16,
}

impl ModalUi {
    /// 打开编辑表单时重置
    pub fn reset_editor(&mut self) {
        self.editor_focus = 0;
    }

    /// 打开确认删除弹窗时重置（默认落在取消上）
    pub fn reset_confirm(&mut self) {
        self.confirm_focus = 0;
    }

    /// 打开命令查看器时重置
    pub fn reset_viewer(&mut self) {
        self.viewer_scroll = 0;
    }

    /// 编辑表单：下一个字段
    pub fn next_field(&mut self) {
        self.editor_focus = (self.editor_focus + 1) % EDITOR_FIELDS;
    }

    /// 编辑表单：上一个字段
    pub fn prev_field(&mut self) {
        self.editor_focus = (self.editor_focus + EDITOR_FIELDS - 1) % EDITOR_FIELDS;
    }
}
