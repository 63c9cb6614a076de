//! View 层：UI 渲染
//!
//! 只读取 Model，不做任何修改。

pub mod components;
mod layout;
pub mod theme;

use ratatui::Frame;

use crate::model::App;

/// 渲染整个界面
pub fn render(app: &App, frame: &mut Frame) {
    layout::render(app, frame);
}
