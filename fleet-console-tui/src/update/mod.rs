//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态，
//! 是唯一可以修改 Model 的地方。
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod search;             // 搜索框子消息处理
//!         mod content;            // 表格面板子消息处理
//!         mod modal;              // 弹窗子消息处理
//!
//! 网络请求在这里通过 `app.runtime.block_on(...)` 执行：
//! 每个用户操作最多发起一个请求，并等待其响应后才做
//! 与之绑定的状态迁移（变更成功后的列表刷新也因此总是
//! 发生在变更响应之后）。
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。

mod content;
mod modal;
mod search;

use crate::message::AppMessage;
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Search(search_msg) => {
            search::update(app, search_msg);
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::Refresh => {
            app.runtime.block_on(app.console.refresh());
        }

        AppMessage::DismissNotice => {
            app.console.dismiss_notice();
        }

        AppMessage::Noop => {}
    }
}
