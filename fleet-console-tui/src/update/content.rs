//! 表格面板更新逻辑
//!
//! 处理行选择、翻页与各行操作。翻页目标由分页组件钳制，
//! 核心不做范围检查。

use fleet_console_api::ConfigApi;

use crate::message::ContentMessage;
use crate::model::App;
use crate::view::components::pagination;

/// 处理表格面板消息
pub fn update(app: &mut App, msg: ContentMessage) {
    match msg {
        // ========== 行选择 ==========
        ContentMessage::SelectPrevious => {
            app.console.list.select_previous();
        }
        ContentMessage::SelectNext => {
            app.console.list.select_next();
        }
        ContentMessage::SelectFirst => {
            app.console.list.select_first();
        }
        ContentMessage::SelectLast => {
            app.console.list.select_last();
        }

        // ========== 翻页 ==========
        ContentMessage::PrevPage => {
            if let Some(target) = pagination::prev_page(app.console.list.page) {
                app.runtime.block_on(app.console.change_page(target));
            }
        }
        ContentMessage::NextPage => {
            let page_count = app.console.list.page_count();
            if let Some(target) = pagination::next_page(app.console.list.page, page_count) {
                app.runtime.block_on(app.console.change_page(target));
            }
        }

        // ========== 行操作 ==========
        ContentMessage::Add => {
            app.console.open_create();
            app.modal_ui.reset_editor();
        }
        ContentMessage::Edit => {
            if let Some(bot) = app.console.list.selected_bot().cloned() {
                app.console.open_edit(&bot);
                app.modal_ui.reset_editor();
            }
        }
        ContentMessage::Delete => {
            // 行操作只打开确认弹窗；请求只会从确认动作发出
            if let Some(id) = app.console.list.selected_bot().map(|b| b.id) {
                app.console.request_delete(id);
                app.modal_ui.reset_confirm();
            }
        }
        ContentMessage::ShowCommand => {
            if let Some(id) = app.console.list.selected_bot().map(|b| b.id) {
                app.modal_ui.reset_viewer();
                app.runtime.block_on(app.console.show_raw_config(id));
            }
        }
        ContentMessage::ShowConfig => {
            if let Some(id) = app.console.list.selected_bot().map(|b| b.id) {
                open_structured(app, id);
            }
        }
    }
}

/// 打开结构化配置编辑器
///
/// 核心只记录目标 id；拉取走协作组件自己的客户端，
/// 与原始命令路径互不共享。
fn open_structured(app: &mut App, id: u64) {
    app.console.open_structured_config(id);
    app.config_form.open(id);

    match app.runtime.block_on(app.config_api.fetch_config(id)) {
        Ok(fields) => app.config_form.loaded(fields),
        Err(e) => app.config_form.failed(e.to_string()),
    }
}
