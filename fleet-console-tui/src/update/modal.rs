//! 弹窗更新逻辑
//!
//! 根据当前打开的弹窗（由核心状态推导）分发到具体的处理函数：
//!     - `editor_update`       编辑表单
//!     - `confirm_update`      确认删除
//!     - `viewer_update`       命令查看器
//!     - `config_form_update`  结构化配置编辑器
//!
//! 在 Confirm / Save 时会通过运行时阻塞执行网络请求。

use fleet_console_api::ConfigApi;
use fleet_console_core::ConfigView;

use crate::message::ModalMessage;
use crate::model::state::ConfigFormPhase;
use crate::model::App;

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    if app.console.editor.is_some() {
        editor_update(app, msg);
        return;
    }

    if app.console.delete_gate.is_open() {
        confirm_update(app, msg);
        return;
    }

    if matches!(app.console.config_view, ConfigView::Raw { .. }) {
        viewer_update(app, msg);
    } else if matches!(app.console.config_view, ConfigView::Structured { .. }) {
        config_form_update(app, msg);
    }
}

// ========== 编辑表单 ==========

fn editor_update(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close => {
            // 取消编辑：草稿丢弃，列表不动
            app.console.close_editor();
        }
        ModalMessage::NextField => {
            app.modal_ui.next_field();
        }
        ModalMessage::PrevField => {
            app.modal_ui.prev_field();
        }
        ModalMessage::Input(c) => {
            if let Some(field) = editor_field_mut(app) {
                field.push(c);
            }
        }
        ModalMessage::Backspace => {
            if let Some(field) = editor_field_mut(app) {
                field.pop();
            }
        }
        ModalMessage::Confirm => {
            // 保存：成功时核心先刷新列表再关闭表单；
            // 失败时表单保持打开，内容原样保留
            app.runtime.block_on(app.console.save());
        }
        _ => {}
    }
}

/// 当前焦点字段的可变引用
fn editor_field_mut(app: &mut App) -> Option<&mut String> {
    let draft = app.console.editor.as_mut()?;
    match app.modal_ui.editor_focus {
        0 => Some(&mut draft.address),
        1 => Some(&mut draft.ca_file),
        2 => Some(&mut draft.key_file),
        3 => Some(&mut draft.crt_file),
        _ => None,
    }
}

// ========== 确认删除 ==========

fn confirm_update(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close => {
            app.console.cancel_delete();
        }
        ModalMessage::ToggleDeleteFocus => {
            app.modal_ui.confirm_focus ^= 1;
        }
        ModalMessage::Confirm => {
            if app.modal_ui.confirm_focus == 1 {
                app.runtime.block_on(app.console.confirm_delete());
            } else {
                app.console.cancel_delete();
            }
        }
        _ => {}
    }
}

// ========== 命令查看器 ==========

fn viewer_update(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close => {
            app.console.close_config();
        }
        ModalMessage::ScrollUp => {
            app.modal_ui.viewer_scroll = app.modal_ui.viewer_scroll.saturating_sub(1);
        }
        ModalMessage::ScrollDown => {
            app.modal_ui.viewer_scroll = app.modal_ui.viewer_scroll.saturating_add(1);
        }
        _ => {}
    }
}

// ========== 结构化配置编辑器 ==========

fn config_form_update(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close => {
            // 正在编辑时 Esc 只退出编辑，再按一次才关闭弹窗
            if app.config_form.editing {
                app.config_form.cancel_edit();
            } else {
                app.console.close_config();
            }
        }
        ModalMessage::PrevField => {
            if !app.config_form.editing {
                app.config_form.select_previous();
            }
        }
        ModalMessage::NextField => {
            if !app.config_form.editing {
                app.config_form.select_next();
            }
        }
        ModalMessage::Confirm => {
            if app.config_form.editing {
                app.config_form.commit_edit();
            } else if app.config_form.phase == ConfigFormPhase::Ready {
                app.config_form.begin_edit();
            }
        }
        ModalMessage::Input(c) => {
            app.config_form.input(c);
        }
        ModalMessage::Backspace => {
            app.config_form.backspace();
        }
        ModalMessage::Save => {
            save_config_form(app);
        }
        _ => {}
    }
}

/// 保存结构化配置
///
/// 走协作组件自己的客户端；成功时提示并关闭，
/// 失败时弹窗保持打开以便重试。
fn save_config_form(app: &mut App) {
    if app.config_form.editing {
        app.config_form.commit_edit();
    }
    if app.config_form.phase != ConfigFormPhase::Ready {
        return;
    }

    let id = app.config_form.bot_id;
    let fields = app.config_form.to_fields();
    app.config_form.phase = ConfigFormPhase::Saving;

    match app.runtime.block_on(app.config_api.save_config(id, &fields)) {
        Ok(()) => {
            app.config_form.phase = ConfigFormPhase::Ready;
            app.config_form.dirty = false;
            app.console.notify_success("Config saved");
            app.console.close_config();
        }
        Err(e) => {
            app.config_form.phase = ConfigFormPhase::Ready;
            app.console.notify_api_error(&e);
        }
    }
}
