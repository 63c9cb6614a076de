//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage, SearchMessage};
use crate::model::App;
use fleet_console_core::ConfigView;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        Event::Resize(_, _) => AppMessage::Noop,                   // 终端窗口大小改变，自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal_open() {
        return handle_modal_keys(key, app);
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }

    // Tab: 在搜索框和表格之间切换焦点
    if key.modifiers.is_empty() && key.code == KeyCode::Tab {
        return AppMessage::ToggleFocus;
    }

    // 根据焦点位置处理按键
    if app.focus.is_search() {
        handle_search_keys(key)
    } else {
        handle_table_keys(key)
    }
}

/// 处理搜索框的按键
fn handle_search_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // Enter: 提交搜索
        KeyCode::Enter => AppMessage::Search(SearchMessage::Submit),

        // Esc: 清空并返回表格
        KeyCode::Esc => AppMessage::Search(SearchMessage::Clear),

        // Backspace: 删除字符
        KeyCode::Backspace => AppMessage::Search(SearchMessage::Backspace),

        // 字符输入
        KeyCode::Char(c)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Search(SearchMessage::Input(c))
        }

        _ => AppMessage::Noop,
    }
}

/// 处理表格面板的按键
fn handle_table_keys(key: KeyEvent) -> AppMessage {
    // 操作快捷键
    if DefaultKeymap::ACTION_ADD.matches(&key) {
        return AppMessage::Content(ContentMessage::Add);
    }
    if DefaultKeymap::ACTION_EDIT.matches(&key) {
        return AppMessage::Content(ContentMessage::Edit);
    }
    if DefaultKeymap::ACTION_DELETE.matches(&key) {
        return AppMessage::Content(ContentMessage::Delete);
    }
    if DefaultKeymap::ACTION_COMMAND.matches(&key) {
        return AppMessage::Content(ContentMessage::ShowCommand);
    }
    if DefaultKeymap::ACTION_CONFIG.matches(&key) {
        return AppMessage::Content(ContentMessage::ShowConfig);
    }

    match key.code {
        // ↑ 或 k: 上一行
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),

        // ↓ 或 j: 下一行
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),

        // ← 或 h: 上一页
        KeyCode::Left | KeyCode::Char('h') => AppMessage::Content(ContentMessage::PrevPage),

        // → 或 l: 下一页
        KeyCode::Right | KeyCode::Char('l') => AppMessage::Content(ContentMessage::NextPage),

        // Home: 跳到第一行
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),

        // End: 跳到最后一行
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),

        // Enter: 编辑选中行
        KeyCode::Enter => AppMessage::Content(ContentMessage::Edit),

        // Esc: 关闭当前通知
        KeyCode::Esc => AppMessage::DismissNotice,

        _ => AppMessage::Noop,
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    // Esc 和 Ctrl+C 始终可以关闭弹窗
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
            return AppMessage::Modal(ModalMessage::Close);
        }
        (KeyModifiers::NONE, KeyCode::Esc) => {
            return AppMessage::Modal(ModalMessage::Close);
        }
        _ => {}
    }

    if app.console.editor.is_some() {
        return handle_editor_keys(key);
    }

    if app.console.delete_gate.is_open() {
        return handle_confirm_keys(key);
    }

    match app.console.config_view {
        ConfigView::Raw { .. } => handle_viewer_keys(key),
        ConfigView::Structured { .. } => handle_config_form_keys(key),
        ConfigView::Hidden => AppMessage::Noop,
    }
}

/// 编辑表单弹窗
fn handle_editor_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Tab | KeyCode::Down => AppMessage::Modal(ModalMessage::NextField),
        KeyCode::BackTab | KeyCode::Up => AppMessage::Modal(ModalMessage::PrevField),
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
        KeyCode::Backspace => AppMessage::Modal(ModalMessage::Backspace),
        KeyCode::Char(c)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Modal(ModalMessage::Input(c))
        }
        _ => AppMessage::Noop,
    }
}

/// 确认删除弹窗
fn handle_confirm_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
            AppMessage::Modal(ModalMessage::ToggleDeleteFocus)
        }
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
        _ => AppMessage::Noop,
    }
}

/// 命令查看器弹窗
fn handle_viewer_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Modal(ModalMessage::ScrollUp),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Modal(ModalMessage::ScrollDown),
        _ => AppMessage::Noop,
    }
}

/// 结构化配置编辑弹窗
fn handle_config_form_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::ACTION_SAVE.matches(&key) {
        return AppMessage::Modal(ModalMessage::Save);
    }

    match key.code {
        KeyCode::Up => AppMessage::Modal(ModalMessage::PrevField),
        KeyCode::Down => AppMessage::Modal(ModalMessage::NextField),
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
        KeyCode::Backspace => AppMessage::Modal(ModalMessage::Backspace),
        KeyCode::Char(c)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Modal(ModalMessage::Input(c))
        }
        _ => AppMessage::Noop,
    }
}
