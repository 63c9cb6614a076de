//! 弹窗渲染
//!
//! 弹窗的开关由核心状态推导，渲染时按同样的优先级分发：
//! 编辑表单 → 确认删除 → 配置视图。

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use fleet_console_api::BotDraft;
use fleet_console_core::ConfigView;

use crate::model::App;
use crate::view::theme::colors;

use super::config_form;

/// 渲染当前弹窗（如果有）
pub fn render(app: &App, frame: &mut Frame) {
    if let Some(draft) = &app.console.editor {
        render_editor(app, draft, frame);
        return;
    }

    if app.console.delete_gate.is_open() {
        render_confirm(app, frame);
        return;
    }

    match &app.console.config_view {
        ConfigView::Raw { text } => render_viewer(app, text, frame),
        ConfigView::Structured { .. } => config_form::render(app, frame),
        ConfigView::Hidden => {}
    }
}

/// 居中弹窗区域
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

// ========== 编辑表单 ==========

/// 渲染添加/编辑弹窗
fn render_editor(app: &App, draft: &BotDraft, frame: &mut Frame) {
    let c = colors();
    let area = centered_rect(70, 80, frame.area());
    frame.render_widget(Clear, area);

    let title = if draft.is_new() { " Add Bot " } else { " Edit Bot " };
    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let fields_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 地址
            Constraint::Min(3),    // CA
            Constraint::Min(3),    // KEY
            Constraint::Min(3),    // CRT
        ])
        .split(inner);

    render_field(frame, fields_layout[0], "Address", &draft.address, app.modal_ui.editor_focus == 0);
    render_field(frame, fields_layout[1], "CA File", &draft.ca_file, app.modal_ui.editor_focus == 1);
    render_field(frame, fields_layout[2], "KEY File", &draft.key_file, app.modal_ui.editor_focus == 2);
    render_field(frame, fields_layout[3], "CRT File", &draft.crt_file, app.modal_ui.editor_focus == 3);
}

/// 渲染单个输入字段
fn render_field(frame: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let c = colors();
    let border_style = if focused {
        Style::default().fg(c.border_focused)
    } else {
        Style::default().fg(c.border)
    };

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let paragraph = Paragraph::new(value)
        .style(Style::default().fg(c.fg))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

// ========== 确认删除 ==========

/// 渲染确认删除弹窗
fn render_confirm(app: &App, frame: &mut Frame) {
    let c = colors();
    let area = centered_rect(50, 20, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Confirm ")
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.error));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let bot_id = app.console.delete_gate.pending_id().unwrap_or_default();

    let cancel_style = if app.modal_ui.confirm_focus == 0 {
        Style::default().fg(c.selected_fg).bg(c.selected_bg).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.fg)
    };
    let delete_style = if app.modal_ui.confirm_focus == 1 {
        Style::default().fg(c.selected_fg).bg(c.error).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.fg)
    };

    let content = vec![
        Line::from(""),
        Line::from(format!(
            "  Are you sure you want to delete bot {bot_id}?"
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("        "),
            Span::styled("[ Cancel ]", cancel_style),
            Span::raw("    "),
            Span::styled("[ Delete ]", delete_style),
        ]),
    ];

    frame.render_widget(Paragraph::new(content), inner);
}

// ========== 命令查看器 ==========

/// 渲染只读命令查看器
fn render_viewer(app: &App, text: &str, frame: &mut Frame) {
    let c = colors();
    let area = centered_rect(60, 70, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Command ")
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(c.fg))
        .wrap(Wrap { trim: false })
        .scroll((app.modal_ui.viewer_scroll, 0));
    frame.render_widget(paragraph, inner);
}
