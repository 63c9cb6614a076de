//! 结构化配置编辑表单（协作组件的渲染面）
//!
//! 字段按通用键值对逐行展示，不感知具体 schema。

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::model::state::ConfigFormPhase;
use crate::model::App;
use crate::view::theme::colors;

use super::modal::centered_rect;

/// 渲染结构化配置弹窗
pub fn render(app: &App, frame: &mut Frame) {
    let c = colors();
    let area = centered_rect(70, 70, frame.area());
    frame.render_widget(Clear, area);

    let form = &app.config_form;
    let dirty_mark = if form.dirty { " *" } else { "" };
    let block = Block::default()
        .title(format!(" Edit Config · bot {}{dirty_mark} ", form.bot_id))
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match &form.phase {
        ConfigFormPhase::Loading => {
            render_message(frame, inner, "Loading config...");
        }
        ConfigFormPhase::Saving => {
            render_message(frame, inner, "Saving config...");
        }
        ConfigFormPhase::Failed(message) => {
            let line = Line::styled(
                format!("  {message}"),
                Style::default().fg(c.error),
            );
            frame.render_widget(Paragraph::new(vec![Line::from(""), line]), inner);
        }
        ConfigFormPhase::Ready => {
            render_fields(app, frame, inner);
        }
    }
}

/// 渲染居中提示文本
fn render_message(frame: &mut Frame, area: Rect, message: &str) {
    let c = colors();
    let content = vec![
        Line::from(""),
        Line::styled(format!("  {message}"), Style::default().fg(c.muted)),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

/// 渲染字段列表
fn render_fields(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let form = &app.config_form;

    if form.fields.is_empty() {
        render_message(frame, area, "No config fields.");
        return;
    }

    let key_width = form
        .fields
        .iter()
        .map(|f| f.key.chars().count())
        .max()
        .unwrap_or(0);

    let lines: Vec<Line> = form
        .fields
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let is_selected = i == form.selected;

            // 正在编辑的字段显示编辑缓冲和光标标记
            let (value, value_style) = if is_selected && form.editing {
                (
                    format!("{}▏", form.buffer),
                    Style::default().fg(c.selected_fg).add_modifier(Modifier::BOLD),
                )
            } else if is_selected {
                (field.value.clone(), Style::default().fg(c.selected_fg).bg(c.selected_bg))
            } else {
                (field.value.clone(), Style::default().fg(c.muted))
            };

            let key_style = if is_selected {
                Style::default().fg(c.border_focused).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(c.fg)
            };

            Line::from(vec![
                Span::raw("  "),
                Span::styled(format!("{:<key_width$}", field.key), key_style),
                Span::raw("  "),
                Span::styled(value, value_style),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}
