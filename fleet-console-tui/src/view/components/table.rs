//! 机器人列表表格

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use fleet_console_api::BotRecord;
use fleet_console_core::util::format_epoch;

use crate::model::App;
use crate::view::theme::colors;

/// 渲染机器人表格
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    if app.console.list.bots.is_empty() {
        render_empty(frame, area);
    } else {
        render_rows(app, frame, area);
    }
}

/// 渲染空状态
fn render_empty(frame: &mut Frame, area: Rect) {
    let c = colors();
    let content = vec![
        Line::from(""),
        Line::styled("  No bots found.", Style::default().fg(c.muted)),
        Line::from(""),
        Line::styled(
            "  Press Alt+a to add a bot, or Tab to search by address.",
            Style::default().fg(c.muted),
        ),
    ];

    let paragraph = Paragraph::new(content);
    frame.render_widget(paragraph, area);
}

/// 渲染表头与数据行
fn render_rows(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let rows_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    // 表头
    let header = Line::from(Span::styled(
        format!(
            "  {:<6} {:<24} {:<10} {:<19} {:<19}",
            "ID", "Address", "Status", "Create Time", "Update Time"
        ),
        Style::default().fg(c.muted).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(header), rows_layout[0]);

    // 数据行
    let items: Vec<ListItem> = app
        .console
        .list
        .bots
        .iter()
        .enumerate()
        .map(|(i, bot)| {
            let is_selected = i == app.console.list.selected;
            let style = if is_selected {
                Style::default()
                    .fg(c.selected_fg)
                    .bg(c.selected_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(c.fg)
            };
            ListItem::new(Line::from(Span::styled(row_text(bot), style)))
        })
        .collect();

    let list = List::new(items).highlight_style(Style::default());

    let mut state = ListState::default();
    state.select(Some(app.console.list.selected));

    frame.render_stateful_widget(list, rows_layout[1], &mut state);
}

/// 单行文本（定宽列）
fn row_text(bot: &BotRecord) -> String {
    format!(
        "  {:<6} {:<24} {:<10} {:<19} {:<19}",
        bot.id,
        clip(&bot.address, 24),
        clip(&bot.status, 10),
        format_epoch(bot.create_time),
        format_epoch(bot.update_time),
    )
}

/// 截断过长的值
fn clip(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        value.to_string()
    } else {
        let head: String = value.chars().take(max.saturating_sub(1)).collect();
        format!("{head}…")
    }
}
