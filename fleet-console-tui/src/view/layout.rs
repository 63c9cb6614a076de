//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::App;

use super::components;
use super::theme::colors;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 五层布局：标题栏 + 搜索框 + 表格 + 分页 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Length(3), // 搜索框
            Constraint::Min(1),    // 表格
            Constraint::Length(1), // 分页
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    let title_area = main_layout[0];
    let search_area = main_layout[1];
    let table_area = main_layout[2];
    let pagination_area = main_layout[3];
    let status_area = main_layout[4];

    // 渲染标题栏
    render_title_bar(frame, title_area);

    // 渲染搜索框
    components::searchbar::render(app, frame, search_area);

    // 渲染表格
    render_table_block(app, frame, table_area);

    // 渲染分页
    components::pagination::render(app, frame, pagination_area);

    // 渲染状态栏
    components::statusbar::render(app, frame, status_area);

    // 渲染弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(" Fleet Console v0.1.0")
        .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// 渲染表格区域（含边框）
fn render_table_block(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let is_focused = app.focus.is_table() && !app.modal_open();
    let border_style = if is_focused {
        Style::default().fg(c.border_focused)
    } else {
        Style::default().fg(c.border)
    };

    let block = Block::default()
        .title(" Bots ")
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    components::table::render(app, frame, inner_area);
}
