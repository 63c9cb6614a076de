//! 搜索框组件

use ratatui::{
    layout::{Position, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::App;
use crate::view::theme::colors;

/// 渲染搜索框
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let is_focused = app.focus.is_search() && !app.modal_open();
    let border_style = if is_focused {
        Style::default().fg(c.border_focused)
    } else {
        Style::default().fg(c.border)
    };

    let block = Block::default()
        .title(" Search (address) ")
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let paragraph = Paragraph::new(app.search.input.as_str()).style(Style::default().fg(c.fg));
    frame.render_widget(paragraph, inner);

    // 聚焦时显示输入光标（宽字符按显示宽度计算）
    if is_focused {
        let cursor_x = inner.x + u16::try_from(app.search.input.width()).unwrap_or(u16::MAX);
        frame.set_cursor_position(Position::new(cursor_x.min(inner.right()), inner.y));
    }
}
