//! 分页控件
//!
//! 页码范围的钳制发生在这里：核心按给定页码发请求，
//! 越界目标不会被传给核心。

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::App;
use crate::view::theme::colors;

/// 上一页目标页码（已在第一页时为 `None`）
#[must_use]
pub fn prev_page(page: u32) -> Option<u32> {
    if page > 1 { Some(page - 1) } else { None }
}

/// 下一页目标页码（已在最后一页时为 `None`）
#[must_use]
pub fn next_page(page: u32, page_count: u32) -> Option<u32> {
    if page < page_count { Some(page + 1) } else { None }
}

/// 渲染分页栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let list = &app.console.list;

    let line = Line::from(vec![
        Span::styled(
            format!("  Page {}/{}", list.page, list.page_count()),
            Style::default().fg(c.fg),
        ),
        Span::styled(
            format!("  ·  {} bots", list.total),
            Style::default().fg(c.muted),
        ),
        Span::styled("  ·  ←/→ flip", Style::default().fg(c.muted)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prev_stops_at_first_page() {
        assert_eq!(prev_page(1), None);
        assert_eq!(prev_page(2), Some(1));
    }

    #[test]
    fn next_stops_at_last_page() {
        assert_eq!(next_page(3, 3), None);
        assert_eq!(next_page(2, 3), Some(3));
        assert_eq!(next_page(1, 1), None);
    }

    #[test]
    fn empty_list_never_flips() {
        // 空列表视为 1 页
        assert_eq!(next_page(1, 0), None);
        assert_eq!(prev_page(1), None);
    }
}
