//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use fleet_console_core::{ConfigView, Severity};

use crate::model::{App, FocusPanel};
use crate::view::theme::{colors, Styles};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 根据当前焦点和弹窗生成快捷键提示
    let hints = get_hints(app);

    // 构建状态栏内容
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有通知，显示在右侧
    if let Some(notice) = &app.console.notice {
        let color = match notice.severity {
            Severity::Success => colors().success,
            Severity::Error => colors().error,
        };
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            notice.message.clone(),
            Style::default().fg(color),
        ));
    }

    let content = Line::from(spans);
    let paragraph = Paragraph::new(content).style(Styles::statusbar());

    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    // 弹窗优先
    if app.console.editor.is_some() {
        return vec![
            ("Tab/↑↓", "Field"),
            ("Enter", "Save"),
            ("Esc", "Cancel"),
        ];
    }
    if app.console.delete_gate.is_open() {
        return vec![("←→", "Choose"), ("Enter", "OK"), ("Esc", "Cancel")];
    }
    match app.console.config_view {
        ConfigView::Raw { .. } => {
            return vec![("↑↓", "Scroll"), ("Esc", "Close")];
        }
        ConfigView::Structured { .. } => {
            return vec![
                ("↑↓", "Select"),
                ("Enter", "Edit"),
                ("Alt+s", "Save"),
                ("Esc", "Close"),
            ];
        }
        ConfigView::Hidden => {}
    }

    match app.focus {
        FocusPanel::Search => vec![
            ("Enter", "Search"),
            ("Esc", "Clear"),
            ("Tab", "Table"),
        ],
        FocusPanel::Table => vec![
            ("↑↓", "Select"),
            ("←→", "Page"),
            ("Alt+a", "Add"),
            ("Alt+e", "Edit"),
            ("Alt+d", "Delete"),
            ("Alt+c", "Command"),
            ("Alt+g", "Config"),
            ("Alt+r", "Refresh"),
            ("Alt+q", "Quit"),
        ],
    }
}
