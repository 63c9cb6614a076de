//! 配色与通用样式

use ratatui::style::{Color, Modifier, Style};

/// 界面配色
pub struct Palette {
    pub fg: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight: Color,
    pub selected_fg: Color,
    pub selected_bg: Color,
    pub success: Color,
    pub error: Color,
}

const PALETTE: Palette = Palette {
    fg: Color::Gray,
    muted: Color::DarkGray,
    border: Color::DarkGray,
    border_focused: Color::Cyan,
    highlight: Color::Blue,
    selected_fg: Color::White,
    selected_bg: Color::Blue,
    success: Color::Green,
    error: Color::Red,
};

/// 获取当前配色
pub fn colors() -> &'static Palette {
    &PALETTE
}

/// 通用样式
pub struct Styles;

impl Styles {
    /// 状态栏快捷键
    pub fn hint_key() -> Style {
        Style::default()
            .fg(colors().border_focused)
            .add_modifier(Modifier::BOLD)
    }

    /// 状态栏快捷键说明
    pub fn hint_desc() -> Style {
        Style::default().fg(colors().muted)
    }

    /// 状态栏背景
    pub fn statusbar() -> Style {
        Style::default()
    }
}
