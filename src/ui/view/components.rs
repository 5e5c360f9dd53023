//! 通用 UI 组件
//!
//! 显示面板、键盘按钮等通用组件

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

/// [组件] 表达式显示面板（右对齐）
pub fn render_display_panel(frame: &mut Frame, area: Rect, text: &str, color: Color) {
    let panel = Paragraph::new(text)
        .alignment(Alignment::Right)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(Block::default().title("表达式").borders(Borders::ALL));
    frame.render_widget(panel, area);
}

/// [组件] 键盘按钮
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, color: Color) {
    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, area);
}
