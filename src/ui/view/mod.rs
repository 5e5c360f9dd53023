//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::actions::Action;
use super::state::App;
use crate::models::Operator;
use components::{render_button, render_display_panel};
use layouts::{split_columns, split_rows};

/// 键盘布局：每行按钮的 (标签, 动作, 宽度比)
fn keypad_rows() -> Vec<Vec<(&'static str, Action, u32)>> {
    vec![
        vec![
            ("AC", Action::Clear, 1),
            ("DEL", Action::Delete, 1),
            ("%", Action::Percent, 1),
            ("÷", Action::Operator(Operator::Divide), 1),
        ],
        vec![
            ("7", Action::Digit('7'), 1),
            ("8", Action::Digit('8'), 1),
            ("9", Action::Digit('9'), 1),
            ("×", Action::Operator(Operator::Multiply), 1),
        ],
        vec![
            ("4", Action::Digit('4'), 1),
            ("5", Action::Digit('5'), 1),
            ("6", Action::Digit('6'), 1),
            ("-", Action::Operator(Operator::Subtract), 1),
        ],
        vec![
            ("1", Action::Digit('1'), 1),
            ("2", Action::Digit('2'), 1),
            ("3", Action::Digit('3'), 1),
            ("+", Action::Operator(Operator::Add), 1),
        ],
        vec![
            ("0", Action::Digit('0'), 2), // 双倍宽度
            (".", Action::Point, 1),
            ("=", Action::Equals, 1),
        ],
    ]
}

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // 标题
            Constraint::Length(3),  // 显示
            Constraint::Min(15),    // 键盘
            Constraint::Length(3),  // 帮助
        ])
        .split(frame.area());

    render_title(frame, app, chunks[0]);
    render_display(frame, app, chunks[1]);
    render_keypad(frame, app, chunks[2]);
    render_help(frame, chunks[3]);
}

fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let title = Paragraph::new("🧮 算盘")
        .style(
            Style::default()
                .fg(app.config.theme.accent_color())
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_display(frame: &mut Frame, app: &App, area: Rect) {
    let color = if app.expression.is_error() {
        app.config.theme.error_color()
    } else {
        Color::White
    };
    render_display_panel(frame, area, app.expression.display(), color);
}

/// 渲染键盘，同时回填每个按钮的命中区域
fn render_keypad(frame: &mut Frame, app: &mut App, area: Rect) {
    let accent = app.config.theme.accent_color();
    app.buttons.clear();

    let keypad = keypad_rows();
    let rows = split_rows(area, keypad.len());
    for (row_area, row) in rows.iter().zip(&keypad) {
        let ratios: Vec<u32> = row.iter().map(|(_, _, width)| *width).collect();
        let columns = split_columns(*row_area, &ratios);
        for (cell, (label, action, _)) in columns.iter().zip(row) {
            let color = match action {
                Action::Digit(_) | Action::Point => Color::White,
                _ => accent,
            };
            render_button(frame, *cell, label, color);
            app.buttons.push((*cell, *action));
        }
    }
}

fn render_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(
        "[0-9 .] 输入  [+ - * /] 运算符  [Enter/=] 计算  [%] 百分比  [Backspace] 删除  [Esc] 清空  [q] 退出",
    )
    .style(Style::default().fg(Color::Gray))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}
