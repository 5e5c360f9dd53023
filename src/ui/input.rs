//! 键盘与鼠标事件映射 (Input -> Action)
//!
//! 把按键和鼠标点击转换为 Action

use std::io;

use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use super::actions::Action;
use super::state::App;
use crate::models::Operator;

/// 根据按键获取对应的 Action
///
/// 键盘输入的 * 和 / 经字形表映射为显示字形 × ÷。
pub fn get_action(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Esc => Some(Action::Clear),
        KeyCode::Backspace => Some(Action::Delete),
        KeyCode::Enter | KeyCode::Char('=') => Some(Action::Equals),
        KeyCode::Char('%') => Some(Action::Percent),
        KeyCode::Char('.') => Some(Action::Point),
        KeyCode::Char(c) if c.is_ascii_digit() => Some(Action::Digit(c)),
        KeyCode::Char(c) => Operator::from_glyph(c).map(Action::Operator),
        _ => None,
    }
}

/// 处理按键事件
pub fn handle_key_event(app: &mut App, key: KeyCode) -> io::Result<bool> {
    if let Some(action) = get_action(key) {
        Ok(app.dispatch(action))
    } else {
        Ok(false)
    }
}

/// 处理鼠标事件：左键按下且命中键盘按钮时触发对应 Action
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) -> io::Result<bool> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return Ok(false);
    }

    let position = Position::new(mouse.column, mouse.row);
    if let Some(action) = app.button_at(position) {
        return Ok(app.dispatch(action));
    }
    Ok(false)
}
