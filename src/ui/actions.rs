//! Action 枚举定义 (Intent)
//!
//! 把物理输入（按键、鼠标点击）抽象成统一的逻辑输入单元，
//! 编辑器只消费这些语义化 Action

use crate::models::Operator;

/// 用户操作枚举
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Quit,

    // 编辑输入
    Digit(char),
    Point,
    Operator(Operator),

    // 控制操作
    Clear,   // AC / Esc
    Delete,  // DEL / Backspace
    Percent, // %
    Equals,  // = / Enter
}
