//! App 状态定义 (Model)
//!
//! 包含应用状态结构体

use ratatui::layout::{Position, Rect};

use super::actions::Action;
use crate::config::Config;
use crate::models::Expression;

/// 应用状态
pub struct App {
    pub config: Config,
    pub expression: Expression,
    pub buttons: Vec<(Rect, Action)>, // 渲染时由视图层回填，用于鼠标命中检测
}

impl App {
    /// 创建新的应用实例
    pub fn new(config: Config) -> Self {
        Self {
            config,
            expression: Expression::new(),
            buttons: Vec::new(),
        }
    }

    /// 查找命中指定位置的键盘按钮
    pub fn button_at(&self, position: Position) -> Option<Action> {
        self.buttons
            .iter()
            .find(|(area, _)| area.contains(position))
            .map(|(_, action)| *action)
    }
}
