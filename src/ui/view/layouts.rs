//! 布局辅助函数

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// 把区域均分为若干行
pub fn split_rows(area: Rect, count: usize) -> Vec<Rect> {
    let constraints = vec![Constraint::Ratio(1, count as u32); count];
    Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

/// 按给定宽度比把一行分成若干列
pub fn split_columns(area: Rect, ratios: &[u32]) -> Vec<Rect> {
    let total: u32 = ratios.iter().sum();
    let constraints: Vec<Constraint> = ratios
        .iter()
        .map(|ratio| Constraint::Ratio(*ratio, total))
        .collect();
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area)
        .to_vec()
}
