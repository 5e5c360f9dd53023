//! 业务逻辑处理 (Update/Dispatch)
//!
//! 把 Action 分发到表达式缓冲区的编辑操作

use super::actions::Action;
use super::state::App;

impl App {
    /// 核心逻辑分发，返回 true 表示退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,

            Action::Digit(d) => self.expression.append_digit(d),
            Action::Point => self.expression.append_point(),
            Action::Operator(op) => self.expression.append_operator(op),

            Action::Clear => self.expression.clear(),
            Action::Delete => self.expression.delete_last(),
            Action::Percent => self.expression.apply_percent(),
            Action::Equals => self.expression.evaluate(),
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::{ERROR_SENTINEL, Operator};

    fn dispatch_all(app: &mut App, actions: &[Action]) {
        for action in actions {
            app.dispatch(*action);
        }
    }

    #[test]
    fn test_arithmetic_flow() {
        let mut app = App::new(Config::default());
        dispatch_all(
            &mut app,
            &[
                Action::Digit('2'),
                Action::Operator(Operator::Add),
                Action::Digit('2'),
                Action::Equals,
            ],
        );
        assert_eq!(app.expression.text(), "4");
    }

    #[test]
    fn test_percent_flow() {
        let mut app = App::new(Config::default());
        dispatch_all(
            &mut app,
            &[
                Action::Digit('2'),
                Action::Digit('0'),
                Action::Digit('0'),
                Action::Operator(Operator::Add),
                Action::Digit('5'),
                Action::Digit('0'),
                Action::Percent,
            ],
        );
        assert_eq!(app.expression.text(), "200+0.5");
        app.dispatch(Action::Equals);
        assert_eq!(app.expression.text(), "200.5");
    }

    #[test]
    fn test_clear_and_delete() {
        let mut app = App::new(Config::default());
        dispatch_all(&mut app, &[Action::Digit('1'), Action::Digit('2')]);
        app.dispatch(Action::Delete);
        assert_eq!(app.expression.text(), "1");
        app.dispatch(Action::Clear);
        assert_eq!(app.expression.display(), "0");
    }

    #[test]
    fn test_error_then_fresh_input() {
        let mut app = App::new(Config::default());
        dispatch_all(
            &mut app,
            &[
                Action::Digit('1'),
                Action::Operator(Operator::Divide),
                Action::Digit('0'),
                Action::Equals,
            ],
        );
        assert_eq!(app.expression.text(), ERROR_SENTINEL);

        app.dispatch(Action::Digit('7'));
        assert_eq!(app.expression.text(), "7");
    }

    #[test]
    fn test_quit_returns_true() {
        let mut app = App::new(Config::default());
        assert!(app.dispatch(Action::Quit));
        assert!(!app.dispatch(Action::Digit('1')));
    }
}
