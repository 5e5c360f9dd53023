use crate::eval;

/// 求值失败时写入缓冲区的哨兵值
pub const ERROR_SENTINEL: &str = "Error";

/// 四则运算符
///
/// 显示字形（× ÷）与求值字形（* /）之间的双向映射表。
/// 缓冲区内只存放显示字形，求值前统一换成求值字形。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// 显示字形
    pub fn display_glyph(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '×',
            Operator::Divide => '÷',
        }
    }

    /// 求值字形
    pub fn eval_glyph(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// 从任意一套字形识别运算符（键盘输入 * / 也能对上）
    pub fn from_glyph(c: char) -> Option<Operator> {
        Operator::ALL
            .into_iter()
            .find(|op| op.display_glyph() == c || op.eval_glyph() == c)
    }
}

fn is_operator_glyph(c: char) -> bool {
    Operator::from_glyph(c).is_some()
}

/// 表达式缓冲区
///
/// 计算器唯一的可变状态：一个从左到右累积的表达式文本。
/// 编辑操作在这里完成校验，非法输入静默忽略；求值失败时
/// 整个缓冲区被哨兵值 `Error` 替换。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Expression {
    text: String,
}

impl Expression {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// 是否处于错误状态（缓冲区恰为哨兵值）
    pub fn is_error(&self) -> bool {
        self.text == ERROR_SENTINEL
    }

    /// 渲染给显示层的文本，空缓冲区显示 "0"
    pub fn display(&self) -> &str {
        if self.text.is_empty() { "0" } else { &self.text }
    }

    /// 错误状态下的编辑操作先清空缓冲区，再正常执行
    fn reset_if_error(&mut self) {
        if self.is_error() {
            self.text.clear();
        }
    }

    /// 末段数字：最后一个运算符之后的部分，没有运算符则为整个缓冲区
    fn trailing_segment(&self) -> &str {
        match self.text.rfind(is_operator_glyph) {
            Some(idx) => {
                let glyph_len = self.text[idx..].chars().next().map_or(0, char::len_utf8);
                &self.text[idx + glyph_len..]
            }
            None => &self.text,
        }
    }

    /// 追加一位数字
    ///
    /// 整个缓冲区恰为 "0" 时再按 0 无效，抑制多余的前导零。
    pub fn append_digit(&mut self, digit: char) {
        debug_assert!(digit.is_ascii_digit());
        self.reset_if_error();
        if self.text == "0" && digit == '0' {
            return;
        }
        self.text.push(digit);
    }

    /// 追加运算符
    ///
    /// 空缓冲区只接受减号（允许负号开头）；紧跟在另一个运算符
    /// 之后时替换它，只保留最新的选择。
    pub fn append_operator(&mut self, op: Operator) {
        self.reset_if_error();
        if self.text.is_empty() {
            if op == Operator::Subtract {
                self.text.push(op.display_glyph());
            }
            return;
        }
        if self.text.ends_with(is_operator_glyph) {
            self.text.pop();
        }
        self.text.push(op.display_glyph());
    }

    /// 追加小数点
    ///
    /// 当前数字段已有小数点时忽略；段为空时补成 "0." 而不是裸点。
    pub fn append_point(&mut self) {
        self.reset_if_error();
        let segment = self.trailing_segment();
        if segment.contains('.') {
            return;
        }
        if segment.is_empty() {
            self.text.push_str("0.");
        } else {
            self.text.push('.');
        }
    }

    /// 删除最后一个字符，空缓冲区时无效果
    pub fn delete_last(&mut self) {
        if self.is_error() {
            self.text.clear();
            return;
        }
        self.text.pop();
    }

    /// 清空缓冲区
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// 把末段数字换算成百分比（50 -> 0.5），前面的段保持不变
    ///
    /// 缓冲区为空、以运算符结尾或末段解析不出有限数时无效果。
    pub fn apply_percent(&mut self) {
        self.reset_if_error();
        let segment = self.trailing_segment();
        if segment.is_empty() {
            return;
        }
        let value: f64 = match segment.parse() {
            Ok(v) => v,
            Err(_) => return,
        };
        if !value.is_finite() {
            return;
        }
        let prefix_len = self.text.len() - segment.len();
        self.text.truncate(prefix_len);
        self.text.push_str(&(value / 100.0).to_string());
    }

    /// 求值并用结果文本替换缓冲区，失败时写入哨兵值
    ///
    /// 失败路径：求值器报错（表达式残缺、括号不匹配等）、
    /// 结果为正负无穷或 NaN。空缓冲区时无效果。
    pub fn evaluate(&mut self) {
        if self.text.is_empty() {
            return;
        }

        // 显示字形 -> 求值字形（× ÷ 换成 * /）
        let normalized: String = self
            .text
            .chars()
            .map(|c| match Operator::from_glyph(c) {
                Some(op) => op.eval_glyph(),
                None => c,
            })
            .collect();

        // 白名单校验：数字、四则运算、括号、小数点、空白之外一律拒绝
        let allowed = normalized
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_whitespace() || "+-*/().".contains(c));

        let result = if allowed {
            eval::evaluate(&normalized).ok()
        } else {
            None
        };

        self.text = match result {
            Some(value) if value.is_finite() => value.to_string(),
            _ => ERROR_SENTINEL.to_string(),
        };
    }
}
