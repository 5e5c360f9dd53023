//! 算术表达式求值器
//!
//! 对归一化后的表达式（数字、+ - * /、括号、小数点、空白）做
//! 递归下降求值。文法封闭，不具备任何代码执行能力：
//!
//! ```text
//! expression := term (('+' | '-') term)*
//! term       := factor (('*' | '/') factor)*
//! factor     := '-' factor | primary
//! primary    := number | '(' expression ')'
//! ```
//!
//! 除以零不算求值错误：结果是 f64 的正负无穷或 NaN，
//! 由调用方的有限性检查处理。

use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

use thiserror::Error;

/// 求值错误
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("意外的字符 '{0}'")]
    UnexpectedChar(char),
    #[error("无法解析的数字 \"{0}\"")]
    InvalidNumber(String),
    #[error("意外的记号 '{0}'")]
    UnexpectedToken(Token),
    #[error("表达式不完整")]
    UnexpectedEnd,
    #[error("括号不匹配")]
    UnbalancedParen,
}

/// 词法记号
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{n}"),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
        }
    }
}

fn lex(expr: &str) -> Result<Vec<Token>, EvalError> {
    let mut tokens = Vec::new();
    let mut chars = expr.chars().peekable();
    while let Some(&c) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '+' => {
                chars.next();
                tokens.push(Token::Plus);
            }
            '-' => {
                chars.next();
                tokens.push(Token::Minus);
            }
            '*' => {
                chars.next();
                tokens.push(Token::Star);
            }
            '/' => {
                chars.next();
                tokens.push(Token::Slash);
            }
            '(' => {
                chars.next();
                tokens.push(Token::LParen);
            }
            ')' => {
                chars.next();
                tokens.push(Token::RParen);
            }
            '0'..='9' | '.' => tokens.push(number(&mut chars)?),
            other => return Err(EvalError::UnexpectedChar(other)),
        }
    }
    Ok(tokens)
}

/// 扫描一个数字字面量
///
/// 把连续的数字和小数点收进同一个字面量再整体解析，
/// "1.2.3" 这类多点写法在这里报错。
fn number(chars: &mut Peekable<Chars>) -> Result<Token, EvalError> {
    let mut s = String::new();
    while let Some(&c) = chars.peek() {
        if c.is_ascii_digit() || c == '.' {
            s.push(c);
            chars.next();
        } else {
            break;
        }
    }
    s.parse::<f64>()
        .map(Token::Number)
        .map_err(|_| EvalError::InvalidNumber(s))
}

struct Parser<'a> {
    tokens: std::slice::Iter<'a, Token>,
    peeked: Option<&'a Token>,
}

impl<'a> Parser<'a> {
    fn next(&mut self) -> Option<&'a Token> {
        if self.peeked.is_some() {
            return self.peeked.take();
        }
        self.tokens.next()
    }

    fn peek(&mut self) -> Option<&'a Token> {
        if self.peeked.is_none() {
            self.peeked = self.tokens.next();
        }
        self.peeked
    }

    fn expression(&mut self) -> Result<f64, EvalError> {
        let mut value = self.term()?;
        while let Some(token) = self.peek() {
            match token {
                Token::Plus => {
                    self.next();
                    value += self.term()?;
                }
                Token::Minus => {
                    self.next();
                    value -= self.term()?;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<f64, EvalError> {
        let mut value = self.factor()?;
        while let Some(token) = self.peek() {
            match token {
                Token::Star => {
                    self.next();
                    value *= self.factor()?;
                }
                Token::Slash => {
                    self.next();
                    value /= self.factor()?;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    /// 一元负号
    fn factor(&mut self) -> Result<f64, EvalError> {
        if let Some(Token::Minus) = self.peek() {
            self.next();
            return Ok(-self.factor()?);
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<f64, EvalError> {
        match self.next() {
            Some(Token::Number(n)) => Ok(*n),
            Some(Token::LParen) => {
                let value = self.expression()?;
                match self.next() {
                    Some(Token::RParen) => Ok(value),
                    _ => Err(EvalError::UnbalancedParen),
                }
            }
            Some(token) => Err(EvalError::UnexpectedToken(*token)),
            None => Err(EvalError::UnexpectedEnd),
        }
    }
}

/// 求值入口：解析整个表达式并算出数值
pub fn evaluate(expr: &str) -> Result<f64, EvalError> {
    let tokens = lex(expr)?;
    let mut parser = Parser {
        tokens: tokens.iter(),
        peeked: None,
    };
    let value = parser.expression()?;
    match parser.next() {
        Some(token) => Err(EvalError::UnexpectedToken(*token)),
        None => Ok(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addition_and_subtraction() {
        assert_eq!(evaluate("2+2").unwrap(), 4.0);
        assert_eq!(evaluate("10-3-2").unwrap(), 5.0);
    }

    #[test]
    fn test_precedence() {
        assert_eq!(evaluate("2+3*4").unwrap(), 14.0);
        assert_eq!(evaluate("10-2/4").unwrap(), 9.5);
        assert_eq!(evaluate("2*3+4*5").unwrap(), 26.0);
    }

    #[test]
    fn test_parentheses() {
        assert_eq!(evaluate("(2+3)*4").unwrap(), 20.0);
        assert_eq!(evaluate("2*(3+(4-1))").unwrap(), 12.0);
    }

    #[test]
    fn test_unary_minus() {
        assert_eq!(evaluate("-5+8").unwrap(), 3.0);
        assert_eq!(evaluate("2*-3").unwrap(), -6.0);
        assert_eq!(evaluate("-(2+3)").unwrap(), -5.0);
    }

    #[test]
    fn test_decimals() {
        assert_eq!(evaluate("1.5*2").unwrap(), 3.0);
        assert_eq!(evaluate("0.1+0.2").unwrap(), 0.1 + 0.2);
        // 残缺的小数写法也能解析
        assert_eq!(evaluate("5.").unwrap(), 5.0);
        assert_eq!(evaluate(".5").unwrap(), 0.5);
    }

    #[test]
    fn test_whitespace_skipped() {
        assert_eq!(evaluate(" 1 + 2 ").unwrap(), 3.0);
    }

    #[test]
    fn test_division_by_zero_is_infinite() {
        assert!(evaluate("10/0").unwrap().is_infinite());
        assert!(evaluate("0/0").unwrap().is_nan());
    }

    #[test]
    fn test_trailing_operator_is_error() {
        assert_eq!(evaluate("1+"), Err(EvalError::UnexpectedEnd));
    }

    #[test]
    fn test_unbalanced_parens_are_errors() {
        assert_eq!(evaluate("(2+3"), Err(EvalError::UnbalancedParen));
        assert!(evaluate("2+3)").is_err());
    }

    #[test]
    fn test_bad_number_literal() {
        assert_eq!(
            evaluate("1.2.3"),
            Err(EvalError::InvalidNumber("1.2.3".to_string()))
        );
        assert!(evaluate(".").is_err());
    }

    #[test]
    fn test_unexpected_character() {
        assert_eq!(evaluate("2a"), Err(EvalError::UnexpectedChar('a')));
    }

    #[test]
    fn test_empty_input_is_error() {
        assert_eq!(evaluate(""), Err(EvalError::UnexpectedEnd));
    }
}
