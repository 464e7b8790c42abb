//! The calculator variant's expression evaluator.
//!
//! A small recursive-descent parser over `+ - * / ( )` and numerals; never
//! a general-purpose evaluator. Evaluation fails closed: any invalid input
//! yields [`CalcError`] and the session displays `"Error"` rather than
//! panicking.
//!
//! Grammar:
//!
//! ```text
//! expression := term (('+' | '-') term)*
//! term       := factor (('*' | '/') factor)*
//! factor     := '-' factor | '(' expression ')' | number
//! ```

use thiserror::Error;

/// Errors from expression evaluation.
#[derive(Error, Debug, PartialEq)]
pub enum CalcError {
    #[error("unexpected character `{0}`")]
    UnexpectedChar(char),

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("trailing input after expression")]
    TrailingInput,

    #[error("malformed number `{0}`")]
    BadNumber(String),

    #[error("division by zero")]
    DivisionByZero,
}

/// Evaluate an arithmetic expression.
pub fn evaluate(expression: &str) -> Result<f64, CalcError> {
    let mut parser = Parser {
        input: expression.as_bytes(),
        pos: 0,
    };
    let value = parser.expression()?;
    parser.skip_whitespace();
    if parser.pos < parser.input.len() {
        return Err(CalcError::TrailingInput);
    }
    Ok(value)
}

struct Parser<'a> {
    input: &'a [u8],
    pos: usize,
}

impl Parser<'_> {
    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn expression(&mut self) -> Result<f64, CalcError> {
        let mut value = self.term()?;
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(b'+') => {
                    self.pos += 1;
                    value += self.term()?;
                }
                Some(b'-') => {
                    self.pos += 1;
                    value -= self.term()?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn term(&mut self) -> Result<f64, CalcError> {
        let mut value = self.factor()?;
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(b'*') => {
                    self.pos += 1;
                    value *= self.factor()?;
                }
                Some(b'/') => {
                    self.pos += 1;
                    let divisor = self.factor()?;
                    if divisor == 0.0 {
                        return Err(CalcError::DivisionByZero);
                    }
                    value /= divisor;
                }
                _ => return Ok(value),
            }
        }
    }

    fn factor(&mut self) -> Result<f64, CalcError> {
        self.skip_whitespace();
        match self.peek() {
            Some(b'-') => {
                self.pos += 1;
                Ok(-self.factor()?)
            }
            Some(b'(') => {
                self.pos += 1;
                let value = self.expression()?;
                self.skip_whitespace();
                match self.peek() {
                    Some(b')') => {
                        self.pos += 1;
                        Ok(value)
                    }
                    Some(other) => Err(CalcError::UnexpectedChar(other as char)),
                    None => Err(CalcError::UnexpectedEnd),
                }
            }
            Some(b) if b.is_ascii_digit() || b == b'.' => self.number(),
            Some(other) => Err(CalcError::UnexpectedChar(other as char)),
            None => Err(CalcError::UnexpectedEnd),
        }
    }

    fn number(&mut self) -> Result<f64, CalcError> {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|b| b.is_ascii_digit() || b == b'.')
        {
            self.pos += 1;
        }
        let text = std::str::from_utf8(&self.input[start..self.pos])
            .unwrap_or_default();
        text.parse()
            .map_err(|_| CalcError::BadNumber(text.to_string()))
    }
}

/// Format a result the way the calculator displays it: whole numbers
/// without a fraction, everything else as-is.
fn format_result(value: f64) -> String {
    if !value.is_finite() {
        return "Error".to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Ephemeral expression state for one live calculator note. Nothing here
/// persists; a reloaded note starts fresh.
#[derive(Debug, Clone)]
pub struct CalcSession {
    expression: String,
    display: String,
}

impl Default for CalcSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CalcSession {
    pub fn new() -> Self {
        Self {
            expression: String::new(),
            display: "0".to_string(),
        }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    /// Append a key press. Anything outside the calculator's alphabet is
    /// ignored.
    pub fn input(&mut self, ch: char) {
        if ch.is_ascii_digit() || "+-*/(). ".contains(ch) {
            self.expression.push(ch);
            self.display = self.expression.clone();
        }
    }

    pub fn backspace(&mut self) {
        self.expression.pop();
        self.display = if self.expression.is_empty() {
            "0".to_string()
        } else {
            self.expression.clone()
        };
    }

    pub fn clear(&mut self) {
        self.expression.clear();
        self.display = "0".to_string();
    }

    /// Evaluate the current expression. On success the result becomes the
    /// new expression (so operations chain); on failure the display shows
    /// `"Error"` and the expression stays for correction.
    pub fn equals(&mut self) {
        match evaluate(&self.expression) {
            Ok(value) => {
                self.display = format_result(value);
                self.expression = self.display.clone();
            }
            Err(_) => {
                self.display = "Error".to_string();
            }
        }
    }
}
