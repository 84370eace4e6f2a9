//! Scanner for the task tuple-list literal in result lines.
//!
//! The literal is a bracketed, comma-separated list of parenthesised
//! 5-element tuples. Elements are single- or double-quoted strings or plain
//! numeric literals. The grammar is deliberately this small; the literal is
//! never evaluated as code.

use crate::ScheduledTask;

/// An error type for [parse_task_list] and [crate::parse_job_record].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("record line has fewer than 3 fields")]
    MissingFields,
    #[error("invalid submission timestamp {0:?}")]
    InvalidTimestamp(String),
    #[error("unexpected end of input at byte {0}")]
    UnexpectedEnd(usize),
    #[error("expected {expected} at byte {at}, found {found:?}")]
    Unexpected {
        at: usize,
        expected: &'static str,
        found: char,
    },
    #[error("invalid number {literal:?} at byte {at}")]
    InvalidNumber { at: usize, literal: String },
    #[error("task tuple at byte {at} has {found} fields, expected 5")]
    TupleArity { at: usize, found: usize },
    #[error("task tuple field {field} at byte {at} must be numeric")]
    NonNumericField { at: usize, field: usize },
    #[error("trailing content at byte {0}")]
    TrailingContent(usize),
}

/// One scanned tuple element: a quoted string or a numeric literal.
enum Value {
    Number(f64),
    Text(String),
}

impl Value {
    fn into_text(self) -> String {
        match self {
            Value::Number(n) => n.to_string(),
            Value::Text(s) => s,
        }
    }

    fn as_number(&self, at: usize, field: usize) -> Result<f64, ParseError> {
        match self {
            Value::Number(n) => Ok(*n),
            Value::Text(_) => Err(ParseError::NonNumericField { at, field }),
        }
    }
}

/// Parse a task tuple-list literal such as
/// `[('f1', 'DC0', 100, 110, 150), ('f1', 'DC1', 100, 112, 160)]`.
pub(crate) fn parse_task_list(input: &str) -> Result<Vec<ScheduledTask>, ParseError> {
    let mut scanner = Scanner::new(input);
    let tasks = scanner.list()?;
    scanner.skip_whitespace();
    if !scanner.at_end() {
        return Err(ParseError::TrailingContent(scanner.pos));
    }
    Ok(tasks)
}

struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn expect(&mut self, wanted: char, expected: &'static str) -> Result<(), ParseError> {
        match self.peek() {
            Some(c) if c == wanted => {
                self.bump();
                Ok(())
            }
            Some(c) => Err(ParseError::Unexpected {
                at: self.pos,
                expected,
                found: c,
            }),
            None => Err(ParseError::UnexpectedEnd(self.pos)),
        }
    }

    /// `[` tuple (`,` tuple)* `]`, or `[]` for a job with no scheduled tasks.
    fn list(&mut self) -> Result<Vec<ScheduledTask>, ParseError> {
        self.skip_whitespace();
        self.expect('[', "'['")?;

        let mut tasks = Vec::new();
        self.skip_whitespace();
        if self.peek() == Some(']') {
            self.bump();
            return Ok(tasks);
        }

        loop {
            tasks.push(self.tuple()?);
            self.skip_whitespace();
            match self.bump() {
                Some(',') => continue,
                Some(']') => return Ok(tasks),
                Some(c) => {
                    return Err(ParseError::Unexpected {
                        at: self.pos - c.len_utf8(),
                        expected: "',' or ']'",
                        found: c,
                    })
                }
                None => return Err(ParseError::UnexpectedEnd(self.pos)),
            }
        }
    }

    /// `(` value `,` value `,` value `,` value `,` value `)`.
    fn tuple(&mut self) -> Result<ScheduledTask, ParseError> {
        self.skip_whitespace();
        let start = self.pos;
        self.expect('(', "'('")?;

        let mut values = Vec::new();
        loop {
            self.skip_whitespace();
            values.push(self.value()?);
            self.skip_whitespace();
            match self.bump() {
                Some(',') => continue,
                Some(')') => break,
                Some(c) => {
                    return Err(ParseError::Unexpected {
                        at: self.pos - c.len_utf8(),
                        expected: "',' or ')'",
                        found: c,
                    })
                }
                None => return Err(ParseError::UnexpectedEnd(self.pos)),
            }
        }

        let [file_id, location, submission, task_start, end]: [Value; 5] =
            values.try_into().map_err(|values: Vec<Value>| {
                ParseError::TupleArity {
                    at: start,
                    found: values.len(),
                }
            })?;

        Ok(ScheduledTask {
            file_id: file_id.into_text(),
            location: location.into_text(),
            submission: submission.as_number(start, 3)?,
            start: task_start.as_number(start, 4)?,
            end: end.as_number(start, 5)?,
        })
    }

    fn value(&mut self) -> Result<Value, ParseError> {
        match self.peek() {
            Some(quote @ ('\'' | '"')) => {
                self.bump();
                self.string(quote)
            }
            Some(c) if c.is_ascii_digit() || matches!(c, '+' | '-' | '.') => self.number(),
            Some(c) => Err(ParseError::Unexpected {
                at: self.pos,
                expected: "a quoted string or a number",
                found: c,
            }),
            None => Err(ParseError::UnexpectedEnd(self.pos)),
        }
    }

    /// The body of a quoted string; the opening quote is already consumed.
    fn string(&mut self, quote: char) -> Result<Value, ParseError> {
        let start = self.pos;
        loop {
            match self.bump() {
                Some(c) if c == quote => {
                    let body = &self.input[start..self.pos - quote.len_utf8()];
                    return Ok(Value::Text(body.to_string()));
                }
                Some(_) => continue,
                None => return Err(ParseError::UnexpectedEnd(self.pos)),
            }
        }
    }

    fn number(&mut self) -> Result<Value, ParseError> {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
        {
            self.bump();
        }

        let literal = &self.input[start..self.pos];
        literal
            .parse::<f64>()
            .map(Value::Number)
            .map_err(|_| ParseError::InvalidNumber {
                at: start,
                literal: literal.to_string(),
            })
    }
}
