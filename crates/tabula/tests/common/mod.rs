//! Tabulators used as systems under test.
//!
//! `Interpreter` reads the rendered text back into a tree and walks it
//! directly, without evaluation modes, so it is an independent
//! implementation of the same semantics.

#![allow(dead_code)]

use std::cell::Cell;

use tabula::prelude::*;
use tracing_subscriber::EnvFilter;

/// Installs a test-writer subscriber once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Parses the fully-parenthesised rendering.
pub fn parse(text: &str) -> Result<Expr, String> {
    let mut parser = Parser {
        bytes: text.as_bytes(),
        at: 0,
    };
    let expr = parser.expr()?;
    if parser.at != parser.bytes.len() {
        return Err(format!("trailing input at {}", parser.at));
    }
    Ok(expr)
}

struct Parser<'a> {
    bytes: &'a [u8],
    at: usize,
}

impl Parser<'_> {
    fn peek(&self, ahead: usize) -> Option<u8> {
        self.bytes.get(self.at + ahead).copied()
    }

    fn expect(&mut self, byte: u8) -> Result<(), String> {
        if self.peek(0) == Some(byte) {
            self.at += 1;
            Ok(())
        } else {
            Err(format!("expected '{}' at {}", byte as char, self.at))
        }
    }

    fn expr(&mut self) -> Result<Expr, String> {
        match self.peek(0) {
            Some(b'(') => self.parenthesised(),
            Some(b'-' | b'0'..=b'9') => self.constant().map(Expr::constant),
            Some(b'a'..=b'z') => {
                let start = self.at;
                while matches!(self.peek(0), Some(b'a'..=b'z')) {
                    self.at += 1;
                }
                let name = std::str::from_utf8(&self.bytes[start..self.at]).map_err(|e| e.to_string())?;
                Ok(Expr::variable(name))
            }
            other => Err(format!("unexpected {other:?} at {}", self.at)),
        }
    }

    fn parenthesised(&mut self) -> Result<Expr, String> {
        self.expect(b'(')?;
        if self.peek(0) == Some(b'-') && !self.peek(1).is_some_and(|b| b.is_ascii_digit()) {
            self.at += 1;
            let arg = self.expr()?;
            self.expect(b')')?;
            return Ok(Expr::unary("-", arg));
        }

        let left = if self.peek(0) == Some(b'-') {
            let value = self.constant()?;
            if self.peek(0) == Some(b')') {
                // "(-5)" negates the constant 5
                self.at += 1;
                let positive = i32::try_from(-i64::from(value)).map_err(|e| e.to_string())?;
                return Ok(Expr::unary("-", Expr::constant(positive)));
            }
            Expr::constant(value)
        } else {
            self.expr()?
        };
        let op = match self.peek(0) {
            Some(op @ (b'+' | b'-' | b'*' | b'/')) => op as char,
            other => return Err(format!("expected operator, found {other:?} at {}", self.at)),
        };
        self.at += 1;
        let right = self.expr()?;
        self.expect(b')')?;
        Ok(Expr::binary(op.to_string(), left, right))
    }

    fn constant(&mut self) -> Result<i32, String> {
        let start = self.at;
        if self.peek(0) == Some(b'-') {
            self.at += 1;
        }
        while self.peek(0).is_some_and(|b| b.is_ascii_digit()) {
            self.at += 1;
        }
        let text = std::str::from_utf8(&self.bytes[start..self.at]).map_err(|e| e.to_string())?;
        text.parse().map_err(|e| format!("bad constant {text:?}: {e}"))
    }
}

fn int_at(expr: &Expr, point: (i32, i32, i32)) -> Result<Option<i32>, String> {
    expr.visit(
        |c| Ok(Some(c)),
        |name| coordinate(name, point).map(Some),
        |op, arg| {
            let Some(a) = int_at(arg, point)? else { return Ok(None) };
            match op {
                "-" => Ok(Some(a.wrapping_neg())),
                _ => Err(format!("unknown unary {op}")),
            }
        },
        |op, left, right| {
            let (Some(a), Some(b)) = (int_at(left, point)?, int_at(right, point)?) else {
                return Ok(None);
            };
            match op {
                "+" => Ok(Some(a.wrapping_add(b))),
                "-" => Ok(Some(a.wrapping_sub(b))),
                "*" => Ok(Some(a.wrapping_mul(b))),
                "/" => Ok((b != 0).then(|| a.wrapping_div(b))),
                _ => Err(format!("unknown binary {op}")),
            }
        },
    )
}

fn big_at(expr: &Expr, point: (i32, i32, i32)) -> Result<Option<Integer>, String> {
    expr.visit(
        |c| Ok(Some(Integer::from(c))),
        |name| coordinate(name, point).map(|v| Some(Integer::from(v))),
        |op, arg| {
            let Some(a) = big_at(arg, point)? else { return Ok(None) };
            match op {
                "-" => Ok(Some(-a)),
                _ => Err(format!("unknown unary {op}")),
            }
        },
        |op, left, right| {
            let (Some(a), Some(b)) = (big_at(left, point)?, big_at(right, point)?) else {
                return Ok(None);
            };
            match op {
                "+" => Ok(Some(a + b)),
                "-" => Ok(Some(a - b)),
                "*" => Ok(Some(a * b)),
                "/" => Ok(a.checked_div(&b)),
                _ => Err(format!("unknown binary {op}")),
            }
        },
    )
}

fn coordinate(name: &str, (x, y, z): (i32, i32, i32)) -> Result<i32, String> {
    match name {
        "x" => Ok(x),
        "y" => Ok(y),
        "z" => Ok(z),
        _ => Err(format!("unknown variable {name}")),
    }
}

/// Parses the expression and interprets it at every point.
pub struct Interpreter;

impl Interpreter {
    #[allow(clippy::too_many_arguments)]
    fn table(
        mode: &str,
        expression: &str,
        x_from: i32,
        x_to: i32,
        y_from: i32,
        y_to: i32,
        z_from: i32,
        z_to: i32,
    ) -> Result<Table<Value>, String> {
        let expr = parse(expression)?;
        let cell = |point| -> Result<Option<Value>, String> {
            match mode {
                "i" => Ok(int_at(&expr, point)?.map(Value::Int)),
                "bi" => Ok(big_at(&expr, point)?.map(Value::Big)),
                _ => Err(format!("unknown mode {mode}")),
            }
        };
        (x_from..=x_to)
            .map(|x| {
                (y_from..=y_to)
                    .map(|y| {
                        (z_from..=z_to)
                            .map(|z| cell((x, y, z)))
                            .collect::<Result<Vec<_>, String>>()
                    })
                    .collect::<Result<Vec<_>, String>>()
            })
            .collect()
    }
}

impl Tabulator for Interpreter {
    type Error = String;

    fn tabulate(
        &self,
        mode: &str,
        expression: &str,
        x_from: i32,
        x_to: i32,
        y_from: i32,
        y_to: i32,
        z_from: i32,
        z_to: i32,
    ) -> Result<Table<Value>, String> {
        Self::table(mode, expression, x_from, x_to, y_from, y_to, z_from, z_to)
    }
}

/// Treats division by zero as zero instead of leaving the cell empty.
pub struct ZeroOnFault;

impl Tabulator for ZeroOnFault {
    type Error = String;

    fn tabulate(
        &self,
        mode: &str,
        expression: &str,
        x_from: i32,
        x_to: i32,
        y_from: i32,
        y_to: i32,
        z_from: i32,
        z_to: i32,
    ) -> Result<Table<Value>, String> {
        let zero = match mode {
            "i" => Value::Int(0),
            _ => Value::Big(Integer::from(0)),
        };
        let table = Interpreter::table(mode, expression, x_from, x_to, y_from, y_to, z_from, z_to)?;
        Ok(table
            .into_iter()
            .map(|plane| {
                plane
                    .into_iter()
                    .map(|row| row.into_iter().map(|cell| cell.or_else(|| Some(zero.clone()))).collect())
                    .collect()
            })
            .collect())
    }
}

/// Drops the last `z` of every row.
pub struct Truncating;

impl Tabulator for Truncating {
    type Error = String;

    fn tabulate(
        &self,
        mode: &str,
        expression: &str,
        x_from: i32,
        x_to: i32,
        y_from: i32,
        y_to: i32,
        z_from: i32,
        z_to: i32,
    ) -> Result<Table<Value>, String> {
        let z_to = if z_to > z_from { z_to - 1 } else { z_to };
        Interpreter::table(mode, expression, x_from, x_to, y_from, y_to, z_from, z_to)
    }
}

/// Panics on the given call, counting from zero.
pub struct PanicsOnCall {
    pub call: usize,
    pub seen: Cell<usize>,
}

impl Tabulator for PanicsOnCall {
    type Error = String;

    fn tabulate(
        &self,
        mode: &str,
        expression: &str,
        x_from: i32,
        x_to: i32,
        y_from: i32,
        y_to: i32,
        z_from: i32,
        z_to: i32,
    ) -> Result<Table<Value>, String> {
        let seen = self.seen.get();
        self.seen.set(seen + 1);
        assert!(seen != self.call, "tabulator crashed on {expression}");
        Interpreter::table(mode, expression, x_from, x_to, y_from, y_to, z_from, z_to)
    }
}
