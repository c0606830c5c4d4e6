//! The standard evaluation modes.
//!
//! - `i`: 32-bit two's-complement integers. Negation, addition, subtraction
//!   and multiplication wrap. Division truncates toward zero and
//!   `i32::MIN / -1` wraps back to `i32::MIN`.
//! - `bi`: arbitrary precision integers. Nothing overflows; division
//!   truncates toward zero.
//!
//! Both fault with [`ArithmeticError::DivisionByZero`] on a zero divisor.

use tabula_integers::Integer;

use crate::error::ArithmeticError;
use crate::mode::EvalMode;

/// Name of the wrapping 32-bit integer mode.
pub const INT: &str = "i";

/// Name of the arbitrary precision integer mode.
pub const BIG_INT: &str = "bi";

/// Builds the wrapping 32-bit integer mode.
#[must_use]
pub fn int() -> EvalMode<i32> {
    EvalMode::builder(INT, |value| value)
        .unary("-", i32::wrapping_neg)
        .binary("+", i32::wrapping_add)
        .binary("-", i32::wrapping_sub)
        .binary("*", i32::wrapping_mul)
        .checked_binary("/", |x: i32, y: i32| {
            if y == 0 {
                Err(ArithmeticError::DivisionByZero)
            } else {
                Ok(x.wrapping_div(y))
            }
        })
        .build()
}

/// Builds the arbitrary precision integer mode.
#[must_use]
pub fn big_int() -> EvalMode<Integer> {
    EvalMode::builder(BIG_INT, Integer::from)
        .unary("-", |x: Integer| -x)
        .binary("+", |x: Integer, y: Integer| x + y)
        .binary("-", |x: Integer, y: Integer| x - y)
        .binary("*", |x: Integer, y: Integer| x * y)
        .checked_binary("/", |x: Integer, y: Integer| {
            x.checked_div(&y).ok_or(ArithmeticError::DivisionByZero)
        })
        .build()
}
