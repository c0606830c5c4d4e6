//! # tabula-eval
//!
//! Evaluation modes and evaluator construction.
//!
//! This crate provides:
//! - `EvalMode<T>`: a frozen table of operator semantics over a numeric type
//! - The two standard modes: wrapping 32-bit integers and big integers
//! - `build_evaluator`: folds an expression against a mode into a reusable
//!   function of `x`, `y` and `z`
//!
//! ## Failure Classes
//!
//! ```text
//! BuildError       unsupported operator or variable, reported at fold time
//! ArithmeticError  division by zero and similar, reported per point
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod evaluator;
pub mod mode;
pub mod modes;
pub mod value;

#[cfg(test)]
mod proptests;

pub use error::{ArithmeticError, BuildError, ErrorKind, EvalError};
pub use evaluator::{build_evaluator, evaluate, Evaluator};
pub use mode::{BinaryOp, EvalMode, EvalModeBuilder, UnaryOp};
pub use value::Value;
