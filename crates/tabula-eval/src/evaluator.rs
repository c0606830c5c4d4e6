//! Evaluator construction.
//!
//! [`build_evaluator`] folds an expression against a mode into an
//! [`Evaluator`]: a function of `x`, `y` and `z` that can be applied at any
//! number of points. Every operator and variable is resolved during the fold,
//! so an evaluator can only fail with an [`ArithmeticError`].

use std::fmt;
use std::sync::Arc;

use tabula_core::Expr;
use tracing::{debug, trace};

use crate::error::{ArithmeticError, BuildError, EvalError};
use crate::mode::EvalMode;

type EvalFn<T> = dyn Fn(&T, &T, &T) -> Result<T, ArithmeticError> + Send + Sync;

/// A compiled expression over `x`, `y` and `z`.
pub struct Evaluator<T> {
    f: Arc<EvalFn<T>>,
}

impl<T> Evaluator<T> {
    fn new(f: impl Fn(&T, &T, &T) -> Result<T, ArithmeticError> + Send + Sync + 'static) -> Self {
        Self { f: Arc::new(f) }
    }

    /// Evaluates at one point.
    ///
    /// # Errors
    ///
    /// Returns the first arithmetic fault raised by an operator.
    pub fn apply(&self, x: &T, y: &T, z: &T) -> Result<T, ArithmeticError> {
        (self.f)(x, y, z)
    }
}

impl<T> Clone for Evaluator<T> {
    fn clone(&self) -> Self {
        Self { f: Arc::clone(&self.f) }
    }
}

impl<T> fmt::Debug for Evaluator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Evaluator").finish_non_exhaustive()
    }
}

/// Folds `expr` against `mode` into an evaluator.
///
/// Constants are embedded once, here, via the mode's constant conversion.
/// Binary operands are evaluated left to right.
///
/// # Errors
///
/// Returns a [`BuildError`] for the first variable other than `x`, `y`, `z`
/// or operator missing from `mode`, whether or not that subtree would be
/// reached at any particular point.
pub fn build_evaluator<T>(expr: &Expr, mode: &EvalMode<T>) -> Result<Evaluator<T>, BuildError>
where
    T: Clone + Send + Sync + 'static,
{
    let evaluator: Result<Evaluator<T>, BuildError> = expr.fold(
        |value| {
            let value = mode.constant(value);
            Ok(Evaluator::new(move |_: &T, _: &T, _: &T| Ok(value.clone())))
        },
        |name| match name {
            "x" => Ok(Evaluator::new(|x: &T, _: &T, _: &T| Ok(x.clone()))),
            "y" => Ok(Evaluator::new(|_: &T, y: &T, _: &T| Ok(y.clone()))),
            "z" => Ok(Evaluator::new(|_: &T, _: &T, z: &T| Ok(z.clone()))),
            other => Err(BuildError::UnsupportedVariable {
                name: other.to_string(),
            }),
        },
        |op, arg: Result<Evaluator<T>, BuildError>| {
            let arg = arg?;
            let unary = mode
                .unary_op(op)
                .cloned()
                .ok_or_else(|| BuildError::UnsupportedUnary {
                    mode: mode.name().to_string(),
                    operator: op.to_string(),
                    supported: mode.unary_names(),
                })?;
            Ok(Evaluator::new(move |x: &T, y: &T, z: &T| unary(arg.apply(x, y, z)?)))
        },
        |op, left: Result<Evaluator<T>, BuildError>, right: Result<Evaluator<T>, BuildError>| {
            let left = left?;
            let right = right?;
            let binary = mode
                .binary_op(op)
                .cloned()
                .ok_or_else(|| BuildError::UnsupportedBinary {
                    mode: mode.name().to_string(),
                    operator: op.to_string(),
                    supported: mode.binary_names(),
                })?;
            Ok(Evaluator::new(move |x: &T, y: &T, z: &T| {
                let lhs = left.apply(x, y, z)?;
                let rhs = right.apply(x, y, z)?;
                binary(lhs, rhs)
            }))
        },
    );

    match &evaluator {
        Ok(_) => trace!(mode = mode.name(), %expr, "built evaluator"),
        Err(error) => debug!(mode = mode.name(), %expr, %error, "evaluator construction failed"),
    }
    evaluator
}

/// Builds an evaluator and applies it at a single point.
///
/// Coordinates are embedded through the mode's constant conversion.
///
/// # Errors
///
/// Returns [`EvalError::Build`] if the expression does not fold against
/// `mode`, and [`EvalError::Arithmetic`] if evaluation faults.
pub fn evaluate<T>(expr: &Expr, mode: &EvalMode<T>, x: i32, y: i32, z: i32) -> Result<T, EvalError>
where
    T: Clone + Send + Sync + 'static,
{
    let evaluator = build_evaluator(expr, mode)?;
    let value = evaluator.apply(&mode.constant(x), &mode.constant(y), &mode.constant(z))?;
    Ok(value)
}
