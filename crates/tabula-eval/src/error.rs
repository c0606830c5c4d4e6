//! Evaluation errors.

use tabula_core::Classify;
use thiserror::Error;

/// A structural problem found while folding an expression against a mode.
///
/// These abort evaluator construction; no partial evaluator is produced.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A variable other than `x`, `y` or `z`.
    #[error("variable with name \"{name}\" is not supported")]
    UnsupportedVariable {
        /// The offending name.
        name: String,
    },

    /// A unary operator missing from the mode.
    #[error("unary operation \"{operator}\" is not supported in mode \"{mode}\"; supported ones are: {supported:?}")]
    UnsupportedUnary {
        /// The mode name.
        mode: String,
        /// The offending operator.
        operator: String,
        /// Unary operators the mode does support.
        supported: Vec<String>,
    },

    /// A binary operator missing from the mode.
    #[error("binary operation \"{operator}\" is not supported in mode \"{mode}\"; supported ones are: {supported:?}")]
    UnsupportedBinary {
        /// The mode name.
        mode: String,
        /// The offending operator.
        operator: String,
        /// Binary operators the mode does support.
        supported: Vec<String>,
    },
}

/// A fault raised by an operator at a specific input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum ArithmeticError {
    /// The divisor was zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The result is not representable in the mode's type.
    ///
    /// The standard modes never raise this; it exists for modes that trap
    /// instead of wrapping.
    #[error("arithmetic overflow")]
    Overflow,
}

/// Either failure class, for one-shot evaluation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Evaluator construction failed.
    #[error(transparent)]
    Build(#[from] BuildError),

    /// Evaluation at the requested point faulted.
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

/// Kinds of evaluation failure, without their details.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`BuildError::UnsupportedVariable`].
    UnsupportedVariable,
    /// See [`BuildError::UnsupportedUnary`] and [`BuildError::UnsupportedBinary`].
    UnsupportedOperator,
    /// See [`ArithmeticError::DivisionByZero`].
    DivisionByZero,
    /// See [`ArithmeticError::Overflow`].
    Overflow,
}

impl ErrorKind {
    /// Returns true for failures detected while building an evaluator.
    #[must_use]
    pub fn is_structural(self) -> bool {
        matches!(self, ErrorKind::UnsupportedVariable | ErrorKind::UnsupportedOperator)
    }
}

impl Classify for BuildError {
    type Kind = ErrorKind;

    fn kind(&self) -> ErrorKind {
        match self {
            BuildError::UnsupportedVariable { .. } => ErrorKind::UnsupportedVariable,
            BuildError::UnsupportedUnary { .. } | BuildError::UnsupportedBinary { .. } => {
                ErrorKind::UnsupportedOperator
            }
        }
    }
}

impl Classify for ArithmeticError {
    type Kind = ErrorKind;

    fn kind(&self) -> ErrorKind {
        match self {
            ArithmeticError::DivisionByZero => ErrorKind::DivisionByZero,
            ArithmeticError::Overflow => ErrorKind::Overflow,
        }
    }
}

impl Classify for EvalError {
    type Kind = ErrorKind;

    fn kind(&self) -> ErrorKind {
        match self {
            EvalError::Build(error) => error.kind(),
            EvalError::Arithmetic(error) => error.kind(),
        }
    }
}
