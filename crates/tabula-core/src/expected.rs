//! A value-or-error container.
//!
//! [`Expected`] captures the outcome of a fallible call as a plain value so
//! it can be stored, mapped and compared, then converted back into a
//! `Result` at the call boundary.

use std::fmt;

use thiserror::Error;

/// Raised when the wrong variant of an [`Expected`] is accessed.
///
/// This is a usage defect and is never produced by evaluation itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum BadExpectedAccess {
    /// The value was requested from an error-holding container.
    #[error("trying to get value while holding error")]
    ValueOfError,
    /// The error was requested from a value-holding container.
    #[error("trying to get error while holding value")]
    ErrorOfValue,
}

/// Classifies an error into a kind, ignoring its message.
///
/// Two errors of the same kind whose causes also match kind-for-kind are
/// considered equal by [`Expected`].
pub trait Classify {
    /// The kind discriminant.
    type Kind: PartialEq;

    /// Returns the kind of this error.
    fn kind(&self) -> Self::Kind;

    /// Returns the underlying cause, if any.
    fn cause(&self) -> Option<&Self> {
        None
    }
}

fn same_kind<E: Classify>(a: &E, b: &E) -> bool {
    a.kind() == b.kind()
        && match (a.cause(), b.cause()) {
            (None, None) => true,
            (Some(a), Some(b)) => same_kind(a, b),
            _ => false,
        }
}

/// Either a success value or a captured error.
#[derive(Clone, Debug)]
pub enum Expected<T, E> {
    /// A success value.
    Value(T),
    /// A captured error.
    Error(E),
}

impl<T, E> Expected<T, E> {
    /// Runs a fallible operation and captures its outcome.
    pub fn try_call(operation: impl FnOnce() -> Result<T, E>) -> Self {
        operation().into()
    }

    /// Returns true if this holds a value.
    #[must_use]
    pub fn has_value(&self) -> bool {
        matches!(self, Expected::Value(_))
    }

    /// Returns the contained value.
    ///
    /// # Errors
    ///
    /// Returns [`BadExpectedAccess::ValueOfError`] if this holds an error.
    pub fn value(&self) -> Result<&T, BadExpectedAccess> {
        match self {
            Expected::Value(value) => Ok(value),
            Expected::Error(_) => Err(BadExpectedAccess::ValueOfError),
        }
    }

    /// Returns the contained error.
    ///
    /// # Errors
    ///
    /// Returns [`BadExpectedAccess::ErrorOfValue`] if this holds a value.
    pub fn error(&self) -> Result<&E, BadExpectedAccess> {
        match self {
            Expected::Value(_) => Err(BadExpectedAccess::ErrorOfValue),
            Expected::Error(error) => Ok(error),
        }
    }

    /// Transforms the contained value, passing errors through untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Expected<U, E> {
        match self {
            Expected::Value(value) => Expected::Value(f(value)),
            Expected::Error(error) => Expected::Error(error),
        }
    }

    /// Transforms the contained error, passing values through untouched.
    pub fn map_error<E1>(self, f: impl FnOnce(E) -> E1) -> Expected<T, E1> {
        match self {
            Expected::Value(value) => Expected::Value(value),
            Expected::Error(error) => Expected::Error(f(error)),
        }
    }

    /// Returns the contained value or `default`.
    pub fn value_or(self, default: T) -> T {
        match self {
            Expected::Value(value) => value,
            Expected::Error(_) => default,
        }
    }

    /// Returns the contained value, or fails with `error`.
    ///
    /// # Errors
    ///
    /// Returns `error` if this holds an error.
    pub fn value_or_raise<E1>(self, error: E1) -> Result<T, E1> {
        match self {
            Expected::Value(value) => Ok(value),
            Expected::Error(_) => Err(error),
        }
    }

    /// Returns the contained value, or fails with an error derived from the
    /// held one.
    ///
    /// # Errors
    ///
    /// Returns `raise(error)` if this holds an error.
    pub fn value_or_else_raise<E1>(self, raise: impl FnOnce(E) -> E1) -> Result<T, E1> {
        match self {
            Expected::Value(value) => Ok(value),
            Expected::Error(error) => Err(raise(error)),
        }
    }

    /// Converts into a `Result`.
    ///
    /// # Errors
    ///
    /// Returns the held error.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Expected::Value(value) => Ok(value),
            Expected::Error(error) => Err(error),
        }
    }

    /// Converts into an `Option`, discarding the error.
    pub fn ok(self) -> Option<T> {
        match self {
            Expected::Value(value) => Some(value),
            Expected::Error(_) => None,
        }
    }
}

impl<T, E> From<Result<T, E>> for Expected<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Expected::Value(value),
            Err(error) => Expected::Error(error),
        }
    }
}

impl<T: PartialEq, E: Classify> PartialEq for Expected<T, E> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Expected::Value(a), Expected::Value(b)) => a == b,
            (Expected::Error(a), Expected::Error(b)) => same_kind(a, b),
            _ => false,
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Expected<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Value(value) => value.fmt(f),
            Expected::Error(error) => error.fmt(f),
        }
    }
}
