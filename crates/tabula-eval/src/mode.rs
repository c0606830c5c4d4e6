//! Evaluation modes.
//!
//! An [`EvalMode`] gives operator names their meaning over a numeric type
//! `T`. Modes are assembled with an [`EvalModeBuilder`] and are immutable
//! afterwards.

use std::fmt;
use std::sync::Arc;

use hashbrown::HashMap;

use crate::error::ArithmeticError;

/// Semantics of a unary operator.
pub type UnaryOp<T> = Arc<dyn Fn(T) -> Result<T, ArithmeticError> + Send + Sync>;

/// Semantics of a binary operator.
pub type BinaryOp<T> = Arc<dyn Fn(T, T) -> Result<T, ArithmeticError> + Send + Sync>;

type ConstantFn<T> = Arc<dyn Fn(i32) -> T + Send + Sync>;

/// Accumulates operator semantics for a mode.
///
/// Registering a name twice in the same arity table keeps the last
/// registration.
pub struct EvalModeBuilder<T> {
    name: String,
    constant: ConstantFn<T>,
    unary: HashMap<String, UnaryOp<T>>,
    binary: HashMap<String, BinaryOp<T>>,
}

impl<T: 'static> EvalModeBuilder<T> {
    /// Registers a unary operator that cannot fault.
    #[must_use]
    pub fn unary(self, name: impl Into<String>, op: impl Fn(T) -> T + Send + Sync + 'static) -> Self {
        self.checked_unary(name, move |arg| Ok(op(arg)))
    }

    /// Registers a binary operator that cannot fault.
    #[must_use]
    pub fn binary(self, name: impl Into<String>, op: impl Fn(T, T) -> T + Send + Sync + 'static) -> Self {
        self.checked_binary(name, move |left, right| Ok(op(left, right)))
    }

    /// Registers a unary operator that may fault at some inputs.
    #[must_use]
    pub fn checked_unary(
        mut self,
        name: impl Into<String>,
        op: impl Fn(T) -> Result<T, ArithmeticError> + Send + Sync + 'static,
    ) -> Self {
        self.unary.insert(name.into(), Arc::new(op));
        self
    }

    /// Registers a binary operator that may fault at some inputs.
    #[must_use]
    pub fn checked_binary(
        mut self,
        name: impl Into<String>,
        op: impl Fn(T, T) -> Result<T, ArithmeticError> + Send + Sync + 'static,
    ) -> Self {
        self.binary.insert(name.into(), Arc::new(op));
        self
    }

    /// Freezes the registered operators into a mode.
    #[must_use]
    pub fn build(self) -> EvalMode<T> {
        EvalMode {
            name: self.name.into(),
            constant: self.constant,
            unary: Arc::new(self.unary),
            binary: Arc::new(self.binary),
        }
    }
}

/// A named numeric type with constant embedding and operator tables.
///
/// Cloning is cheap: the tables are shared.
pub struct EvalMode<T> {
    name: Arc<str>,
    constant: ConstantFn<T>,
    unary: Arc<HashMap<String, UnaryOp<T>>>,
    binary: Arc<HashMap<String, BinaryOp<T>>>,
}

impl<T> EvalMode<T> {
    /// Starts building a mode whose literals embed via `constant`.
    pub fn builder(
        name: impl Into<String>,
        constant: impl Fn(i32) -> T + Send + Sync + 'static,
    ) -> EvalModeBuilder<T> {
        EvalModeBuilder {
            name: name.into(),
            constant: Arc::new(constant),
            unary: HashMap::new(),
            binary: HashMap::new(),
        }
    }

    /// Returns the mode name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Embeds a machine integer into the mode's type.
    #[must_use]
    pub fn constant(&self, value: i32) -> T {
        (self.constant)(value)
    }

    /// Looks up a unary operator.
    #[must_use]
    pub fn unary_op(&self, name: &str) -> Option<&UnaryOp<T>> {
        self.unary.get(name)
    }

    /// Looks up a binary operator.
    #[must_use]
    pub fn binary_op(&self, name: &str) -> Option<&BinaryOp<T>> {
        self.binary.get(name)
    }

    /// Returns the unary operator names, sorted.
    #[must_use]
    pub fn unary_names(&self) -> Vec<String> {
        sorted_keys(&self.unary)
    }

    /// Returns the binary operator names, sorted.
    #[must_use]
    pub fn binary_names(&self) -> Vec<String> {
        sorted_keys(&self.binary)
    }
}

fn sorted_keys<V>(table: &HashMap<String, V>) -> Vec<String> {
    let mut names: Vec<String> = table.keys().cloned().collect();
    names.sort();
    names
}

impl<T> Clone for EvalMode<T> {
    fn clone(&self) -> Self {
        Self {
            name: Arc::clone(&self.name),
            constant: Arc::clone(&self.constant),
            unary: Arc::clone(&self.unary),
            binary: Arc::clone(&self.binary),
        }
    }
}

impl<T> fmt::Debug for EvalMode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvalMode")
            .field("name", &self.name)
            .field("unary", &self.unary_names())
            .field("binary", &self.binary_names())
            .finish_non_exhaustive()
    }
}
