//! Named, type-erased evaluation modes.
//!
//! A tabulator under test selects its mode by name and reports
//! [`Value`] cells, so the oracle keeps its modes behind the [`DynMode`]
//! trait, which hides the numeric type.

use std::fmt;
use std::sync::Arc;

use hashbrown::HashMap;
use tabula_core::Expr;
use tabula_eval::modes::{big_int, int};
use tabula_eval::{build_evaluator, BuildError, EvalMode, Value};

use crate::generate::OperatorSet;
use crate::range::CoordBox;
use crate::table::{map_table, tabulate_with_config, Table, TabulateConfig};

/// An evaluation mode with its numeric type erased.
pub trait DynMode: Send + Sync {
    /// The mode name.
    fn name(&self) -> &str;

    /// The operators this mode supports.
    fn operators(&self) -> OperatorSet;

    /// Builds an evaluator for `expr` and tabulates it over `bounds`.
    ///
    /// # Errors
    ///
    /// Returns a [`BuildError`] if `expr` does not fold against this mode.
    fn tabulate(&self, expr: &Expr, bounds: &CoordBox, config: &TabulateConfig) -> Result<Table<Value>, BuildError>;
}

impl<T> DynMode for EvalMode<T>
where
    T: Clone + Send + Sync + Into<Value> + 'static,
{
    fn name(&self) -> &str {
        EvalMode::name(self)
    }

    fn operators(&self) -> OperatorSet {
        OperatorSet::new(self.unary_names(), self.binary_names())
    }

    fn tabulate(&self, expr: &Expr, bounds: &CoordBox, config: &TabulateConfig) -> Result<Table<Value>, BuildError> {
        let evaluator = build_evaluator(expr, self)?;
        let table = tabulate_with_config(&evaluator, self, bounds, config);
        Ok(map_table(table, Into::into))
    }
}

/// Modes indexed by name.
#[derive(Clone, Default)]
pub struct ModeRegistry {
    modes: HashMap<String, Arc<dyn DynMode>>,
}

impl ModeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the `i` and `bi` modes.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(int());
        registry.register(big_int());
        registry
    }

    /// Registers a mode under its own name, replacing any previous one.
    pub fn register(&mut self, mode: impl DynMode + 'static) {
        self.modes.insert(mode.name().to_string(), Arc::new(mode));
    }

    /// Looks up a mode by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn DynMode> {
        self.modes.get(name).map(|mode| &**mode)
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.modes.keys().cloned().collect();
        names.sort();
        names
    }

    /// Operators supported by every registered mode.
    ///
    /// Expressions built only from these fold against any mode here.
    #[must_use]
    pub fn common_operators(&self) -> OperatorSet {
        self.modes
            .values()
            .map(|mode| mode.operators())
            .reduce(|a, b| a.intersect(&b))
            .unwrap_or_default()
    }

    /// Number of registered modes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.modes.len()
    }

    /// Returns true if no modes are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }
}

impl fmt::Debug for ModeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModeRegistry").field("modes", &self.names()).finish()
    }
}
