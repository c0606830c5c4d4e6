//! Tabulation of an evaluator over a coordinate box.
//!
//! Cells are ordered by ascending `x`, then `y`, then `z`. A point at which
//! evaluation faults holds `None`; every other point holds its value.

use rayon::prelude::*;
use tabula_core::Expected;
use tabula_eval::{ArithmeticError, EvalMode, Evaluator};
use tracing::debug;

use crate::range::CoordBox;

/// A 3-D table indexed `[x-offset][y-offset][z-offset]`.
pub type Table<T> = Vec<Vec<Vec<Option<T>>>>;

/// Configuration for tabulation.
#[derive(Clone, Debug)]
pub struct TabulateConfig {
    /// Minimum number of cells before planes are evaluated in parallel.
    pub parallel_threshold: usize,
}

impl Default for TabulateConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 4096,
        }
    }
}

impl TabulateConfig {
    /// Always tabulates sequentially.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
        }
    }
}

/// Evaluates at one point, embedding the coordinates through `mode`.
pub fn evaluate_point<T>(
    evaluator: &Evaluator<T>,
    mode: &EvalMode<T>,
    x: i32,
    y: i32,
    z: i32,
) -> Expected<T, ArithmeticError> {
    Expected::try_call(|| evaluator.apply(&mode.constant(x), &mode.constant(y), &mode.constant(z)))
}

/// Tabulates with the default configuration.
pub fn tabulate<T>(evaluator: &Evaluator<T>, mode: &EvalMode<T>, bounds: &CoordBox) -> Table<T>
where
    T: Send,
{
    tabulate_with_config(evaluator, mode, bounds, &TabulateConfig::default())
}

/// Tabulates `evaluator` over every point of `bounds`.
///
/// Large boxes are split across rayon workers by `x` plane; the result is the
/// same as sequential tabulation.
pub fn tabulate_with_config<T>(
    evaluator: &Evaluator<T>,
    mode: &EvalMode<T>,
    bounds: &CoordBox,
    config: &TabulateConfig,
) -> Table<T>
where
    T: Send,
{
    let plane = |x: i32| -> Vec<Vec<Option<T>>> {
        bounds
            .y
            .iter()
            .map(|y| {
                bounds
                    .z
                    .iter()
                    .map(|z| evaluate_point(evaluator, mode, x, y, z).ok())
                    .collect()
            })
            .collect()
    };

    let table: Table<T> = if bounds.cells() >= config.parallel_threshold {
        bounds.x.iter().into_par_iter().map(plane).collect()
    } else {
        bounds.x.iter().map(plane).collect()
    };

    debug!(
        mode = mode.name(),
        %bounds,
        cells = bounds.cells(),
        absent = count_absent(&table),
        "tabulated"
    );
    table
}

/// Extents of a table along each axis, taken from its first row and column.
#[must_use]
pub fn shape<T>(table: &Table<T>) -> (usize, usize, usize) {
    let ny = table.first().map_or(0, Vec::len);
    let nz = table.first().and_then(|plane| plane.first()).map_or(0, Vec::len);
    (table.len(), ny, nz)
}

/// Number of absent cells.
#[must_use]
pub fn count_absent<T>(table: &Table<T>) -> usize {
    table
        .iter()
        .flatten()
        .flatten()
        .filter(|cell| cell.is_none())
        .count()
}

/// Applies `f` to every present cell.
pub fn map_table<T, U>(table: Table<T>, mut f: impl FnMut(T) -> U) -> Table<U> {
    table
        .into_iter()
        .map(|plane| {
            plane
                .into_iter()
                .map(|row| row.into_iter().map(|cell| cell.map(&mut f)).collect())
                .collect()
        })
        .collect()
}
