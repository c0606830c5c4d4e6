//! Comparison of oracle tables against a tabulator under test.

use std::any::Any;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};

use tabula_core::{render, Expected, Expr};
use tabula_eval::{BuildError, Value};
use thiserror::Error;
use tracing::{debug, warn};

use crate::range::CoordBox;
use crate::registry::ModeRegistry;
use crate::table::{Table, TabulateConfig};

/// An expression tabulator under test.
///
/// Given a mode name, the rendered expression and six inclusive bounds, it
/// returns a table indexed `[x-offset][y-offset][z-offset]`, with `None`
/// wherever evaluation is undefined.
pub trait Tabulator {
    /// Failure reported by the tabulator itself.
    type Error: fmt::Display;

    /// Tabulates `expression` in `mode` over the given box.
    ///
    /// # Errors
    ///
    /// Whatever the implementation reports; the comparator records it as a
    /// failed check.
    #[allow(clippy::too_many_arguments)]
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
    ) -> Result<Table<Value>, Self::Error>;
}

/// The first difference between two tables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableMismatch<T> {
    /// A dimension differs in length.
    ///
    /// `offset` is the index path to the differing list: empty for the
    /// table itself, one element for a plane, two for a row.
    Shape {
        /// Index path to the list.
        offset: Vec<usize>,
        /// Expected length.
        expected: usize,
        /// Actual length.
        actual: usize,
    },
    /// A cell differs.
    Cell {
        /// Offsets of the cell.
        offset: (usize, usize, usize),
        /// Expected content.
        expected: Option<T>,
        /// Actual content.
        actual: Option<T>,
    },
}

/// Compares two tables cell by cell in table order.
///
/// # Errors
///
/// Returns the first [`TableMismatch`] found.
pub fn compare_tables<T>(expected: &Table<T>, actual: &Table<T>) -> Result<(), TableMismatch<T>>
where
    T: PartialEq + Clone,
{
    let lengths = |offset: Vec<usize>, expected: usize, actual: usize| {
        if expected == actual {
            Ok(())
        } else {
            Err(TableMismatch::Shape {
                offset,
                expected,
                actual,
            })
        }
    };

    lengths(Vec::new(), expected.len(), actual.len())?;
    for (i, (want_plane, got_plane)) in expected.iter().zip(actual).enumerate() {
        lengths(vec![i], want_plane.len(), got_plane.len())?;
        for (j, (want_row, got_row)) in want_plane.iter().zip(got_plane).enumerate() {
            lengths(vec![i, j], want_row.len(), got_row.len())?;
            for (k, (want, got)) in want_row.iter().zip(got_row).enumerate() {
                if want != got {
                    return Err(TableMismatch::Cell {
                        offset: (i, j, k),
                        expected: want.clone(),
                        actual: got.clone(),
                    });
                }
            }
        }
    }
    Ok(())
}

/// Why a check failed.
#[derive(Clone, Debug, Error)]
pub enum CheckFailure {
    /// The mode is not in the registry.
    #[error("mode \"{mode}\" is not registered")]
    UnknownMode {
        /// The requested mode.
        mode: String,
    },

    /// The oracle could not fold the expression.
    #[error("oracle cannot build {expression} in mode \"{mode}\": {source}")]
    Build {
        /// Rendered expression.
        expression: String,
        /// Mode name.
        mode: String,
        /// The fold failure.
        source: BuildError,
    },

    /// The tabulator reported an error.
    #[error("tabulator failed on {expression} in mode \"{mode}\" over {bounds}: {message}")]
    Tabulator {
        /// Rendered expression.
        expression: String,
        /// Mode name.
        mode: String,
        /// The box.
        bounds: CoordBox,
        /// The tabulator's error text.
        message: String,
    },

    /// The tabulator panicked.
    #[error("tabulator panicked on {expression} in mode \"{mode}\" over {bounds}: {message}")]
    Panic {
        /// Rendered expression.
        expression: String,
        /// Mode name.
        mode: String,
        /// The box.
        bounds: CoordBox,
        /// The panic payload, if it was text.
        message: String,
    },

    /// The tabulator's table has the wrong shape.
    #[error(
        "wrong shape for {expression} in mode \"{mode}\" over {bounds}: \
         length {actual} at {offset:?}, expected {expected}"
    )]
    Shape {
        /// Rendered expression.
        expression: String,
        /// Mode name.
        mode: String,
        /// The box.
        bounds: CoordBox,
        /// Index path to the differing list.
        offset: Vec<usize>,
        /// Expected length.
        expected: usize,
        /// Actual length.
        actual: usize,
    },

    /// A cell differs from the oracle.
    #[error(
        "wrong value for {expression} in mode \"{mode}\" over {bounds} at {}: \
         expected {}, got {}",
        show_at(.at), show_cell(.expected), show_cell(.actual)
    )]
    Cell {
        /// Rendered expression.
        expression: String,
        /// Mode name.
        mode: String,
        /// The box.
        bounds: CoordBox,
        /// Absolute coordinates of the cell.
        at: (i64, i64, i64),
        /// Oracle cell.
        expected: Option<Value>,
        /// Tabulator cell.
        actual: Option<Value>,
    },
}

fn show_at(&(x, y, z): &(i64, i64, i64)) -> String {
    format!("x={x}, y={y}, z={z}")
}

fn show_cell(cell: &Option<Value>) -> String {
    match cell {
        Some(value) => format!("{value} ({})", value.type_name()),
        None => "undefined".to_string(),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(text) = payload.downcast_ref::<&str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "non-text panic payload".to_string()
    }
}

/// Checks `sut` against the oracle for one expression, mode and box.
///
/// # Errors
///
/// Returns a [`CheckFailure`] describing the first problem.
pub fn check<S>(
    sut: &S,
    registry: &ModeRegistry,
    expr: &Expr,
    mode: &str,
    bounds: &CoordBox,
) -> Result<(), CheckFailure>
where
    S: Tabulator + ?Sized,
{
    check_with_config(sut, registry, expr, mode, bounds, &TabulateConfig::default())
}

/// [`check`] with an explicit tabulation configuration for the oracle side.
///
/// # Errors
///
/// Returns a [`CheckFailure`] describing the first problem.
pub fn check_with_config<S>(
    sut: &S,
    registry: &ModeRegistry,
    expr: &Expr,
    mode: &str,
    bounds: &CoordBox,
    config: &TabulateConfig,
) -> Result<(), CheckFailure>
where
    S: Tabulator + ?Sized,
{
    let expression = render(expr);
    let oracle = registry.get(mode).ok_or_else(|| CheckFailure::UnknownMode {
        mode: mode.to_string(),
    })?;
    let expected = oracle
        .tabulate(expr, bounds, config)
        .map_err(|source| CheckFailure::Build {
            expression: expression.clone(),
            mode: mode.to_string(),
            source,
        })?;

    let call = || {
        Expected::try_call(|| {
            sut.tabulate(
                mode,
                &expression,
                bounds.x.start(),
                bounds.x.end(),
                bounds.y.start(),
                bounds.y.end(),
                bounds.z.start(),
                bounds.z.end(),
            )
        })
        .map_error(|error| error.to_string())
    };
    let outcome = catch_unwind(AssertUnwindSafe(call)).map_err(|payload| CheckFailure::Panic {
        expression: expression.clone(),
        mode: mode.to_string(),
        bounds: *bounds,
        message: panic_message(payload.as_ref()),
    });
    let actual = outcome.and_then(|outcome| {
        outcome.value_or_else_raise(|message| CheckFailure::Tabulator {
            expression: expression.clone(),
            mode: mode.to_string(),
            bounds: *bounds,
            message,
        })
    });
    let actual = actual.map_err(|failure| {
        warn!(%failure, "tabulator call failed");
        failure
    })?;

    match compare_tables(&expected, &actual) {
        Ok(()) => {
            debug!(mode, expression = %expression, %bounds, "check passed");
            Ok(())
        }
        Err(mismatch) => {
            let failure = match mismatch {
                TableMismatch::Shape {
                    offset,
                    expected,
                    actual,
                } => CheckFailure::Shape {
                    expression,
                    mode: mode.to_string(),
                    bounds: *bounds,
                    offset,
                    expected,
                    actual,
                },
                TableMismatch::Cell {
                    offset,
                    expected,
                    actual,
                } => CheckFailure::Cell {
                    expression,
                    mode: mode.to_string(),
                    bounds: *bounds,
                    at: bounds.coordinate(offset),
                    expected,
                    actual,
                },
            };
            warn!(%failure, "check failed");
            Err(failure)
        }
    }
}
