//! # Tabula
//!
//! An oracle for programs that tabulate arithmetic expressions over 3-D
//! integer boxes.
//!
//! Tabula builds the expected table for an expression independently, in any
//! registered numeric mode, and compares it cell by cell against the
//! tabulator under test.
//!
//! ## Features
//!
//! - **Expression Trees**: Immutable trees folded shallowly or recursively
//! - **Evaluation Modes**: Wrapping 32-bit and arbitrary precision integers,
//!   plus any mode assembled with `EvalMode::builder`
//! - **Fault Absorption**: Division by zero becomes an absent cell
//! - **Seeded Fixtures**: Reproducible random expressions and boxes
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tabula::prelude::*;
//!
//! let expr = Expr::binary("+", Expr::variable("z"), Expr::constant(123));
//! let bounds = CoordBox::from_bounds(-5, 5, -5, 5, -5, 5)?;
//! check(&my_tabulator, &ModeRegistry::standard(), &expr, "i", &bounds)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use tabula_core as core;
pub use tabula_eval as eval;
pub use tabula_integers as integers;
pub use tabula_oracle as oracle;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use tabula_core::{render, Expected, Expr};
    pub use tabula_eval::{build_evaluator, ArithmeticError, BuildError, EvalMode, Evaluator, Value};
    pub use tabula_integers::Integer;
    pub use tabula_oracle::{
        check, CheckFailure, CoordBox, Driver, DriverConfig, DynMode, InclusiveRange, ModeRegistry, Report,
        Table, TabulateConfig, Tabulator,
    };
}
