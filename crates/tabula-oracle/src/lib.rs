//! # tabula-oracle
//!
//! Expected-output oracle for expression tabulators.
//!
//! This crate provides:
//! - Inclusive coordinate ranges and boxes
//! - Tabulation of an evaluator over a box, with per-cell fault absorption
//! - A registry of named modes for type-erased tabulation
//! - The `Tabulator` contract and a comparator reporting the first mismatch
//! - Seeded random expression and range generation
//! - Fixed fixtures and a driver running whole suites
//!
//! ## Pipeline
//!
//! ```text
//! Expr ──fold──▶ Evaluator<T> ──tabulate──▶ Table<T> ──▶ Table<Value>
//!   │                                                       │
//!   └──render──▶ text ──Tabulator──▶ Table<Value> ──compare─┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod compare;
pub mod driver;
pub mod fixtures;
pub mod generate;
pub mod range;
pub mod registry;
pub mod table;

#[cfg(test)]
mod proptests;

pub use compare::{check, check_with_config, compare_tables, CheckFailure, TableMismatch, Tabulator};
pub use driver::{Driver, DriverConfig, Report};
pub use fixtures::RandomBatch;
pub use generate::{ExprGenerator, GeneratorConfig, GeneratorError, OperatorSet, StopSchedule};
pub use range::{CoordBox, InclusiveRange, RangeError};
pub use registry::{DynMode, ModeRegistry};
pub use table::{shape, tabulate, tabulate_with_config, Table, TabulateConfig};
