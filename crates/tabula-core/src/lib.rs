//! # tabula-core
//!
//! Core data types for the Tabula expression oracle.
//!
//! This crate provides:
//! - Immutable expression trees with shallow and recursive folds
//! - Fully-parenthesised rendering of expressions
//! - The `Expected` value-or-error container
//!
//! ## Design Principles
//!
//! - **Closed Shapes**: An expression is a constant, a variable, a unary or a
//!   binary operation. Nothing else.
//! - **Fold-Only Access**: Tree contents are reachable only through folds, so
//!   semantics live entirely outside the tree.
//! - **Opaque Operators**: Operator names carry no meaning until they are
//!   resolved against an evaluation mode.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod expected;
pub mod expr;
pub mod render;

#[cfg(test)]
mod proptests;

pub use expected::{BadExpectedAccess, Classify, Expected};
pub use expr::Expr;
pub use render::render;
