//! # tabula-integers
//!
//! Arbitrary precision integers for the Tabula oracle.
//!
//! This crate wraps `dashu` to provide an `Integer` type with:
//! - Exact addition, subtraction, multiplication and negation
//! - Division truncating toward zero, checked against a zero divisor
//! - Lossless conversion from and checked conversion to machine integers

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;


pub use integer::Integer;
