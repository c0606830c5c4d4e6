//! Arbitrary precision integers.
//!
//! This module provides a wrapper around `dashu::IBig` exposing exactly the
//! arithmetic the big-integer evaluation mode needs.

use dashu::integer::IBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

/// An arbitrary precision integer.
///
/// Arithmetic never overflows. Division is only offered in checked form,
/// since a zero divisor is an expected outcome for evaluated expressions.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Integer(IBig);

impl Integer {
    /// Creates an integer from a machine value.
    #[must_use]
    pub fn new(value: i64) -> Self {
        value.into()
    }

    /// Divides, truncating toward zero.
    ///
    /// Returns `None` if `rhs` is zero.
    #[must_use]
    pub fn checked_div(&self, rhs: &Self) -> Option<Self> {
        if rhs.0.is_zero() {
            None
        } else {
            Some(Self(&self.0 / &rhs.0))
        }
    }

    /// Returns true below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0 < IBig::ZERO
    }

    /// Narrows to `i32`, or `None` outside its range.
    #[must_use]
    pub fn to_i32(&self) -> Option<i32> {
        i32::try_from(self.0.clone()).ok()
    }

    /// Narrows to `i64`, or `None` outside its range.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        i64::try_from(self.0.clone()).ok()
    }

    /// The wrapped `dashu` integer.
    #[must_use]
    pub fn as_inner(&self) -> &IBig {
        &self.0
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Integer {
    fn one() -> Self {
        Self(IBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == IBig::ONE
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({})", self.0)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Integer {
    type Err = dashu::base::error::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IBig::from_str_radix(s, 10).map(Self)
    }
}

macro_rules! forward_binop {
    ($($trait:ident :: $method:ident),*) => {$(
        impl $trait for Integer {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                Self($trait::$method(self.0, rhs.0))
            }
        }

        impl $trait for &Integer {
            type Output = Integer;

            fn $method(self, rhs: Self) -> Integer {
                Integer($trait::$method(&self.0, &rhs.0))
            }
        }
    )*};
}

forward_binop!(Add::add, Sub::sub, Mul::mul);

impl Neg for Integer {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Integer {
        Integer(-&self.0)
    }
}

impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Self(IBig::from(value))
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self(IBig::from(value))
    }
}

impl From<IBig> for Integer {
    fn from(value: IBig) -> Self {
        Self(value)
    }
}
