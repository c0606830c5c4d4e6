//! Inclusive coordinate ranges.

use std::fmt;

use thiserror::Error;

/// An empty range was requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("from [{from}] is greater than to [{to}]")]
pub struct RangeError {
    /// The requested lower bound.
    pub from: i32,
    /// The requested upper bound.
    pub to: i32,
}

/// A non-empty inclusive range of `i32` coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InclusiveRange {
    from: i32,
    to: i32,
}

impl InclusiveRange {
    /// Creates the range `[from, to]`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError`] if `from > to`.
    pub fn new(from: i32, to: i32) -> Result<Self, RangeError> {
        if from > to {
            return Err(RangeError { from, to });
        }
        Ok(Self { from, to })
    }

    /// [`InclusiveRange::new`] for constant contexts.
    #[must_use]
    pub const fn new_const(from: i32, to: i32) -> Option<Self> {
        if from > to {
            None
        } else {
            Some(Self { from, to })
        }
    }

    /// The range starting at `from` and covering `span + 1` values, cut
    /// short at `i32::MAX`.
    #[must_use]
    pub const fn spanning(from: i32, span: u32) -> Self {
        Self {
            from,
            to: from.saturating_add_unsigned(span),
        }
    }

    /// The lower bound.
    #[must_use]
    pub const fn start(self) -> i32 {
        self.from
    }

    /// The upper bound.
    #[must_use]
    pub const fn end(self) -> i32 {
        self.to
    }

    /// Number of coordinates in the range; never zero.
    #[must_use]
    pub fn len(self) -> usize {
        let span = i64::from(self.to) - i64::from(self.from) + 1;
        usize::try_from(span).unwrap_or(usize::MAX)
    }

    /// Always false; ranges are non-empty by construction.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        false
    }

    /// Iterates the coordinates in ascending order.
    pub fn iter(self) -> std::ops::RangeInclusive<i32> {
        self.from..=self.to
    }
}

impl IntoIterator for InclusiveRange {
    type Item = i32;
    type IntoIter = std::ops::RangeInclusive<i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for InclusiveRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.from, self.to)
    }
}

/// Three inclusive ranges, one per axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CoordBox {
    /// Range of `x`.
    pub x: InclusiveRange,
    /// Range of `y`.
    pub y: InclusiveRange,
    /// Range of `z`.
    pub z: InclusiveRange,
}

impl CoordBox {
    /// Creates a box from three ranges.
    #[must_use]
    pub const fn new(x: InclusiveRange, y: InclusiveRange, z: InclusiveRange) -> Self {
        Self { x, y, z }
    }

    /// Creates a box from six bounds.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError`] for the first axis with `from > to`.
    pub fn from_bounds(
        x_from: i32,
        x_to: i32,
        y_from: i32,
        y_to: i32,
        z_from: i32,
        z_to: i32,
    ) -> Result<Self, RangeError> {
        Ok(Self {
            x: InclusiveRange::new(x_from, x_to)?,
            y: InclusiveRange::new(y_from, y_to)?,
            z: InclusiveRange::new(z_from, z_to)?,
        })
    }

    /// Creates a box with the same range on every axis.
    #[must_use]
    pub const fn cube(range: InclusiveRange) -> Self {
        Self::new(range, range, range)
    }

    /// Number of points in the box.
    #[must_use]
    pub fn cells(&self) -> usize {
        self.x
            .len()
            .saturating_mul(self.y.len())
            .saturating_mul(self.z.len())
    }

    /// Extents along each axis.
    #[must_use]
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.x.len(), self.y.len(), self.z.len())
    }

    /// Absolute coordinates of the cell at the given offsets.
    #[must_use]
    pub fn coordinate(&self, offset: (usize, usize, usize)) -> (i64, i64, i64) {
        let at = |range: InclusiveRange, offset: usize| {
            i64::from(range.start()) + i64::try_from(offset).unwrap_or(i64::MAX)
        };
        (at(self.x, offset.0), at(self.y, offset.1), at(self.z, offset.2))
    }
}

impl fmt::Display for CoordBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x in {}, y in {}, z in {}", self.x, self.y, self.z)
    }
}
