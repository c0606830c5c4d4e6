//! Fixed boxes, sample expressions and random suite schedules.

use tabula_core::Expr;

use crate::generate::StopSchedule;
use crate::range::{CoordBox, InclusiveRange};

/// `[-5, 5]`.
pub const MIDDLE: InclusiveRange = range(-5, 5);

/// The eleven smallest `i32` values.
pub const BOTTOM: InclusiveRange = range(i32::MIN, i32::MIN + 10);

/// The eleven largest `i32` values.
pub const TOP: InclusiveRange = range(i32::MAX - 10, i32::MAX);

const fn range(from: i32, to: i32) -> InclusiveRange {
    match InclusiveRange::new_const(from, to) {
        Some(range) => range,
        None => panic!("fixture range is reversed"),
    }
}

/// The six fixed boxes, named by the initials of their x, y and z ranges.
#[must_use]
pub fn boxes() -> Vec<(&'static str, CoordBox)> {
    vec![
        ("mmm", CoordBox::new(MIDDLE, MIDDLE, MIDDLE)),
        ("bbb", CoordBox::new(BOTTOM, BOTTOM, BOTTOM)),
        ("ttt", CoordBox::new(TOP, TOP, TOP)),
        ("bmt", CoordBox::new(BOTTOM, MIDDLE, TOP)),
        ("tbm", CoordBox::new(TOP, BOTTOM, MIDDLE)),
        ("mtb", CoordBox::new(MIDDLE, TOP, BOTTOM)),
    ]
}

/// Fixed sample expressions covering every node shape and the `i32`
/// boundaries.
#[must_use]
pub fn samples() -> Vec<Expr> {
    let c = Expr::constant;
    let v = Expr::variable;
    let neg = |arg| Expr::unary("-", arg);
    let bin = Expr::binary;

    let mut samples: Vec<Expr> = [
        0,
        145,
        -233,
        1100,
        -2048,
        i32::MAX - 134,
        i32::MIN + 17,
        i32::MAX,
        i32::MIN,
    ]
    .into_iter()
    .map(c)
    .collect();
    samples.extend(["x", "y", "z"].map(v));
    samples.extend([
        neg(v("x")),
        neg(c(7)),
        neg(c(i32::MIN)),
        bin("+", v("z"), c(123)),
        bin("-", v("y"), v("z")),
        bin("*", v("y"), c(-0xCAFE)),
        bin("/", v("x"), v("x")),
        bin("/", c(i32::MAX - 3), v("y")),
    ]);
    samples
}

/// One batch of a random suite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RandomBatch {
    /// Stop probability by depth.
    pub stop: StopSchedule,
    /// Number of expressions to draw.
    pub count: usize,
}

/// The standard random suite: mostly shallow trees, some very deep ones.
#[must_use]
pub fn random_schedule() -> Vec<RandomBatch> {
    vec![
        RandomBatch {
            stop: StopSchedule::Linear { divisor: 5.0 },
            count: 200,
        },
        RandomBatch {
            stop: StopSchedule::Harmonic,
            count: 40,
        },
        RandomBatch {
            stop: StopSchedule::Linear { divisor: 20.0 },
            count: 10,
        },
        RandomBatch {
            stop: StopSchedule::Quartic { horizon: 15.0 },
            count: 20,
        },
    ]
}
