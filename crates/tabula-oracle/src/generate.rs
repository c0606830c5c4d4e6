//! Seeded random expressions and ranges.
//!
//! Generated expressions use only the variables and operators they are
//! configured with, so they always fold against a mode supporting that set.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tabula_core::Expr;
use thiserror::Error;

use crate::range::{CoordBox, InclusiveRange};

/// A generator configuration that cannot draw ranges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GeneratorError {
    /// The smallest span is negative.
    #[error("min span [{0}] is negative")]
    NegativeSpan(i32),
    /// No span lies in `[min_span, max_span)`.
    #[error("span range [{min_span}, {max_span}) is empty")]
    EmptySpans {
        /// The configured smallest span.
        min_span: i32,
        /// The configured exclusive largest span.
        max_span: i32,
    },
}

/// Unary and binary operator names.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OperatorSet {
    unary: Vec<String>,
    binary: Vec<String>,
}

impl OperatorSet {
    /// Creates a set; names are sorted and deduplicated.
    #[must_use]
    pub fn new(unary: Vec<String>, binary: Vec<String>) -> Self {
        Self {
            unary: normalize(unary),
            binary: normalize(binary),
        }
    }

    /// The operators of the standard modes: `-` unary and `+ - * /` binary.
    #[must_use]
    pub fn arithmetic() -> Self {
        Self::new(
            vec!["-".to_string()],
            ["+", "-", "*", "/"].into_iter().map(String::from).collect(),
        )
    }

    /// Unary operator names.
    #[must_use]
    pub fn unary(&self) -> &[String] {
        &self.unary
    }

    /// Binary operator names.
    #[must_use]
    pub fn binary(&self) -> &[String] {
        &self.binary
    }

    /// Operators present in both sets.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        let keep = |ours: &[String], theirs: &[String]| {
            ours.iter().filter(|name| theirs.contains(name)).cloned().collect()
        };
        Self {
            unary: keep(&self.unary, &other.unary),
            binary: keep(&self.binary, &other.binary),
        }
    }

    /// Total number of operators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.unary.len() + self.binary.len()
    }

    /// Returns true if there are no operators at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn normalize(mut names: Vec<String>) -> Vec<String> {
    names.sort();
    names.dedup();
    names
}

/// Probability of emitting a leaf at a given depth.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StopSchedule {
    /// `depth / divisor`.
    Linear {
        /// Depth at which stopping becomes certain.
        divisor: f64,
    },
    /// `1.1 - 1 / (depth + 1)`: shallow trees, rarely a bare leaf.
    Harmonic,
    /// `(depth / horizon)^4`: almost never stops before approaching `horizon`.
    Quartic {
        /// Depth at which stopping becomes certain.
        horizon: f64,
    },
}

impl StopSchedule {
    /// The stop probability at `depth`; values above 1 mean always stop.
    #[must_use]
    pub fn probability(self, depth: u32) -> f64 {
        let d = f64::from(depth);
        match self {
            StopSchedule::Linear { divisor } => d / divisor,
            StopSchedule::Harmonic => -1.0 / (d + 1.0) + 1.0 + 1.0 / 10.0,
            StopSchedule::Quartic { horizon } => d.powi(4) / horizon.powi(4),
        }
    }
}

/// Configuration for expression generation.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// Random seed for reproducibility.
    pub seed: u64,
    /// Operators to draw from.
    pub operators: OperatorSet,
    /// Variable names to draw from.
    pub variables: Vec<String>,
    /// Smallest range span drawn by [`ExprGenerator::random_range`].
    pub min_span: i32,
    /// Largest range span, exclusive.
    pub max_span: i32,
}

impl GeneratorConfig {
    /// Checks that ranges can be drawn.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError`] if `min_span` is negative or not below
    /// `max_span`.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.min_span < 0 {
            return Err(GeneratorError::NegativeSpan(self.min_span));
        }
        if self.min_span >= self.max_span {
            return Err(GeneratorError::EmptySpans {
                min_span: self.min_span,
                max_span: self.max_span,
            });
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 8_082_475_903_752_582_983,
            operators: OperatorSet::arithmetic(),
            variables: vec!["x".to_string(), "y".to_string(), "z".to_string()],
            min_span: 3,
            max_span: 20,
        }
    }
}

/// Random expression generator.
#[derive(Clone, Debug)]
pub struct ExprGenerator {
    /// Configuration.
    config: GeneratorConfig,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl ExprGenerator {
    /// Creates a generator.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError`] if the configured spans are unusable.
    pub fn new(config: GeneratorConfig) -> Result<Self, GeneratorError> {
        config.validate()?;
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Ok(Self { config, rng })
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates an expression, stopping at each node with the probability
    /// given by `stop` for that node's depth.
    pub fn generate(&mut self, stop: StopSchedule) -> Expr {
        self.generate_at(0, stop)
    }

    fn generate_at(&mut self, depth: u32, stop: StopSchedule) -> Expr {
        let operators = self.config.operators.len();
        if operators == 0 || self.rng.gen::<f64>() < stop.probability(depth) {
            return self.leaf();
        }

        let pick = self.rng.gen_range(0..operators);
        let unary = self.config.operators.unary.len();
        if pick < unary {
            let op = self.config.operators.unary[pick].clone();
            Expr::unary(op, self.generate_at(depth + 1, stop))
        } else {
            let op = self.config.operators.binary[pick - unary].clone();
            let left = self.generate_at(depth + 1, stop);
            let right = self.generate_at(depth + 1, stop);
            Expr::binary(op, left, right)
        }
    }

    fn leaf(&mut self) -> Expr {
        if self.config.variables.is_empty() || self.rng.gen_bool(0.5) {
            Expr::constant(self.rng.gen())
        } else {
            let index = self.rng.gen_range(0..self.config.variables.len());
            Expr::variable(self.config.variables[index].clone())
        }
    }

    /// Draws a range whose span lies in `[min_span, max_span)`.
    ///
    /// The start is uniform over every value for which the range fits in
    /// `i32`.
    pub fn random_range(&mut self) -> InclusiveRange {
        let span = self.rng.gen_range(self.config.min_span..self.config.max_span).unsigned_abs();
        let from = self.rng.gen_range(i32::MIN..=i32::MAX.saturating_sub_unsigned(span));
        InclusiveRange::spanning(from, span)
    }

    /// Draws a box of three independent random ranges.
    pub fn random_box(&mut self) -> CoordBox {
        let x = self.random_range();
        let y = self.random_range();
        let z = self.random_range();
        CoordBox::new(x, y, z)
    }
}
