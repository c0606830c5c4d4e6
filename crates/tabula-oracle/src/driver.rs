//! Suites of checks over every registered mode.

use std::fmt;

use tabula_core::Expr;
use tracing::{debug, info};

use crate::compare::{check_with_config, CheckFailure, Tabulator};
use crate::fixtures::{self, RandomBatch};
use crate::generate::{ExprGenerator, GeneratorConfig, GeneratorError};
use crate::range::CoordBox;
use crate::registry::ModeRegistry;
use crate::table::TabulateConfig;

/// Configuration for a [`Driver`].
#[derive(Clone, Debug)]
pub struct DriverConfig {
    /// Generator settings for random suites.
    ///
    /// Its operators are narrowed to those every registered mode supports.
    pub generator: GeneratorConfig,
    /// Random batches to run.
    pub schedule: Vec<RandomBatch>,
    /// Oracle tabulation settings.
    pub tabulate: TabulateConfig,
    /// Failures kept in a report; further ones are only counted.
    pub max_failures: usize,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig::default(),
            schedule: fixtures::random_schedule(),
            tabulate: TabulateConfig::default(),
            max_failures: 16,
        }
    }
}

/// Outcome of a suite.
#[derive(Clone, Debug, Default)]
pub struct Report {
    /// Checks run.
    pub cases: usize,
    /// Checks failed.
    pub failed: usize,
    /// The first failures, up to the configured limit.
    pub failures: Vec<CheckFailure>,
}

impl Report {
    /// Returns true if every check passed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Adds the counts and failures of `other`.
    pub fn merge(&mut self, other: Report, max_failures: usize) {
        self.cases += other.cases;
        self.failed += other.failed;
        let room = max_failures.saturating_sub(self.failures.len());
        self.failures.extend(other.failures.into_iter().take(room));
    }

    fn record(&mut self, outcome: Result<(), CheckFailure>, max_failures: usize) {
        self.cases += 1;
        if let Err(failure) = outcome {
            self.failed += 1;
            if self.failures.len() < max_failures {
                self.failures.push(failure);
            }
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} cases, {} failed", self.cases, self.failed)?;
        for failure in &self.failures {
            write!(f, "\n  {failure}")?;
        }
        if self.failed > self.failures.len() {
            write!(f, "\n  ... and {} more", self.failed - self.failures.len())?;
        }
        Ok(())
    }
}

/// Runs fixed and random suites against a tabulator.
#[derive(Debug)]
pub struct Driver {
    registry: ModeRegistry,
    config: DriverConfig,
    generator: ExprGenerator,
}

impl Driver {
    /// Creates a driver over `registry`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError`] if the generator configuration is unusable.
    pub fn new(registry: ModeRegistry, config: DriverConfig) -> Result<Self, GeneratorError> {
        let mut generator_config = config.generator.clone();
        generator_config.operators = generator_config
            .operators
            .intersect(&registry.common_operators());
        let generator = ExprGenerator::new(generator_config)?;
        Ok(Self {
            registry,
            config,
            generator,
        })
    }

    /// The registry checks run against.
    #[must_use]
    pub fn registry(&self) -> &ModeRegistry {
        &self.registry
    }

    /// Checks one expression over one box in every mode.
    pub fn run_case<S>(&self, sut: &S, expr: &Expr, bounds: &CoordBox) -> Report
    where
        S: Tabulator + ?Sized,
    {
        let mut report = Report::default();
        for mode in self.registry.names() {
            let outcome = check_with_config(sut, &self.registry, expr, &mode, bounds, &self.config.tabulate);
            report.record(outcome, self.config.max_failures);
        }
        report
    }

    /// Checks every fixed sample over every fixed box.
    pub fn run_fixed<S>(&self, sut: &S) -> Report
    where
        S: Tabulator + ?Sized,
    {
        let mut report = Report::default();
        for (name, bounds) in fixtures::boxes() {
            for expr in fixtures::samples() {
                report.merge(self.run_case(sut, &expr, &bounds), self.config.max_failures);
            }
            debug!(suite = "fixed", bounds = name, cases = report.cases, "box done");
        }
        info!(suite = "fixed", cases = report.cases, failed = report.failed, "suite finished");
        report
    }

    /// Checks seeded random expressions over random boxes.
    pub fn run_random<S>(&self, sut: &S) -> Report
    where
        S: Tabulator + ?Sized,
    {
        let mut generator = self.generator.clone();

        let mut report = Report::default();
        for batch in &self.config.schedule {
            for _ in 0..batch.count {
                let expr = generator.generate(batch.stop);
                let bounds = generator.random_box();
                report.merge(self.run_case(sut, &expr, &bounds), self.config.max_failures);
            }
            debug!(suite = "random", stop = ?batch.stop, count = batch.count, "batch done");
        }
        info!(suite = "random", cases = report.cases, failed = report.failed, "suite finished");
        report
    }

    /// Runs the fixed suite, then the random one.
    pub fn run_all<S>(&self, sut: &S) -> Report
    where
        S: Tabulator + ?Sized,
    {
        let mut report = self.run_fixed(sut);
        report.merge(self.run_random(sut), self.config.max_failures);
        report
    }
}
