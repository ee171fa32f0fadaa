//! Batch tables of hypersurface invariants
//!
//! A table sweeps a rectangle of degrees and dimensions and computes the
//! standard invariants of each smooth hypersurface. Cells are independent,
//! so they are evaluated in parallel with rayon unless configured otherwise.

use std::ops::RangeInclusive;

use hodge_core::validation::arithmetic::add;
use hodge_core::{
    euler_characteristic, forms_dimension, parse_range, HodgeError, Hypersurface, Result,
};
use rayon::prelude::*;
use tracing::{debug, warn};

/// Configuration for a table sweep
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    /// Degrees `d` to include
    pub degrees: RangeInclusive<i64>,
    /// Hypersurface dimensions `n` to include
    pub dimensions: RangeInclusive<i64>,
    /// Evaluate cells on the rayon thread pool
    pub parallel: bool,
}

impl TableConfig {
    /// Build a config from textual ranges such as `"3:6"`
    pub fn from_ranges(degrees: &str, dimensions: &str) -> Result<Self> {
        Ok(Self::default()
            .with_degrees(parse_range(degrees)?)
            .with_dimensions(parse_range(dimensions)?))
    }

    /// Set the degree range
    pub fn with_degrees(mut self, degrees: RangeInclusive<i64>) -> Self {
        self.degrees = degrees;
        self
    }

    /// Set the dimension range
    pub fn with_dimensions(mut self, dimensions: RangeInclusive<i64>) -> Self {
        self.dimensions = dimensions;
        self
    }

    /// Enable or disable parallel evaluation
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// All `(degree, dimension)` cells, degree-major
    pub fn cells(&self) -> Vec<(i64, i64)> {
        self.degrees
            .clone()
            .flat_map(|d| self.dimensions.clone().map(move |n| (d, n)))
            .collect()
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            degrees: 3..=6,
            dimensions: 1..=3,
            parallel: true,
        }
    }
}

/// Invariants of one smooth hypersurface
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct InvariantRow {
    pub degree: i64,
    pub dimension: i64,
    /// Dimension of the space of defining equations
    pub forms_dimension: i64,
    pub moduli_dimension: i64,
    pub middle_betti: i64,
    pub euler_characteristic: i64,
    /// `h^{p, n-p}` including the hyperplane class, `p = 0..=n`
    pub middle_hodge: Vec<i64>,
}

impl InvariantRow {
    /// Compute every invariant of the degree-`degree` hypersurface of dimension `dimension`
    pub fn compute(degree: i64, dimension: i64) -> Result<Self> {
        let hypersurface = Hypersurface::new(degree, dimension)?;
        let diamond = hypersurface.hodge_diamond()?;
        let ambient = add(dimension, 1)?;

        Ok(Self {
            degree,
            dimension,
            forms_dimension: forms_dimension(degree, ambient)?,
            moduli_dimension: hypersurface.moduli_dimension()?,
            middle_betti: diamond.betti(dimension),
            euler_characteristic: euler_characteristic(degree, dimension)?,
            middle_hodge: diamond.middle_row(),
        })
    }
}

/// A cell that could not be evaluated
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TableFailure {
    pub degree: i64,
    pub dimension: i64,
    pub error: String,
}

/// Invariants over a range of degrees and dimensions
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct InvariantTable {
    pub rows: Vec<InvariantRow>,
    pub failures: Vec<TableFailure>,
}

impl InvariantTable {
    /// Evaluate every cell of `config`
    ///
    /// Cells that fail (overflow, or a degree outside the formulas' domain)
    /// are collected in `failures`; the rest of the table is still produced.
    /// Rows keep the degree-major order of [`TableConfig::cells`].
    pub fn compute(config: &TableConfig) -> Self {
        let cells = config.cells();
        debug!(
            degrees = ?config.degrees,
            dimensions = ?config.dimensions,
            cells = cells.len(),
            parallel = config.parallel,
            "computing invariant table"
        );

        let outcomes: Vec<(i64, i64, Result<InvariantRow>)> = if config.parallel {
            cells
                .par_iter()
                .map(|&(d, n)| (d, n, InvariantRow::compute(d, n)))
                .collect()
        } else {
            cells
                .iter()
                .map(|&(d, n)| (d, n, InvariantRow::compute(d, n)))
                .collect()
        };

        let mut table = Self::default();
        for (degree, dimension, outcome) in outcomes {
            match outcome {
                Ok(row) => table.rows.push(row),
                Err(error) => table.failures.push(Self::failure(degree, dimension, error)),
            }
        }
        table
    }

    fn failure(degree: i64, dimension: i64, error: HodgeError) -> TableFailure {
        warn!(degree, dimension, %error, "skipping table cell");
        TableFailure {
            degree,
            dimension,
            error: error.to_string(),
        }
    }

    /// Look up the row for `(degree, dimension)`
    pub fn row(&self, degree: i64, dimension: i64) -> Option<&InvariantRow> {
        self.rows
            .iter()
            .find(|row| row.degree == degree && row.dimension == dimension)
    }

    /// Render the table as pretty-printed JSON
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl std::fmt::Display for InvariantTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{:>4} {:>4} {:>10} {:>8} {:>10} {:>10}  middle hodge",
            "d", "n", "forms", "moduli", "betti", "euler"
        )?;
        for row in &self.rows {
            let hodge: Vec<String> = row.middle_hodge.iter().map(i64::to_string).collect();
            writeln!(
                f,
                "{:>4} {:>4} {:>10} {:>8} {:>10} {:>10}  {}",
                row.degree,
                row.dimension,
                row.forms_dimension,
                row.moduli_dimension,
                row.middle_betti,
                row.euler_characteristic,
                hodge.join(" ")
            )?;
        }
        for failure in &self.failures {
            writeln!(
                f,
                "{:>4} {:>4}  error: {}",
                failure.degree, failure.dimension, failure.error
            )?;
        }
        Ok(())
    }
}
