//! Memoized evaluation of Jacobian ring pieces, Hodge numbers and Betti numbers
//!
//! The core formulas recompute everything on each call. Callers that query
//! many Hodge numbers of the same hypersurfaces ask for the same Jacobian
//! ring pieces repeatedly (every eigenspace sum and every middle Betti number
//! reuses them), so this module keeps the results in hash maps they own.

use hashbrown::HashMap;
use hodge_core::validation::{validate_degree, validate_dimension};
use hodge_core::validation::arithmetic::add;
use hodge_core::{jacobian_piece, Result};
use tracing::trace;

/// Caller-owned memo table for repeated invariant queries
#[derive(Debug, Default, Clone)]
pub struct InvariantCache {
    /// `(d, n, r)` -> Jacobian ring dimension
    jacobian: HashMap<(i64, i64, i64), i64>,
    /// `(d, n)` -> middle Betti number
    betti: HashMap<(i64, i64), i64>,
    hits: u64,
    misses: u64,
}

impl InvariantCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Memoized [`hodge_core::jacobian_ring_dimension`]
    pub fn jacobian_ring_dimension(&mut self, d: i64, n: i64, r: i64) -> Result<i64> {
        if let Some(&value) = self.jacobian.get(&(d, n, r)) {
            self.hits += 1;
            return Ok(value);
        }

        self.misses += 1;
        trace!(d, n, r, "jacobian ring cache miss");
        let value = hodge_core::jacobian_ring_dimension(d, n, r)?;
        self.jacobian.insert((d, n, r), value);
        Ok(value)
    }

    /// Memoized [`hodge_core::hodge_number`]
    pub fn hodge_number(&mut self, p: i64, q: i64, d: i64, eigenspace: Option<i64>) -> Result<i64> {
        let (n, r) = jacobian_piece(p, q, d, eigenspace)?;
        self.jacobian_ring_dimension(d, n, r)
    }

    /// Memoized [`hodge_core::hodge_number_via_eigenspaces`]
    pub fn hodge_number_via_eigenspaces(&mut self, p: i64, q: i64, d: i64) -> Result<i64> {
        validate_degree(d, 2)?;

        let mut total: i64 = 0;
        for i in 1..d {
            let piece = self.hodge_number(p, q, d, Some(i))?;
            total = add(total, piece)?;
        }
        Ok(total)
    }

    /// Memoized [`hodge_core::middle_betti`]
    pub fn middle_betti(&mut self, d: i64, n: i64) -> Result<i64> {
        validate_dimension(n)?;

        if let Some(&value) = self.betti.get(&(d, n)) {
            self.hits += 1;
            return Ok(value);
        }

        self.misses += 1;
        trace!(d, n, "middle betti cache miss");

        let mut betti: i64 = if n % 2 == 0 { 1 } else { 0 };
        for k in 0..=n {
            let h = self.hodge_number(k, n - k, d, None)?;
            betti = add(betti, h)?;
        }

        self.betti.insert((d, n), betti);
        Ok(betti)
    }

    /// Number of lookups answered from the cache
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of lookups that had to be computed
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Number of stored values
    pub fn len(&self) -> usize {
        self.jacobian.len() + self.betti.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all stored values and reset the counters
    pub fn clear(&mut self) {
        self.jacobian.clear();
        self.betti.clear();
        self.hits = 0;
        self.misses = 0;
    }
}
