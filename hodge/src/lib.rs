//! Hodge - Invariants of smooth projective hypersurfaces
//!
//! This library evaluates Hodge numbers, Betti numbers, Euler
//! characteristics and related dimension counts for smooth hypersurfaces,
//! on top of the integer formulas in `hodge-core`.
//!
//! ## Architecture
//!
//! - **hodge-core**: pure `no_std` formulas, validation and error types
//! - **hodge**: memoized evaluation, parallel tables and the `hodge` CLI
//!
//! ## Quick Start
//!
//! ```rust
//! use hodge::{Hypersurface, InvariantCache, TableConfig, InvariantTable};
//!
//! fn example() -> hodge::Result<()> {
//!     let quintic = Hypersurface::new(5, 3)?;
//!     assert_eq!(quintic.euler_characteristic()?, -200);
//!
//!     let mut cache = InvariantCache::new();
//!     assert_eq!(cache.hodge_number(1, 1, 4, None)?, 19);
//!
//!     let table = InvariantTable::compute(&TableConfig::default().with_degrees(3..=4));
//!     assert!(table.row(4, 2).is_some());
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

// Re-export the core formulas
pub use hodge_core::{
    // Combinatorics
    binomial, falling_factorial, forms_dimension,
    // Jacobian rings and Hodge numbers
    eigenspace_decomposition, hodge_number, hodge_number_via_eigenspaces, jacobian_piece,
    jacobian_ring_dimension, moduli_dimension, socle_degree,
    // Betti numbers and Euler characteristics
    euler_characteristic, middle_betti, second_betti_via_euler,
    // Lie groups and period domains
    period_domain_dim2, special_orthogonal_dim, unitary_domain_dim2, unitary_dim,
    // Types
    HodgeDiamond, Hypersurface,
    // Error handling
    ErrorCategory, HodgeError, Result,
    // Validation utilities
    parse_range,
};

pub mod cache;
pub mod table;

pub use cache::InvariantCache;
pub use table::{InvariantRow, InvariantTable, TableConfig, TableFailure};
