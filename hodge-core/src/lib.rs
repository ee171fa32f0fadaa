#![no_std]

//! Hodge Core - Integer formulas for invariants of smooth hypersurfaces
//!
//! This crate provides the pure numeric layer: dimensions of spaces of forms
//! and moduli, graded pieces of Jacobian rings, Hodge and Betti numbers,
//! Euler characteristics, and dimensions of classical groups and period
//! domains. Every function takes `i64` parameters, uses checked arithmetic
//! and returns a [`Result`].

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod cohomology;
pub mod combinatorics;
#[cfg(feature = "alloc")]
pub mod diamond;
pub mod error;
pub mod hodge;
pub mod hypersurface;
pub mod jacobian;
pub mod lie;
pub mod validation;

pub use cohomology::{euler_characteristic, middle_betti, second_betti_via_euler};
pub use combinatorics::{binomial, falling_factorial, forms_dimension};
#[cfg(feature = "alloc")]
pub use diamond::{HodgeDiamond, MAX_DIAMOND_CELLS};
pub use error::*;
#[cfg(feature = "alloc")]
pub use hodge::eigenspace_decomposition;
pub use hodge::{hodge_number, hodge_number_via_eigenspaces, jacobian_piece};
pub use hypersurface::Hypersurface;
pub use jacobian::{jacobian_ring_dimension, moduli_dimension, socle_degree};
pub use lie::{period_domain_dim2, special_orthogonal_dim, unitary_domain_dim2, unitary_dim};
pub use validation::{exact_div, parse_range};
