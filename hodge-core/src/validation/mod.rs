//! Validation utilities for invariant parameters
//!
//! Pure functions with no allocation: checked arithmetic, domain checks and
//! range parsing.

pub mod arithmetic;
pub mod domain;
pub mod parsing;

pub use arithmetic::exact_div;
pub use domain::{validate_degree, validate_dimension, validate_eigenspace};
pub use parsing::parse_range;
