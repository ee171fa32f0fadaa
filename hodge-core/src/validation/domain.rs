//! Domain checks for invariant parameters
//!
//! Only the constraints the formulas themselves need are enforced: a
//! recursion that would not terminate, an index that names nothing, or a
//! negative depth.

use crate::HodgeError;

/// Validate a hypersurface degree against a lower bound
///
/// The Jacobian ring recursion steps down by `d - 1`, so it needs `d >= 2`.
pub const fn validate_degree(degree: i64, minimum: i64) -> Result<(), HodgeError> {
    if degree < minimum {
        return Err(HodgeError::InvalidArgument);
    }
    Ok(())
}

/// Validate that a dimension is non-negative
pub const fn validate_dimension(dimension: i64) -> Result<(), HodgeError> {
    if dimension < 0 {
        return Err(HodgeError::InvalidArgument);
    }
    Ok(())
}

/// Validate an eigenspace index for a cyclic automorphism of order `degree`
///
/// Valid indices are `1..=degree - 1`.
pub const fn validate_eigenspace(eigenspace: i64, degree: i64) -> Result<(), HodgeError> {
    if eigenspace < 1 || eigenspace > degree - 1 {
        return Err(HodgeError::InvalidArgument);
    }
    Ok(())
}
