//! Hodge numbers of smooth hypersurfaces
//!
//! By Griffiths' residue theory the primitive `(p, q)` cohomology of a smooth
//! degree-`d` hypersurface of dimension `p + q` is a graded piece of the
//! Jacobian ring. For the cyclic cover branched along a hypersurface one
//! dimension lower, the same count splits into `d - 1` eigenspaces of the
//! deck transformation.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::jacobian::jacobian_ring_dimension;
use crate::validation::arithmetic::{add, mul, sub};
use crate::validation::{validate_degree, validate_eigenspace};
use crate::Result;

/// Primitive Hodge number `h^{p,q}` of a degree-`d` hypersurface of dimension `p + q`
///
/// With `eigenspace = Some(i)`, `1 <= i <= d - 1`, returns the dimension of
/// the `i`-th eigenspace of the order-`d` cyclic automorphism instead.
pub fn hodge_number(p: i64, q: i64, d: i64, eigenspace: Option<i64>) -> Result<i64> {
    let (n, r) = jacobian_piece(p, q, d, eigenspace)?;
    jacobian_ring_dimension(d, n, r)
}

/// Locate `h^{p,q}` in the Jacobian ring
///
/// Returns `(n, r)` such that the Hodge number is the degree-`r` piece of the
/// Jacobian ring of a degree-`d` form in `n + 1` variables.
pub fn jacobian_piece(p: i64, q: i64, d: i64, eigenspace: Option<i64>) -> Result<(i64, i64)> {
    let weight = add(p, q)?;
    let scaled = mul(add(q, 1)?, d)?;

    match eigenspace {
        Some(i) => {
            validate_eigenspace(i, d)?;
            let r = sub(sub(scaled, add(weight, 1)?)?, i)?;
            Ok((weight, r))
        }
        None => {
            let r = sub(scaled, add(weight, 2)?)?;
            Ok((add(weight, 1)?, r))
        }
    }
}

/// `h^{p,q}` recomputed as the sum of its `d - 1` eigenspace pieces
///
/// Agrees with `hodge_number(p, q, d, None)` for every valid input.
pub fn hodge_number_via_eigenspaces(p: i64, q: i64, d: i64) -> Result<i64> {
    validate_degree(d, 2)?;

    let mut total: i64 = 0;
    for i in 1..d {
        total = add(total, hodge_number(p, q, d, Some(i))?)?;
    }
    Ok(total)
}

/// Eigenspace pieces of `h^{p,q}` in order `i = 1..d-1`
#[cfg(feature = "alloc")]
pub fn eigenspace_decomposition(p: i64, q: i64, d: i64) -> Result<Vec<i64>> {
    validate_degree(d, 2)?;
    (1..d).map(|i| hodge_number(p, q, d, Some(i))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HodgeError;

    #[test]
    fn test_hodge_number() {
        assert_eq!(hodge_number(1, 0, 3, None), Ok(1));
        assert_eq!(hodge_number(2, 0, 4, None), Ok(1));
        assert_eq!(hodge_number(1, 1, 4, None), Ok(19));
        assert_eq!(hodge_number(2, 0, 5, None), Ok(4));
        assert_eq!(hodge_number(1, 1, 5, None), Ok(44));
    }

    #[test]
    fn test_hodge_number_with_eigenspace() {
        assert_eq!(hodge_number(2, 0, 5, Some(1)), Ok(3));
        assert_eq!(hodge_number(1, 1, 5, Some(1)), Ok(10));
        assert_eq!(hodge_number(1, 1, 5, Some(2)), Ok(12));
        assert_eq!(hodge_number(1, 1, 5, Some(3)), Ok(12));
        assert_eq!(hodge_number(1, 1, 5, Some(4)), Ok(10));
        assert_eq!(hodge_number(2, 1, 3, Some(1)), Ok(4));
        assert_eq!(hodge_number(2, 1, 3, Some(2)), Ok(1));
        assert_eq!(hodge_number(1, 2, 3, Some(1)), Ok(1));
        assert_eq!(hodge_number(1, 2, 3, Some(2)), Ok(4));
    }

    #[test]
    fn test_jacobian_piece() {
        // Quartic surface: degree 4 piece in 4 variables
        assert_eq!(jacobian_piece(1, 1, 4, None), Ok((3, 4)));
        assert_eq!(jacobian_piece(1, 1, 5, Some(2)), Ok((2, 5)));
    }

    #[test]
    fn test_eigenspace_index_out_of_range() {
        assert_eq!(
            hodge_number(1, 1, 5, Some(0)),
            Err(HodgeError::InvalidArgument)
        );
        assert_eq!(
            hodge_number(1, 1, 5, Some(5)),
            Err(HodgeError::InvalidArgument)
        );
    }

    #[test]
    fn test_sum_over_eigenspaces() {
        assert_eq!(hodge_number_via_eigenspaces(1, 1, 5), Ok(44));

        for d in 2..8 {
            for weight in 0..5 {
                for p in 0..=weight {
                    let q = weight - p;
                    assert_eq!(
                        hodge_number_via_eigenspaces(p, q, d),
                        hodge_number(p, q, d, None),
                        "p={p} q={q} d={d}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_hodge_symmetry() {
        for d in 2..7 {
            for weight in 0..5 {
                for p in 0..=weight {
                    assert_eq!(
                        hodge_number(p, weight - p, d, None),
                        hodge_number(weight - p, p, d, None)
                    );
                }
            }
        }
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_eigenspace_decomposition() {
        assert_eq!(
            eigenspace_decomposition(1, 1, 5),
            Ok(alloc::vec![10, 12, 12, 10])
        );
        assert_eq!(eigenspace_decomposition(2, 1, 3), Ok(alloc::vec![4, 1]));
        assert_eq!(
            eigenspace_decomposition(1, 1, 1),
            Err(HodgeError::InvalidArgument)
        );
    }
}
