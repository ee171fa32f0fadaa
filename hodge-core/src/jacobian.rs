//! Moduli counts and graded dimensions of Jacobian rings
//!
//! The Jacobian ring of a smooth form `F` of degree `d` in `n + 1` variables
//! is the polynomial ring modulo the partial derivatives of `F`. Those
//! partials form a regular sequence of degree `d - 1`, so the Hilbert series
//! is `((1 - t^(d-1)) / (1 - t))^(n+1)` and each graded piece is an
//! alternating sum of dimensions of spaces of forms.

use crate::combinatorics::{binomial, forms_dimension};
use crate::validation::arithmetic::{add, mul, sub};
use crate::validation::validate_degree;
use crate::Result;

/// Dimension of the moduli space of degree-`d` hypersurfaces of dimension `n`
///
/// Forms in `n + 2` variables minus `(n + 2)^2` for the action of `GL(n+2)`.
pub fn moduli_dimension(d: i64, n: i64) -> Result<i64> {
    let variables = add(n, 2)?;
    sub(forms_dimension(d, add(n, 1)?)?, mul(variables, variables)?)
}

/// Top degree in which the Jacobian ring is nonzero: `(n + 1)(d - 2)`
///
/// The ring is one-dimensional there and Gorenstein duality pairs degree
/// `k` with `socle_degree - k`.
pub fn socle_degree(d: i64, n: i64) -> Result<i64> {
    mul(add(n, 1)?, sub(d, 2)?)
}

/// Dimension of the degree-`r` piece of the Jacobian ring of a smooth form
/// of degree `d` in `n + 1` variables
///
/// Evaluates `sum_i (-1)^i C(n+1, i) forms_dimension(r - i(d-1), n)` over the
/// terms whose remaining degree is non-negative. A negative `r` gives 0.
///
/// Degrees below 2 are rejected: the remaining degree would never decrease.
pub fn jacobian_ring_dimension(d: i64, n: i64, r: i64) -> Result<i64> {
    validate_degree(d, 2)?;

    let generators = add(n, 1)?;
    let step = d - 1;

    let mut total: i64 = 0;
    let mut i: i64 = 0;
    let mut remaining = r;

    while remaining >= 0 {
        // C(n+1, i) vanishes from here on
        if i > generators {
            break;
        }

        let term = mul(binomial(generators, i)?, forms_dimension(remaining, n)?)?;
        total = if i % 2 == 0 {
            add(total, term)?
        } else {
            sub(total, term)?
        };

        i += 1;
        remaining -= step;
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HodgeError;

    #[test]
    fn test_moduli_dimension() {
        assert_eq!(moduli_dimension(3, 1), Ok(1));
        assert_eq!(moduli_dimension(3, 2), Ok(4));
        // Quartic surfaces: 35 - 16
        assert_eq!(moduli_dimension(4, 2), Ok(19));
    }

    #[test]
    fn test_jacobian_ring_dimension() {
        assert_eq!(jacobian_ring_dimension(3, 2, 3), Ok(1));
        assert_eq!(jacobian_ring_dimension(3, 2, 0), Ok(1));
        assert_eq!(jacobian_ring_dimension(4, 3, 4), Ok(19));
    }

    #[test]
    fn test_negative_degree_piece_is_zero() {
        assert_eq!(jacobian_ring_dimension(3, 2, -1), Ok(0));
        assert_eq!(jacobian_ring_dimension(5, 4, -7), Ok(0));
    }

    #[test]
    fn test_degenerate_degree_is_rejected() {
        assert_eq!(
            jacobian_ring_dimension(1, 2, 3),
            Err(HodgeError::InvalidArgument)
        );
        assert_eq!(
            jacobian_ring_dimension(0, 2, 3),
            Err(HodgeError::InvalidArgument)
        );
    }

    #[test]
    fn test_socle_and_duality() {
        let (d, n) = (5, 5);
        let socle = socle_degree(d, n).unwrap();
        assert_eq!(socle, 18);
        assert_eq!(jacobian_ring_dimension(d, n, socle), Ok(1));
        assert_eq!(jacobian_ring_dimension(d, n, socle + 1), Ok(0));

        for k in 0..=socle {
            assert_eq!(
                jacobian_ring_dimension(d, n, k),
                jacobian_ring_dimension(d, n, socle - k),
                "degree {k}"
            );
        }
    }

    #[test]
    fn test_degree_d_piece_counts_moduli() {
        for d in 3..8 {
            for n in 1..6 {
                assert_eq!(
                    jacobian_ring_dimension(d, n, d),
                    moduli_dimension(d, n - 1),
                    "d={d} n={n}"
                );
            }
        }
    }

    #[test]
    fn test_total_dimension_is_milnor_number() {
        for d in 2..6 {
            for n in 0..4 {
                let socle = socle_degree(d, n).unwrap();
                let total: i64 = (0..=socle)
                    .map(|r| jacobian_ring_dimension(d, n, r).unwrap())
                    .sum();
                assert_eq!(total, (d - 1).pow((n + 1) as u32), "d={d} n={n}");
            }
        }
    }
}
