//! Dimensions of classical groups and weight-two period domains

use crate::validation::arithmetic::{add, mul, sub};
use crate::validation::exact_div;
use crate::Result;

/// Dimension of SO(n)
pub fn special_orthogonal_dim(n: i64) -> Result<i64> {
    exact_div(mul(n, sub(n, 1)?)?, 2)
}

/// Dimension of U(n)
pub fn unitary_dim(n: i64) -> Result<i64> {
    mul(n, n)
}

/// Complex dimension of the period domain of weight-two Hodge structures
/// with Hodge numbers `(a, b, c)`
///
/// `SO(a+b+c) / (U(a) x SO(b))` has real dimension twice the result. An odd
/// numerator means the triple is not the Hodge numbers of any weight-two
/// structure and is reported as an invalid argument.
pub fn period_domain_dim2(a: i64, b: i64, c: i64) -> Result<i64> {
    let total = add(add(a, b)?, c)?;
    let numerator = sub(
        sub(special_orthogonal_dim(total)?, unitary_dim(a)?)?,
        special_orthogonal_dim(b)?,
    )?;
    exact_div(numerator, 2)
}

/// Complex dimension of `U(p,q) / (U(p) x U(q))`
pub fn unitary_domain_dim2(p: i64, q: i64) -> Result<i64> {
    let numerator = sub(
        sub(unitary_dim(add(p, q)?)?, unitary_dim(p)?)?,
        unitary_dim(q)?,
    )?;
    exact_div(numerator, 2)
}
