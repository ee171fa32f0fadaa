//! Falling factorials, binomial coefficients and dimensions of spaces of forms

use crate::validation::arithmetic::{add, mul};
use crate::validation::exact_div;
use crate::Result;

/// Product `n * (n-1) * ... * (k+1) * k`
///
/// When `k = n + 1` the product is empty and the result is 1. Any range
/// containing zero yields 0 without multiplying through.
pub fn falling_factorial(n: i64, k: i64) -> Result<i64> {
    if k <= 0 && 0 <= n {
        return Ok(0);
    }

    let mut product: i64 = 1;
    for i in k..=n {
        product = mul(product, i)?;
    }
    Ok(product)
}

/// Binomial coefficient C(n, k)
///
/// Computed as `falling_factorial(n, n-k+1) / falling_factorial(k, 1)`.
/// Returns 0 for `k < 0` or `k > n`; the Jacobian ring sum relies on this
/// once `i` exceeds the number of variables.
pub fn binomial(n: i64, k: i64) -> Result<i64> {
    if k < 0 || k > n {
        return Ok(0);
    }

    let numerator = falling_factorial(n, n - k + 1)?;
    let denominator = falling_factorial(k, 1)?;
    exact_div(numerator, denominator)
}

/// Dimension of the space of homogeneous forms of degree `d` in `n + 1` variables
pub fn forms_dimension(d: i64, n: i64) -> Result<i64> {
    binomial(add(n, d)?, n)
}
