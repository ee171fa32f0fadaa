//! Middle Betti numbers and Euler characteristics

use crate::hodge::hodge_number;
use crate::validation::arithmetic::{add, mul, sub};
use crate::validation::validate_dimension;
use crate::Result;

/// Dimension of the middle cohomology of a degree-`d` hypersurface of dimension `n`
///
/// Sums the primitive Hodge numbers `h^{k,n-k}` and adds the power of the
/// hyperplane class when `n` is even.
pub fn middle_betti(d: i64, n: i64) -> Result<i64> {
    validate_dimension(n)?;

    let mut betti: i64 = 0;
    for k in 0..=n {
        betti = add(betti, hodge_number(k, n - k, d, None)?)?;
    }

    if n % 2 == 0 {
        add(betti, 1)
    } else {
        Ok(betti)
    }
}

/// Euler characteristic of a degree-`d` hypersurface of dimension `n`
///
/// `chi(d, n) = d (n + 1 - chi(d, n-1)) + chi(d, n-1)` with `chi(d, 0) = d`.
/// Degrees 0, 1 and 2 grow at most linearly and use the closed forms, so a
/// huge `n` never overflows into an early exit there. Other degrees are
/// evaluated bottom-up and overflow within a few dozen steps.
pub fn euler_characteristic(d: i64, n: i64) -> Result<i64> {
    validate_dimension(n)?;

    match d {
        0 => return Ok(0),
        1 => return add(n, 1),
        // Quadrics: P^n plus one extra middle class when n is even
        2 => return add(n, if n % 2 == 0 { 2 } else { 1 }),
        _ => {}
    }

    let mut chi = d;
    for m in 1..=n {
        chi = add(mul(d, sub(m + 1, chi)?)?, chi)?;
    }
    Ok(chi)
}

/// Second Betti number of a degree-`d` surface in P^3, from its Euler characteristic
///
/// A surface has `b0 = b4 = 1` and `b1 = b3 = 0`, so `b2 = chi - 2`.
pub fn second_betti_via_euler(d: i64) -> Result<i64> {
    sub(euler_characteristic(d, 2)?, 2)
}
