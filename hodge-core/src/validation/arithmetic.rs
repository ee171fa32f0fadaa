//! Checked integer arithmetic for invariant formulas
//!
//! Every formula in this crate works in `i64`. These helpers turn overflow
//! and inexact division into errors instead of wrapping or truncating.

use crate::HodgeError;

/// Checked addition
pub const fn add(a: i64, b: i64) -> Result<i64, HodgeError> {
    match a.checked_add(b) {
        Some(v) => Ok(v),
        None => Err(HodgeError::ArithmeticOverflow),
    }
}

/// Checked subtraction
pub const fn sub(a: i64, b: i64) -> Result<i64, HodgeError> {
    match a.checked_sub(b) {
        Some(v) => Ok(v),
        None => Err(HodgeError::ArithmeticOverflow),
    }
}

/// Checked multiplication
pub const fn mul(a: i64, b: i64) -> Result<i64, HodgeError> {
    match a.checked_mul(b) {
        Some(v) => Ok(v),
        None => Err(HodgeError::ArithmeticOverflow),
    }
}

/// Divide `numerator` by `denominator`, requiring no remainder
///
/// Exact divisibility holds for every valid input of the formulas that call
/// this, so a remainder means the caller passed arguments outside the domain.
pub const fn exact_div(numerator: i64, denominator: i64) -> Result<i64, HodgeError> {
    if denominator == 0 {
        return Err(HodgeError::InvalidArgument);
    }

    match numerator.checked_rem(denominator) {
        Some(0) => {}
        Some(_) => return Err(HodgeError::InvalidArgument),
        None => return Err(HodgeError::ArithmeticOverflow),
    }

    match numerator.checked_div(denominator) {
        Some(v) => Ok(v),
        None => Err(HodgeError::ArithmeticOverflow),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_ops() {
        assert_eq!(add(2, 3), Ok(5));
        assert_eq!(sub(2, 3), Ok(-1));
        assert_eq!(mul(-4, 3), Ok(-12));

        assert_eq!(add(i64::MAX, 1), Err(HodgeError::ArithmeticOverflow));
        assert_eq!(sub(i64::MIN, 1), Err(HodgeError::ArithmeticOverflow));
        assert_eq!(mul(i64::MAX, 2), Err(HodgeError::ArithmeticOverflow));
    }

    #[test]
    fn test_exact_div() {
        assert_eq!(exact_div(24, 6), Ok(4));
        assert_eq!(exact_div(-38, 2), Ok(-19));
        assert_eq!(exact_div(0, 7), Ok(0));

        assert_eq!(exact_div(7, 2), Err(HodgeError::InvalidArgument));
        assert_eq!(exact_div(1, 0), Err(HodgeError::InvalidArgument));
        assert_eq!(exact_div(i64::MIN, -1), Err(HodgeError::ArithmeticOverflow));
    }
}
