//! Parsing utilities for parameter ranges
//!
//! Pure parsing of the textual bounds used to sweep degrees and dimensions.

use crate::HodgeError;
use core::ops::RangeInclusive;

/// Parse an inclusive range in the format "start:end", "start-end" or "value"
///
/// A single value is the one-element range `value..=value`. Bounds are
/// non-negative decimal integers and `start` must not exceed `end`.
pub fn parse_range(range_str: &str) -> Result<RangeInclusive<i64>, HodgeError> {
    if range_str.is_empty() {
        return Err(HodgeError::InvalidRange);
    }

    let separator = range_str.find(':').or_else(|| range_str.find('-'));

    let (start, end) = match separator {
        Some(pos) => (
            parse_non_negative(&range_str[..pos])?,
            parse_non_negative(&range_str[pos + 1..])?,
        ),
        None => {
            let value = parse_non_negative(range_str)?;
            (value, value)
        }
    };

    if start > end {
        return Err(HodgeError::InvalidRange);
    }

    Ok(start..=end)
}

/// Parse a non-negative decimal integer
fn parse_non_negative(s: &str) -> Result<i64, HodgeError> {
    if s.is_empty() {
        return Err(HodgeError::InvalidRange);
    }

    let mut result: i64 = 0;

    for byte in s.bytes() {
        if !byte.is_ascii_digit() {
            return Err(HodgeError::InvalidRange);
        }

        let digit = (byte - b'0') as i64;

        if result > (i64::MAX - digit) / 10 {
            return Err(HodgeError::ArithmeticOverflow);
        }

        result = result * 10 + digit;
    }

    Ok(result)
}
