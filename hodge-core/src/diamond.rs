//! Full Hodge diamond of a smooth hypersurface
//!
//! Outside the middle row the cohomology of a smooth hypersurface is that of
//! projective space (Lefschetz), so `h^{p,q} = 1` when `p = q` and 0
//! otherwise. The middle row carries the primitive Hodge numbers, plus the
//! hyperplane power on its center when the dimension is even.

use alloc::vec;
use alloc::vec::Vec;

use crate::hodge::hodge_number;
use crate::validation::arithmetic::add;
use crate::validation::{validate_degree, validate_dimension};
use crate::{HodgeError, Result};

/// Largest number of `h^{p,q}` cells a diamond may hold
pub const MAX_DIAMOND_CELLS: usize = 1 << 20;

/// Hodge numbers `h^{p,q}` for `0 <= p, q <= n`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HodgeDiamond {
    degree: i64,
    dimension: i64,
    /// `entries[p][q] = h^{p,q}`
    entries: Vec<Vec<i64>>,
}

impl HodgeDiamond {
    /// Compute the diamond of a degree-`degree` hypersurface of dimension `dimension`
    ///
    /// A hyperplane (`degree = 1`) has no primitive cohomology and gets the
    /// diamond of projective space.
    ///
    /// Fails with [`HodgeError::ArithmeticOverflow`] when the table would
    /// exceed [`MAX_DIAMOND_CELLS`] or a middle Hodge number overflows.
    pub fn compute(degree: i64, dimension: i64) -> Result<Self> {
        validate_degree(degree, 1)?;
        validate_dimension(dimension)?;

        let size = usize::try_from(add(dimension, 1)?)
            .map_err(|_| HodgeError::ArithmeticOverflow)?;
        size.checked_mul(size)
            .filter(|&cells| cells <= MAX_DIAMOND_CELLS)
            .ok_or(HodgeError::ArithmeticOverflow)?;

        let middle = (0..=dimension)
            .map(|p| {
                let q = dimension - p;
                let primitive = if degree == 1 {
                    0
                } else {
                    hodge_number(p, q, degree, None)?
                };
                if p == q {
                    add(primitive, 1)
                } else {
                    Ok(primitive)
                }
            })
            .collect::<Result<Vec<i64>>>()?;

        let mut entries = vec![vec![0; size]; size];
        for (p, (row, h)) in entries.iter_mut().zip(middle).enumerate() {
            row[p] = 1;
            row[size - 1 - p] = h;
        }

        Ok(Self {
            degree,
            dimension,
            entries,
        })
    }

    pub fn degree(&self) -> i64 {
        self.degree
    }

    pub fn dimension(&self) -> i64 {
        self.dimension
    }

    /// `h^{p,q}`, or `None` outside the diamond
    pub fn get(&self, p: i64, q: i64) -> Option<i64> {
        let p = usize::try_from(p).ok()?;
        let q = usize::try_from(q).ok()?;
        self.entries.get(p)?.get(q).copied()
    }

    /// Rows indexed by `p`
    pub fn entries(&self) -> &[Vec<i64>] {
        &self.entries
    }

    /// `h^{p, n-p}` for `p = 0..=n`
    pub fn middle_row(&self) -> Vec<i64> {
        (0..=self.dimension)
            .filter_map(|p| self.get(p, self.dimension - p))
            .collect()
    }

    /// Betti number `b_k`, the sum of `h^{p,q}` over `p + q = k`
    pub fn betti(&self, k: i64) -> i64 {
        let n = self.dimension;
        if k < 0 || k > 2 * n {
            return 0;
        }
        ((k - n).max(0)..=k.min(n))
            .filter_map(|p| self.get(p, k - p))
            .sum()
    }

    /// Alternating sum of Betti numbers
    pub fn euler_characteristic(&self) -> i64 {
        (0..=2 * self.dimension)
            .map(|k| {
                let b = self.betti(k);
                if k % 2 == 0 {
                    b
                } else {
                    -b
                }
            })
            .sum()
    }
}

fn digits(value: i64) -> usize {
    let mut v = value.unsigned_abs();
    let mut count = 1;
    while v >= 10 {
        v /= 10;
        count += 1;
    }
    if value < 0 {
        count + 1
    } else {
        count
    }
}

/// Renders the diamond with `h^{n,n}` on top and `h^{0,0}` at the bottom
impl core::fmt::Display for HodgeDiamond {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let n = self.dimension;
        let width = self
            .entries
            .iter()
            .flatten()
            .map(|&h| digits(h))
            .max()
            .unwrap_or(1);

        for k in (0..=2 * n).rev() {
            let lo = (k - n).max(0);
            let hi = k.min(n);
            let count = (hi - lo + 1) as usize;
            let indent = (n as usize + 1 - count) * width;

            write!(f, "{:indent$}", "")?;
            for (i, p) in (lo..=hi).rev().enumerate() {
                if i > 0 {
                    write!(f, "{:width$}", "")?;
                }
                let h = self.get(p, k - p).unwrap_or(0);
                write!(f, "{h:>width$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cohomology::{euler_characteristic, middle_betti};

    #[test]
    fn test_cubic_surface() {
        let diamond = HodgeDiamond::compute(3, 2).unwrap();
        assert_eq!(diamond.middle_row(), vec![0, 7, 0]);
        assert_eq!(diamond.get(0, 0), Some(1));
        assert_eq!(diamond.get(2, 2), Some(1));
        assert_eq!(diamond.get(1, 0), Some(0));
        assert_eq!(diamond.get(3, 0), None);
        assert_eq!(diamond.get(-1, 0), None);
        assert_eq!(diamond.betti(2), 7);
        assert_eq!(diamond.euler_characteristic(), 9);
    }

    #[test]
    fn test_quintic_threefold() {
        let diamond = HodgeDiamond::compute(5, 3).unwrap();
        assert_eq!(diamond.middle_row(), vec![1, 101, 101, 1]);
        assert_eq!(diamond.get(1, 1), Some(1));
        assert_eq!(diamond.betti(3), 204);
        assert_eq!(diamond.euler_characteristic(), -200);
    }

    #[test]
    fn test_hyperplane_is_projective_space() {
        let diamond = HodgeDiamond::compute(1, 3).unwrap();
        for k in 0..=6 {
            assert_eq!(diamond.betti(k), if k % 2 == 0 { 1 } else { 0 });
        }
        assert_eq!(diamond.euler_characteristic(), 4);
    }

    #[test]
    fn test_oversized_diamond_is_rejected() {
        assert_eq!(
            HodgeDiamond::compute(3, i64::MAX),
            Err(HodgeError::ArithmeticOverflow)
        );
        assert_eq!(
            HodgeDiamond::compute(1, 1 << 40),
            Err(HodgeError::ArithmeticOverflow)
        );
        // Fits the table, but the middle Hodge numbers do not fit in i64
        assert_eq!(
            HodgeDiamond::compute(3, 200),
            Err(HodgeError::ArithmeticOverflow)
        );
        assert!(HodgeDiamond::compute(1, 1000).is_ok());
    }

    #[test]
    fn test_agrees_with_betti_and_euler() {
        for d in 2..7 {
            for n in 0..5 {
                let diamond = HodgeDiamond::compute(d, n).unwrap();
                assert_eq!(Ok(diamond.betti(n)), middle_betti(d, n), "d={d} n={n}");
                assert_eq!(
                    Ok(diamond.euler_characteristic()),
                    euler_characteristic(d, n),
                    "d={d} n={n}"
                );
            }
        }
    }

    #[test]
    fn test_display() {
        use alloc::string::ToString;

        let diamond = HodgeDiamond::compute(4, 2).unwrap();
        let expected = concat!(
            "     1\n",
            "   0   0\n",
            " 1  20   1\n",
            "   0   0\n",
            "     1\n",
        );
        assert_eq!(diamond.to_string(), expected);
    }
}
