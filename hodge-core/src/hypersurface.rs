//! Typed handle for a smooth hypersurface of given degree and dimension

use crate::cohomology::{euler_characteristic, middle_betti};
use crate::hodge::hodge_number;
use crate::jacobian::moduli_dimension;
use crate::validation::{validate_degree, validate_dimension};
use crate::Result;

#[cfg(feature = "alloc")]
use crate::diamond::HodgeDiamond;

/// A smooth hypersurface of degree `degree` in projective space of
/// dimension `dimension + 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hypersurface {
    degree: i64,
    dimension: i64,
}

impl Hypersurface {
    /// Create a hypersurface, requiring `degree >= 1` and `dimension >= 0`
    pub fn new(degree: i64, dimension: i64) -> Result<Self> {
        validate_degree(degree, 1)?;
        validate_dimension(dimension)?;
        Ok(Self { degree, dimension })
    }

    pub fn degree(&self) -> i64 {
        self.degree
    }

    pub fn dimension(&self) -> i64 {
        self.dimension
    }

    /// Number of moduli of hypersurfaces of this degree and dimension
    pub fn moduli_dimension(&self) -> Result<i64> {
        moduli_dimension(self.degree, self.dimension)
    }

    /// Primitive middle Hodge number `h^{p, n-p}`
    pub fn hodge_number(&self, p: i64) -> Result<i64> {
        hodge_number(p, self.dimension - p, self.degree, None)
    }

    pub fn middle_betti(&self) -> Result<i64> {
        middle_betti(self.degree, self.dimension)
    }

    pub fn euler_characteristic(&self) -> Result<i64> {
        euler_characteristic(self.degree, self.dimension)
    }

    /// Full Hodge diamond
    #[cfg(feature = "alloc")]
    pub fn hodge_diamond(&self) -> Result<HodgeDiamond> {
        HodgeDiamond::compute(self.degree, self.dimension)
    }
}

impl core::fmt::Display for Hypersurface {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "degree {} hypersurface in P^{}",
            self.degree,
            self.dimension + 1
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HodgeError;

    #[test]
    fn test_new_validates() {
        assert!(Hypersurface::new(3, 2).is_ok());
        assert!(Hypersurface::new(1, 0).is_ok());
        assert_eq!(Hypersurface::new(0, 2), Err(HodgeError::InvalidArgument));
        assert_eq!(Hypersurface::new(3, -1), Err(HodgeError::InvalidArgument));
    }

    #[test]
    fn test_quartic_surface() {
        let k3 = Hypersurface::new(4, 2).unwrap();
        assert_eq!(k3.moduli_dimension(), Ok(19));
        assert_eq!(k3.hodge_number(0), Ok(1));
        assert_eq!(k3.hodge_number(1), Ok(19));
        assert_eq!(k3.middle_betti(), Ok(22));
        assert_eq!(k3.euler_characteristic(), Ok(24));
    }

    #[test]
    fn test_display() {
        use std::string::ToString;

        let cubic = Hypersurface::new(3, 2).unwrap();
        assert_eq!(cubic.to_string(), "degree 3 hypersurface in P^3");
    }
}
