//! Error types for invariant computations

/// Errors that can occur while evaluating an invariant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HodgeError {
    /// Argument outside the domain where the formula is meaningful
    InvalidArgument,
    /// Checked `i64` arithmetic overflowed
    ArithmeticOverflow,
    /// Malformed textual range
    InvalidRange,
}

/// Coarse grouping of errors for callers that only need the kind of failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The mathematics rejects the input
    Domain,
    /// The input is valid but exceeds native integer limits
    Arithmetic,
    /// User-supplied text could not be parsed
    Input,
}

impl HodgeError {
    /// Classify this error
    pub const fn category(self) -> ErrorCategory {
        match self {
            HodgeError::InvalidArgument => ErrorCategory::Domain,
            HodgeError::ArithmeticOverflow => ErrorCategory::Arithmetic,
            HodgeError::InvalidRange => ErrorCategory::Input,
        }
    }
}

impl core::fmt::Display for HodgeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            HodgeError::InvalidArgument => "Invalid argument",
            HodgeError::ArithmeticOverflow => "Integer overflow",
            HodgeError::InvalidRange => "Invalid range",
        };
        write!(f, "{msg}")
    }
}

impl core::error::Error for HodgeError {}

/// Result type for invariant computations
pub type Result<T> = core::result::Result<T, HodgeError>;
