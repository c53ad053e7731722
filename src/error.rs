//! Error types for rope construction.

use core::fmt;

/// Errors raised when a rope or rope system is set up with invalid data.
///
/// Nothing in the per-tick path returns these; runtime degeneracies are
/// skipped locally.
#[derive(Debug, Clone, PartialEq)]
pub enum RopeError {
    /// Minimum length must be strictly positive.
    NonPositiveMinLength,
    /// Minimum length exceeds maximum length.
    InvertedLengthBounds,
    /// Spring force must be strictly positive.
    NonPositiveSpringForce,
    /// Adjust rate must be strictly positive.
    NonPositiveAdjustRate,
    /// Adjust debounce must not be negative.
    NegativeAdjustDebounce,
    /// Pull displacement scale must not be negative.
    NegativePullScale,
    /// A configuration parameter is NaN or infinite.
    NonFiniteParameter,
    /// Damping must be in [0, 1].
    InvalidDamping,
    /// Body handle does not refer to a body in the system.
    UnknownBody { index: usize, count: usize },
    /// A rope cannot connect a body to itself.
    SelfLink,
}

impl fmt::Display for RopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RopeError::NonPositiveMinLength => write!(f, "minimum length must be positive"),
            RopeError::InvertedLengthBounds => {
                write!(f, "minimum length must not exceed maximum length")
            }
            RopeError::NonPositiveSpringForce => write!(f, "spring force must be positive"),
            RopeError::NonPositiveAdjustRate => write!(f, "adjust rate must be positive"),
            RopeError::NegativeAdjustDebounce => write!(f, "adjust debounce must not be negative"),
            RopeError::NegativePullScale => {
                write!(f, "pull displacement scale must not be negative")
            }
            RopeError::NonFiniteParameter => write!(f, "rope parameters must be finite"),
            RopeError::InvalidDamping => write!(f, "damping must be in [0, 1]"),
            RopeError::UnknownBody { index, count } => {
                write!(f, "body index {} out of bounds (count: {})", index, count)
            }
            RopeError::SelfLink => write!(f, "rope start and end must be different bodies"),
        }
    }
}

impl core::error::Error for RopeError {}
