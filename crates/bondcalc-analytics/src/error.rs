//! Error types for the analytics engine.
//!
//! The engine itself never fails for in-domain input; these errors come from
//! the validation step that callers run before invoking it.

use thiserror::Error;

/// Error type for analytics operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyticsError {
    /// A field that must be strictly positive was zero or negative.
    #[error("{field} must be a positive number, got {value}")]
    NotPositive {
        /// Wire name of the offending field.
        field: &'static str,
        /// The value that was provided.
        value: f64,
    },

    /// A field was NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite {
        /// Wire name of the offending field.
        field: &'static str,
    },

    /// Value out of bounds
    #[error("{field} value {value} is out of bounds [{min}, {max}]")]
    OutOfBounds {
        /// Wire name of the offending field.
        field: &'static str,
        /// The value that was provided.
        value: f64,
        /// Minimum allowed value.
        min: f64,
        /// Maximum allowed value.
        max: f64,
    },

    /// Invalid input parameter
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Math/solver error
    #[error("math error: {0}")]
    MathError(String),
}

impl AnalyticsError {
    /// Wire name of the field this error is about, if any.
    #[must_use]
    pub fn field(&self) -> Option<&'static str> {
        match self {
            AnalyticsError::NotPositive { field, .. }
            | AnalyticsError::NotFinite { field }
            | AnalyticsError::OutOfBounds { field, .. } => Some(field),
            AnalyticsError::InvalidInput(_) | AnalyticsError::MathError(_) => None,
        }
    }
}

/// Result type alias for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

impl From<bondcalc_math::MathError> for AnalyticsError {
    fn from(err: bondcalc_math::MathError) -> Self {
        AnalyticsError::MathError(err.to_string())
    }
}
