//! # Error Types
//!
//! Structured error types for geocalc_core, plus the silent/strict failure policy
//! shared by every calculation.
//!
//! Every calculation returns a [`CalcResult`]. Callers who would rather receive an
//! all-NaN result than an error (batch scans over load positions, interactive
//! exploration) resolve it through [`FailureMode::Silent`], which swaps the error for
//! the result type's [`Undefined`] value.
//!
//! ## Example
//!
//! ```rust
//! use geocalc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_length(beam_length: f64) -> CalcResult<()> {
//!     if beam_length <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "beam_length",
//!             beam_length.to_string(),
//!             "Beam length must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_length(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for geocalc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// One or more parameters failed type, range or option checks
    #[error("Validation failed: {message}")]
    Validation { message: String },

    /// A single input is inconsistent with another input
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// The pair of end conditions has no closed-form point-load solution
    #[error("Unsupported support combination: {left} (left) / {right} (right)")]
    UnsupportedConfiguration { left: String, right: String },

    /// A formula produced a non-finite value
    #[error("Numeric domain error in {quantity}: {reason}")]
    NumericDomain { quantity: String, reason: String },

    /// An empirical chart was queried outside its digitized range
    #[error("{quantity} = {value} is outside the chart range [{min}, {max}]")]
    OutOfRange {
        quantity: String,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl CalcError {
    /// Create a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        CalcError::Validation {
            message: message.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnsupportedConfiguration error
    pub fn unsupported_configuration(left: impl Into<String>, right: impl Into<String>) -> Self {
        CalcError::UnsupportedConfiguration {
            left: left.into(),
            right: right.into(),
        }
    }

    /// Create a NumericDomain error
    pub fn numeric_domain(quantity: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::NumericDomain {
            quantity: quantity.into(),
            reason: reason.into(),
        }
    }

    /// Create an OutOfRange error
    pub fn out_of_range(quantity: impl Into<String>, value: f64, min: f64, max: f64) -> Self {
        CalcError::OutOfRange {
            quantity: quantity.into(),
            value,
            min,
            max,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::Validation { .. } => "VALIDATION",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::UnsupportedConfiguration { .. } => "UNSUPPORTED_CONFIGURATION",
            CalcError::NumericDomain { .. } => "NUMERIC_DOMAIN",
            CalcError::OutOfRange { .. } => "OUT_OF_RANGE",
        }
    }
}

/// Fails with [`CalcError::NumericDomain`] unless `value` is finite.
pub fn ensure_finite(quantity: &str, value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::numeric_domain(
            quantity,
            format!("evaluated to {}", value),
        ))
    }
}

// =============================================================================
// FAILURE POLICY
// =============================================================================

/// A result value that has an "undefined" state, reported instead of an error
/// when failures are silenced.
pub trait Undefined {
    /// The all-NaN (or `None`) value of this result.
    fn undefined() -> Self;
}

/// How a calculation reports failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FailureMode {
    /// Swallow the error, return an undefined result and log a warning
    #[default]
    Silent,
    /// Propagate the error to the caller
    Strict,
}

impl FailureMode {
    /// `true` for [`FailureMode::Silent`]
    pub fn is_silent(&self) -> bool {
        matches!(self, FailureMode::Silent)
    }

    /// Apply this policy to a calculation result.
    ///
    /// ```rust
    /// use geocalc_core::errors::{CalcError, CalcResult, FailureMode, Undefined};
    ///
    /// #[derive(Debug)]
    /// struct Ratio(f64);
    ///
    /// impl Undefined for Ratio {
    ///     fn undefined() -> Self {
    ///         Ratio(f64::NAN)
    ///     }
    /// }
    ///
    /// let failed: CalcResult<Ratio> = Err(CalcError::validation("ratio cannot be negative"));
    /// let silenced = FailureMode::Silent.resolve(failed).unwrap();
    /// assert!(silenced.0.is_nan());
    /// ```
    pub fn resolve<T: Undefined>(&self, result: CalcResult<T>) -> CalcResult<T> {
        match (result, self) {
            (Ok(value), _) => Ok(value),
            (Err(err), FailureMode::Silent) => {
                log::warn!("Error raised but silenced: {}", err);
                Ok(T::undefined())
            }
            (Err(err), FailureMode::Strict) => Err(err),
        }
    }
}
