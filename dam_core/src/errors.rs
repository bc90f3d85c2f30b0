//! # Error Types
//!
//! Structured error types for dam_core. Each variant names the offending
//! field or quantity so a caller (human or program) can point the user at
//! the input that needs fixing.
//!
//! ## Example
//!
//! ```rust
//! use dam_core::errors::{CalcError, CalcResult};
//!
//! fn validate_height(height: f64) -> CalcResult<()> {
//!     if height <= 0.0 {
//!         return Err(CalcError::invalid_geometry(
//!             "height",
//!             height.to_string(),
//!             "Height must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_height(-3.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for dam_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for stability evaluation.
///
/// All variants are input-validation failures. None of them can be fixed by
/// retrying; the caller has to change the parameters.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Dam geometry or unit weight is out of range
    #[error("Invalid geometry for '{field}': {value} - {reason}")]
    InvalidGeometry {
        field: String,
        value: String,
        reason: String,
    },

    /// Uplift is enabled but the pressure heads are missing, zero or negative
    #[error("Invalid uplift: {reason}")]
    InvalidUplift { reason: String },

    /// A hydraulic or material scalar is out of range (water level, friction)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A computed load makes a safety factor or the resultant undefined
    #[error("Degenerate load: {quantity} - {reason}")]
    DegenerateLoad { quantity: String, reason: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidGeometry error
    pub fn invalid_geometry(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidGeometry {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidUplift error
    pub fn invalid_uplift(reason: impl Into<String>) -> Self {
        CalcError::InvalidUplift {
            reason: reason.into(),
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

    /// Create a DegenerateLoad error
    pub fn degenerate_load(quantity: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::DegenerateLoad {
            quantity: quantity.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is a recoverable error (e.g., can retry).
    ///
    /// Evaluation is a pure computation, so nothing here is retryable.
    pub fn is_recoverable(&self) -> bool {
        false
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidGeometry { .. } => "INVALID_GEOMETRY",
            CalcError::InvalidUplift { .. } => "INVALID_UPLIFT",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::DegenerateLoad { .. } => "DEGENERATE_LOAD",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_geometry("top_width", "25", "Top width exceeds bottom width");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidGeometry\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::invalid_uplift("zero heads").error_code(), "INVALID_UPLIFT");
        assert_eq!(
            CalcError::degenerate_load("horizontal_reaction", "zero").error_code(),
            "DEGENERATE_LOAD"
        );
        assert!(!CalcError::invalid_uplift("zero heads").is_recoverable());
    }

    #[test]
    fn test_from_serde_error() {
        let err: CalcError = serde_json::from_str::<f64>("not a number").unwrap_err().into();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_display_message() {
        let err = CalcError::degenerate_load("overturning_moment", "No overturning load is applied");
        assert_eq!(
            err.to_string(),
            "Degenerate load: overturning_moment - No overturning load is applied"
        );
    }
}
