//! # Stability Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Parameters` - Input parameters (JSON-serializable, see [`crate::dam`])
//! - `*Results` - Calculation results (JSON-serializable)
//! - `evaluate(input) -> Result<*Results, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`stability`] - Sliding and overturning of a gravity dam section

pub mod stability;

// Re-export commonly used types
pub use stability::{evaluate, evaluate_with, CalculationResults, SafetyRating, StabilityCriteria};
