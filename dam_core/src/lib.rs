//! # dam_core - Gravity Dam Stability Engine
//!
//! `dam_core` evaluates a concrete gravity dam section for sliding and
//! overturning under hydrostatic load. All inputs and outputs are
//! JSON-serializable so any front end (form, CLI, service) can drive it.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, never a NaN in a result
//!
//! ## Quick Start
//!
//! ```rust
//! use dam_core::{evaluate, convert, DamDimensions, DamParameters, DamShape, UnitSystem};
//!
//! let params = DamParameters {
//!     shape: DamShape::Rectangular,
//!     dimensions: DamDimensions { height: 30.0, top_width: 15.0, bottom_width: 15.0, length: 100.0 },
//!     concrete_unit_weight: 24.0,
//!     water_unit_weight: 9.81,
//!     water_level: 25.0,
//!     coefficient_of_friction: 0.70,
//!     use_uplift: true,
//!     uplift_at_heel: Some(25.0),
//!     uplift_at_toe: Some(0.0),
//!     unit_system: UnitSystem::Si,
//! };
//!
//! let result = evaluate(&params).unwrap();
//! assert!(result.is_stable);
//!
//! // Same dam in feet and pounds
//! let english = convert(&params, UnitSystem::English);
//! let json = serde_json::to_string_pretty(&english).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`dam`] - Input data model (shape, dimensions, parameters)
//! - [`calculations`] - The stability evaluation and its results
//! - [`equations`] - Individual closed-form formulas
//! - [`units`] - SI / English unit systems and conversion
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod dam;
pub mod equations;
pub mod errors;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{evaluate, evaluate_with, CalculationResults, SafetyRating, StabilityCriteria};
pub use dam::{DamDimensions, DamParameters, DamShape};
pub use errors::{CalcError, CalcResult};
pub use units::{convert, Quantity, UnitSystem};
