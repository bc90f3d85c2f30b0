//! # Dam Stability Equations
//!
//! All closed-form formulas used by the stability engine live here, so they
//! can be checked against a hand calculation one at a time.
//!
//! ## Modules
//!
//! - [`dam`] - Section properties, hydrostatic and uplift resultants, stability ratios
//!
//! ## Sign Conventions
//!
//! - **Distances**: Horizontal, measured from the heel toward the toe
//! - **Vertical loads**: Positive downward (self weight); uplift acts upward
//! - **Moments**: Taken about the heel; righting moments stabilize,
//!   overturning moments destabilize, both reported as positive magnitudes

pub mod dam;

pub use dam::{
    hydrostatic_force,
    hydrostatic_lever_arm,
    overturning_factor_of_safety,
    resultant_location_from_heel,
    self_weight,
    sliding_factor_of_safety,
    trapezoid_area,
    trapezoid_centroid_from_heel,
    uplift_centroid_from_heel,
    uplift_force,
};
