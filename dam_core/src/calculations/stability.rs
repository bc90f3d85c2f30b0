//! # Gravity Dam Stability
//!
//! Evaluates a gravity dam section for sliding and overturning under
//! hydrostatic load, with optional uplift under the base.
//!
//! ## Assumptions
//!
//! - Trapezoidal section for every [`DamShape`](crate::dam::DamShape) (shape is visual only)
//! - Inclined upstream face, vertical downstream face, moments taken about the heel
//! - Horizontal water thrust only (no water weight on the inclined face)
//! - Triangular hydrostatic pressure on the upstream face, no tailwater
//! - Linear (trapezoidal) uplift diagram from heel to toe
//! - No seismic, silt, ice or wave loads
//!
//! ## Procedure
//!
//! 1. Self weight W = γc · ½(t + b)h · L
//! 2. Hydrostatic force P = ½ γw hw² L
//! 3. Section centroid x̄ = b − (b² + bt + t²) / (3(b + t))
//! 4. Uplift U = γw · ½(u1 + u2) · b · L at x̄u = b(2u1 + u2) / (3(u1 + u2))
//! 5. ΣMr = W·x̄, ΣMo = P·hw/3 + U·x̄u
//! 6. ΣV = W − U, ΣH = P
//! 7. Resultant at (ΣMr − ΣMo) / ΣV from the heel
//! 8. FSs = μΣV/ΣH, FSo = ΣMr/ΣMo
//! 9. Stable when both factors meet the criteria and the resultant lies on the base
//!
//! ## Example
//!
//! ```rust
//! use dam_core::calculations::stability::evaluate;
//! use dam_core::dam::{DamDimensions, DamParameters, DamShape};
//! use dam_core::units::UnitSystem;
//!
//! let params = DamParameters {
//!     shape: DamShape::Triangular,
//!     dimensions: DamDimensions { height: 30.0, top_width: 5.0, bottom_width: 20.0, length: 100.0 },
//!     concrete_unit_weight: 23.5,
//!     water_unit_weight: 9.81,
//!     water_level: 28.0,
//!     coefficient_of_friction: 0.75,
//!     use_uplift: false,
//!     uplift_at_heel: None,
//!     uplift_at_toe: None,
//!     unit_system: UnitSystem::Si,
//! };
//!
//! let result = evaluate(&params).unwrap();
//!
//! println!("FS sliding: {:.2}", result.factor_of_safety_against_sliding);
//! println!("FS overturning: {:.2}", result.factor_of_safety_against_overturning);
//! println!("Stable: {}", result.passes());
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::dam::DamParameters;
use crate::equations::dam as eq;
use crate::errors::{CalcError, CalcResult};
use crate::units::UnitSystem;

/// Acceptance criteria for the stability verdict.
///
/// ## JSON Example
///
/// ```json
/// { "min_sliding_fs": 1.5, "min_overturning_fs": 1.5 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StabilityCriteria {
    /// Minimum factor of safety against sliding
    pub min_sliding_fs: f64,

    /// Minimum factor of safety against overturning
    pub min_overturning_fs: f64,
}

impl Default for StabilityCriteria {
    fn default() -> Self {
        StabilityCriteria {
            min_sliding_fs: 1.5,
            min_overturning_fs: 1.5,
        }
    }
}

impl StabilityCriteria {
    /// Validate that both thresholds are positive and finite.
    pub fn validate(&self) -> CalcResult<()> {
        for (field, value) in [
            ("min_sliding_fs", self.min_sliding_fs),
            ("min_overturning_fs", self.min_overturning_fs),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Required factor of safety must be positive",
                ));
            }
        }
        Ok(())
    }
}

/// Qualitative band for a factor of safety relative to its required value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SafetyRating {
    /// Below the required value
    Inadequate,
    /// At least the required value
    Acceptable,
    /// At least 1.2 × required
    Good,
    /// At least 1.5 × required
    Excellent,
}

impl SafetyRating {
    /// Classify `value` against `threshold`.
    pub fn classify(value: f64, threshold: f64) -> Self {
        if value >= threshold * 1.5 {
            SafetyRating::Excellent
        } else if value >= threshold * 1.2 {
            SafetyRating::Good
        } else if value >= threshold {
            SafetyRating::Acceptable
        } else {
            SafetyRating::Inadequate
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            SafetyRating::Excellent => "Excellent",
            SafetyRating::Good => "Good",
            SafetyRating::Acceptable => "Acceptable",
            SafetyRating::Inadequate => "Inadequate",
        }
    }

    /// Meets the required value
    pub fn is_adequate(&self) -> bool {
        *self != SafetyRating::Inadequate
    }
}

/// Results of a stability evaluation.
///
/// Forces are in kN or lbf and moments in kN·m or lbf·ft, following
/// `unit_system`. Every number is finite.
///
/// ## JSON Example
///
/// ```json
/// {
///   "self_weight": 881250.0,
///   "hydrostatic_pressure_force": 384552.0,
///   "vertical_reaction": 881250.0,
///   "horizontal_reaction": 384552.0,
///   "righting_moment": 11456250.0,
///   "overturning_moment": 3589152.0,
///   "location_of_ry": 8.93,
///   "factor_of_safety_against_sliding": 1.72,
///   "factor_of_safety_against_overturning": 3.19,
///   "is_stable": true
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResults {
    /// Self weight of the dam, W
    pub self_weight: f64,

    /// Uplift resultant, U (absent when uplift is not considered)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hydrostatic_uplift: Option<f64>,

    /// Hydrostatic resultant on the upstream face, P
    pub hydrostatic_pressure_force: f64,

    /// Net vertical reaction at the base, ΣV = W − U
    pub vertical_reaction: f64,

    /// Horizontal reaction at the base, ΣH = P
    pub horizontal_reaction: f64,

    /// Righting moment about the heel, ΣMr = W·x̄
    pub righting_moment: f64,

    /// Overturning moment about the heel, ΣMo = P·hw/3 + U·x̄u
    pub overturning_moment: f64,

    /// Location of the resultant vertical force from the heel
    pub location_of_ry: f64,

    /// Factor of safety against sliding, μΣV/ΣH
    pub factor_of_safety_against_sliding: f64,

    /// Factor of safety against overturning, ΣMr/ΣMo
    pub factor_of_safety_against_overturning: f64,

    /// Overall verdict
    pub is_stable: bool,

    /// Dam volume
    pub volume: f64,

    /// Section centroid from the heel, x̄
    pub centroid_from_heel: f64,

    /// Moment of the hydrostatic force about the heel
    pub water_moment: f64,

    /// Moment of the uplift force about the heel (0 without uplift)
    pub uplift_moment: f64,

    /// Base width the resultant is checked against
    pub bottom_width: f64,

    /// Unit system of all numbers above
    pub unit_system: UnitSystem,

    /// Criteria the verdict was made against
    pub criteria: StabilityCriteria,
}

impl CalculationResults {
    /// Check if the dam passes all criteria
    pub fn passes(&self) -> bool {
        self.is_stable
    }

    /// Resultant falls strictly inside the base
    pub fn within_base(&self) -> bool {
        self.location_of_ry > 0.0 && self.location_of_ry < self.bottom_width
    }

    /// Resultant falls in the middle third of the base (no tension at the heel or toe).
    ///
    /// Reported for information; not part of [`Self::is_stable`].
    pub fn within_middle_third(&self) -> bool {
        let third = self.bottom_width / 3.0;
        self.location_of_ry >= third && self.location_of_ry <= 2.0 * third
    }

    /// Offset of the resultant from the base center (positive toward the toe)
    pub fn eccentricity(&self) -> f64 {
        self.location_of_ry - self.bottom_width / 2.0
    }

    /// Rating of the sliding factor of safety
    pub fn sliding_rating(&self) -> SafetyRating {
        SafetyRating::classify(self.factor_of_safety_against_sliding, self.criteria.min_sliding_fs)
    }

    /// Rating of the overturning factor of safety
    pub fn overturning_rating(&self) -> SafetyRating {
        SafetyRating::classify(
            self.factor_of_safety_against_overturning,
            self.criteria.min_overturning_fs,
        )
    }

    /// Get a description of what governs the design
    pub fn governing_condition(&self) -> &'static str {
        let sliding = self.factor_of_safety_against_sliding / self.criteria.min_sliding_fs;
        let overturning =
            self.factor_of_safety_against_overturning / self.criteria.min_overturning_fs;
        if sliding <= overturning {
            "Sliding"
        } else {
            "Overturning"
        }
    }
}

/// Evaluate dam stability against the default criteria (FS ≥ 1.5).
///
/// This is a pure function: the same parameters always give the same result.
///
/// # Arguments
///
/// * `params` - Dam geometry, materials and loading
///
/// # Returns
///
/// * `Ok(CalculationResults)` - All forces, moments and the verdict
/// * `Err(CalcError)` - If inputs are invalid or a load is degenerate
pub fn evaluate(params: &DamParameters) -> CalcResult<CalculationResults> {
    evaluate_with(params, &StabilityCriteria::default())
}

/// Evaluate dam stability against explicit criteria.
pub fn evaluate_with(params: &DamParameters, criteria: &StabilityCriteria) -> CalcResult<CalculationResults> {
    params.validate()?;
    criteria.validate()?;

    let dims = &params.dimensions;

    // Weight and section centroid
    let area = eq::trapezoid_area(dims.top_width, dims.bottom_width, dims.height);
    let volume = area * dims.length;
    let self_weight = eq::self_weight(params.concrete_unit_weight, area, dims.length);
    let centroid_from_heel = eq::trapezoid_centroid_from_heel(dims.top_width, dims.bottom_width)
        .ok_or_else(|| {
            CalcError::invalid_geometry(
                "dimensions.bottom_width",
                dims.bottom_width.to_string(),
                "Top and bottom width cannot both be zero",
            )
        })?;

    // Water on the upstream face
    let hydrostatic_pressure_force =
        eq::hydrostatic_force(params.water_unit_weight, params.water_level, dims.length);
    let water_moment = hydrostatic_pressure_force * eq::hydrostatic_lever_arm(params.water_level);

    // Uplift under the base
    let (uplift, uplift_moment) = if params.use_uplift {
        let (heel, toe) = params.uplift_heads();
        let force = eq::uplift_force(params.water_unit_weight, heel, toe, dims.bottom_width, dims.length);
        let centroid = eq::uplift_centroid_from_heel(heel, toe, dims.bottom_width).ok_or_else(|| {
            CalcError::invalid_uplift("Uplift heads at heel and toe sum to zero")
        })?;
        trace!(force, centroid, "uplift resultant");
        (Some(force), force * centroid)
    } else {
        (None, 0.0)
    };

    let righting_moment = self_weight * centroid_from_heel;
    let overturning_moment = water_moment + uplift_moment;

    let vertical_reaction = self_weight - uplift.unwrap_or(0.0);
    let horizontal_reaction = hydrostatic_pressure_force;

    trace!(
        self_weight,
        centroid_from_heel,
        hydrostatic_pressure_force,
        righting_moment,
        overturning_moment,
        vertical_reaction,
        "section loads"
    );

    let factor_of_safety_against_sliding = eq::sliding_factor_of_safety(
        params.coefficient_of_friction,
        vertical_reaction,
        horizontal_reaction,
    )
    .ok_or_else(|| {
        CalcError::degenerate_load(
            "horizontal_reaction",
            "No horizontal water load; sliding factor of safety is undefined",
        )
    })?;

    let factor_of_safety_against_overturning =
        eq::overturning_factor_of_safety(righting_moment, overturning_moment).ok_or_else(|| {
            CalcError::degenerate_load(
                "overturning_moment",
                "No overturning moment; overturning factor of safety is undefined",
            )
        })?;

    let location_of_ry =
        eq::resultant_location_from_heel(righting_moment, overturning_moment, vertical_reaction)
            .ok_or_else(|| {
                CalcError::degenerate_load(
                    "vertical_reaction",
                    "Uplift exactly cancels self weight; resultant location is undefined",
                )
            })?;

    for (name, value) in [
        ("self_weight", self_weight),
        ("hydrostatic_uplift", uplift.unwrap_or(0.0)),
        ("hydrostatic_pressure_force", hydrostatic_pressure_force),
        ("vertical_reaction", vertical_reaction),
        ("horizontal_reaction", horizontal_reaction),
        ("righting_moment", righting_moment),
        ("overturning_moment", overturning_moment),
        ("location_of_ry", location_of_ry),
        ("volume", volume),
        ("centroid_from_heel", centroid_from_heel),
        ("water_moment", water_moment),
        ("uplift_moment", uplift_moment),
        ("factor_of_safety_against_sliding", factor_of_safety_against_sliding),
        ("factor_of_safety_against_overturning", factor_of_safety_against_overturning),
    ] {
        ensure_finite(name, value)?;
    }

    let is_stable = factor_of_safety_against_sliding >= criteria.min_sliding_fs
        && factor_of_safety_against_overturning >= criteria.min_overturning_fs
        && location_of_ry > 0.0
        && location_of_ry < dims.bottom_width;

    debug!(
        shape = params.shape.tag(),
        units = %params.unit_system,
        fs_sliding = factor_of_safety_against_sliding,
        fs_overturning = factor_of_safety_against_overturning,
        location_of_ry,
        is_stable,
        "dam stability evaluated"
    );

    Ok(CalculationResults {
        self_weight,
        hydrostatic_uplift: uplift,
        hydrostatic_pressure_force,
        vertical_reaction,
        horizontal_reaction,
        righting_moment,
        overturning_moment,
        location_of_ry,
        factor_of_safety_against_sliding,
        factor_of_safety_against_overturning,
        is_stable,
        volume,
        centroid_from_heel,
        water_moment,
        uplift_moment,
        bottom_width: dims.bottom_width,
        unit_system: params.unit_system,
        criteria: *criteria,
    })
}

fn ensure_finite(quantity: &str, value: f64) -> CalcResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CalcError::degenerate_load(
            quantity,
            format!("Computed value is not finite ({})", value),
        ))
    }
}
