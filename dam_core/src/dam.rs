//! # Dam Data Model
//!
//! Input records for a stability evaluation. A [`DamParameters`] value is
//! built by the caller (a form, a preset, a JSON document), validated, and
//! handed to [`crate::calculations::stability::evaluate`].
//!
//! ## Sign and Reference Conventions
//!
//! ```text
//!                   top_width
//!                   ├──────┤
//!   ~~~~~~~~~~~~~~~ ┌──────┐     water level measured up from the base
//!   ~~~~~~~~~~~~~~ /       │
//!   ~~~~~~~~~~~~~ /        │  height
//!   ~~~~~~~~~~~~ /         │
//!               └──────────┘
//!             heel        toe
//!               ├──────────┤
//!               bottom_width
//! ```
//!
//! The upstream face is inclined and the downstream face is vertical, so the
//! crest sits over the toe and a triangular section (t = 0) has its centroid
//! at 2b/3 from the heel.
//!
//! - All horizontal distances are measured from the **heel** (upstream edge)
//! - `length` is the crest length perpendicular to the section
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "shape": "triangular",
//!   "dimensions": { "height": 30.0, "top_width": 5.0, "bottom_width": 20.0, "length": 100.0 },
//!   "concrete_unit_weight": 23.5,
//!   "water_unit_weight": 9.81,
//!   "water_level": 28.0,
//!   "coefficient_of_friction": 0.75,
//!   "use_uplift": true,
//!   "uplift_at_heel": 28.0,
//!   "uplift_at_toe": 0.0,
//!   "unit_system": "SI"
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::UnitSystem;

/// Cross-section family of the dam.
///
/// The shape is a presentation tag. Every variant is analyzed with the same
/// trapezoidal section, so the stability math never branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DamShape {
    /// Wide base tapering to a narrow crest (the common case)
    #[default]
    Triangular,
    /// Uniform width from base to crest
    Rectangular,
    /// Stepped downstream face
    Stepped,
    /// Curved in plan, still weight-resisting
    Curved,
}

impl DamShape {
    /// All variants, in display order
    pub const ALL: [DamShape; 4] = [
        DamShape::Triangular,
        DamShape::Rectangular,
        DamShape::Stepped,
        DamShape::Curved,
    ];

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            DamShape::Triangular => "Triangular (Trapezoidal)",
            DamShape::Rectangular => "Rectangular",
            DamShape::Stepped => "Step (Stepped)",
            DamShape::Curved => "Curved",
        }
    }

    /// One-sentence description for UI
    pub fn description(&self) -> &'static str {
        match self {
            DamShape::Triangular => {
                "The most common shape, with a wide base that tapers upward to efficiently resist water pressure and ensure stability."
            }
            DamShape::Rectangular => {
                "A simpler design with a uniform cross-section, used in specific conditions where foundation stability is high."
            }
            DamShape::Stepped => {
                "Features stepped faces on the downstream side to dissipate energy and reduce water impact forces."
            }
            DamShape::Curved => {
                "Slightly curved in plan view to add structural strength by utilizing arch action while still relying mainly on its weight."
            }
        }
    }

    /// Parse from the lowercase tag used in JSON (`"stepped"`, ...)
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|shape| shape.tag().eq_ignore_ascii_case(tag.trim()))
    }

    /// Lowercase tag used in JSON
    pub fn tag(&self) -> &'static str {
        match self {
            DamShape::Triangular => "triangular",
            DamShape::Rectangular => "rectangular",
            DamShape::Stepped => "stepped",
            DamShape::Curved => "curved",
        }
    }
}

impl std::fmt::Display for DamShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Overall dimensions of the dam, in the length unit of the parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamDimensions {
    /// Height from base to crest
    pub height: f64,

    /// Crest width (0 for a true triangle)
    pub top_width: f64,

    /// Base width, heel to toe
    pub bottom_width: f64,

    /// Crest length perpendicular to the section
    pub length: f64,
}

impl DamDimensions {
    /// Validate the geometric invariants:
    /// `height > 0`, `length > 0`, `bottom_width > 0`, `0 <= top_width <= bottom_width`.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive_geometry("dimensions.height", self.height, "Height must be positive")?;
        require_positive_geometry("dimensions.length", self.length, "Length must be positive")?;
        require_positive_geometry(
            "dimensions.bottom_width",
            self.bottom_width,
            "Bottom width must be positive",
        )?;
        if !self.top_width.is_finite() || self.top_width < 0.0 {
            return Err(CalcError::invalid_geometry(
                "dimensions.top_width",
                self.top_width.to_string(),
                "Top width cannot be negative",
            ));
        }
        if self.top_width > self.bottom_width {
            return Err(CalcError::invalid_geometry(
                "dimensions.top_width",
                self.top_width.to_string(),
                format!("Top width exceeds bottom width ({})", self.bottom_width),
            ));
        }
        Ok(())
    }
}

/// Complete input record for one stability evaluation.
///
/// Lengths (dimensions, water level, uplift heads) share one unit and unit
/// weights share another, both fixed by `unit_system`. Use
/// [`crate::units::convert`] to switch systems.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamParameters {
    /// Cross-section family (visual only)
    #[serde(default)]
    pub shape: DamShape,

    /// Overall dimensions
    pub dimensions: DamDimensions,

    /// Unit weight of concrete (kN/m³ or lbf/ft³)
    pub concrete_unit_weight: f64,

    /// Unit weight of water (kN/m³ or lbf/ft³)
    pub water_unit_weight: f64,

    /// Upstream water depth above the base; may exceed `height` (overtopping)
    pub water_level: f64,

    /// Coefficient of friction between dam base and foundation (0 to 1)
    pub coefficient_of_friction: f64,

    /// Include uplift pressure under the base
    #[serde(default)]
    pub use_uplift: bool,

    /// Uplift pressure head at the heel (length units)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uplift_at_heel: Option<f64>,

    /// Uplift pressure head at the toe (length units)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uplift_at_toe: Option<f64>,

    /// Unit system the numbers are expressed in
    #[serde(default)]
    pub unit_system: UnitSystem,
}

impl DamParameters {
    /// Validate all inputs.
    ///
    /// Uplift heads are only checked when `use_uplift` is set.
    pub fn validate(&self) -> CalcResult<()> {
        self.dimensions.validate()?;

        require_positive_geometry(
            "concrete_unit_weight",
            self.concrete_unit_weight,
            "Concrete unit weight must be positive",
        )?;
        require_positive_geometry(
            "water_unit_weight",
            self.water_unit_weight,
            "Water unit weight must be positive",
        )?;

        if !self.water_level.is_finite() || self.water_level < 0.0 {
            return Err(CalcError::invalid_input(
                "water_level",
                self.water_level.to_string(),
                "Water level must be zero or positive",
            ));
        }

        let mu = self.coefficient_of_friction;
        if !mu.is_finite() || !(0.0..=1.0).contains(&mu) {
            return Err(CalcError::invalid_input(
                "coefficient_of_friction",
                mu.to_string(),
                "Coefficient of friction must be between 0 and 1",
            ));
        }

        if self.use_uplift {
            self.validate_uplift()?;
        }

        Ok(())
    }

    fn validate_uplift(&self) -> CalcResult<()> {
        for (name, head) in [
            ("uplift_at_heel", self.uplift_at_heel),
            ("uplift_at_toe", self.uplift_at_toe),
        ] {
            if let Some(h) = head {
                if !h.is_finite() || h < 0.0 {
                    return Err(CalcError::invalid_uplift(format!(
                        "{} must be zero or positive, got {}",
                        name, h
                    )));
                }
            }
        }

        let (heel, toe) = self.uplift_heads();
        if heel + toe <= 0.0 {
            return Err(CalcError::invalid_uplift(
                "Uplift is enabled but both uplift_at_heel and uplift_at_toe are zero or missing",
            ));
        }
        Ok(())
    }

    /// Uplift heads at (heel, toe), with missing values read as zero.
    pub fn uplift_heads(&self) -> (f64, f64) {
        (
            self.uplift_at_heel.unwrap_or(0.0),
            self.uplift_at_toe.unwrap_or(0.0),
        )
    }

    /// Water level exceeds the dam height
    pub fn is_overtopping(&self) -> bool {
        self.water_level > self.dimensions.height
    }
}

fn require_positive_geometry(field: &str, value: f64, reason: &str) -> CalcResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::invalid_geometry(field, value.to_string(), reason));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_params() -> DamParameters {
        DamParameters {
            shape: DamShape::Triangular,
            dimensions: DamDimensions {
                height: 30.0,
                top_width: 5.0,
                bottom_width: 20.0,
                length: 100.0,
            },
            concrete_unit_weight: 23.5,
            water_unit_weight: 9.81,
            water_level: 28.0,
            coefficient_of_friction: 0.75,
            use_uplift: false,
            uplift_at_heel: None,
            uplift_at_toe: None,
            unit_system: UnitSystem::Si,
        }
    }

    #[test]
    fn test_valid_params() {
        assert!(test_params().validate().is_ok());
    }

    #[test]
    fn test_top_wider_than_bottom() {
        let mut p = test_params();
        p.dimensions.top_width = 25.0;
        let err = p.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_GEOMETRY");
    }

    #[test]
    fn test_non_positive_dimensions() {
        let mut p = test_params();
        p.dimensions.height = 0.0;
        assert_eq!(p.validate().unwrap_err().error_code(), "INVALID_GEOMETRY");

        let mut p = test_params();
        p.dimensions.length = -1.0;
        assert_eq!(p.validate().unwrap_err().error_code(), "INVALID_GEOMETRY");

        let mut p = test_params();
        p.concrete_unit_weight = 0.0;
        assert_eq!(p.validate().unwrap_err().error_code(), "INVALID_GEOMETRY");
    }

    #[test]
    fn test_nan_is_rejected() {
        let mut p = test_params();
        p.dimensions.bottom_width = f64::NAN;
        assert!(p.validate().is_err());

        let mut p = test_params();
        p.water_level = f64::INFINITY;
        assert_eq!(p.validate().unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_friction_range() {
        let mut p = test_params();
        p.coefficient_of_friction = 1.2;
        assert_eq!(p.validate().unwrap_err().error_code(), "INVALID_INPUT");
        p.coefficient_of_friction = 1.0;
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_uplift_validation() {
        let mut p = test_params();
        p.use_uplift = true;
        assert_eq!(p.validate().unwrap_err().error_code(), "INVALID_UPLIFT");

        p.uplift_at_heel = Some(0.0);
        p.uplift_at_toe = Some(0.0);
        assert_eq!(p.validate().unwrap_err().error_code(), "INVALID_UPLIFT");

        p.uplift_at_heel = Some(-2.0);
        p.uplift_at_toe = Some(5.0);
        assert_eq!(p.validate().unwrap_err().error_code(), "INVALID_UPLIFT");

        p.uplift_at_heel = Some(28.0);
        p.uplift_at_toe = None;
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_uplift_ignored_when_disabled() {
        let mut p = test_params();
        p.uplift_at_heel = Some(-5.0);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_shape_tags() {
        for shape in DamShape::ALL {
            assert_eq!(DamShape::from_tag(shape.tag()), Some(shape));
        }
        assert_eq!(DamShape::from_tag("Stepped"), Some(DamShape::Stepped));
        assert_eq!(DamShape::from_tag("arch"), None);
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_string(&test_params()).unwrap();
        assert!(json.contains("\"shape\":\"triangular\""));
        assert!(json.contains("\"unit_system\":\"SI\""));
        assert!(!json.contains("uplift_at_heel"));

        let roundtrip: DamParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, test_params());
    }

    #[test]
    fn test_overtopping() {
        let mut p = test_params();
        assert!(!p.is_overtopping());
        p.water_level = 35.0;
        assert!(p.is_overtopping());
        assert!(p.validate().is_ok());
    }
}
