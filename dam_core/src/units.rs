//! # Unit Systems
//!
//! A parameter set is expressed entirely in one of two systems:
//!
//! | Quantity     | SI      | English  |
//! |--------------|---------|----------|
//! | Length       | m       | ft       |
//! | Unit weight  | kN/m³   | lbf/ft³  |
//! | Force        | kN      | lbf      |
//! | Moment       | kN·m    | lbf·ft   |
//!
//! [`convert`] switches a [`DamParameters`] record between the two. The
//! engine itself is unit-agnostic: it evaluates whatever consistent set of
//! numbers it is given.
//!
//! ## Example
//!
//! ```rust
//! use dam_core::units::{Feet, Meters};
//!
//! let height = Feet(100.0);
//! let height_m: Meters = height.into();
//! assert!((height_m.0 - 30.48).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dam::DamParameters;

/// Meters per foot
pub const METERS_PER_FOOT: f64 = 0.3048;

/// kN/m³ per lbf/ft³
pub const KN_PER_M3_PER_PCF: f64 = 0.1571;

/// Unit system of a parameter set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum UnitSystem {
    /// Meters and kilonewtons
    #[default]
    #[serde(rename = "SI")]
    Si,
    /// Feet and pounds-force
    English,
}

impl UnitSystem {
    /// The other system
    pub fn other(&self) -> Self {
        match self {
            UnitSystem::Si => UnitSystem::English,
            UnitSystem::English => UnitSystem::Si,
        }
    }

    /// Parse a user-supplied name (`si`, `metric`, `english`, `us`, ...)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "si" | "metric" => Some(UnitSystem::Si),
            "english" | "imperial" | "us" => Some(UnitSystem::English),
            _ => None,
        }
    }
}

impl std::fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnitSystem::Si => write!(f, "SI"),
            UnitSystem::English => write!(f, "English"),
        }
    }
}

/// Physical quantity, used to pick a unit label for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Length,
    Area,
    Volume,
    UnitWeight,
    Force,
    Moment,
}

impl Quantity {
    /// Unit label for this quantity in the given system
    pub fn label(&self, system: UnitSystem) -> &'static str {
        match (self, system) {
            (Quantity::Length, UnitSystem::Si) => "m",
            (Quantity::Length, UnitSystem::English) => "ft",
            (Quantity::Area, UnitSystem::Si) => "m²",
            (Quantity::Area, UnitSystem::English) => "ft²",
            (Quantity::Volume, UnitSystem::Si) => "m³",
            (Quantity::Volume, UnitSystem::English) => "ft³",
            (Quantity::UnitWeight, UnitSystem::Si) => "kN/m³",
            (Quantity::UnitWeight, UnitSystem::English) => "lbf/ft³",
            (Quantity::Force, UnitSystem::Si) => "kN",
            (Quantity::Force, UnitSystem::English) => "lbf",
            (Quantity::Moment, UnitSystem::Si) => "kN·m",
            (Quantity::Moment, UnitSystem::English) => "lbf·ft",
        }
    }
}

// ============================================================================
// Length Units
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

impl From<Feet> for Meters {
    fn from(ft: Feet) -> Self {
        Meters(ft.0 * METERS_PER_FOOT)
    }
}

impl From<Meters> for Feet {
    fn from(m: Meters) -> Self {
        Feet(m.0 / METERS_PER_FOOT)
    }
}

// ============================================================================
// Unit Weight Units
// ============================================================================

/// Unit weight in kilonewtons per cubic meter
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnPerM3(pub f64);

/// Unit weight in pounds-force per cubic foot
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LbfPerFt3(pub f64);

impl From<LbfPerFt3> for KnPerM3 {
    fn from(pcf: LbfPerFt3) -> Self {
        KnPerM3(pcf.0 * KN_PER_M3_PER_PCF)
    }
}

impl From<KnPerM3> for LbfPerFt3 {
    fn from(kn: KnPerM3) -> Self {
        LbfPerFt3(kn.0 / KN_PER_M3_PER_PCF)
    }
}

fn convert_length(value: f64, target: UnitSystem) -> f64 {
    match target {
        UnitSystem::Si => Meters::from(Feet(value)).0,
        UnitSystem::English => Feet::from(Meters(value)).0,
    }
}

fn convert_unit_weight(value: f64, target: UnitSystem) -> f64 {
    match target {
        UnitSystem::Si => KnPerM3::from(LbfPerFt3(value)).0,
        UnitSystem::English => LbfPerFt3::from(KnPerM3(value)).0,
    }
}

/// Convert a parameter set to another unit system.
///
/// Returns an unchanged copy when `params` is already in `target`. Length
/// fields (dimensions, water level, uplift heads) scale by 0.3048 and unit
/// weights by 0.1571. Friction and shape are dimensionless and pass through.
///
/// # Example
///
/// ```rust
/// use dam_core::dam::{DamDimensions, DamParameters, DamShape};
/// use dam_core::units::{convert, UnitSystem};
///
/// let si = DamParameters {
///     shape: DamShape::Triangular,
///     dimensions: DamDimensions { height: 30.0, top_width: 5.0, bottom_width: 20.0, length: 100.0 },
///     concrete_unit_weight: 23.5,
///     water_unit_weight: 9.81,
///     water_level: 28.0,
///     coefficient_of_friction: 0.75,
///     use_uplift: false,
///     uplift_at_heel: None,
///     uplift_at_toe: None,
///     unit_system: UnitSystem::Si,
/// };
///
/// let english = convert(&si, UnitSystem::English);
/// assert_eq!(english.unit_system, UnitSystem::English);
/// assert!((english.dimensions.height - 98.425).abs() < 0.001);
/// ```
pub fn convert(params: &DamParameters, target: UnitSystem) -> DamParameters {
    if params.unit_system == target {
        return *params;
    }

    debug!(from = %params.unit_system, to = %target, "converting dam parameters");

    let mut out = *params;
    out.dimensions.height = convert_length(params.dimensions.height, target);
    out.dimensions.top_width = convert_length(params.dimensions.top_width, target);
    out.dimensions.bottom_width = convert_length(params.dimensions.bottom_width, target);
    out.dimensions.length = convert_length(params.dimensions.length, target);
    out.water_level = convert_length(params.water_level, target);
    out.uplift_at_heel = params.uplift_at_heel.map(|h| convert_length(h, target));
    out.uplift_at_toe = params.uplift_at_toe.map(|h| convert_length(h, target));
    out.concrete_unit_weight = convert_unit_weight(params.concrete_unit_weight, target);
    out.water_unit_weight = convert_unit_weight(params.water_unit_weight, target);
    out.unit_system = target;
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dam::{DamDimensions, DamShape};

    fn si_params() -> DamParameters {
        DamParameters {
            shape: DamShape::Stepped,
            dimensions: DamDimensions {
                height: 35.0,
                top_width: 8.0,
                bottom_width: 25.0,
                length: 120.0,
            },
            concrete_unit_weight: 23.5,
            water_unit_weight: 9.81,
            water_level: 32.0,
            coefficient_of_friction: 0.65,
            use_uplift: true,
            uplift_at_heel: Some(30.0),
            uplift_at_toe: Some(5.0),
            unit_system: UnitSystem::Si,
        }
    }

    fn rel_close(a: f64, b: f64) -> bool {
        if b == 0.0 {
            a.abs() < 1e-12
        } else {
            ((a - b) / b).abs() < 1e-6
        }
    }

    #[test]
    fn test_feet_to_meters() {
        let m: Meters = Feet(10.0).into();
        assert!((m.0 - 3.048).abs() < 1e-12);
        let ft: Feet = m.into();
        assert!((ft.0 - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_unit_weight_factor() {
        let kn: KnPerM3 = LbfPerFt3(150.0).into();
        assert!((kn.0 - 23.565).abs() < 1e-9);
    }

    #[test]
    fn test_same_system_is_noop() {
        let p = si_params();
        assert_eq!(convert(&p, UnitSystem::Si), p);
    }

    #[test]
    fn test_si_to_english_fields() {
        let p = si_params();
        let e = convert(&p, UnitSystem::English);

        assert_eq!(e.unit_system, UnitSystem::English);
        assert!(rel_close(e.dimensions.height, 35.0 / 0.3048));
        assert!(rel_close(e.dimensions.top_width, 8.0 / 0.3048));
        assert!(rel_close(e.dimensions.bottom_width, 25.0 / 0.3048));
        assert!(rel_close(e.dimensions.length, 120.0 / 0.3048));
        assert!(rel_close(e.water_level, 32.0 / 0.3048));
        assert!(rel_close(e.uplift_at_heel.unwrap(), 30.0 / 0.3048));
        assert!(rel_close(e.uplift_at_toe.unwrap(), 5.0 / 0.3048));
        assert!(rel_close(e.concrete_unit_weight, 23.5 / 0.1571));
        assert!(rel_close(e.water_unit_weight, 9.81 / 0.1571));

        assert_eq!(e.coefficient_of_friction, p.coefficient_of_friction);
        assert_eq!(e.shape, p.shape);
        assert_eq!(e.use_uplift, p.use_uplift);
    }

    #[test]
    fn test_round_trip() {
        let heights = [1.0, 12.5, 30.0, 150.0];
        let levels = [0.0, 10.0, 28.0, 200.0];
        for &h in &heights {
            for &w in &levels {
                let mut p = si_params();
                p.dimensions.height = h;
                p.water_level = w;

                let back = convert(&convert(&p, UnitSystem::English), UnitSystem::Si);
                assert_eq!(back.unit_system, UnitSystem::Si);
                assert!(rel_close(back.dimensions.height, p.dimensions.height));
                assert!(rel_close(back.dimensions.top_width, p.dimensions.top_width));
                assert!(rel_close(back.dimensions.bottom_width, p.dimensions.bottom_width));
                assert!(rel_close(back.dimensions.length, p.dimensions.length));
                assert!(rel_close(back.water_level, p.water_level));
                assert!(rel_close(back.uplift_at_heel.unwrap(), p.uplift_at_heel.unwrap()));
                assert!(rel_close(back.uplift_at_toe.unwrap(), p.uplift_at_toe.unwrap()));
                assert!(rel_close(back.concrete_unit_weight, p.concrete_unit_weight));
                assert!(rel_close(back.water_unit_weight, p.water_unit_weight));
            }
        }
    }

    #[test]
    fn test_missing_uplift_stays_missing() {
        let mut p = si_params();
        p.uplift_at_heel = None;
        p.uplift_at_toe = None;
        let e = convert(&p, UnitSystem::English);
        assert_eq!(e.uplift_at_heel, None);
        assert_eq!(e.uplift_at_toe, None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Quantity::Length.label(UnitSystem::Si), "m");
        assert_eq!(Quantity::Moment.label(UnitSystem::English), "lbf·ft");
        assert_eq!(Quantity::UnitWeight.label(UnitSystem::Si), "kN/m³");
    }

    #[test]
    fn test_system_names() {
        assert_eq!(UnitSystem::from_name("SI"), Some(UnitSystem::Si));
        assert_eq!(UnitSystem::from_name("english"), Some(UnitSystem::English));
        assert_eq!(UnitSystem::from_name("furlongs"), None);
        assert_eq!(UnitSystem::Si.other(), UnitSystem::English);

        let json = serde_json::to_string(&UnitSystem::Si).unwrap();
        assert_eq!(json, "\"SI\"");
    }
}
