//! Sample problems shipped with the calculator.

use serde::Serialize;

use dam_core::{DamDimensions, DamParameters, DamShape, UnitSystem};

/// Difficulty tag shown next to a sample problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// A named example problem with fixed parameters
#[derive(Debug, Clone, Serialize)]
pub struct Preset {
    pub id: &'static str,
    pub title: &'static str,
    pub difficulty: Option<Difficulty>,
    pub description: &'static str,
    pub params: DamParameters,
}

/// Id of the preset used when none is given on the command line
pub const DEFAULT_PRESET: &str = "default";

fn si(
    shape: DamShape,
    dimensions: DamDimensions,
    concrete_unit_weight: f64,
    water_level: f64,
    coefficient_of_friction: f64,
    uplift: Option<(f64, f64)>,
) -> DamParameters {
    DamParameters {
        shape,
        dimensions,
        concrete_unit_weight,
        water_unit_weight: 9.81,
        water_level,
        coefficient_of_friction,
        use_uplift: uplift.is_some(),
        uplift_at_heel: uplift.map(|(heel, _)| heel),
        uplift_at_toe: uplift.map(|(_, toe)| toe),
        unit_system: UnitSystem::Si,
    }
}

fn dims(height: f64, top_width: f64, bottom_width: f64, length: f64) -> DamDimensions {
    DamDimensions {
        height,
        top_width,
        bottom_width,
        length,
    }
}

/// All built-in presets, default first
pub fn all() -> Vec<Preset> {
    vec![
        Preset {
            id: DEFAULT_PRESET,
            title: "Calculator Default",
            difficulty: None,
            description: "Triangular dam with full uplift at the heel",
            params: si(
                DamShape::Triangular,
                dims(30.0, 5.0, 20.0, 100.0),
                23.5,
                28.0,
                0.75,
                Some((28.0, 0.0)),
            ),
        },
        Preset {
            id: "basic",
            title: "Basic Stability Analysis",
            difficulty: Some(Difficulty::Beginner),
            description: "Triangular dam without uplift consideration",
            params: si(
                DamShape::Triangular,
                dims(30.0, 5.0, 20.0, 100.0),
                23.5,
                28.0,
                0.75,
                None,
            ),
        },
        Preset {
            id: "intermediate",
            title: "Intermediate Dam Analysis",
            difficulty: Some(Difficulty::Intermediate),
            description: "Rectangular dam with uplift forces",
            params: si(
                DamShape::Rectangular,
                dims(30.0, 15.0, 15.0, 100.0),
                24.0,
                25.0,
                0.70,
                Some((25.0, 0.0)),
            ),
        },
        Preset {
            id: "advanced",
            title: "Advanced Stability Assessment",
            difficulty: Some(Difficulty::Advanced),
            description: "Stepped dam with complex water profile",
            params: si(
                DamShape::Stepped,
                dims(35.0, 8.0, 25.0, 120.0),
                23.5,
                32.0,
                0.65,
                Some((30.0, 5.0)),
            ),
        },
        Preset {
            id: "custom",
            title: "Custom Dam Configuration",
            difficulty: None,
            description: "Curved dam without uplift, a starting point for your own design",
            params: si(
                DamShape::Curved,
                dims(40.0, 10.0, 30.0, 150.0),
                23.5,
                35.0,
                0.70,
                None,
            ),
        },
    ]
}

/// Look up a preset by id (case-insensitive)
pub fn find(id: &str) -> Option<Preset> {
    all().into_iter().find(|p| p.id.eq_ignore_ascii_case(id.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dam_core::{evaluate, CalcError};

    #[test]
    fn test_all_presets_are_valid() {
        for preset in all() {
            assert!(preset.params.validate().is_ok(), "{} failed validation", preset.id);
            let result = evaluate(&preset.params);
            assert!(result.is_ok(), "{}: {:?}", preset.id, result.err());
        }
    }

    #[test]
    fn test_preset_verdicts() {
        let verdict = |id: &str| -> Result<bool, CalcError> {
            Ok(evaluate(&find(id).unwrap().params)?.is_stable)
        };
        assert_eq!(verdict("basic"), Ok(true));
        assert_eq!(verdict("intermediate"), Ok(true));
        // Sliding governs: 0.65 * 1,113,525 / 602,726 ≈ 1.20
        assert_eq!(verdict("advanced"), Ok(false));
        assert_eq!(verdict("custom"), Ok(true));
        assert_eq!(verdict(DEFAULT_PRESET), Ok(false));
    }

    #[test]
    fn test_find() {
        assert_eq!(find("Advanced").unwrap().params.shape, DamShape::Stepped);
        assert!(find("nonexistent").is_none());
    }

    #[test]
    fn test_ids_unique() {
        let presets = all();
        for (i, a) in presets.iter().enumerate() {
            for b in &presets[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
