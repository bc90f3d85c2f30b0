//! Plain-text rendering of stability results.

use std::fmt::{self, Write};

use dam_core::equations::dam::trapezoid_area;
use dam_core::{CalculationResults, DamParameters, Quantity, SafetyRating};

/// Format a number for display: `0` below 0.01, otherwise two decimals
/// with a trailing `.00` dropped.
pub fn format_number(value: f64) -> String {
    if value.abs() < 0.01 {
        return "0".to_string();
    }
    let s = format!("{:.2}", value);
    match s.strip_suffix(".00") {
        Some(trimmed) => trimmed.to_string(),
        None => s,
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}

fn rating_icon(rating: SafetyRating) -> &'static str {
    status_icon(rating.is_adequate())
}

/// Render the full text report for one evaluation.
pub fn render(params: &DamParameters, result: &CalculationResults) -> Result<String, fmt::Error> {
    let units = params.unit_system;
    let len = Quantity::Length.label(units);
    let area = Quantity::Area.label(units);
    let volume = Quantity::Volume.label(units);
    let force = Quantity::Force.label(units);
    let moment = Quantity::Moment.label(units);
    let weight = Quantity::UnitWeight.label(units);
    let dims = &params.dimensions;

    let mut out = String::new();
    writeln!(out, "═══════════════════════════════════════")?;
    writeln!(out, "  GRAVITY DAM STABILITY RESULTS")?;
    writeln!(out, "═══════════════════════════════════════")?;
    writeln!(out)?;
    writeln!(out, "Input ({} units):", units)?;
    writeln!(out, "  Shape:        {}", params.shape)?;
    writeln!(out, "                {}", params.shape.description())?;
    writeln!(
        out,
        "  Section:      H={} {len}, top={} {len}, base={} {len}, L={} {len}",
        format_number(dims.height),
        format_number(dims.top_width),
        format_number(dims.bottom_width),
        format_number(dims.length),
    )?;
    writeln!(
        out,
        "  Unit weights: concrete {} {weight}, water {} {weight}",
        format_number(params.concrete_unit_weight),
        format_number(params.water_unit_weight),
    )?;
    writeln!(
        out,
        "  Water level:  {} {len}{}",
        format_number(params.water_level),
        if params.is_overtopping() { " (overtopping)" } else { "" }
    )?;
    writeln!(out, "  Friction μ:   {}", format_number(params.coefficient_of_friction))?;
    if params.use_uplift {
        let (heel, toe) = params.uplift_heads();
        writeln!(
            out,
            "  Uplift head:  heel {} {len}, toe {} {len}",
            format_number(heel),
            format_number(toe)
        )?;
    } else {
        writeln!(out, "  Uplift:       not considered")?;
    }
    writeln!(out)?;

    writeln!(out, "Section:")?;
    writeln!(
        out,
        "  Area A              = {} {area}",
        format_number(trapezoid_area(dims.top_width, dims.bottom_width, dims.height))
    )?;
    writeln!(out, "  Volume              = {} {volume}", format_number(result.volume))?;
    writeln!(out)?;

    writeln!(out, "Forces:")?;
    writeln!(out, "  Self weight W       = {} {force}", format_number(result.self_weight))?;
    writeln!(
        out,
        "  Water force P       = {} {force}",
        format_number(result.hydrostatic_pressure_force)
    )?;
    if let Some(uplift) = result.hydrostatic_uplift {
        writeln!(out, "  Uplift U            = {} {force}", format_number(uplift))?;
    }
    writeln!(out, "  ΣV                  = {} {force}", format_number(result.vertical_reaction))?;
    writeln!(out, "  ΣH                  = {} {force}", format_number(result.horizontal_reaction))?;
    writeln!(out)?;

    writeln!(out, "Moments about heel:")?;
    writeln!(
        out,
        "  Centroid x̄          = {} {len}",
        format_number(result.centroid_from_heel)
    )?;
    writeln!(out, "  Righting ΣMr        = {} {moment}", format_number(result.righting_moment))?;
    writeln!(out, "  Water moment        = {} {moment}", format_number(result.water_moment))?;
    if result.hydrostatic_uplift.is_some() {
        writeln!(out, "  Uplift moment       = {} {moment}", format_number(result.uplift_moment))?;
    }
    writeln!(
        out,
        "  Overturning ΣMo     = {} {moment}",
        format_number(result.overturning_moment)
    )?;
    writeln!(out)?;

    let sliding = result.sliding_rating();
    let overturning = result.overturning_rating();
    writeln!(out, "Stability Checks:")?;
    writeln!(
        out,
        "  Sliding:     FS = {} (required {}) {} {}",
        format_number(result.factor_of_safety_against_sliding),
        format_number(result.criteria.min_sliding_fs),
        sliding.display_name(),
        rating_icon(sliding)
    )?;
    writeln!(
        out,
        "  Overturning: FS = {} (required {}) {} {}",
        format_number(result.factor_of_safety_against_overturning),
        format_number(result.criteria.min_overturning_fs),
        overturning.display_name(),
        rating_icon(overturning)
    )?;
    writeln!(
        out,
        "  Resultant:   {} {len} from heel, {} {}",
        format_number(result.location_of_ry),
        if result.within_base() { "within base" } else { "outside base" },
        status_icon(result.within_base())
    )?;
    writeln!(
        out,
        "  Middle third: {} (e = {} {len})",
        if result.within_middle_third() { "yes" } else { "no" },
        format_number(result.eccentricity())
    )?;
    writeln!(out)?;

    writeln!(out, "═══════════════════════════════════════")?;
    writeln!(
        out,
        "  RESULT: {} (governs: {})",
        if result.passes() { "STABLE" } else { "UNSTABLE" },
        result.governing_condition()
    )?;
    writeln!(out, "═══════════════════════════════════════")?;
    Ok(out)
}
