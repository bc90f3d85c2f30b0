//! # Gravity Dam Formulas
//!
//! Closed-form expressions for the loads on a gravity dam section. All
//! horizontal distances are measured from the heel and all functions work in
//! whatever consistent unit system the caller uses.
//!
//! ## Notation
//!
//! - `t` = Top (crest) width
//! - `b` = Bottom (base) width
//! - `h` = Dam height
//! - `L` = Crest length
//! - `γc`, `γw` = Unit weight of concrete, water
//! - `hw` = Water depth at the upstream face
//! - `u1`, `u2` = Uplift head at heel, toe

// =============================================================================
// SECTION GEOMETRY
// =============================================================================

/// Cross-sectional area of the trapezoidal dam section
///
/// ```text
///          ├─t─┤
///          ┌───┐
///         /    │
///        /     │ h
///       /      │
///      └───────┘
///      ├───b───┤
///     heel    toe
/// ```
///
/// # Formula
/// A = ½(t + b)h
///
/// # Example
/// ```rust
/// use dam_core::equations::dam::trapezoid_area;
///
/// assert!((trapezoid_area(5.0, 20.0, 30.0) - 375.0).abs() < 1e-9);
/// ```
#[inline]
pub fn trapezoid_area(top_width: f64, bottom_width: f64, height: f64) -> f64 {
    0.5 * (top_width + bottom_width) * height
}

/// Horizontal distance from the heel to the centroid of the section
///
/// One formula covers every shape variant; a rectangle (t = b) reduces to b/2
/// and a true triangle (t = 0) to 2b/3, with the vertical face at the toe.
///
/// # Formula
/// x̄ = b − (b² + bt + t²) / (3(b + t))
///
/// # Returns
/// `None` when `b + t == 0`
#[inline]
pub fn trapezoid_centroid_from_heel(top_width: f64, bottom_width: f64) -> Option<f64> {
    let denom = 3.0 * (bottom_width + top_width);
    if denom == 0.0 {
        return None;
    }
    let b = bottom_width;
    let t = top_width;
    Some(b - (b * b + b * t + t * t) / denom)
}

/// Self weight of the dam
///
/// # Formula
/// W = γc · A · L
#[inline]
pub fn self_weight(concrete_unit_weight: f64, area: f64, length: f64) -> f64 {
    concrete_unit_weight * area * length
}

// =============================================================================
// HYDROSTATIC PRESSURE (UPSTREAM FACE)
// Triangular distribution, zero at the surface, γw·hw at the base
// =============================================================================

/// Horizontal resultant of hydrostatic pressure on the upstream face
///
/// The pressure diagram is drawn on the vertical projection of the face;
/// the weight of water standing on the inclined face is not counted.
///
/// ```text
///    ─┬─ water surface
///     │\
///  hw │ \
///     │  \  → P acts at hw/3 above the base
///     │___\
///      γw·hw
/// ```
///
/// # Formula
/// P = ½ γw hw² L
///
/// Valid for any depth, including water above the crest.
#[inline]
pub fn hydrostatic_force(water_unit_weight: f64, water_level: f64, length: f64) -> f64 {
    0.5 * water_unit_weight * water_level * water_level * length
}

/// Lever arm of the hydrostatic resultant above the base
///
/// # Formula
/// y = hw / 3
#[inline]
pub fn hydrostatic_lever_arm(water_level: f64) -> f64 {
    water_level / 3.0
}

// =============================================================================
// UPLIFT (UNDER THE BASE)
// Trapezoidal distribution from γw·u1 at the heel to γw·u2 at the toe
// =============================================================================

/// Resultant of uplift pressure under the base
///
/// ```text
///      heel          toe
///      ┌──────────────┐
///      ↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑
///      ↑↑↑↑↑↑↑↑↑↑↑
///      ↑↑↑↑↑↑
///      u1            u2
/// ```
///
/// # Formula
/// U = γw · ½(u1 + u2) · b · L
#[inline]
pub fn uplift_force(water_unit_weight: f64, heel_head: f64, toe_head: f64, bottom_width: f64, length: f64) -> f64 {
    water_unit_weight * 0.5 * (heel_head + toe_head) * bottom_width * length
}

/// Distance from the heel to the uplift resultant
///
/// # Formula
/// x̄u = b(2u1 + u2) / (3(u1 + u2))
///
/// Gives 2b/3 for u2 = 0 and b/2 for uniform uplift.
///
/// # Returns
/// `None` when `u1 + u2 == 0` (no uplift diagram)
#[inline]
pub fn uplift_centroid_from_heel(heel_head: f64, toe_head: f64, bottom_width: f64) -> Option<f64> {
    let sum = heel_head + toe_head;
    if sum == 0.0 {
        return None;
    }
    Some(bottom_width * (2.0 * heel_head + toe_head) / (3.0 * sum))
}

// =============================================================================
// STABILITY RATIOS
// =============================================================================

/// Factor of safety against sliding
///
/// # Formula
/// FSs = μ ΣV / ΣH
///
/// # Returns
/// `None` when there is no horizontal load
#[inline]
pub fn sliding_factor_of_safety(friction: f64, vertical: f64, horizontal: f64) -> Option<f64> {
    if horizontal == 0.0 {
        return None;
    }
    Some(friction * vertical / horizontal)
}

/// Factor of safety against overturning
///
/// # Formula
/// FSo = ΣMr / ΣMo
///
/// # Returns
/// `None` when there is no overturning moment
#[inline]
pub fn overturning_factor_of_safety(righting_moment: f64, overturning_moment: f64) -> Option<f64> {
    if overturning_moment == 0.0 {
        return None;
    }
    Some(righting_moment / overturning_moment)
}

/// Location of the resultant vertical force measured from the heel
///
/// # Formula
/// x = (ΣMr − ΣMo) / ΣV
///
/// # Returns
/// `None` when `ΣV == 0`
#[inline]
pub fn resultant_location_from_heel(righting_moment: f64, overturning_moment: f64, vertical: f64) -> Option<f64> {
    if vertical == 0.0 {
        return None;
    }
    Some((righting_moment - overturning_moment) / vertical)
}
