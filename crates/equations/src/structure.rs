//! Bulk-structure equations: radius, density, and escape velocity.

use crate::constants::{CM_PER_KM, GRAVITY_CONSTANT, KM_PER_CM, M_PER_CM, SOLAR_MASS_IN_GRAMS};
use crate::interpolate::lerp;

/// A1 coefficient of the Kothari 1936 radius equation, cgs.
const KOTHARI_A1: f64 = 6.485e12;

/// A2 coefficient of the Kothari 1936 radius equation, cgs.
const KOTHARI_A2: f64 = 4.0032e-8;

/// Beta coefficient of the Kothari 1936 radius equation, cgs.
const KOTHARI_BETA: f64 = 5.71e12;

/// Mean atomic weight of accreted material, indexed as
/// [rocky zone 1, rocky zone 2, rocky zone 3, gas zone 1, gas zone 2, gas zone 3].
const ATOMIC_WEIGHT: [f64; 6] = [15.0, 10.0, 10.0, 9.5, 2.47, 7.0];

/// Mean atomic number of accreted material, indexed like [`ATOMIC_WEIGHT`].
const ATOMIC_NUMBER: [f64; 6] = [8.0, 5.0, 5.0, 4.5, 2.0, 4.0];

/// Computes the radius of a planet from its mass and the composition of the
/// material zone it formed in, in km.
///
/// This is Eq. 9 of Fogg 1985, which originates as Eq. 23 of Kothari 1936: a
/// degenerate-matter equation of state parameterized by the mean atomic
/// weight and atomic number of the accreted material. The three zones follow
/// Pollard 1979: heavier elements only near the star, volatile ices plus
/// H2/He in the middle zone, ices without the light gases in the outer zone.
/// Within the transition regions between zones, the weight and number are
/// linearly interpolated so the radius is continuous across a zone boundary.
///
/// This equation is the single determinant of a body's size, and therefore
/// of its density, surface gravity, and everything derived from them.
///
/// # Arguments
/// * `mass` - Mass of the body, in solar masses.
/// * `for_gas_giant` - Select the gaseous parameter set instead of the rocky
///   one.
/// * `material_zone` - Zone value in [1.0, 3.0], fractional in the
///   transition regions (see `stellar`'s material-zone classification).
pub fn kothari_radius(mass: f64, for_gas_giant: bool, material_zone: f64) -> f64 {
    let whole_zone = material_zone.floor();
    let interpolant = material_zone - whole_zone;

    // Zone 1.0..2.0 interpolates table slots [0] -> [1]; 2.0..3.0
    // interpolates [1] -> [2]. At exactly 3.0 the interpolant is zero, so the
    // upper slot is never read; clamp keeps the index in bounds.
    let zone_index = ((whole_zone as usize).saturating_sub(1)).min(2);
    let offset = if for_gas_giant { 3 } else { 0 };
    let lower = zone_index + offset;
    let upper = (lower + 1).min(5);

    let atomic_weight = lerp(interpolant, ATOMIC_WEIGHT[lower], ATOMIC_WEIGHT[upper]);
    let atomic_number = lerp(interpolant, ATOMIC_NUMBER[lower], ATOMIC_NUMBER[upper]);

    let za = atomic_weight * atomic_number;

    let radius = (2.0 * KOTHARI_BETA * SOLAR_MASS_IN_GRAMS.powf(1.0 / 3.0))
        / (KOTHARI_A1 * za.powf(1.0 / 3.0));

    let mut denominator =
        KOTHARI_A2 * atomic_weight.powf(4.0 / 3.0) * SOLAR_MASS_IN_GRAMS.powf(2.0 / 3.0);
    denominator *= mass.powf(2.0 / 3.0);
    denominator /= KOTHARI_A1 * (atomic_number * atomic_number);
    denominator += 1.0;

    (radius / denominator) * mass.powf(1.0 / 3.0) * KM_PER_CM
}

/// Returns the density of a body, in g/cc.
///
/// # Arguments
/// * `mass` - Mass of the body, in solar masses.
/// * `radius` - Radius of the body, in km.
pub fn volume_density(mass: f64, radius: f64) -> f64 {
    let volume = (4.0 * std::f64::consts::PI * (radius * CM_PER_KM).powf(3.0)) / 3.0;

    (mass * SOLAR_MASS_IN_GRAMS) / volume
}

/// Returns the escape velocity of a body, in m/s.
///
/// # Arguments
/// * `mass` - Mass of the body, in solar masses.
/// * `radius` - Radius of the body, in km.
pub fn escape_velocity(mass: f64, radius: f64) -> f64 {
    M_PER_CM * (2.0 * GRAVITY_CONSTANT * mass * SOLAR_MASS_IN_GRAMS / (radius * CM_PER_KM)).sqrt()
}
