use approx::assert_relative_eq;

use crate::constants::{WEIGHT_HELIUM, WEIGHT_MOLECULAR_HYDROGEN, WEIGHT_MOLECULAR_NITROGEN};
use crate::escape::{gas_life, minimum_molecular_weight, molecular_limit, rms_velocity};

// Earth-like reference body.
const EARTH_ESCAPE: f64 = 11_186.0;
const EARTH_EXOSPHERE: f64 = 1273.0;
const EARTH_GRAVITY: f64 = 9.81;
const EARTH_RADIUS: f64 = 6378.0;

#[test]
fn test_rms_velocity_nitrogen() {
    // N2 at Earth's exosphere temperature moves at roughly 1.06 km/s.
    let v = rms_velocity(WEIGHT_MOLECULAR_NITROGEN, EARTH_EXOSPHERE);
    assert_relative_eq!(v, 1065.0, max_relative = 0.01);
}

#[test]
fn test_rms_velocity_scales_inversely_with_weight() {
    let h2 = rms_velocity(WEIGHT_MOLECULAR_HYDROGEN, EARTH_EXOSPHERE);
    let n2 = rms_velocity(WEIGHT_MOLECULAR_NITROGEN, EARTH_EXOSPHERE);
    assert_relative_eq!(h2 / n2, (28.0f64 / 2.0).sqrt(), epsilon = 1e-9);
}

#[test]
fn test_molecular_limit_earth() {
    // The Jeans limit for Earth sits around weight 6.3 at threshold 5.0.
    let limit = molecular_limit(EARTH_ESCAPE, EARTH_EXOSPHERE);
    assert_relative_eq!(limit, 6.35, max_relative = 0.02);
}

#[test]
fn test_gas_life_increases_with_weight() {
    let h2 = gas_life(
        WEIGHT_MOLECULAR_HYDROGEN,
        EARTH_EXOSPHERE,
        EARTH_GRAVITY,
        EARTH_RADIUS,
    );
    let he = gas_life(WEIGHT_HELIUM, EARTH_EXOSPHERE, EARTH_GRAVITY, EARTH_RADIUS);
    let n2 = gas_life(
        WEIGHT_MOLECULAR_NITROGEN,
        EARTH_EXOSPHERE,
        EARTH_GRAVITY,
        EARTH_RADIUS,
    );

    assert!(h2 < he);
    assert!(he < n2);
}

#[test]
fn test_earth_retains_nitrogen_but_not_hydrogen() {
    let age = 4.5e9;
    let h2 = gas_life(
        WEIGHT_MOLECULAR_HYDROGEN,
        EARTH_EXOSPHERE,
        EARTH_GRAVITY,
        EARTH_RADIUS,
    );
    let n2 = gas_life(
        WEIGHT_MOLECULAR_NITROGEN,
        EARTH_EXOSPHERE,
        EARTH_GRAVITY,
        EARTH_RADIUS,
    );

    assert!(h2 < age);
    assert!(n2 > age);
}

#[test]
fn test_minimum_molecular_weight_earth() {
    let weight = minimum_molecular_weight(
        EARTH_ESCAPE,
        EARTH_EXOSPHERE,
        EARTH_GRAVITY,
        EARTH_RADIUS,
        4.5e9,
    );

    // Earth holds onto everything heavier than roughly helium.
    assert!(weight > 2.0 && weight < 10.0, "weight = {weight}");
}

#[test]
fn test_minimum_molecular_weight_massive_body_retains_hydrogen() {
    // Jupiter-like body: huge escape velocity, cold exosphere.
    let weight = minimum_molecular_weight(59_500.0, 100.0, 24.8, 71_492.0, 4.5e9);
    assert!(weight < 2.0, "weight = {weight}");
}
