use approx::assert_relative_eq;

use crate::mass::{Mass, EARTH_MASSES_PER_SOLAR_MASS};

#[test]
fn test_solar_mass_round_trip_is_exact() {
    let m = Mass::from_solar_masses(0.002);
    assert_eq!(m.to_solar_masses(), 0.002);
}

#[test]
fn test_earth_mass_conversion() {
    let earth = Mass::from_earth_masses(1.0);
    assert_relative_eq!(
        earth.to_solar_masses(),
        1.0 / EARTH_MASSES_PER_SOLAR_MASS,
        epsilon = 1e-15
    );
    assert_relative_eq!(earth.to_earth_masses(), 1.0, epsilon = 1e-12);
}

#[test]
fn test_jovian_mass_of_jupiter_analog() {
    // Jupiter is ~317.8 Earth masses and ~0.955 Jovian masses by this table's
    // 1047:1 ratio.
    let jupiter = Mass::from_earth_masses(317.8);
    assert_relative_eq!(jupiter.to_jovian_masses(), 0.9998, epsilon = 1e-3);
}

#[test]
fn test_gram_conversion() {
    let sun = Mass::from_solar_masses(1.0);
    assert_relative_eq!(sun.to_grams(), 1.989e33, epsilon = 1e20);
}

#[test]
fn test_arithmetic() {
    let a = Mass::from_solar_masses(1.0);
    let b = Mass::from_solar_masses(0.25);
    assert_eq!((a + b).to_solar_masses(), 1.25);
    assert_eq!((a - b).to_solar_masses(), 0.75);
}
