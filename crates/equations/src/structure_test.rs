use approx::assert_relative_eq;

use crate::constants::{ROCKY_TRANSITION, SOLAR_MASS_TO_EARTH_MASS};
use crate::structure::{escape_velocity, kothari_radius, volume_density};

const EARTH_MASS_SOLAR: f64 = 1.0 / SOLAR_MASS_TO_EARTH_MASS;

#[test]
fn test_kothari_radius_earth_analog() {
    // One Earth mass of zone-1 rocky material lands within a couple percent
    // of Earth's actual radius.
    let radius = kothari_radius(EARTH_MASS_SOLAR, false, 1.0);
    assert_relative_eq!(radius, 6378.0, max_relative = 0.02);
}

#[test]
fn test_kothari_radius_monotonic_in_mass_below_transition() {
    for zone in [1.0, 1.5, 2.0, 2.7, 3.0] {
        let mut previous = 0.0;
        let mut mass = 1.0e-9;
        while mass < ROCKY_TRANSITION {
            let radius = kothari_radius(mass, false, zone);
            assert!(
                radius > previous,
                "radius not monotonic at mass {mass} zone {zone}"
            );
            previous = radius;
            mass *= 1.5;
        }
    }
}

#[test]
fn test_kothari_radius_continuous_across_zone_transitions() {
    let mass = 10.0 * EARTH_MASS_SOLAR;
    for (below, above) in [(1.999, 2.001), (2.999, 3.0)] {
        let r0 = kothari_radius(mass, false, below);
        let r1 = kothari_radius(mass, false, above);
        assert_relative_eq!(r0, r1, max_relative = 0.01);
    }
}

#[test]
fn test_kothari_radius_gas_giant_larger_than_rocky() {
    // In zone 2, where H2/He dominates the gaseous table, a gas giant of the
    // same mass is far less dense than rock.
    let mass = 100.0 * EARTH_MASS_SOLAR;
    let gas = kothari_radius(mass, true, 2.0);
    let rocky = kothari_radius(mass, false, 2.0);
    assert!(gas > rocky);
}

#[test]
fn test_volume_density_earth() {
    let density = volume_density(EARTH_MASS_SOLAR, 6378.0);
    assert_relative_eq!(density, 5.5, max_relative = 0.02);
}

#[test]
fn test_escape_velocity_earth() {
    let v = escape_velocity(EARTH_MASS_SOLAR, 6378.0);
    assert_relative_eq!(v, 11_186.0, max_relative = 0.01);
}
