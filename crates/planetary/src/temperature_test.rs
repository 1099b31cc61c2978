use approx::assert_relative_eq;

use crate::temperature::{boiling_point, greenhouse_rise, opacity, soft};

#[test]
fn test_boiling_point_at_one_atmosphere() {
    assert_relative_eq!(boiling_point(1013.25), 373.3, max_relative = 1e-3);
}

#[test]
fn test_boiling_point_drops_with_pressure() {
    // Water boils cooler on a thin-atmosphere world.
    assert!(boiling_point(6.1) < boiling_point(1013.25));
    assert_eq!(boiling_point(0.0), 0.0);
}

#[test]
fn test_opacity_steps_by_molecular_weight() {
    assert_relative_eq!(opacity(5.0, 1000.0), 3.0);
    assert_relative_eq!(opacity(15.0, 1000.0), 2.34);
    assert_relative_eq!(opacity(25.0, 1000.0), 1.0);
    assert_relative_eq!(opacity(40.0, 1000.0), 0.15);
    assert_relative_eq!(opacity(60.0, 1000.0), 0.05);
    assert_relative_eq!(opacity(150.0, 1000.0), 0.0);
}

#[test]
fn test_opacity_scales_with_heavy_atmospheres() {
    let base = opacity(5.0, 1000.0);
    assert_relative_eq!(opacity(5.0, 11.0 * 1013.25), base * 2.0);
    assert_relative_eq!(opacity(5.0, 75.0 * 1013.25), base * 8.333);
}

#[test]
fn test_greenhouse_rise_earth_magnitude() {
    // Earth-like inputs produce a rise of a few tens of Kelvin.
    let rise = greenhouse_rise(250.0, 6.0, 1013.25);
    assert!(rise > 20.0 && rise < 60.0, "rise = {rise}");
}

#[test]
fn test_greenhouse_rise_never_negative() {
    assert_eq!(greenhouse_rise(250.0, 150.0, 0.001), 0.0);
}

#[test]
fn test_soft_is_bounded_and_monotonic() {
    let (max, min) = (400.0, 50.0);
    let mut previous = f64::NEG_INFINITY;
    for i in 0..100 {
        let v = f64::from(i) * 10.0 - 200.0;
        let s = soft(v, max, min);
        assert!(s >= previous);
        assert!(s > min - (max - min) && s < max + (max - min));
        previous = s;
    }
}

#[test]
fn test_soft_centered_value_passes_through() {
    // The midpoint of the envelope maps to itself.
    let mid = soft(225.0, 400.0, 50.0);
    assert_relative_eq!(mid, 225.0, max_relative = 1e-9);
}
