use approx::assert_relative_eq;

use crate::length::{Length, KM_PER_AU};

#[test]
fn test_au_round_trip_is_exact() {
    let l = Length::from_au(1.523);
    assert_eq!(l.to_au(), 1.523);
}

#[test]
fn test_km_conversion() {
    let one_au = Length::from_au(1.0);
    assert_relative_eq!(one_au.to_km(), 1.495_978_7e8, epsilon = 1e3);

    let earth_radius = Length::from_km(6378.0);
    assert_relative_eq!(earth_radius.to_km(), 6378.0, epsilon = 1e-6);
    assert!(earth_radius.to_au() < 1e-4);
}

#[test]
fn test_km_per_au_constant() {
    assert_relative_eq!(KM_PER_AU, 1.495_978_7e8, epsilon = 1e3);
}
