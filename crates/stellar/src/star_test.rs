use approx::assert_relative_eq;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::spectral::SpectralClass;
use crate::star::{OrbitalZone, Star, MAXIMUM_STELLAR_AGE, MINIMUM_STELLAR_AGE};

fn sol() -> Star {
    let mut star = Star::new(SpectralClass::G, 2);
    star.evaluate_default();
    star
}

#[test]
fn test_evaluate_derives_solar_values() {
    let star = sol();
    assert_relative_eq!(star.mass(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(star.luminosity(), 1.023, max_relative = 1e-3);
    assert_relative_eq!(star.temperature(), 5767.0, max_relative = 1e-3);
    assert_relative_eq!(star.ecosphere(), star.luminosity().sqrt(), epsilon = 1e-12);
    assert_relative_eq!(star.snow_line(), 5.0 * star.ecosphere(), epsilon = 1e-12);
}

#[test]
fn test_evaluate_is_idempotent() {
    let mut rng = ChaChaRng::seed_from_u64(7);
    let mut star = Star::new(SpectralClass::K, 4);
    star.evaluate(&mut rng);
    let snapshot = star.clone();

    star.evaluate(&mut rng);
    assert_eq!(star, snapshot);
}

#[test]
fn test_age_defaults_to_plausible_range() {
    for seed in 0..16 {
        let mut rng = ChaChaRng::seed_from_u64(seed);
        let mut star = Star::new(SpectralClass::G, 2);
        star.evaluate(&mut rng);
        assert!(star.age() >= MINIMUM_STELLAR_AGE);
        assert!(star.age() <= MAXIMUM_STELLAR_AGE);
    }
}

#[test]
fn test_explicit_age_is_clamped() {
    let mut star = Star::new(SpectralClass::G, 2);
    star.set_age(1.0e12);
    star.evaluate_default();
    assert!(star.age() <= MAXIMUM_STELLAR_AGE);

    let mut young = Star::new(SpectralClass::G, 2);
    young.set_age(1.0);
    young.evaluate_default();
    assert_relative_eq!(young.age(), MINIMUM_STELLAR_AGE, epsilon = 1.0);
}

#[test]
fn test_short_lived_star_age_caps_at_lifespan() {
    // An A0V burns out well before six billion years.
    let mut star = Star::new(SpectralClass::A, 0);
    star.set_age(MAXIMUM_STELLAR_AGE);
    star.evaluate_default();

    let lifespan = 1.0e10 * star.mass() / star.luminosity();
    assert!(star.age() <= lifespan);
    assert!(star.age() < MAXIMUM_STELLAR_AGE);
}

#[test]
fn test_material_zone_profile() {
    let star = sol();
    let sqrt_lum = star.luminosity().sqrt();

    // Flat inside the zone-2 inner edge, blending across the overlaps, and
    // clamped at 3.0 far out.
    assert_eq!(star.material_zone(0.5), 1.0);
    assert_eq!(star.material_zone(3.9 * sqrt_lum), 1.0);
    assert_relative_eq!(star.material_zone(4.5 * sqrt_lum), 1.5, epsilon = 1e-9);
    assert_eq!(star.material_zone(10.0 * sqrt_lum), 2.0);
    assert_relative_eq!(star.material_zone(15.0 * sqrt_lum), 2.5, epsilon = 1e-9);
    assert_eq!(star.material_zone(1000.0), 3.0);
}

#[test]
fn test_material_zone_monotonic() {
    let star = sol();
    let mut previous = 0.0;
    let mut sma = 0.1;
    while sma < 250.0 {
        let zone = star.material_zone(sma);
        assert!(zone >= previous);
        previous = zone;
        sma *= 1.1;
    }
}

#[test]
fn test_orbital_zone_classification() {
    let star = sol();
    assert_eq!(star.orbital_zone(0.3), OrbitalZone::Inner);
    assert_eq!(star.orbital_zone(1.0), OrbitalZone::Habitable);
    assert_eq!(star.orbital_zone(2.0), OrbitalZone::Middle);
    assert_eq!(star.orbital_zone(30.0), OrbitalZone::Outer);
}

#[test]
fn test_stellar_class_formatting() {
    assert_eq!(sol().stellar_class(), "G2V");
    assert_eq!(Star::new(SpectralClass::M, 9).stellar_class(), "M9V");
    // O-class subtypes below 3 have no table data and clamp upward.
    assert_eq!(Star::new(SpectralClass::O, 0).stellar_class(), "O3V");
}
