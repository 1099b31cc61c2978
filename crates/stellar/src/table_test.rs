use approx::assert_relative_eq;

use crate::spectral::SpectralClass;
use crate::table::{lookup, star_type_for_mass};

#[test]
fn test_lookup_g2v_is_solar() {
    let sol = lookup(SpectralClass::G, 2);
    assert_relative_eq!(sol.mass, 1.0, epsilon = 1e-12);
    assert_relative_eq!(sol.log_luminosity, 0.01, epsilon = 1e-12);
    assert_relative_eq!(sol.radius, 1.012, epsilon = 1e-12);
}

#[test]
fn test_lookup_clones_early_o_subtypes() {
    let o0 = lookup(SpectralClass::O, 0);
    let o3 = lookup(SpectralClass::O, 3);
    assert_eq!(o0, o3);
}

#[test]
fn test_lookup_clamps_subtype() {
    assert_eq!(lookup(SpectralClass::K, 42), lookup(SpectralClass::K, 9));
}

#[test]
fn test_masses_span_hottest_to_coolest() {
    let hottest = lookup(SpectralClass::O, 3);
    let coolest = lookup(SpectralClass::M, 9);
    assert!(hottest.mass > coolest.mass);
    assert_relative_eq!(hottest.mass, 59.0, epsilon = 1e-12);
    assert_relative_eq!(coolest.mass, 0.079, epsilon = 1e-12);
}

#[test]
fn test_star_type_for_mass_exact_matches() {
    assert_eq!(star_type_for_mass(1.0), (SpectralClass::G, 2));
    assert_eq!(star_type_for_mass(0.57), (SpectralClass::M, 0));
    assert_eq!(star_type_for_mass(1.33), (SpectralClass::F, 5));
}

#[test]
fn test_star_type_for_mass_clamps_out_of_range() {
    assert_eq!(star_type_for_mass(1000.0).0, SpectralClass::O);
    assert_eq!(star_type_for_mass(0.001), (SpectralClass::M, 9));
}
