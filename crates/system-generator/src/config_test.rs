use crate::config::GeneratorConfig;

#[test]
fn test_defaults() {
    let config = GeneratorConfig::default();
    assert_eq!(config.seed, 0);
    assert_eq!(config.cloud_eccentricity, 0.2);
    assert_eq!(config.dust_density, 2.0e-3);
    assert_eq!(config.protoplanet_seed_mass, 1.0e-15);
    assert_eq!(config.density_variation, 0.025);
    assert_eq!(config.inclination_mean, 5.57);
    assert_eq!(config.inclination_std_dev, 1.23);
    assert_eq!(config.protoplanet_count, 20);
    assert!(!config.generate_bode_seeds);
    assert!(!config.compute_gases);
    assert!(config.protoplanet_seeds.is_empty());
}

#[test]
fn test_normalized_clamps_ranges() {
    let config = GeneratorConfig {
        cloud_eccentricity: 1.7,
        density_variation: 0.5,
        dust_density: -1.0,
        inclination_mean: -367.0,
        inclination_std_dev: -2.0,
        ..GeneratorConfig::default()
    };

    let normalized = config.normalized();
    assert_eq!(normalized.cloud_eccentricity, 0.9);
    assert_eq!(normalized.density_variation, 0.1);
    assert_eq!(normalized.dust_density, 0.0);
    assert_eq!(normalized.inclination_mean, 7.0);
    assert_eq!(normalized.inclination_std_dev, 2.0);
}

#[test]
fn test_normalized_preserves_valid_values() {
    let config = GeneratorConfig::default();
    assert_eq!(config.normalized(), config);
}
