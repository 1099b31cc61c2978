//! The generation drivers.

use std::time::{SystemTime, UNIX_EPOCH};

use log::{debug, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use uuid::Uuid;

use planetary::{EvaluationOptions, Planet};
use protodisk::sampling::{random_eccentricity, random_near, random_two_pi};
use protodisk::seeding::{bode_seeds, random_seed};
use protodisk::{AccretionEngine, AccretionParams, Protoplanet};
use stellar::{star_type_for_mass, Star, MAXIMUM_STELLAR_MASS, MINIMUM_STELLAR_MASS};

use crate::config::GeneratorConfig;
use crate::system::SolarSystem;

/// Hard ceiling on random protoplanets per run, against pathological
/// configurations that never dry the disk.
const MAX_RANDOM_PROTOPLANETS: u32 = 10_000;

/// Generates a solar system using sequential accretion: each protoplanet
/// fully sweeps its neighborhood before the next one is placed.
///
/// Explicit seeds from the configuration are applied first, then Bode seeds
/// if requested, then random protoplanets until the disk holds no more dust
/// in the planet-forming zone.
pub fn generate(config: &GeneratorConfig) -> SolarSystem {
    let config = config.normalized();
    let seed = resolve_seed(config.seed);
    let mut rng = ChaChaRng::seed_from_u64(seed);

    let star = make_star(&config, &mut rng);
    run(&config, star, seed, &mut rng, AccretionMode::Sequential)
}

/// Generates a solar system using batch accretion: every initial seed
/// (explicit or Bode, plus `protoplanet_count` random ones) takes single
/// accretion steps in rotation until none of them is still collecting, then
/// the survivors coalesce and any leftover dust is swept sequentially.
pub fn generate_batch(config: &GeneratorConfig) -> SolarSystem {
    let config = config.normalized();
    let seed = resolve_seed(config.seed);
    let mut rng = ChaChaRng::seed_from_u64(seed);

    let star = make_star(&config, &mut rng);
    run(&config, star, seed, &mut rng, AccretionMode::Batch)
}

/// Generates the system around a caller-supplied star.
///
/// The star is evaluated first if the caller has not done so. The
/// configuration's stellar-mass and random-star knobs are ignored.
pub fn generate_with_star(config: &GeneratorConfig, mut star: Star) -> SolarSystem {
    let config = config.normalized();
    let seed = resolve_seed(config.seed);
    let mut rng = ChaChaRng::seed_from_u64(seed);

    if !star.is_evaluated() {
        star.evaluate(&mut rng);
    }
    debug!("using supplied star {}", star.stellar_class());

    run(&config, star, seed, &mut rng, AccretionMode::Sequential)
}

/// Generates a reproducible system from a name: the name hashes to a UUID
/// whose leading 64 bits seed the run, so the same name always produces the
/// same system.
pub fn generate_named(config: &GeneratorConfig, name: &str) -> SolarSystem {
    let id = Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes());
    let mut config = config.normalized();
    config.seed = id.as_u64_pair().0;

    let mut system = generate(&config);
    if system.star.name().is_empty() {
        system.star.set_name(name);
    }
    system
}

enum AccretionMode {
    Sequential,
    Batch,
}

fn run(
    config: &GeneratorConfig,
    star: Star,
    seed: u64,
    rng: &mut ChaChaRng,
    mode: AccretionMode,
) -> SolarSystem {
    let zone = star.protoplanet_zone();
    let params = AccretionParams {
        stellar_mass: star.mass(),
        stellar_luminosity: star.luminosity(),
        dust_zone: star.dust_zone(),
        protoplanet_zone: zone,
        cloud_eccentricity: config.cloud_eccentricity,
        dust_density: config.dust_density,
        seed_mass: config.protoplanet_seed_mass,
        verbose: config.verbose_logging,
    };
    let mut engine = AccretionEngine::new(params);

    // Explicit seeds take priority over the Bode progression.
    let seeds = if !config.protoplanet_seeds.is_empty() {
        debug!("{} explicit protoplanet seeds supplied", config.protoplanet_seeds.len());
        config.protoplanet_seeds.clone()
    } else if config.generate_bode_seeds {
        bode_seeds(rng, star.ecosphere(), zone)
    } else {
        Vec::new()
    };

    match mode {
        AccretionMode::Sequential => {
            for s in &seeds {
                if !(zone.0..=zone.1).contains(&s.semi_major_axis) {
                    debug!(
                        "skipping protoplanet seed at {:.3} AU: outside the protoplanet zone",
                        s.semi_major_axis
                    );
                    continue;
                }
                if !engine.dust_remains() {
                    break;
                }

                let eccentricity = usable_eccentricity(s.eccentricity, rng);
                let mut protoplanet = Protoplanet::seed(
                    s.semi_major_axis,
                    eccentricity,
                    config.protoplanet_seed_mass,
                );
                engine.accrete(&mut protoplanet);
            }
        }
        AccretionMode::Batch => {
            let mut protoplanets: Vec<Protoplanet> = Vec::new();
            for s in &seeds {
                if !(zone.0..=zone.1).contains(&s.semi_major_axis) {
                    debug!(
                        "skipping protoplanet seed at {:.3} AU: outside the protoplanet zone",
                        s.semi_major_axis
                    );
                    continue;
                }
                let eccentricity = usable_eccentricity(s.eccentricity, rng);
                protoplanets.push(Protoplanet::seed(
                    s.semi_major_axis,
                    eccentricity,
                    config.protoplanet_seed_mass,
                ));
            }
            for _ in 0..config.protoplanet_count {
                let s = random_seed(rng, zone);
                protoplanets.push(Protoplanet::seed(
                    s.semi_major_axis,
                    s.eccentricity,
                    config.protoplanet_seed_mass,
                ));
            }

            // Everyone sweeps one step per cycle until nobody is growing.
            let mut cycles = 0u32;
            loop {
                let mut any_accrued = false;
                for protoplanet in &mut protoplanets {
                    if protoplanet.active && engine.accrete_step(protoplanet) {
                        any_accrued = true;
                    }
                }
                cycles += 1;
                if !any_accrued {
                    break;
                }
            }
            debug!("batch accretion settled after {cycles} cycles");

            for protoplanet in protoplanets {
                if protoplanet.mass > config.protoplanet_seed_mass {
                    engine.submit(protoplanet);
                }
            }
        }
    }

    // Sweep whatever dust the seeds left behind.
    let mut remaining_budget = MAX_RANDOM_PROTOPLANETS;
    while engine.dust_remains() && remaining_budget > 0 {
        let s = random_seed(rng, zone);
        let mut protoplanet =
            Protoplanet::seed(s.semi_major_axis, s.eccentricity, config.protoplanet_seed_mass);
        engine.accrete(&mut protoplanet);
        remaining_budget -= 1;
    }
    if remaining_budget == 0 {
        warn!(
            "protoplanet budget of {} exhausted with dust remaining",
            MAX_RANDOM_PROTOPLANETS
        );
    }

    let protoplanet_count = engine.protoplanet_count();
    let options = EvaluationOptions {
        compute_gases: config.compute_gases,
        random_axial_tilt: config.random_axial_tilt,
        density_variation: config.density_variation,
    };

    let mut planets: Vec<Planet> = engine
        .into_planetesimals()
        .into_iter()
        .map(|p| Planet::from_accretion(p.sma, p.eccentricity, p.dust_mass, p.gas_mass))
        .collect();

    for planet in &mut planets {
        planet.inclination = fold_inclination(random_near(
            rng,
            config.inclination_mean,
            3.0 * config.inclination_std_dev,
        ));
        planet.longitude_ascending_node = random_two_pi(rng);
        planet.argument_of_periapsis = random_two_pi(rng);
        planet.mean_anomaly = random_two_pi(rng);

        planet.evaluate(&star, &options, rng);
    }

    SolarSystem {
        star,
        planets,
        seed,
        protoplanet_count,
    }
}

/// Builds and evaluates the central star from the configuration.
fn make_star(config: &GeneratorConfig, rng: &mut ChaChaRng) -> Star {
    let mass = if config.generate_random_star || config.stellar_mass <= 0.0 {
        rng.random_range(0.6..1.3)
    } else {
        config.stellar_mass
    };
    let mass = mass.clamp(MINIMUM_STELLAR_MASS, MAXIMUM_STELLAR_MASS);

    let (class, subtype) = star_type_for_mass(mass);
    let mut star = Star::new(class, subtype);
    star.evaluate(rng);

    debug!("generated {} star ({:.2} solar masses)", star.stellar_class(), star.mass());
    star
}

/// An explicit seed's eccentricity, or a random one when it is out of range.
fn usable_eccentricity(eccentricity: f64, rng: &mut ChaChaRng) -> f64 {
    if (0.0..=0.9).contains(&eccentricity) {
        eccentricity
    } else {
        random_eccentricity(rng)
    }
}

/// Folds an inclination draw into [0, 180) degrees.
fn fold_inclination(inclination: f64) -> f64 {
    let mut folded = inclination.abs();
    while folded >= 180.0 {
        folded -= 180.0;
    }
    folded
}

/// Resolves the configured seed; zero derives one from the wall clock,
/// mixed through SplitMix64 so adjacent timestamps land far apart.
fn resolve_seed(seed: u64) -> u64 {
    if seed != 0 {
        return seed;
    }

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1);

    let mut z = now.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^= z >> 31;
    if z == 0 {
        z = 1;
    }
    z
}
