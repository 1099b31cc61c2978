use serde::{Deserialize, Serialize};

use protodisk::ProtoplanetSeed;

/// Mean eccentricity of the nebular dust cloud.
const DEFAULT_CLOUD_ECCENTRICITY: f64 = 0.2;

/// A in Dole's dust density equation.
const DEFAULT_DUST_DENSITY: f64 = 2.0e-3;

/// Initial mass of every protoplanet seed, in solar masses.
const DEFAULT_PROTOPLANET_SEED_MASS: f64 = 1.0e-15;

/// Configuration knobs for a generation run.
///
/// Instantiate with [`GeneratorConfig::default`] and override what you need;
/// out-of-range values are clamped when a run starts rather than rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// RNG seed. Zero means derive one from the current time.
    pub seed: u64,

    /// Mass of the central star, in solar masses. Zero or negative triggers
    /// a random mass in [0.6, 1.3]; the result is clamped to the tabulated
    /// main-sequence range [0.57, 2.18]. Masses hotter than roughly 1.3 (an
    /// F5V) are supported but accrete poorly.
    pub stellar_mass: f64,

    /// Mean eccentricity of dust in the nebula. Clamped to [0, 0.9].
    pub cloud_eccentricity: f64,

    /// Base density of the dust cloud.
    pub dust_density: f64,

    /// Initial mass of each protoplanet seed, in solar masses.
    pub protoplanet_seed_mass: f64,

    /// Random variation applied to derived planetary radii, as a ratio.
    /// Clamped to [0, 0.1].
    pub density_variation: f64,

    /// Mean orbital inclination, in degrees. Folded into [0, 180).
    pub inclination_mean: f64,

    /// Standard deviation of orbital inclination, in degrees.
    pub inclination_std_dev: f64,

    /// Number of random protoplanets injected up front by the batch
    /// accretion driver.
    pub protoplanet_count: u32,

    /// Seed the disk along a Blagg/Bode progression before sweeping the
    /// rest at random. Ignored when `protoplanet_seeds` is non-empty.
    pub generate_bode_seeds: bool,

    /// Recognized but inert: moon generation is not implemented.
    pub generate_moons: bool,

    /// Recognized but inert: moon capture on collision is not implemented.
    pub generate_moons_on_collision: bool,

    /// Pick the star at random even when `stellar_mass` is positive.
    pub generate_random_star: bool,

    /// Emit per-step accretion narration at debug level.
    pub verbose_logging: bool,

    /// Synthesize atmospheric compositions for qualifying rocky planets.
    pub compute_gases: bool,

    /// Randomize axial tilts; when false every body gets zero tilt.
    pub random_axial_tilt: bool,

    /// Explicit protoplanet orbits, applied before any random seeding.
    /// Takes priority over `generate_bode_seeds`. Seeds outside the star's
    /// protoplanet zone are skipped; eccentricities outside [0, 0.9] are
    /// randomized.
    pub protoplanet_seeds: Vec<ProtoplanetSeed>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            seed: 0,
            stellar_mass: 0.0,
            cloud_eccentricity: DEFAULT_CLOUD_ECCENTRICITY,
            dust_density: DEFAULT_DUST_DENSITY,
            protoplanet_seed_mass: DEFAULT_PROTOPLANET_SEED_MASS,
            density_variation: 0.025,
            inclination_mean: 5.57,
            inclination_std_dev: 1.23,
            protoplanet_count: 20,
            generate_bode_seeds: false,
            generate_moons: false,
            generate_moons_on_collision: false,
            generate_random_star: false,
            verbose_logging: false,
            compute_gases: false,
            random_axial_tilt: false,
            protoplanet_seeds: Vec::new(),
        }
    }
}

impl GeneratorConfig {
    /// Returns a copy with every knob clamped to its valid range.
    pub fn normalized(&self) -> GeneratorConfig {
        let mut config = self.clone();

        config.cloud_eccentricity = config.cloud_eccentricity.clamp(0.0, 0.9);
        config.dust_density = config.dust_density.max(0.0);
        config.protoplanet_seed_mass = config.protoplanet_seed_mass.max(0.0);
        config.density_variation = config.density_variation.clamp(0.0, 0.1);

        config.inclination_mean = config.inclination_mean.abs() % 180.0;
        config.inclination_std_dev = config.inclination_std_dev.abs();

        config
    }
}
