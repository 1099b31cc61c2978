//! Seeding strategies for the accretion engine.
//!
//! Three interchangeable sources of candidate protoplanets feed the same
//! engine: caller-supplied explicit orbits, a Bode's-Law-derived sequence
//! biased toward the habitable zone, and pure random placement (the
//! fallback loop the generator runs until the disk is dry).

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::sampling::{random_eccentricity, random_near, random_two_pi};

/// Blagg 1913's refinement of the Bode progression ratio (originally 2).
const BODE_PROGRESSION: f64 = 1.7275;

/// A in the Blagg formulation, fit to our solar system.
const BLAGG_A: f64 = 0.4162;

/// B in the Blagg formulation, fit to our solar system.
const BLAGG_B: f64 = 2.025;

/// beta in the Blagg formulation (56.6 degrees).
const BLAGG_BETA: f64 = 0.9879;

/// A candidate protoplanet orbit.
///
/// An eccentricity outside [0, 0.9] means "pick one at random" when the
/// seed is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtoplanetSeed {
    /// Semi-major axis, in AU.
    pub semi_major_axis: f64,
    /// Eccentricity, [0, 1); out-of-range values are randomized on use.
    pub eccentricity: f64,
}

/// One term of the Blagg/Bode progression.
///
/// `SMA(n) = A * (B + f(alpha + n*beta)) * 1.7275^n`, with the periodic
/// correction `f(theta) = 0.249 + 0.86 * (cos(theta) / (3 - cos(2*theta))
/// + 1 / (6 - 4*cos(theta - pi/6)))`.
fn bode_sequence(n: i32, a: f64, b: f64, alpha: f64, beta: f64) -> f64 {
    let theta = alpha + f64::from(n) * beta;
    let f = 0.249
        + 0.86
            * (theta.cos() / (3.0 - (2.0 * theta).cos())
                + 1.0 / (6.0 - 4.0 * (theta - std::f64::consts::FRAC_PI_6).cos()));

    a * (b + f) * BODE_PROGRESSION.powi(n)
}

/// Generates protoplanet seeds along a randomized Blagg/Bode progression.
///
/// A is scaled by the star's ecosphere radius so the n = 0 seed lands in or
/// near the habitable zone; it is always first in the returned vector. The
/// progression is walked inward and outward until it leaves the protoplanet
/// zone, and every seed after the first is shuffled so systems do not all
/// accrete in the same order.
///
/// # Arguments
/// * `rng` - The generation run's random stream.
/// * `ecosphere` - The star's ideal Earth-like distance, in AU.
/// * `protoplanet_zone` - Bounds of protoplanet formation, in AU.
pub fn bode_seeds(
    rng: &mut impl Rng,
    ecosphere: f64,
    protoplanet_zone: (f64, f64),
) -> Vec<ProtoplanetSeed> {
    let a = BLAGG_A * ecosphere * random_near(rng, 1.0, 0.04);
    let b = BLAGG_B * random_near(rng, 1.0, 0.04);
    let alpha = random_two_pi(rng);
    let beta = BLAGG_BETA;

    let mut seeds = vec![ProtoplanetSeed {
        semi_major_axis: bode_sequence(0, a, b, alpha, beta),
        eccentricity: random_eccentricity(rng),
    }];

    let mut n = 1;
    loop {
        let mut added = false;

        let inward = bode_sequence(-n, a, b, alpha, beta);
        if inward >= protoplanet_zone.0 {
            seeds.push(ProtoplanetSeed {
                semi_major_axis: inward,
                eccentricity: random_eccentricity(rng),
            });
            added = true;
        }

        let outward = bode_sequence(n, a, b, alpha, beta);
        if outward <= protoplanet_zone.1 {
            seeds.push(ProtoplanetSeed {
                semi_major_axis: outward,
                eccentricity: random_eccentricity(rng),
            });
            added = true;
        }

        if !added {
            break;
        }
        n += 1;
    }

    debug!("generated {} Bode seeds", seeds.len());

    // Shuffle everything but the habitable-zone seed.
    let mut i = 1;
    while i + 1 < seeds.len() {
        let other = rng.random_range(1..seeds.len());
        if i != other {
            seeds.swap(i, other);
        }
        i += 1;
    }

    seeds
}

/// A random protoplanet orbit within the protoplanet zone.
pub fn random_seed(rng: &mut impl Rng, protoplanet_zone: (f64, f64)) -> ProtoplanetSeed {
    ProtoplanetSeed {
        semi_major_axis: rng.random_range(protoplanet_zone.0..protoplanet_zone.1),
        eccentricity: random_eccentricity(rng),
    }
}
