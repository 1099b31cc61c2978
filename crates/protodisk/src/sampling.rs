//! Random draws used while seeding the disk.

use rand::Rng;

/// Exponent from Dole's eccentricity distribution.
const ECCENTRICITY_COEFFICIENT: f64 = 0.077;

/// Returns a random orbital eccentricity, roughly 0.00 to 0.20.
///
/// Keeping the uniform draw's lower bound above zero bounds the result away
/// from 1.0.
pub fn random_eccentricity(rng: &mut impl Rng) -> f64 {
    1.0 - rng.random_range(1.0 / 16.0..1.0f64).powf(ECCENTRICITY_COEFFICIENT)
}

/// Returns a Gaussian draw near `mean`; 97% of results land within
/// `three_sigma` of it.
pub fn random_near(rng: &mut impl Rng, mean: f64, three_sigma: f64) -> f64 {
    mean + (three_sigma / 3.0) * gaussian(rng)
}

/// Uniform draw in `[(1 - range) * center, (1 + range) * center]`.
pub fn random_about(rng: &mut impl Rng, center: f64, range: f64) -> f64 {
    center * rng.random_range(1.0 - range..1.0 + range)
}

/// Uniform draw of an angle in [0, 2pi).
pub fn random_two_pi(rng: &mut impl Rng) -> f64 {
    rng.random_range(0.0..std::f64::consts::TAU)
}

/// Standard normal deviate via Box-Muller.
fn gaussian(rng: &mut impl Rng) -> f64 {
    let u1: f64 = rng.random();
    let u2: f64 = rng.random();
    (-2.0 * (1.0 - u1).ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
}
