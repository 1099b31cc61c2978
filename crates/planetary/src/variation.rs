//! Random variation helpers for planetary evaluation.

use rand::Rng;

/// Earth's axial tilt, in degrees. Median for randomized tilts.
pub const EARTH_AXIAL_TILT: f64 = 23.4;

/// Gaussian draw near `mean`; 97% of results land within `three_sigma`.
pub fn random_near(rng: &mut impl Rng, mean: f64, three_sigma: f64) -> f64 {
    mean + (three_sigma / 3.0) * gaussian(rng)
}

/// Uniform draw in `[(1 - range) * center, (1 + range) * center]`.
///
/// A non-positive range returns `center` without consuming a draw.
pub fn random_about(rng: &mut impl Rng, center: f64, range: f64) -> f64 {
    if range <= 0.0 {
        return center;
    }
    center * rng.random_range(1.0 - range..1.0 + range)
}

/// A random axial tilt for a body at `sma`, folded into [0, 180] degrees.
///
/// Tilt grows weakly with orbital distance; the variation is centered on
/// `median_tilt`.
pub fn random_tilt(rng: &mut impl Rng, sma: f64, median_tilt: f64) -> f64 {
    let mut tilt = sma.powf(0.2) * random_about(rng, median_tilt, 0.4);
    tilt %= 360.0;
    if tilt > 180.0 {
        tilt = 360.0 - tilt;
    }

    tilt
}

/// Standard normal deviate via Box-Muller.
fn gaussian(rng: &mut impl Rng) -> f64 {
    let u1: f64 = rng.random();
    let u2: f64 = rng.random();
    (-2.0 * (1.0 - u1).ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
}
