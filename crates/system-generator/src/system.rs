use serde::{Deserialize, Serialize};

use planetary::Planet;
use stellar::Star;

/// A fully generated and evaluated solar system.
///
/// Planets are ordered innermost first. The seed recorded here is the one
/// actually used; when the configuration asked for a time-derived seed,
/// this is the value to replay the system with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolarSystem {
    /// The evaluated central star.
    pub star: Star,
    /// Every planet, ordered by increasing semi-major axis.
    pub planets: Vec<Planet>,
    /// The RNG seed the run used.
    pub seed: u64,
    /// How many protoplanets were consumed building the system.
    pub protoplanet_count: u32,
}

impl SolarSystem {
    /// Number of planets in the system.
    pub fn len(&self) -> usize {
        self.planets.len()
    }

    /// Whether the system has no planets.
    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }

    /// Planets whose orbits lie within the star's habitable zone.
    pub fn habitable_zone_planets(&self) -> impl Iterator<Item = &Planet> {
        let (inner, outer) = self.star.habitable_zone();
        self.planets.iter().filter(move |p| {
            let sma = p.semi_major_axis.to_au();
            sma >= inner && sma <= outer
        })
    }
}
