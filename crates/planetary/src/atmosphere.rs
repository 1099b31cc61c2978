//! Atmospheric gas species and their physical properties.
//!
//! The species table follows Burrows 2006, with maximum inspired partial
//! pressures imported from Dole 1969. Abundances are solar-relative; the
//! reactivity column feeds the per-species retention scaling in the
//! atmosphere synthesis step.

use std::fmt;

use serde::{Deserialize, Serialize};

use equations::constants::MB_PER_MMHG;

/// Gases of interest in planetary atmospheres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gas {
    Hydrogen,
    Helium,
    Nitrogen,
    Oxygen,
    Neon,
    Argon,
    Krypton,
    Xenon,
    Ammonia,
    Water,
    CarbonDioxide,
    Ozone,
    Methane,
}

/// Physical properties of one gas species.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasProperties {
    /// Atomic/molecular weight.
    pub weight: f64,
    /// Melting point, in Kelvin.
    pub melting_point: f64,
    /// Boiling point, in Kelvin.
    pub boiling_point: f64,
    /// Density, in g/cc.
    pub density: f64,
    /// Abundance relative to Earth.
    pub abundance_earth: f64,
    /// Abundance relative to the Sun.
    pub abundance_solar: f64,
    /// Reactivity term for retention scaling.
    pub reactivity: f64,
    /// Maximum inspired partial pressure before toxicity, in mb.
    pub max_ipp: f64,
}

impl Gas {
    /// Every species, in table order.
    pub const ALL: [Gas; 13] = [
        Gas::Hydrogen,
        Gas::Helium,
        Gas::Nitrogen,
        Gas::Oxygen,
        Gas::Neon,
        Gas::Argon,
        Gas::Krypton,
        Gas::Xenon,
        Gas::Ammonia,
        Gas::Water,
        Gas::CarbonDioxide,
        Gas::Ozone,
        Gas::Methane,
    ];

    /// The species' physical properties.
    pub fn properties(self) -> GasProperties {
        match self {
            Gas::Hydrogen => GasProperties {
                weight: 1.0079,
                melting_point: 14.06,
                boiling_point: 20.40,
                density: 8.99e-5,
                abundance_earth: 0.001_258_93,
                abundance_solar: 27_925.4,
                reactivity: 1.0,
                max_ipp: 0.0,
            },
            Gas::Helium => GasProperties {
                weight: 4.0026,
                melting_point: 3.46,
                boiling_point: 4.20,
                density: 0.000_178_7,
                abundance_earth: 7.943_28e-9,
                abundance_solar: 2722.7,
                reactivity: 0.0,
                max_ipp: 61_000.0 * MB_PER_MMHG,
            },
            Gas::Nitrogen => GasProperties {
                weight: 14.0067,
                melting_point: 63.34,
                boiling_point: 77.40,
                density: 0.001_250_6,
                abundance_earth: 1.995_26e-5,
                abundance_solar: 3.133_29,
                reactivity: 0.0,
                max_ipp: 2330.0 * MB_PER_MMHG,
            },
            Gas::Oxygen => GasProperties {
                weight: 15.9994,
                melting_point: 54.80,
                boiling_point: 90.20,
                density: 0.001_429,
                abundance_earth: 0.501_187,
                abundance_solar: 23.8232,
                reactivity: 10.0,
                max_ipp: 400.0 * MB_PER_MMHG,
            },
            Gas::Neon => GasProperties {
                weight: 20.17,
                melting_point: 24.53,
                boiling_point: 27.10,
                density: 0.0009,
                abundance_earth: 5.011_87e-9,
                abundance_solar: 3.4435e-5,
                reactivity: 0.0,
                max_ipp: 3900.0 * MB_PER_MMHG,
            },
            Gas::Argon => GasProperties {
                weight: 39.948,
                melting_point: 84.00,
                boiling_point: 87.30,
                density: 0.001_782_4,
                abundance_earth: 3.162_28e-6,
                abundance_solar: 0.100_925,
                reactivity: 0.0,
                max_ipp: 1220.0 * MB_PER_MMHG,
            },
            Gas::Krypton => GasProperties {
                weight: 83.8,
                melting_point: 116.60,
                boiling_point: 119.70,
                density: 0.003_708,
                abundance_earth: 1e-10,
                abundance_solar: 4.4978e-5,
                reactivity: 0.0,
                max_ipp: 350.0 * MB_PER_MMHG,
            },
            Gas::Xenon => GasProperties {
                weight: 131.3,
                melting_point: 161.30,
                boiling_point: 165.00,
                density: 0.005_88,
                abundance_earth: 3.162_28e-11,
                abundance_solar: 4.698_94e-6,
                reactivity: 0.0,
                max_ipp: 160.0 * MB_PER_MMHG,
            },
            Gas::Ammonia => GasProperties {
                weight: 17.0,
                melting_point: 195.46,
                boiling_point: 239.66,
                density: 0.001,
                abundance_earth: 0.002,
                abundance_solar: 0.0001,
                reactivity: 1.0,
                max_ipp: 100.0 * MB_PER_MMHG,
            },
            Gas::Water => GasProperties {
                weight: 18.0,
                melting_point: 273.16,
                boiling_point: 373.16,
                density: 1.0,
                abundance_earth: 0.03,
                abundance_solar: 0.001,
                reactivity: 0.0,
                max_ipp: 0.0,
            },
            Gas::CarbonDioxide => GasProperties {
                weight: 44.0,
                melting_point: 194.66,
                boiling_point: 194.66,
                density: 0.001,
                abundance_earth: 0.01,
                abundance_solar: 0.0005,
                reactivity: 0.0,
                max_ipp: 7.0 * MB_PER_MMHG,
            },
            Gas::Ozone => GasProperties {
                weight: 48.0,
                melting_point: 80.16,
                boiling_point: 161.16,
                density: 0.001,
                abundance_earth: 0.001,
                abundance_solar: 1e-6,
                reactivity: 2.0,
                max_ipp: 0.10 * MB_PER_MMHG,
            },
            Gas::Methane => GasProperties {
                weight: 16.0,
                melting_point: 90.16,
                boiling_point: 109.16,
                density: 0.010,
                abundance_earth: 0.005,
                abundance_solar: 0.0001,
                reactivity: 1.0,
                max_ipp: 50_000.0 * MB_PER_MMHG,
            },
        }
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Gas::Hydrogen => "Hydrogen",
            Gas::Helium => "Helium",
            Gas::Nitrogen => "Nitrogen",
            Gas::Oxygen => "Oxygen",
            Gas::Neon => "Neon",
            Gas::Argon => "Argon",
            Gas::Krypton => "Krypton",
            Gas::Xenon => "Xenon",
            Gas::Ammonia => "Ammonia",
            Gas::Water => "Water Vapor",
            Gas::CarbonDioxide => "Carbon Dioxide",
            Gas::Ozone => "Ozone",
            Gas::Methane => "Methane",
        }
    }
}

impl fmt::Display for Gas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One entry of a planet's synthesized atmosphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtmosphereComponent {
    /// The gas species.
    pub gas: Gas,
    /// Fraction of the atmosphere made up of this species, [0, 1].
    pub fraction: f64,
}
