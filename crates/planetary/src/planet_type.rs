use std::fmt;

use serde::{Deserialize, Serialize};

/// Final classification of a generated body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanetType {
    /// Not yet evaluated.
    Unknown,

    // --- Rocky types
    /// Catch-all for non-gaseous bodies without a more specific type.
    Rocky,
    /// Too little mass to form a single body; boulder-to-mountain debris.
    AsteroidBelt,
    /// Too small to establish orbital dominance.
    DwarfPlanet,
    /// A cold terrestrial body dominated by surface ices.
    IcePlanet,
    /// A rocky planet with an atmosphere and a liquid hydrosphere.
    Terrestrial,
    /// A terrestrial world with near-total water coverage.
    Ocean,

    // --- Gaseous types
    /// Interim classification for a body with a substantial volatile
    /// component; resolved into one of the giant types.
    Gaseous,
    /// The smaller gaseous planets (Neptunian): roughly 2 Earth masses up
    /// to 0.41 Jovian masses.
    IceGiant,
    /// Hydrogen/helium giants from 0.41 Jovian masses up.
    GasGiant,
    /// Giants too heavy for a planet, too light for fusion: 13 to 80 Jovian
    /// masses.
    BrownDwarf,
}

impl PlanetType {
    /// Whether this is one of the gaseous classifications.
    pub fn is_gaseous(&self) -> bool {
        matches!(
            self,
            PlanetType::Gaseous
                | PlanetType::IceGiant
                | PlanetType::GasGiant
                | PlanetType::BrownDwarf
        )
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            PlanetType::Unknown => "Unknown",
            PlanetType::Rocky => "Rocky Planet",
            PlanetType::AsteroidBelt => "Asteroid Belt",
            PlanetType::DwarfPlanet => "Dwarf Planet",
            PlanetType::IcePlanet => "Ice Planet",
            PlanetType::Terrestrial => "Terrestrial Planet",
            PlanetType::Ocean => "Ocean Planet",
            PlanetType::Gaseous => "Gaseous",
            PlanetType::IceGiant => "Ice Giant",
            PlanetType::GasGiant => "Gas Giant",
            PlanetType::BrownDwarf => "Brown Dwarf",
        }
    }
}

impl fmt::Display for PlanetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
