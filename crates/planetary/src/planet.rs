use serde::{Deserialize, Serialize};
use units::{Length, Mass};

use stellar::OrbitalZone;

use crate::atmosphere::AtmosphereComponent;
use crate::planet_type::PlanetType;

/// One body orbiting the central star.
///
/// Accretion fills in the orbit and the dust/gas mass decomposition; the
/// one-shot [`Planet::evaluate`](crate::evaluation) pass derives everything
/// else and freezes the record. Angles are radians except where noted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    // --- Keplerian orbital elements
    /// Semi-major axis of the orbit.
    pub semi_major_axis: Length,
    /// Eccentricity of the orbit, [0, 1).
    pub eccentricity: f64,
    /// Inclination above the ecliptic, in degrees.
    pub inclination: f64,
    /// Right ascension of the ascending node, [0, 2pi).
    pub longitude_ascending_node: f64,
    /// Argument of periapsis, [0, 2pi).
    pub argument_of_periapsis: f64,
    /// Mean anomaly at epoch, [0, 2pi).
    pub mean_anomaly: f64,

    // --- Mass decomposition
    /// Total mass.
    pub mass: Mass,
    /// Rocky portion of the mass.
    pub dust_mass: Mass,
    /// Volatile (H2/He) portion of the mass.
    pub gas_mass: Mass,

    // --- Derived orbit
    /// Orbital period, in Earth days.
    pub orbital_period_days: f64,
    /// Minimum orbital distance.
    pub periapsis: Length,
    /// Maximum orbital distance.
    pub apoapsis: Length,
    /// Margot's planetary discriminant; above 1.0 the body has cleared its
    /// neighborhood.
    pub orbital_dominance: f64,
    /// Position relative to the habitable zone and snow line.
    pub orbital_zone: OrbitalZone,

    // --- Rotation
    /// Axial tilt, in degrees.
    pub axial_tilt: f64,
    /// Length of the local day, in hours.
    pub day_length_hours: f64,
    /// True if the day is tidally locked into a spin-orbit resonance.
    pub resonant: bool,
    /// Eccentricity-derived resonance factor when `resonant`; zero
    /// otherwise.
    pub spin_resonance_factor: f64,

    // --- Bulk physical properties
    /// Body radius.
    pub radius: Length,
    /// Bulk density, in g/cc.
    pub density: f64,
    /// Escape velocity, in m/s.
    pub escape_velocity: f64,
    /// Surface gravitational acceleration, in m/s^2.
    pub surface_acceleration: f64,

    // --- Atmosphere and volatiles
    /// RMS velocity of molecular nitrogen at the exosphere, in m/s.
    pub rms_velocity: f64,
    /// Lightest molecular weight retained over the star's age.
    pub min_molecular_weight: f64,
    /// Is the atmosphere in a runaway greenhouse state?
    pub runaway_greenhouse: bool,
    /// Unitless volatile inventory driving pressure and hydrosphere.
    pub volatile_gas_inventory: f64,
    /// Atmospheric pressure at the surface, in millibars.
    pub surface_pressure: f64,
    /// Boiling point of water at the surface, in Kelvin.
    pub boiling_point: f64,
    /// Major atmospheric components, ordered by decreasing fraction.
    pub atmosphere: Vec<AtmosphereComponent>,

    // --- Temperatures
    /// Mean planetary albedo.
    pub albedo: f64,
    /// Exosphere temperature, in Kelvin.
    pub exosphere_temperature: f64,
    /// Mean surface temperature, in Kelvin.
    pub surface_temperature: f64,
    /// Daytime temperature, in Kelvin.
    pub high_temperature: f64,
    /// Nighttime temperature, in Kelvin.
    pub low_temperature: f64,
    /// Summer/day extreme, in Kelvin.
    pub max_temperature: f64,
    /// Winter/night extreme, in Kelvin.
    pub min_temperature: f64,

    // --- Surface coverage
    /// Fraction of the surface covered by liquid water, [0, 1].
    pub hydrosphere: f64,
    /// Fraction of the surface obscured by cloud, [0, 1].
    pub cloud_coverage: f64,
    /// Fraction of the surface covered by ice, [0, 1].
    pub ice_coverage: f64,

    /// Earth Similarity Index, [0, 1]; formulation from the Planetary
    /// Habitability Laboratory (UPR Arecibo).
    pub earth_similarity_index: f64,
    /// Final classification.
    pub planet_type: PlanetType,

    pub(crate) evaluated: bool,
}

impl Planet {
    /// Creates an unevaluated planet from accretion output.
    ///
    /// # Arguments
    /// * `sma` - Semi-major axis, in AU.
    /// * `eccentricity` - Orbital eccentricity, [0, 1).
    /// * `dust_mass` - Rocky mass component, in solar masses.
    /// * `gas_mass` - Volatile mass component, in solar masses.
    pub fn from_accretion(sma: f64, eccentricity: f64, dust_mass: f64, gas_mass: f64) -> Self {
        Planet {
            semi_major_axis: Length::from_au(sma),
            eccentricity,
            inclination: 0.0,
            longitude_ascending_node: 0.0,
            argument_of_periapsis: 0.0,
            mean_anomaly: 0.0,
            mass: Mass::from_solar_masses(dust_mass + gas_mass),
            dust_mass: Mass::from_solar_masses(dust_mass),
            gas_mass: Mass::from_solar_masses(gas_mass),
            orbital_period_days: 0.0,
            periapsis: Length::from_au(0.0),
            apoapsis: Length::from_au(0.0),
            orbital_dominance: 0.0,
            orbital_zone: OrbitalZone::Inner,
            axial_tilt: 0.0,
            day_length_hours: 0.0,
            resonant: false,
            spin_resonance_factor: 0.0,
            radius: Length::from_au(0.0),
            density: 0.0,
            escape_velocity: 0.0,
            surface_acceleration: 0.0,
            rms_velocity: 0.0,
            min_molecular_weight: 0.0,
            runaway_greenhouse: false,
            volatile_gas_inventory: 0.0,
            surface_pressure: 0.0,
            boiling_point: 0.0,
            atmosphere: Vec::new(),
            albedo: 0.0,
            exosphere_temperature: 0.0,
            surface_temperature: 0.0,
            high_temperature: 0.0,
            low_temperature: 0.0,
            max_temperature: 0.0,
            min_temperature: 0.0,
            hydrosphere: 0.0,
            cloud_coverage: 0.0,
            ice_coverage: 0.0,
            earth_similarity_index: 0.0,
            planet_type: PlanetType::Unknown,
            evaluated: false,
        }
    }

    /// Whether the one-shot evaluation has run.
    pub fn is_evaluated(&self) -> bool {
        self.evaluated
    }

    /// Whether the body ended up as one of the gaseous types.
    pub fn is_gaseous(&self) -> bool {
        self.planet_type.is_gaseous()
    }

    /// Surface gravity in gees.
    pub fn surface_gravity(&self) -> f64 {
        self.surface_acceleration * equations::constants::ACCELERATION_IN_GEES
    }
}
