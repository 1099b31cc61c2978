//! Physical constants and conversion factors shared by the generator crates.
//!
//! Reference values follow the Accrete/stargen lineage rather than CODATA;
//! several of them are empirical tunings the downstream equations depend on,
//! so they are preserved exactly.

/// The gravity constant, in dyne cm^2 / g^2.
pub const GRAVITY_CONSTANT: f64 = 6.672e-8;

/// The ideal gas constant, in J / (kmol K).
pub const MOLAR_GAS_CONSTANT: f64 = 8314.41;

/// Mass of Sol, in grams.
pub const SOLAR_MASS_IN_GRAMS: f64 = 1.989e33;

/// Earth masses per solar mass.
pub const SOLAR_MASS_TO_EARTH_MASS: f64 = 332_775.64;

/// Jovian masses per solar mass.
pub const SOLAR_MASS_TO_JOVIAN_MASS: f64 = 1047.0;

/// Mass of the Earth, in grams.
pub const EARTH_MASS_IN_GRAMS: f64 = 5.977e27;

/// Radius of the Earth, in km.
pub const EARTH_RADIUS_KM: f64 = 6378.0;

/// Density of the Earth, in g/cc.
pub const EARTH_DENSITY: f64 = 5.52;

/// Escape velocity of the Earth, in m/s.
pub const EARTH_ESCAPE_VELOCITY: f64 = 11_186.0;

/// Mean surface pressure of Earth's atmosphere, in millibars.
pub const EARTH_SURFACE_PRESSURE_MB: f64 = 1013.25;

/// Partial pressure of oxygen at sea level, in millibars.
pub const EARTH_PARTIAL_PRESSURE_OXYGEN: f64 = EARTH_SURFACE_PRESSURE_MB * 0.2095;

/// Effective (black-body) temperature of the Earth, in Kelvin.
///
/// Fogg 1985 used 255; Burdick's sources settled on 250.
pub const EARTH_EFFECTIVE_TEMPERATURE: f64 = 250.0;

/// Temperature of Earth's exosphere, in Kelvin.
pub const EARTH_EXOSPHERE_TEMPERATURE: f64 = 1273.0;

/// Mean surface temperature of the Earth, in Kelvin.
pub const EARTH_AVERAGE_TEMPERATURE: f64 = 273.15 + 14.0;

/// Fraction of Earth's surface covered by liquid water.
pub const EARTH_HYDROSPHERE: f64 = 0.708;

/// Mass of water per square kilometer of hydrosphere, in grams.
pub const EARTH_WATER_MASS_PER_KM2: f64 = 3.83e15;

/// The freezing point of water at 1 atm, in Kelvin.
pub const FREEZING_POINT_WATER: f64 = 273.15;

/// Ratio of escape velocity to RMS velocity required to retain a gas.
///
/// Dole's original threshold; stargen later moved to 6.0.
pub const GAS_RETENTION_THRESHOLD: f64 = 5.0;

/// Convert mb -> atm.
pub const ATM_PER_MB: f64 = 1.0 / EARTH_SURFACE_PRESSURE_MB;

/// Convert mb -> bar.
pub const BAR_PER_MILLIBAR: f64 = 0.001;

/// Convert mmHg -> mb.
pub const MB_PER_MMHG: f64 = EARTH_SURFACE_PRESSURE_MB / 760.0;

/// Convert km -> AU.
pub const AU_PER_KM: f64 = 6.684_587_122_268_445e-9;

/// Convert AU -> km.
pub const KM_PER_AU: f64 = 1.0 / AU_PER_KM;

/// Convert km -> cm.
pub const CM_PER_KM: f64 = 1000.0 * 100.0;

/// Convert cm -> km.
pub const KM_PER_CM: f64 = 1.0 / CM_PER_KM;

/// Convert m -> cm.
pub const CM_PER_M: f64 = 100.0;

/// Convert cm -> m.
pub const M_PER_CM: f64 = 0.01;

/// Convert m/s^2 -> gee.
pub const ACCELERATION_IN_GEES: f64 = 1.0 / 9.807;

/// Earth years per Earth day.
pub const DAYS_PER_YEAR: f64 = 365.256;

/// Hours per sidereal Earth day.
pub const HOURS_PER_DAY: f64 = 23.934_469_6;

/// Convert hours -> seconds.
pub const SECONDS_PER_HOUR: f64 = 60.0 * 60.0;

/// Convert seconds -> years.
pub const YEARS_PER_SECOND: f64 = 1.0 / (SECONDS_PER_HOUR * HOURS_PER_DAY * DAYS_PER_YEAR);

/// Radians in a full circle.
pub const RADIANS_PER_CIRCLE: f64 = 2.0 * std::f64::consts::PI;

/// Molecular weight of molecular hydrogen.
pub const WEIGHT_MOLECULAR_HYDROGEN: f64 = 2.0;

/// Molecular weight of helium.
pub const WEIGHT_HELIUM: f64 = 4.0;

/// Molecular weight of water vapor.
pub const WEIGHT_WATER_VAPOR: f64 = 18.0;

/// Molecular weight of molecular nitrogen.
pub const WEIGHT_MOLECULAR_NITROGEN: f64 = 28.0;

/// Center of the rocky/gaseous planet transition, in solar masses.
///
/// Chen et al. 2017: 2.04 (+0.66/-0.59) Earth masses.
pub const ROCKY_TRANSITION: f64 = 2.04 / SOLAR_MASS_TO_EARTH_MASS;

/// Center of the ice giant / gas giant transition, in Jovian masses.
pub const ICE_GIANT_TRANSITION: f64 = 0.414;

/// Transition from gas giant to brown dwarf, in Jovian masses.
pub const BROWN_DWARF_TRANSITION: f64 = 13.0;

/// Upper mass limit for a body classified as an asteroid belt, in Earth masses.
pub const ASTEROID_MASS_LIMIT: f64 = 0.001;
