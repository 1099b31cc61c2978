use rand::Rng;
use serde::{Deserialize, Serialize};

use equations::inverse_lerp;

use crate::spectral::SpectralClass;
use crate::table::lookup;

/// Minimum age for a star hosting a fully-formed system, in years.
pub const MINIMUM_STELLAR_AGE: f64 = 1.0e9;

/// Maximum randomly-selected age, in years. Shorter-lived stars cap below
/// this at their main-sequence lifespan.
pub const MAXIMUM_STELLAR_AGE: f64 = 6.0e9;

/// Inner/outer limits of a band around the star, in AU.
pub type BandLimit = (f64, f64);

/// Position of an orbit relative to the habitable zone and the snow line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrbitalZone {
    /// Between the star and the inner edge of the habitable zone.
    Inner,
    /// Within the habitable zone.
    Habitable,
    /// Outside the habitable zone, inside the snow line.
    Middle,
    /// Outside the snow line.
    Outer,
}

impl OrbitalZone {
    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            OrbitalZone::Inner => "Inner",
            OrbitalZone::Habitable => "Habitable",
            OrbitalZone::Middle => "Middle",
            OrbitalZone::Outer => "Outer",
        }
    }
}

impl std::fmt::Display for OrbitalZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The central star of a generated system.
///
/// Identity is the spectral class plus subtype; every other field is derived
/// from the main-sequence table by [`Star::evaluate`], which is idempotent;
/// a second call is a no-op. The age may be set before evaluation and is
/// clamped to the star's plausible range; left at zero, a middling age is
/// chosen (randomly, when an RNG is supplied).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Star {
    class: SpectralClass,
    subtype: u8,
    name: String,

    evaluated: bool,

    age_years: f64,
    /// Effective temperature, in Kelvin.
    temperature: f64,
    /// Luminosity, Sol = 1.0.
    luminosity: f64,
    /// Radius, in solar radii.
    radius: f64,
    /// Mass, in solar masses.
    mass: f64,

    /// Ideal Earth-like orbit distance, in AU.
    ecosphere: f64,
    /// Distance past which water ice survives in vacuum, in AU.
    snow_line: f64,
    habitable_zone: BandLimit,
    /// Range where nebular dust exists, in AU.
    dust_zone: BandLimit,
    /// Range where protoplanets may form, in AU.
    protoplanet_zone: BandLimit,

    zone1: BandLimit,
    zone2: BandLimit,
    zone3: BandLimit,
}

impl Default for Star {
    /// A G2V star, unevaluated.
    fn default() -> Self {
        Star::new(SpectralClass::G, 2)
    }
}

impl Star {
    /// Creates an unevaluated star of the given class and subtype.
    ///
    /// Subtypes are clamped to [0, 9]. No table data exists for O0V-O2V, so
    /// class O clamps the subtype up to 3.
    pub fn new(class: SpectralClass, subtype: u8) -> Self {
        let subtype = if class == SpectralClass::O {
            subtype.clamp(3, 9)
        } else {
            subtype.min(9)
        };

        Star {
            class,
            subtype,
            name: String::new(),
            evaluated: false,
            age_years: 0.0,
            temperature: 0.0,
            luminosity: 0.0,
            radius: 0.0,
            mass: 0.0,
            ecosphere: 0.0,
            snow_line: 0.0,
            habitable_zone: (0.0, 0.0),
            dust_zone: (0.0, 0.0),
            protoplanet_zone: (0.0, 0.0),
            zone1: (0.0, 0.0),
            zone2: (0.0, 0.0),
            zone3: (0.0, 0.0),
        }
    }

    /// Derives the stellar traits from the main-sequence table.
    ///
    /// A previously unset age is chosen uniformly between 25% and 75% of the
    /// star's maximum plausible age; an explicitly set age is clamped to the
    /// valid range. Idempotent: once evaluated, further calls do nothing.
    pub fn evaluate(&mut self, rng: &mut impl Rng) {
        if self.evaluated {
            return;
        }
        let fraction = rng.random_range(0.25..0.75);
        self.evaluate_inner(fraction);
    }

    /// Derives the stellar traits without a random source; an unset age
    /// lands halfway through the plausible range.
    pub fn evaluate_default(&mut self) {
        self.evaluate_inner(0.5);
    }

    fn evaluate_inner(&mut self, age_fraction: f64) {
        if self.evaluated {
            return;
        }

        let info = lookup(self.class, self.subtype);
        self.temperature = 10.0f64.powf(info.log_temperature);
        self.luminosity = 10.0f64.powf(info.log_luminosity);
        self.radius = info.radius;
        self.mass = info.mass;

        let lifespan = 1.0e10 * (self.mass / self.luminosity);
        let oldest_age = MAXIMUM_STELLAR_AGE.min(lifespan);
        if self.age_years == 0.0 {
            self.age_years = (age_fraction * oldest_age).max(MINIMUM_STELLAR_AGE);
        } else {
            self.age_years = self.age_years.clamp(MINIMUM_STELLAR_AGE, oldest_age);
        }

        let sqrt_lum = self.luminosity.sqrt();
        let curt_mass = self.mass.powf(1.0 / 3.0);

        self.ecosphere = sqrt_lum;
        self.snow_line = 5.0 * sqrt_lum;
        self.habitable_zone = (0.95 * sqrt_lum, 1.37 * sqrt_lum);
        self.dust_zone = (0.0, 200.0 * curt_mass);
        self.protoplanet_zone = (0.3 * curt_mass, 50.0 * curt_mass);
        self.zone1 = (0.0, 5.0 * sqrt_lum);
        self.zone2 = (4.0 * sqrt_lum, 16.0 * sqrt_lum);
        self.zone3 = (14.0 * sqrt_lum, 200.0 * sqrt_lum);

        self.evaluated = true;
    }

    /// Classifies a distance from the star into the three zones of
    /// protoplanetary material (Pollard 1979 by way of Fogg 1985).
    ///
    /// Zone I holds only the heavier elements; Zone II adds volatile ices
    /// and H2/He; Zone III keeps the ices but loses the light gases. The
    /// result is continuous in [1.0, 3.0], with fractional values marking
    /// the transition regions where adjacent zones overlap.
    pub fn material_zone(&self, sma: f64) -> f64 {
        if sma < self.zone2.0 {
            1.0
        } else if sma < self.zone1.1 {
            1.0 + inverse_lerp(sma, self.zone2.0, self.zone1.1)
        } else if sma < self.zone3.0 {
            2.0
        } else {
            // inverse_lerp clamps at 1.0 beyond the outer zone-2 edge.
            2.0 + inverse_lerp(sma, self.zone3.0, self.zone2.1)
        }
    }

    /// Classifies a distance from the star relative to the habitable zone
    /// and snow line.
    pub fn orbital_zone(&self, sma: f64) -> OrbitalZone {
        if sma < self.habitable_zone.0 {
            OrbitalZone::Inner
        } else if sma < self.habitable_zone.1 {
            OrbitalZone::Habitable
        } else if sma < self.snow_line {
            OrbitalZone::Middle
        } else {
            OrbitalZone::Outer
        }
    }

    /// The stellar class designation, e.g. "G2V".
    pub fn stellar_class(&self) -> String {
        format!("{}{}V", self.class.letter(), self.subtype)
    }

    /// Sets the star's name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Sets the age, in years. Clamped to the plausible range when
    /// [`Star::evaluate`] runs; changing it afterwards bypasses the clamp.
    pub fn set_age(&mut self, age_years: f64) {
        self.age_years = age_years;
    }

    /// The star's name; empty if never set.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether [`Star::evaluate`] has run.
    pub fn is_evaluated(&self) -> bool {
        self.evaluated
    }

    /// Spectral class and subtype.
    pub fn star_type(&self) -> (SpectralClass, u8) {
        (self.class, self.subtype)
    }

    /// Age, in years.
    pub fn age(&self) -> f64 {
        self.age_years
    }

    /// Effective temperature, in Kelvin.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Luminosity, Sol = 1.0.
    pub fn luminosity(&self) -> f64 {
        self.luminosity
    }

    /// Radius, in solar radii.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Mass, in solar masses.
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Ideal Earth-equivalent orbit distance, in AU.
    pub fn ecosphere(&self) -> f64 {
        self.ecosphere
    }

    /// Minimum distance where water ice survives in vacuum, in AU.
    pub fn snow_line(&self) -> f64 {
        self.snow_line
    }

    /// Bounds of the habitable zone, in AU.
    pub fn habitable_zone(&self) -> BandLimit {
        self.habitable_zone
    }

    /// Range where nebular dust may be found, in AU.
    pub fn dust_zone(&self) -> BandLimit {
        self.dust_zone
    }

    /// Range where protoplanets may form, in AU.
    pub fn protoplanet_zone(&self) -> BandLimit {
        self.protoplanet_zone
    }
}
