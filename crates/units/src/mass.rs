use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// Mass of Sol in grams.
pub const SOLAR_MASS_G: f64 = 1.989e33;

/// Earth masses per solar mass.
pub const EARTH_MASSES_PER_SOLAR_MASS: f64 = 332_775.64;

/// Jovian masses per solar mass.
pub const JOVIAN_MASSES_PER_SOLAR_MASS: f64 = 1047.0;

/// A mass quantity stored in solar masses.
///
/// Solar masses are the working unit of the accretion engine, so
/// [`Mass::to_solar_masses`] is an exact read. Earth- and Jupiter-relative
/// views are provided for planet classification thresholds, grams for the
/// cgs-based structure equations.
///
/// # Examples
///
/// ```
/// use units::Mass;
///
/// let earth = Mass::from_earth_masses(1.0);
/// assert!(earth.to_solar_masses() < 1.0e-5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Mass(f64);

impl Mass {
    /// Creates a mass from a value in solar masses.
    pub fn from_solar_masses(value: f64) -> Self {
        Self(value)
    }

    /// Creates a mass from a value in Earth masses.
    pub fn from_earth_masses(value: f64) -> Self {
        Self(value / EARTH_MASSES_PER_SOLAR_MASS)
    }

    /// Creates a mass from a value in grams.
    pub fn from_grams(value: f64) -> Self {
        Self(value / SOLAR_MASS_G)
    }

    /// Returns the mass in solar masses.
    pub fn to_solar_masses(self) -> f64 {
        self.0
    }

    /// Returns the mass in Earth masses.
    pub fn to_earth_masses(self) -> f64 {
        self.0 * EARTH_MASSES_PER_SOLAR_MASS
    }

    /// Returns the mass in Jovian masses.
    pub fn to_jovian_masses(self) -> f64 {
        self.0 * JOVIAN_MASSES_PER_SOLAR_MASS
    }

    /// Returns the mass in grams.
    pub fn to_grams(self) -> f64 {
        self.0 * SOLAR_MASS_G
    }
}

impl Add for Mass {
    type Output = Mass;

    fn add(self, rhs: Mass) -> Mass {
        Mass(self.0 + rhs.0)
    }
}

impl Sub for Mass {
    type Output = Mass;

    fn sub(self, rhs: Mass) -> Mass {
        Mass(self.0 - rhs.0)
    }
}
