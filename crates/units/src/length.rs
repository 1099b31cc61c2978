use serde::{Deserialize, Serialize};

/// Kilometers per astronomical unit.
pub const KM_PER_AU: f64 = 1.0 / 6.684_587_122_268_445e-9;

/// A length quantity stored in astronomical units.
///
/// Orbital distances are the dominant use, so AU is the base unit and
/// [`Length::to_au`] is an exact read. Planetary radii convert through
/// kilometers.
///
/// # Examples
///
/// ```
/// use units::Length;
///
/// let sma = Length::from_au(5.2);
/// assert_eq!(sma.to_au(), 5.2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Length(f64);

impl Length {
    /// Creates a length from a value in astronomical units.
    pub fn from_au(value: f64) -> Self {
        Self(value)
    }

    /// Creates a length from a value in kilometers.
    pub fn from_km(value: f64) -> Self {
        Self(value / KM_PER_AU)
    }

    /// Returns the length in astronomical units.
    pub fn to_au(self) -> f64 {
        self.0
    }

    /// Returns the length in kilometers.
    pub fn to_km(self) -> f64 {
        self.0 * KM_PER_AU
    }
}
