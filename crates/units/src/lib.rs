//! Physical quantity newtypes used on the generator's public surface.
//!
//! Masses are stored in solar masses and lengths in astronomical units, the
//! natural units of the accretion simulation, so the common accessors are
//! exact reads rather than conversions.

pub mod length;
pub mod mass;

#[cfg(test)]
mod length_test;
#[cfg(test)]
mod mass_test;

pub use length::{Length, KM_PER_AU};
pub use mass::{Mass, EARTH_MASSES_PER_SOLAR_MASS, JOVIAN_MASSES_PER_SOLAR_MASS, SOLAR_MASS_G};
