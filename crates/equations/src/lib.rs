//! Stateless physical formulas for dust-accretion planetary system generation.
//!
//! These are the empirical relations of the Accrete lineage (Dole 1969,
//! Fogg 1985, Burdick 1988 et seq.): stellar mass-luminosity, the critical
//! mass for gas retention, the Kothari 1936 radius equation, Keplerian
//! periods, and the gas-escape relations used to decide which molecular
//! species a body can hold onto.
//!
//! Everything here is a pure function of its arguments. Units are the
//! simulation's working units: solar masses, AU, kilometers for radii,
//! Kelvin, and m/s for velocities, with cgs conversions internal to the
//! structure equations.

pub mod constants;
pub mod escape;
pub mod interpolate;
pub mod orbital;
pub mod structure;

#[cfg(test)]
mod escape_test;
#[cfg(test)]
mod interpolate_test;
#[cfg(test)]
mod structure_test;

pub use escape::{gas_life, minimum_molecular_weight, molecular_limit, rms_velocity};
pub use interpolate::{inverse_lerp, lerp};
pub use orbital::{critical_limit, luminosity, orbital_dominance, period_days};
pub use structure::{escape_velocity, kothari_radius, volume_density};
