//! Planet records and the post-accretion evaluation pipeline.
//!
//! Accretion hands over bare orbits and mass decompositions; everything else
//! (radius, density, day length, surface temperature, atmosphere, Earth
//! Similarity Index, and the final classification) is derived here by the
//! one-shot [`Planet::evaluate`], following the Accrete/stargen lineage of
//! empirical relations (Fogg 1985, Burdick 1988, Burrows 2006).

pub mod atmosphere;
pub mod evaluation;
pub mod planet;
pub mod planet_type;
pub mod temperature;
pub mod variation;

#[cfg(test)]
mod atmosphere_test;
#[cfg(test)]
mod planet_type_test;
#[cfg(test)]
mod temperature_test;

pub use atmosphere::{AtmosphereComponent, Gas, GasProperties};
pub use evaluation::EvaluationOptions;
pub use planet::Planet;
pub use planet_type::PlanetType;
