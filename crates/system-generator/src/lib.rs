//! End-to-end solar system generation.
//!
//! Wires the pieces together: pick (or accept) a star, run the dust-disk
//! accretion engine over it with one of the seeding strategies, then push
//! every surviving planetesimal through the planetary evaluator. Given the
//! same configuration and seed, a generation run is fully deterministic:
//! all randomness comes from one seeded ChaCha stream per run.

pub mod config;
pub mod generator;
pub mod system;

#[cfg(test)]
mod config_test;

pub use config::GeneratorConfig;
pub use generator::{generate, generate_batch, generate_named, generate_with_star};
pub use system::SolarSystem;
