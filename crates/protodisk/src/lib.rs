//! The protoplanetary dust disk and accretion engine.
//!
//! The disk is modeled as an ordered, contiguous partition of dust bands,
//! each flagged for remaining dust and gas (Dole 1969's accretion model).
//! Protoplanet seeds dropped into the disk sweep up material within their
//! gravitational reach, the swept ranges are carved out of the partition,
//! and grown protoplanets either merge with existing planetesimals or join
//! the ordered planetesimal list.
//!
//! The engine owns the band partition and the in-progress planetesimal list
//! for exactly one generation run; the finished planetesimals are moved out
//! at the end and evaluated elsewhere.

pub mod band;
pub mod engine;
pub mod planetesimal;
pub mod protoplanet;
pub mod sampling;
pub mod seeding;

#[cfg(test)]
mod band_test;
#[cfg(test)]
mod engine_test;
#[cfg(test)]
mod sampling_test;
#[cfg(test)]
mod seeding_test;

pub use band::DustBand;
pub use engine::{AccretionEngine, AccretionParams};
pub use planetesimal::Planetesimal;
pub use protoplanet::Protoplanet;
pub use seeding::ProtoplanetSeed;
