//! # Particle Life Simulation
//!
//! Owns the particle collection and the active rule table, and advances the
//! world one step at a time: force evaluation (serial or fork-join parallel),
//! then integration and wall containment.

pub mod parallel;
pub mod params;
pub mod simulation;

pub use parallel::*;
pub use params::*;
pub use simulation::*;
