//! # Particle Life Physics
//!
//! Pure data and math for a particle-life simulation: particle kinds and
//! kinematic state, the directional rule table, and the force/integration
//! functions evaluated every step.

pub mod constants;
pub mod forces;
pub mod particle;
pub mod rules;

pub use constants::*;
pub use forces::*;
pub use particle::*;
pub use rules::*;
