//! Default simulation constants
//!
//! These are configuration defaults, not contracts: everything here can be
//! overridden through the simulation's construction parameters.

/// Floor applied to pair distances to prevent division by zero
pub const DISTANCE_EPSILON: f32 = 1e-8;

/// Particles closer than this experience the hard collision response,
/// regardless of the rule between their kinds (~ 0.1/sqrt(2))
pub const COLLISION_DISTANCE: f32 = 0.07071;

/// Magnitude of the short-range collision repulsion
pub const COLLISION_FORCE: f32 = 100_000.0;

/// Cap on the magnitude of a particle's aggregate net force
pub const MAX_FORCE: f32 = 100_000.0;

/// Outward speed a wall impact rebounds toward
pub const BOUNCE_VELOCITY: f32 = 10.0;

/// Initial speed clamp, replaced whenever the rules are randomized
pub const MAX_SPEED: f32 = 5.0;

/// Initial fractional velocity decay per second
pub const FRICTION: f32 = 0.5;

/// World half-extents of the default bounds rectangle
pub const WORLD_HALF_WIDTH: f32 = 8.5;
pub const WORLD_HALF_HEIGHT: f32 = 4.75;
