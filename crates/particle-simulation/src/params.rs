//! Simulation construction parameters and their validation

use particle_physics::{constants, Bounds, ParticleKind};
use thiserror::Error;

/// Rejected construction parameters.
///
/// Raised from [`crate::Simulation::new`] only; a constructed simulation
/// never fails at step time.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("world bounds must be finite with min < max on both axes")]
    InvalidBounds,
    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidParameter { name: &'static str, value: f32 },
    #[error("batch size must be at least 1")]
    ZeroBatchSize,
}

/// Everything a [`crate::Simulation`] is built from.
///
/// All numeric values are defaults-as-configuration: the historically
/// inconsistent constants (max force, collision force/distance, bounce
/// velocity) live here rather than being baked in.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParams {
    /// Particles to spawn per kind, indexed by [`ParticleKind::index`]
    pub counts: [usize; ParticleKind::COUNT],
    /// World rectangle particles are contained in, fixed for the run
    pub bounds: Bounds,
    /// Initial speed clamp (replaced by rule randomization)
    pub max_speed: f32,
    /// Initial fractional velocity decay per second (replaced likewise)
    pub friction: f32,
    /// Distance under which the hard collision response applies
    pub collision_distance: f32,
    /// Magnitude of the hard collision response
    pub collision_force: f32,
    /// Cap on each particle's aggregate net force
    pub max_force: f32,
    /// Outward speed a wall impact rebounds toward
    pub bounce_velocity: f32,
    /// Evaluate forces with the fork-join evaluator instead of the serial loop
    pub use_parallel: bool,
    /// Contiguous particles per parallel work item; tuning only, results are
    /// identical for every batch size
    pub batch_size: usize,
    /// Seed for the world RNG (spawning and rule randomization)
    pub seed: u64,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            counts: [100; ParticleKind::COUNT],
            bounds: Bounds::default(),
            max_speed: constants::MAX_SPEED,
            friction: constants::FRICTION,
            collision_distance: constants::COLLISION_DISTANCE,
            collision_force: constants::COLLISION_FORCE,
            max_force: constants::MAX_FORCE,
            bounce_velocity: constants::BOUNCE_VELOCITY,
            use_parallel: false,
            batch_size: 10,
            seed: 0,
        }
    }
}

impl SimulationParams {
    pub fn total_particles(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Fail fast on malformed parameters, before any particle exists.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.bounds.is_valid() {
            return Err(ConfigError::InvalidBounds);
        }
        for (name, value) in [
            ("max_speed", self.max_speed),
            ("friction", self.friction),
            ("collision_distance", self.collision_distance),
            ("collision_force", self.collision_force),
            ("max_force", self.max_force),
            ("bounce_velocity", self.bounce_velocity),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidParameter { name, value });
            }
        }
        if self.batch_size == 0 {
            return Err(ConfigError::ZeroBatchSize);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn default_params_are_valid() {
        assert_eq!(SimulationParams::default().validate(), Ok(()));
        assert_eq!(SimulationParams::default().total_particles(), 400);
    }

    #[test]
    fn rejects_nan_bounds() {
        let params = SimulationParams {
            bounds: Bounds::new(Vec2::new(f32::NAN, 0.0), Vec2::ONE),
            ..Default::default()
        };
        assert_eq!(params.validate(), Err(ConfigError::InvalidBounds));
    }

    #[test]
    fn rejects_inverted_bounds() {
        let params = SimulationParams {
            bounds: Bounds::new(Vec2::ONE, Vec2::ZERO),
            ..Default::default()
        };
        assert_eq!(params.validate(), Err(ConfigError::InvalidBounds));
    }

    #[test]
    fn rejects_negative_friction() {
        let params = SimulationParams {
            friction: -0.1,
            ..Default::default()
        };
        assert_eq!(
            params.validate(),
            Err(ConfigError::InvalidParameter { name: "friction", value: -0.1 })
        );
    }

    #[test]
    fn rejects_infinite_max_force() {
        let params = SimulationParams {
            max_force: f32::INFINITY,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::InvalidParameter { name: "max_force", .. })
        ));
    }

    #[test]
    fn rejects_zero_batch_size() {
        let params = SimulationParams {
            batch_size: 0,
            ..Default::default()
        };
        assert_eq!(params.validate(), Err(ConfigError::ZeroBatchSize));
    }

    #[test]
    fn zero_population_is_allowed() {
        let params = SimulationParams {
            counts: [0; ParticleKind::COUNT],
            ..Default::default()
        };
        assert_eq!(params.validate(), Ok(()));
    }
}
