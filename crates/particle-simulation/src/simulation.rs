//! World state and the per-step state machine

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use particle_physics::{
    net_force, Bounds, ForceParams, Particle, ParticleKind, RandomizeSummary, Rule, RuleTable,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::parallel;
use crate::params::{ConfigError, SimulationParams};

/// Compact per-particle row for display consumers.
///
/// Plain-old-data so renderers can upload the whole snapshot as one byte
/// slice.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct RenderInstance {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

/// The simulation world: owns the particle arena, the live rule table and
/// its evaluator-facing snapshot, and the seeded world RNG.
///
/// External collaborators (renderer, editing UI) only read particle state
/// through [`Simulation::particles`]/[`Simulation::render_instances`] and
/// mutate rules through the accessors, which buffer edits until the next
/// step boundary.
pub struct Simulation {
    params: SimulationParams,
    rules: RuleTable,
    rule_snapshot: RuleTable,
    rules_dirty: bool,
    max_speed: f32,
    friction: f32,
    particles: Vec<Particle>,
    scratch: Vec<Particle>,
    rng: ChaCha8Rng,
}

impl Simulation {
    /// Validate `params` and spawn the fixed particle population.
    ///
    /// Particles spawn at uniform positions inside the bounds with
    /// unit-length velocities in uniform random directions. The population
    /// never changes afterwards.
    pub fn new(params: SimulationParams) -> Result<Self, ConfigError> {
        params.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(params.seed);
        let total = params.total_particles();
        let mut particles = Vec::with_capacity(total);
        for kind in ParticleKind::ALL {
            for _ in 0..params.counts[kind.index()] {
                let position = Vec2::new(
                    rng.random_range(params.bounds.min.x..=params.bounds.max.x),
                    rng.random_range(params.bounds.min.y..=params.bounds.max.y),
                );
                let velocity = Vec2::from_angle(rng.random_range(0.0..std::f32::consts::TAU));
                particles.push(Particle::new(kind, position, velocity));
            }
        }
        log::info!(
            "spawned {total} particles ({:?} per kind), {} evaluator, batch size {}",
            params.counts,
            if params.use_parallel { "parallel" } else { "serial" },
            params.batch_size,
        );

        Ok(Self {
            max_speed: params.max_speed,
            friction: params.friction,
            rules: RuleTable::new(),
            rule_snapshot: RuleTable::new(),
            rules_dirty: false,
            scratch: Vec::with_capacity(total),
            particles,
            rng,
            params,
        })
    }

    /// Advance the world by one tick of `dt` seconds.
    ///
    /// Phase 1 refreshes the rule snapshot if the table was edited, so a
    /// mutation during step N is first visible in step N+1 and evaluators
    /// never observe a torn table. Phase 2 recomputes every net force from
    /// scratch (serial loop or fork-join evaluator, identical results).
    /// Phase 3 integrates and contains every particle.
    pub fn step(&mut self, dt: f32) {
        if self.rules_dirty {
            self.rule_snapshot.clone_from(&self.rules);
            self.rules_dirty = false;
        }

        let force_params = ForceParams {
            collision_distance: self.params.collision_distance,
            collision_force: self.params.collision_force,
            max_force: self.params.max_force,
        };

        if self.params.use_parallel {
            self.scratch.clear();
            self.scratch.extend_from_slice(&self.particles);
            parallel::compute_net_forces(
                &self.scratch,
                &self.rule_snapshot,
                &force_params,
                &mut self.particles,
                self.params.batch_size,
            );
        } else {
            for index in 0..self.particles.len() {
                let force = net_force(index, &self.particles, &self.rule_snapshot, &force_params);
                self.particles[index].net_force = force;
            }
        }

        for particle in &mut self.particles {
            particle.integrate(dt, self.friction, self.max_speed);
            particle.bounce_off_walls(&self.params.bounds, self.params.bounce_velocity);
        }
    }

    pub fn rule(&self, row: usize, col: usize) -> Rule {
        self.rules.get(row, col)
    }

    /// Replace one rule. The edit is buffered until the next step boundary.
    pub fn set_rule(&mut self, row: usize, col: usize, rule: Rule) {
        self.rules.set(row, col, rule);
        self.rules_dirty = true;
    }

    /// Randomize the whole table and the global tunables, optionally
    /// reseeding the world RNG first. Returns the freshly drawn
    /// max speed and friction for display.
    pub fn randomize_rules(&mut self, seed: Option<u64>) -> RandomizeSummary {
        if let Some(seed) = seed {
            self.rng = ChaCha8Rng::seed_from_u64(seed);
        }
        let summary = self.rules.randomize(&mut self.rng, &self.params.bounds);
        self.max_speed = summary.max_speed;
        self.friction = summary.friction;
        self.rules_dirty = true;
        log::debug!(
            "randomized rules: max_speed={}, friction={}",
            summary.max_speed,
            summary.friction
        );
        summary
    }

    pub fn max_speed(&self) -> f32 {
        self.max_speed
    }

    pub fn set_max_speed(&mut self, max_speed: f32) {
        self.max_speed = max_speed;
    }

    pub fn friction(&self) -> f32 {
        self.friction
    }

    pub fn set_friction(&mut self, friction: f32) {
        self.friction = friction;
    }

    pub fn bounds(&self) -> Bounds {
        self.params.bounds
    }

    /// Read-only view of the live particle state
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Position/color rows for the renderer
    pub fn render_instances(&self) -> Vec<RenderInstance> {
        self.particles
            .iter()
            .map(|p| RenderInstance {
                position: p.position.to_array(),
                color: p.kind.color(),
            })
            .collect()
    }
}
