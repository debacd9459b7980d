//! Pairwise force law and per-particle aggregation
//!
//! Both evaluators (serial and parallel) funnel through [`net_force`], which
//! keeps their summation order identical and their results bit-equal.

use glam::Vec2;

use crate::constants::DISTANCE_EPSILON;
use crate::particle::Particle;
use crate::rules::RuleTable;

/// Force constants shared by every pair evaluation in a step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceParams {
    /// Pairs closer than this receive the hard collision response
    pub collision_distance: f32,
    /// Magnitude of the collision response
    pub collision_force: f32,
    /// Cap applied to the aggregate net force, after summation
    pub max_force: f32,
}

/// Force vector that `other` exerts on `this`.
///
/// Inside `rule_radius` the rule applies an inverse-distance force, signed so
/// that a positive `rule_force` pulls `this` toward `other`. Inside
/// `collision_distance` an additional outward push of `collision_force` is
/// accumulated regardless of the rule. The per-pair result is returned
/// unclamped; the caller clamps the aggregate.
pub fn compute_force(
    this: &Particle,
    other: &Particle,
    rule_force: f32,
    rule_radius: f32,
    collision_distance: f32,
    collision_force: f32,
) -> Vec2 {
    let mut force = Vec2::ZERO;

    let delta = this.position - other.position;
    let distance = delta.length().max(DISTANCE_EPSILON);
    let direction = delta / distance;

    if distance < rule_radius {
        force -= (rule_force / distance) * direction;
    }

    if distance < collision_distance {
        force += collision_force * direction;
    }

    force
}

/// Aggregate net force on `particles[index]` from every other particle.
///
/// The sum runs over ascending neighbor indices, skipping the particle
/// itself, and is clamped to `params.max_force` strictly after summation so
/// pathological rule values cannot leak unbounded magnitudes into
/// integration.
pub fn net_force(
    index: usize,
    particles: &[Particle],
    rules: &RuleTable,
    params: &ForceParams,
) -> Vec2 {
    let this = particles[index];
    let mut net = Vec2::ZERO;
    for (neighbor, other) in particles.iter().enumerate() {
        if neighbor == index {
            continue;
        }
        let rule = rules.for_pair(this.kind, other.kind);
        net += compute_force(
            &this,
            other,
            rule.force,
            rule.radius,
            params.collision_distance,
            params.collision_force,
        );
    }
    net.clamp_length_max(params.max_force)
}
