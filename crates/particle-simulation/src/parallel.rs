//! Fork-join force evaluation
//!
//! Partitions the particle index range into contiguous batches and computes
//! net forces concurrently. Every worker reads the same immutable snapshot
//! and writes only its own output slots, so execution order across workers
//! cannot affect the result; the call blocks until every batch is done.

use particle_physics::{net_force, ForceParams, Particle, RuleTable};
use rayon::prelude::*;

/// Compute the net force of every particle in `out` against the `snapshot`
/// taken before dispatch.
///
/// `batch_size` is the number of contiguous particles handed to one worker
/// task. It is a tuning knob only: results are identical to the serial loop
/// for every batch size >= 1 and any worker count, because each slot is
/// produced by the same [`net_force`] call in the same inner order.
pub fn compute_net_forces(
    snapshot: &[Particle],
    rules: &RuleTable,
    params: &ForceParams,
    out: &mut [Particle],
    batch_size: usize,
) {
    debug_assert_eq!(snapshot.len(), out.len());
    debug_assert!(batch_size >= 1);

    out.par_chunks_mut(batch_size)
        .enumerate()
        .for_each(|(batch, slots)| {
            let base = batch * batch_size;
            for (offset, slot) in slots.iter_mut().enumerate() {
                slot.net_force = net_force(base + offset, snapshot, rules, params);
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use particle_physics::{constants, ParticleKind};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn scattered_particles(count: usize) -> Vec<Particle> {
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        (0..count)
            .map(|i| {
                Particle::new(
                    ParticleKind::ALL[i % ParticleKind::COUNT],
                    Vec2::new(rng.random_range(-8.0..8.0), rng.random_range(-4.0..4.0)),
                    Vec2::ZERO,
                )
            })
            .collect()
    }

    #[test]
    fn matches_serial_for_every_batch_size() {
        let particles = scattered_particles(101);
        let mut rules = RuleTable::new();
        rules.randomize(
            &mut ChaCha8Rng::seed_from_u64(4),
            &particle_physics::Bounds::default(),
        );
        let params = ForceParams {
            collision_distance: constants::COLLISION_DISTANCE,
            collision_force: constants::COLLISION_FORCE,
            max_force: constants::MAX_FORCE,
        };

        let serial: Vec<Vec2> = (0..particles.len())
            .map(|i| net_force(i, &particles, &rules, &params))
            .collect();

        // Deliberately awkward batch sizes: 1, non-dividing, larger than the
        // population
        for batch_size in [1, 2, 7, 33, 101, 4096] {
            let mut out = particles.clone();
            compute_net_forces(&particles, &rules, &params, &mut out, batch_size);
            for (slot, expected) in out.iter().zip(&serial) {
                // Same inner summation order, so bit-equal, not just close
                assert_eq!(slot.net_force, *expected);
            }
        }
    }

    #[test]
    fn only_net_force_slots_are_written() {
        let particles = scattered_particles(16);
        let rules = RuleTable::new();
        let params = ForceParams {
            collision_distance: constants::COLLISION_DISTANCE,
            collision_force: constants::COLLISION_FORCE,
            max_force: constants::MAX_FORCE,
        };
        let mut out = particles.clone();
        compute_net_forces(&particles, &rules, &params, &mut out, 4);
        for (after, before) in out.iter().zip(&particles) {
            assert_eq!(after.position, before.position);
            assert_eq!(after.velocity, before.velocity);
            assert_eq!(after.kind, before.kind);
        }
    }

    #[test]
    fn empty_world_is_a_no_op() {
        let rules = RuleTable::new();
        let params = ForceParams {
            collision_distance: constants::COLLISION_DISTANCE,
            collision_force: constants::COLLISION_FORCE,
            max_force: constants::MAX_FORCE,
        };
        let mut out: Vec<Particle> = Vec::new();
        compute_net_forces(&[], &rules, &params, &mut out, 8);
        assert!(out.is_empty());
    }
}
