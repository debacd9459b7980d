//! Particle Life
//!
//! Headless driver for the particle-life simulation: spawns the four
//! particle kinds, randomizes the interaction rules from a seed, and runs a
//! fixed-timestep loop on both evaluators, logging throughput and a state
//! sample.

use std::error::Error;
use std::time::Instant;

use particle_simulation::{Simulation, SimulationParams};

const PARTICLES_PER_KIND: usize = 250;
const RULE_SEED: u64 = 42;
const STEPS: usize = 600;
const DT: f32 = 1.0 / 60.0;

fn run(use_parallel: bool) -> Result<f64, Box<dyn Error>> {
    let params = SimulationParams {
        counts: [PARTICLES_PER_KIND; 4],
        seed: RULE_SEED,
        use_parallel,
        ..Default::default()
    };
    let mut sim = Simulation::new(params)?;

    let summary = sim.randomize_rules(Some(RULE_SEED));
    log::info!(
        "rules randomized: max_speed={}, friction={}",
        summary.max_speed,
        summary.friction
    );

    let start = Instant::now();
    for _ in 0..STEPS {
        sim.step(DT);
    }
    let elapsed = start.elapsed().as_secs_f64();

    let label = if use_parallel { "parallel" } else { "serial" };
    log::info!(
        "{label}: {STEPS} steps x {} particles in {elapsed:.2}s ({:.0} steps/s)",
        sim.particles().len(),
        STEPS as f64 / elapsed,
    );
    for (i, p) in sim.particles().iter().take(4).enumerate() {
        log::info!(
            "  [{i}] {:?} pos=({:.3}, {:.3}) vel=({:.3}, {:.3})",
            p.kind,
            p.position.x,
            p.position.y,
            p.velocity.x,
            p.velocity.y,
        );
    }

    Ok(elapsed)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let serial = run(false)?;
    let parallel = run(true)?;
    log::info!("parallel speedup: {:.2}x", serial / parallel);

    Ok(())
}
