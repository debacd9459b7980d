use criterion::{black_box, criterion_group, criterion_main, Criterion};
use particle_simulation::{Simulation, SimulationParams};

const DT: f32 = 1.0 / 60.0;

fn seeded_world(use_parallel: bool) -> Simulation {
    let mut sim = Simulation::new(SimulationParams {
        counts: [250; 4],
        seed: 42,
        use_parallel,
        ..Default::default()
    })
    .expect("default bench parameters are valid");
    sim.randomize_rules(Some(42));
    sim
}

/// One O(n²) step over 1000 particles on the calling thread.
fn bench_step_serial(c: &mut Criterion) {
    let mut sim = seeded_world(false);
    c.bench_function("step_serial_1k", |b| {
        b.iter(|| sim.step(black_box(DT)))
    });
}

/// The same step through the fork-join evaluator.
fn bench_step_parallel(c: &mut Criterion) {
    let mut sim = seeded_world(true);
    c.bench_function("step_parallel_1k", |b| {
        b.iter(|| sim.step(black_box(DT)))
    });
}

criterion_group!(benches, bench_step_serial, bench_step_parallel);
criterion_main!(benches);
