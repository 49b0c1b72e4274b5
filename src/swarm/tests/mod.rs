
use rand::{SeedableRng, rngs::StdRng};

use crate::prelude::*;

/// Seeded swarm over `benchmark`'s domain, initialised and ready to step.
fn seeded_swarm(benchmark: Benchmark, seed: u64) -> (Swarm, StdRng) {
    let config = PsoConfig::for_benchmark(benchmark);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut swarm = Swarm::new(&config);
    swarm.init(&benchmark, &mut rng).unwrap();
    (swarm, rng)
}

fn best_fitnesses<O: Objective>(swarm: &Swarm, objective: &O) -> Vec<f64> {
    swarm
        .particles()
        .iter()
        .map(|p| fitness_rank(p.evaluate_best_fitness(objective).unwrap()))
        .collect()
}
