use std::fmt;

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, info};

use crate::prelude::*;

/// Outcome of one PSO run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunResult {
    pub best_point: Point,
    pub best_fitness: f64,
    /// Global fitness after initialisation followed by one entry per
    /// iteration.
    pub history: CostHistory,
}

impl fmt::Display for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Best Point: ({:.4}, {:.4}) with fitness (global minimum): {:.10}",
            self.best_point.x, self.best_point.y, self.best_fitness
        )
    }
}

/// Results of a batch of independent runs, in run order.
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    pub objective_name: String,
    pub runs: Vec<RunResult>,
}

impl RunSummary {
    pub fn num_runs(&self) -> usize {
        self.runs.len()
    }

    /// The run with the lowest fitness; the earliest one wins ties.
    pub fn best_run(&self) -> Option<&RunResult> {
        self.runs.iter().fold(None, |best: Option<&RunResult>, run| match best {
            Some(b) if fitness_rank(b.best_fitness) <= fitness_rank(run.best_fitness) => Some(b),
            _ => Some(run),
        })
    }

    pub fn mean_fitness(&self) -> Option<f64> {
        if self.runs.is_empty() {
            return None;
        }
        let total: f64 = self.runs.iter().map(|r| r.best_fitness).sum();
        Some(total / self.runs.len() as f64)
    }

    pub fn print_report(&self) {
        println!("{self}");
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for run in self.runs.iter() {
            writeln!(f, "{run}")?;
        }
        writeln!(f, "\nObjective: {}", self.objective_name)?;
        if let Some(best) = self.best_run() {
            writeln!(f, "Best of all runs: {best}")?;
        }
        if let Some(mean) = self.mean_fitness() {
            writeln!(f, "Mean fitness: {mean:.10}")?;
        }
        write!(f, "\nThe PSO was executed {} times", self.num_runs())
    }
}

/// Drives fixed-length PSO runs of one objective.
pub struct Optimizer<O: Objective> {
    objective: O,
    objective_name: String,
    config: PsoConfig,
}

impl<O: Objective> Optimizer<O> {
    /// Validates `config` before any run can start. The objective is named
    /// after its type until [`Optimizer::with_objective_name`] says otherwise.
    pub fn new(objective: O, config: PsoConfig) -> Result<Self, PsoError> {
        config.validate()?;
        Ok(Self {
            objective,
            objective_name: tynm::type_name::<O>(),
            config,
        })
    }

    pub fn with_objective_name(mut self, name: impl Into<String>) -> Self {
        self.objective_name = name.into();
        self
    }

    pub fn objective_name(&self) -> &str {
        &self.objective_name
    }

    pub fn config(&self) -> &PsoConfig {
        &self.config
    }

    pub fn objective(&self) -> &O {
        &self.objective
    }

    /// Generator for run `run_idx` of a batch. Seeded runs are reproducible;
    /// unseeded runs draw fresh entropy from the OS.
    pub fn rng_for_run(&self, run_idx: usize) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => StdRng::from_os_rng(),
        }
    }

    /// One complete run with a fresh swarm (the first run of a batch).
    pub fn run_once(&self) -> Result<RunResult, PsoError> {
        let mut rng = self.rng_for_run(0);
        self.run_with_rng(&mut rng)
    }

    /// One complete run with a fresh swarm drawing from `rng`.
    pub fn run_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<RunResult, PsoError> {
        let mut swarm = Swarm::new(&self.config);
        let mut history = CostHistory::with_capacity(self.config.max_iterations + 1);

        swarm.init(&self.objective, rng)?;
        history.observe_cost(swarm.global_fitness());

        for iter in 0..self.config.max_iterations {
            swarm.step(&self.objective, rng)?;
            history.observe_cost(swarm.global_fitness());
            debug!(iter, global_fitness = swarm.global_fitness(), "pso iteration");
        }

        Ok(RunResult {
            best_point: swarm.global_best(),
            best_fitness: swarm.global_fitness(),
            history,
        })
    }

    /// `config.num_runs` independent runs, each with its own swarm and
    /// generator.
    pub fn run_many(&self) -> Result<RunSummary, PsoError> {
        let n = self.config.num_runs;
        info!(
            objective = %self.objective_name,
            runs = n,
            population = self.config.population_size,
            iterations = self.config.max_iterations,
            "starting pso batch"
        );

        let mut runs = Vec::with_capacity(n);
        for run_idx in 0..n {
            let mut rng = self.rng_for_run(run_idx);
            let result = self.run_with_rng(&mut rng)?;
            info!(
                run = run_idx,
                x = result.best_point.x,
                y = result.best_point.y,
                fitness = result.best_fitness,
                "pso run finished"
            );
            runs.push(result);
        }

        Ok(RunSummary {
            objective_name: self.objective_name.clone(),
            runs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn booth_optimizer(seed: u64) -> Optimizer<Benchmark> {
        booth_batch(seed, 1)
    }

    fn booth_batch(seed: u64, num_runs: usize) -> Optimizer<Benchmark> {
        let config = PsoConfig::for_benchmark(Benchmark::Booth)
            .with_seed(seed)
            .with_num_runs(num_runs);
        Optimizer::new(Benchmark::Booth, config)
            .unwrap()
            .with_objective_name(Benchmark::Booth.name())
    }

    fn run(x: f64, y: f64, fitness: f64) -> RunResult {
        RunResult {
            best_point: Point::new(x, y),
            best_fitness: fitness,
            history: CostHistory::new(),
        }
    }

    #[test]
    fn test_invalid_config_fails_before_running() {
        let config = PsoConfig::for_benchmark(Benchmark::Booth).with_population_size(0);
        assert!(matches!(
            Optimizer::new(Benchmark::Booth, config),
            Err(PsoError::InvalidPopulationSize(0))
        ));
    }

    #[test]
    fn test_history_has_one_entry_per_iteration_plus_init() {
        let result = booth_optimizer(1).run_once().unwrap();
        assert_eq!(result.history.len(), 61);
        assert_eq!(result.history.last(), Some(result.best_fitness));
        assert!(result.history.is_non_increasing());
    }

    #[test]
    fn test_reported_fitness_matches_reported_point() {
        let result = booth_optimizer(2).run_once().unwrap();
        let p = result.best_point;
        assert_eq!(result.best_fitness, Benchmark::Booth.evaluate(p.x, p.y));
    }

    #[test]
    fn test_same_seed_same_batch() {
        let a = booth_batch(99, 3).run_many().unwrap();
        let b = booth_batch(99, 3).run_many().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_runs_in_a_batch_are_independent() {
        let summary = booth_batch(5, 2).run_many().unwrap();
        assert_ne!(summary.runs[0].best_point, summary.runs[1].best_point);

        // Run k of the batch is exactly a standalone run with the k-th generator.
        let optimizer = booth_batch(5, 2);
        let second = optimizer.run_with_rng(&mut optimizer.rng_for_run(1)).unwrap();
        assert_eq!(summary.runs[1], second);
    }

    #[test]
    fn test_run_once_is_first_run_of_batch() {
        let optimizer = booth_optimizer(17);
        let once = optimizer.run_once().unwrap();
        let batch = optimizer.run_many().unwrap();
        assert_eq!(batch.runs[0], once);
    }

    #[test]
    fn test_objective_error_is_propagated() {
        struct Failing;
        impl CostFunction for Failing {
            type Param = Point;
            type Output = f64;
            fn cost(&self, _p: &Self::Param) -> Result<Self::Output, argmin::core::Error> {
                anyhow::bail!("objective unavailable")
            }
        }

        let optimizer = Optimizer::new(Failing, PsoConfig::default().with_seed(0)).unwrap();
        assert!(matches!(optimizer.run_once(), Err(PsoError::Objective(_))));
    }

    #[test]
    fn test_batch_size_comes_from_config() {
        let summary = booth_batch(3, 4).run_many().unwrap();
        assert_eq!(summary.num_runs(), 4);
        assert_eq!(booth_batch(3, 0).run_many().unwrap().num_runs(), 0);
    }

    #[test]
    fn test_objective_name_defaults_to_type_name() {
        let config = PsoConfig::for_benchmark(Benchmark::Booth).with_num_runs(0);
        let optimizer = Optimizer::new(Benchmark::Booth, config).unwrap();
        assert_eq!(optimizer.objective_name(), "Benchmark");

        let renamed = optimizer.with_objective_name("booth");
        assert_eq!(renamed.run_many().unwrap().objective_name, "booth");
    }

    #[test]
    fn test_summary_best_and_mean() {
        let summary = RunSummary {
            objective_name: "Test".to_string(),
            runs: vec![
                run(1.0, 0.0, 3.0),
                run(2.0, 0.0, -1.0),
                run(3.0, 0.0, -1.0),
                run(4.0, 0.0, 1.0),
            ],
        };
        assert_eq!(summary.num_runs(), 4);
        assert_eq!(summary.best_run().unwrap().best_point, Point::new(2.0, 0.0));
        assert_approx_eq!(summary.mean_fitness().unwrap(), 0.5, 1e-12);

        let empty = RunSummary {
            objective_name: "Test".to_string(),
            runs: vec![],
        };
        assert!(empty.best_run().is_none());
        assert!(empty.mean_fitness().is_none());
    }

    #[test]
    fn test_summary_report_text() {
        let summary = RunSummary {
            objective_name: "booth".to_string(),
            runs: vec![run(1.0, 2.0, 3.0), run(-0.5, 0.25, -1.0)],
        };
        let expected = "\
Best Point: (1.0000, 2.0000) with fitness (global minimum): 3.0000000000
Best Point: (-0.5000, 0.2500) with fitness (global minimum): -1.0000000000

Objective: booth
Best of all runs: Best Point: (-0.5000, 0.2500) with fitness (global minimum): -1.0000000000
Mean fitness: 1.0000000000

The PSO was executed 2 times";
        assert_eq!(summary.to_string(), expected);
    }

    #[test]
    fn test_empty_summary_report_text() {
        let summary = RunSummary {
            objective_name: "booth".to_string(),
            runs: vec![],
        };
        assert_eq!(
            summary.to_string(),
            "\nObjective: booth\n\nThe PSO was executed 0 times"
        );
    }

    #[test]
    fn test_report_line_format() {
        let result = RunResult {
            best_point: Point::new(512.0, 404.23187),
            best_fitness: -959.640662720851,
            history: CostHistory::new(),
        };
        assert_eq!(
            result.to_string(),
            "Best Point: (512.0000, 404.2319) with fitness (global minimum): -959.6406627209"
        );
    }
}
