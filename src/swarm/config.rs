use crate::prelude::*;

/// Inertia (`w`), cognitive (`c1`) and social (`c2`) weights of the velocity
/// update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PsoCoefficients {
    pub w: f64,
    pub c1: f64,
    pub c2: f64,
}

impl PsoCoefficients {
    /// Van den Bergh's constriction-equivalent parameterisation.
    pub const VAN_DEN_BERGH: Self = Self {
        w: 0.729844,
        c1: 1.496180,
        c2: 1.496180,
    };

    pub fn validate(&self) -> Result<(), PsoError> {
        for (name, value) in [("w", self.w), ("c1", self.c1), ("c2", self.c2)] {
            if !value.is_finite() {
                return Err(PsoError::InvalidCoefficient { name, value });
            }
        }
        Ok(())
    }
}

impl Default for PsoCoefficients {
    fn default() -> Self {
        Self::VAN_DEN_BERGH
    }
}

/// How initial particle positions are drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InitSampling {
    /// Per coordinate, a fair coin picks `u * max` or `u * min` with
    /// `u` uniform in `[0, 1)`. For domains straddling zero this covers the
    /// whole interval, but each side gets half the samples regardless of its
    /// width.
    #[default]
    SplitFromZero,
    /// Uniform over `[min, max]` per coordinate.
    Uniform,
}

/// Configuration for a batch of PSO runs.
#[derive(Clone, Debug, PartialEq)]
pub struct PsoConfig {
    /// Number of particles in the swarm.
    pub population_size: usize,
    /// Fixed iteration count; there is no convergence-based early exit.
    pub max_iterations: usize,
    /// Number of independent runs in a batch.
    pub num_runs: usize,
    pub coefficients: PsoCoefficients,
    /// Search domain. Must match the objective being optimised.
    pub bounds: Bounds,
    pub sampling: InitSampling,
    /// Base seed. Run `k` of a batch is seeded with `seed + k`; `None` seeds
    /// every run from the OS.
    pub seed: Option<u64>,
}

impl PsoConfig {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            population_size: 40,
            max_iterations: 60,
            num_runs: 30,
            coefficients: PsoCoefficients::default(),
            bounds,
            sampling: InitSampling::default(),
            seed: None,
        }
    }

    pub fn for_benchmark(benchmark: Benchmark) -> Self {
        Self::new(benchmark.bounds())
    }

    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.population_size = population_size;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_num_runs(mut self, num_runs: usize) -> Self {
        self.num_runs = num_runs;
        self
    }

    pub fn with_coefficients(mut self, coefficients: PsoCoefficients) -> Self {
        self.coefficients = coefficients;
        self
    }

    pub fn with_sampling(mut self, sampling: InitSampling) -> Self {
        self.sampling = sampling;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), PsoError> {
        if self.population_size == 0 {
            return Err(PsoError::InvalidPopulationSize(self.population_size));
        }
        self.coefficients.validate()?;
        self.bounds.validate()
    }
}

/// The Eggholder domain, `[-512, 512]²`.
impl Default for PsoConfig {
    fn default() -> Self {
        Self::for_benchmark(Benchmark::Eggholder)
    }
}
