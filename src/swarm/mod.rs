use rand::Rng;
use rand_distr::{Distribution, Uniform};
use tracing::warn;

use crate::prelude::*;

pub mod bounds;
pub mod config;
pub mod particle;

#[cfg(test)]
mod tests;

/// The particle population of a single run together with the swarm-wide best.
///
/// A `Swarm` is built fresh for every run, so nothing leaks from one run into
/// the next. All randomness comes from the generator passed to [`Swarm::init`]
/// and [`Swarm::step`].
#[derive(Clone, Debug)]
pub struct Swarm {
    particles: Vec<Particle>,
    global_best: Point,
    global_fitness: f64,
    bounds: Bounds,
    coefficients: PsoCoefficients,
    population_size: usize,
    sampling: InitSampling,
}

impl Swarm {
    /// Creates an empty swarm with the global best reset to the origin and
    /// an infinitely bad global fitness.
    pub fn new(config: &PsoConfig) -> Self {
        Self {
            particles: Vec::with_capacity(config.population_size),
            global_best: Point::zeros(),
            global_fitness: f64::INFINITY,
            bounds: config.bounds,
            coefficients: config.coefficients,
            population_size: config.population_size,
            sampling: config.sampling,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn global_best(&self) -> Point {
        self.global_best
    }

    pub fn global_fitness(&self) -> f64 {
        self.global_fitness
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Populates the swarm and evaluates the initial positions.
    ///
    /// The evaluation pass is the clamp / evaluate / refresh prefix of
    /// [`Swarm::step`]; it draws no random numbers and repeating it is a
    /// no-op, so the first iteration behaves as if it had not happened. It
    /// makes the global best meaningful even when no iteration runs.
    pub fn init<O, R>(&mut self, objective: &O, rng: &mut R) -> Result<(), PsoError>
    where
        O: Objective,
        R: Rng + ?Sized,
    {
        self.global_best = Point::zeros();
        self.global_fitness = f64::INFINITY;
        self.particles.clear();

        let sampler = PositionSampler::new(self.sampling, &self.bounds)?;
        for _ in 0..self.population_size {
            let position = sampler.sample(rng);
            self.particles.push(Particle::new(position));
        }

        self.check_bounds();
        self.evaluate_particles(objective)?;
        self.refresh_global_best(objective)?;
        Ok(())
    }

    /// Runs one iteration of the update protocol.
    ///
    /// Order matters: clamping precedes evaluation, and the global best is
    /// refreshed before any velocity is recomputed.
    pub fn step<O, R>(&mut self, objective: &O, rng: &mut R) -> Result<(), PsoError>
    where
        O: Objective,
        R: Rng + ?Sized,
    {
        self.check_bounds();
        self.evaluate_particles(objective)?;
        self.refresh_global_best(objective)?;
        self.update_velocities(rng);
        self.advance_particles();
        Ok(())
    }

    pub fn check_bounds(&mut self) {
        for p in self.particles.iter_mut() {
            p.check_bounds(&self.bounds);
        }
    }

    /// Evaluates every particle at its current position and updates its
    /// personal best.
    pub fn evaluate_particles<O: Objective>(&mut self, objective: &O) -> Result<(), PsoError> {
        for p in self.particles.iter_mut() {
            let fitness = p.evaluate_fitness(objective)?;
            if !fitness.is_finite() {
                warn!(
                    x = p.position.x,
                    y = p.position.y,
                    fitness,
                    "objective returned a non-finite value"
                );
            }
            p.update_personal_best(fitness, objective)?;
        }
        Ok(())
    }

    /// Scans every particle's personal best and keeps the strictly best one.
    /// Returns whether the global best moved.
    pub fn refresh_global_best<O: Objective>(&mut self, objective: &O) -> Result<bool, PsoError> {
        let mut improved = false;
        for p in self.particles.iter() {
            let best_fitness = fitness_rank(p.evaluate_best_fitness(objective)?);
            if best_fitness < self.global_fitness {
                self.global_best = p.personal_best;
                self.global_fitness = best_fitness;
                improved = true;
            }
        }
        Ok(improved)
    }

    pub fn update_velocities<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for p in self.particles.iter_mut() {
            p.update_velocity(&self.global_best, &self.coefficients, rng);
        }
    }

    pub fn advance_particles(&mut self) {
        for p in self.particles.iter_mut() {
            p.advance();
        }
    }
}

/// Draws initial positions according to an [`InitSampling`] strategy.
enum PositionSampler {
    SplitFromZero { min: Point, max: Point },
    Uniform([Uniform<f64>; DIMENSIONS]),
}

impl PositionSampler {
    fn new(sampling: InitSampling, bounds: &Bounds) -> Result<Self, PsoError> {
        match sampling {
            InitSampling::SplitFromZero => Ok(Self::SplitFromZero {
                min: bounds.min,
                max: bounds.max,
            }),
            InitSampling::Uniform => {
                let axis = |i: usize, name: &'static str| {
                    Uniform::<f64>::new_inclusive(bounds.min[i], bounds.max[i]).map_err(|_| {
                        PsoError::InvalidBounds {
                            axis: name,
                            min: bounds.min[i],
                            max: bounds.max[i],
                        }
                    })
                };
                Ok(Self::Uniform([axis(0, "x")?, axis(1, "y")?]))
            }
        }
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        match self {
            Self::SplitFromZero { min, max } => Point::from_fn(|i, _| {
                let u: f64 = rng.random();
                if rng.random_bool(0.5) { u * max[i] } else { u * min[i] }
            }),
            Self::Uniform(axes) => Point::from_fn(|i, _| axes[i].sample(rng)),
        }
    }
}
