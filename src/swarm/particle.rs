use rand::Rng;

use crate::prelude::*;

/// Number of coordinates in the search space.
pub const DIMENSIONS: usize = 2;

/// A location (or velocity) in the 2-dimensional search space.
pub type Point = nalgebra::Vector2<f64>;

/// Orders fitness values for minimisation, with every non-finite value (NaN,
/// ±inf) ranked as +inf so that it can never displace a stored best.
pub fn fitness_rank(fitness: f64) -> f64 {
    if fitness.is_finite() {
        fitness
    } else {
        f64::INFINITY
    }
}

/// A single candidate solution.
///
/// The personal best fitness is not cached; it is re-evaluated from
/// `personal_best` whenever it is needed, so it always agrees with the
/// objective.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Point,
    pub velocity: Point,
    pub personal_best: Point,
}

impl Particle {
    /// Creates a particle at `position` with zero velocity and a personal
    /// best at the origin.
    pub fn new(position: Point) -> Self {
        Self {
            position,
            velocity: Point::zeros(),
            personal_best: Point::zeros(),
        }
    }

    pub fn evaluate_fitness<O: Objective>(&self, objective: &O) -> Result<f64, PsoError> {
        Ok(objective.cost(&self.position)?)
    }

    pub fn evaluate_best_fitness<O: Objective>(&self, objective: &O) -> Result<f64, PsoError> {
        Ok(objective.cost(&self.personal_best)?)
    }

    /// Moves the personal best to the current position if `current_fitness`
    /// is strictly better than the personal best's fitness. Returns whether
    /// the personal best changed.
    pub fn update_personal_best<O: Objective>(
        &mut self,
        current_fitness: f64,
        objective: &O,
    ) -> Result<bool, PsoError> {
        let best_fitness = self.evaluate_best_fitness(objective)?;
        if fitness_rank(current_fitness) < fitness_rank(best_fitness) {
            self.personal_best = self.position;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub fn check_bounds(&mut self, bounds: &Bounds) {
        bounds.check_bounds(&mut self.position, &mut self.velocity);
    }

    /// Recomputes the velocity from inertia, the pull towards the personal
    /// best and the pull towards `global_best`. Two fresh uniform draws
    /// (`r1` then `r2`) are taken per dimension.
    pub fn update_velocity<R: Rng + ?Sized>(
        &mut self,
        global_best: &Point,
        coefficients: &PsoCoefficients,
        rng: &mut R,
    ) {
        let PsoCoefficients { w, c1, c2 } = *coefficients;
        for i in 0..DIMENSIONS {
            let r1: f64 = rng.random();
            let r2: f64 = rng.random();
            let inertia = w * self.velocity[i];
            let cognitive = c1 * r1 * (self.personal_best[i] - self.position[i]);
            let social = c2 * r2 * (global_best[i] - self.position[i]);
            self.velocity[i] = inertia + cognitive + social;
        }
    }

    pub fn advance(&mut self) {
        self.position += self.velocity;
    }
}
