use std::{f64::consts::PI, fmt, str::FromStr};

pub use argmin::core::CostFunction;
use argmin::core::Error as ArgminError;

use crate::prelude::*;

/// Marker trait for scalar objectives over the 2-dimensional search space.
/// Lower values are better.
///
/// Any `argmin` cost function taking a [`Point`] and returning `f64` is an
/// objective; implement [`CostFunction`] rather than this trait.
pub trait Objective: CostFunction<Param = Point, Output = f64> {}

/// Automatically implement for any type that satisfies the bounds
impl<T> Objective for T where T: CostFunction<Param = Point, Output = f64> {}

/// Wraps a plain `f(x, y)` function or closure as an objective.
#[derive(Clone, Copy)]
pub struct FnObjective<F> {
    f: F,
}

impl<F> FnObjective<F>
where
    F: Fn(f64, f64) -> f64,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> CostFunction for FnObjective<F>
where
    F: Fn(f64, f64) -> f64,
{
    type Param = Point;
    type Output = f64;

    fn cost(&self, p: &Self::Param) -> Result<Self::Output, ArgminError> {
        Ok((self.f)(p.x, p.y))
    }
}

/// Classic 2-dimensional test functions, each paired with its usual domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Benchmark {
    Booth,
    CrossInTray,
    HolderTable,
    McCormick,
    Eggholder,
}

impl Benchmark {
    pub const ALL: [Benchmark; 5] = [
        Benchmark::Booth,
        Benchmark::CrossInTray,
        Benchmark::HolderTable,
        Benchmark::McCormick,
        Benchmark::Eggholder,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Benchmark::Booth => "booth",
            Benchmark::CrossInTray => "cross-in-tray",
            Benchmark::HolderTable => "holder-table",
            Benchmark::McCormick => "mccormick",
            Benchmark::Eggholder => "eggholder",
        }
    }

    pub fn bounds(&self) -> Bounds {
        match self {
            Benchmark::Booth | Benchmark::CrossInTray | Benchmark::HolderTable => {
                Bounds::square(-10.0, 10.0)
            }
            Benchmark::McCormick => Bounds::new(-1.5, 4.0, -3.0, 4.0),
            Benchmark::Eggholder => Bounds::square(-512.0, 512.0),
        }
    }

    /// Published global minimum: one minimising point and its value (rounded
    /// as usually quoted). Cross-in-tray and Holder table have four symmetric
    /// minimisers; the one in the positive quadrant is returned.
    pub fn known_minimum(&self) -> (Point, f64) {
        match self {
            Benchmark::Booth => (Point::new(1.0, 3.0), 0.0),
            Benchmark::CrossInTray => (Point::new(1.34941, 1.34941), -2.06261),
            Benchmark::HolderTable => (Point::new(8.05502, 9.66459), -19.2085),
            Benchmark::McCormick => (Point::new(-0.54719, -1.54719), -1.9133),
            Benchmark::Eggholder => (Point::new(512.0, 404.2319), -959.6407),
        }
    }

    pub fn evaluate(&self, x: f64, y: f64) -> f64 {
        match self {
            Benchmark::Booth => booth(x, y),
            Benchmark::CrossInTray => cross_in_tray(x, y),
            Benchmark::HolderTable => holder_table(x, y),
            Benchmark::McCormick => mccormick(x, y),
            Benchmark::Eggholder => eggholder(x, y),
        }
    }
}

impl fmt::Display for Benchmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Benchmark {
    type Err = PsoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        Benchmark::ALL
            .into_iter()
            .find(|b| b.name() == normalized || b.name().replace('-', "") == normalized)
            .ok_or_else(|| PsoError::UnknownObjective(s.to_string()))
    }
}

impl CostFunction for Benchmark {
    type Param = Point;
    type Output = f64;

    fn cost(&self, p: &Self::Param) -> Result<Self::Output, ArgminError> {
        Ok(self.evaluate(p.x, p.y))
    }
}

pub fn booth(x: f64, y: f64) -> f64 {
    (x + 2.0 * y - 7.0).powi(2) + (2.0 * x + y - 5.0).powi(2)
}

pub fn cross_in_tray(x: f64, y: f64) -> f64 {
    let r = (x * x + y * y).sqrt();
    let inner = (x.sin() * y.sin() * (100.0 - r / PI).abs().exp()).abs() + 1.0;
    -0.0001 * inner.powf(0.1)
}

pub fn holder_table(x: f64, y: f64) -> f64 {
    let r = (x * x + y * y).sqrt();
    -(x.sin() * y.cos() * (1.0 - r / PI).abs().exp()).abs()
}

pub fn mccormick(x: f64, y: f64) -> f64 {
    (x + y).sin() + (x - y).powi(2) - 1.5 * x + 2.5 * y + 1.0
}

pub fn eggholder(x: f64, y: f64) -> f64 {
    -(y + 47.0) * (x / 2.0 + (y + 47.0)).abs().sqrt().sin()
        - x * (x - (y + 47.0)).abs().sqrt().sin()
}
