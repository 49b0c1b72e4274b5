use thiserror::Error;

#[derive(Error, Debug)]
pub enum PsoError {
    #[error("Invalid {axis} bounds: min={min}, max={max}")]
    InvalidBounds {
        axis: &'static str,
        min: f64,
        max: f64,
    },

    #[error("Population size must be at least 1, got {0}")]
    InvalidPopulationSize(usize),

    #[error("PSO coefficient `{name}` must be finite, got {value}")]
    InvalidCoefficient { name: &'static str, value: f64 },

    #[error("Unknown objective function `{0}`")]
    UnknownObjective(String),

    #[error("Objective function error: {0}")]
    Objective(#[from] argmin::core::Error),
}
