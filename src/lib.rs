pub mod error;
pub mod objective;
pub mod opt_tools;
pub mod optimizer;
pub mod swarm;

pub mod prelude {
    pub use crate::{
        assert_approx_eq,
        error::*,
        objective::*,
        opt_tools::*,
        optimizer::*,
        swarm::{Swarm, bounds::*, config::*, particle::*},
    };

    pub use argmin;
    pub use nalgebra;
}

pub use crate::prelude::*;

/// Asserts that two floats differ by less than an explicit tolerance.
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr, $eps:expr) => {{
        let (a, b, eps) = ($a, $b, $eps);
        let diff = (a - b).abs();
        assert!(
            diff < eps,
            "values not within tolerance: left = {:?}, right = {:?}, |left - right| = {:?}, eps = {:?}",
            a,
            b,
            diff,
            eps
        );
    }};
}
