use crate::prelude::*;

const AXIS_NAMES: [&str; 2] = ["x", "y"];

/// Rectangular search domain `[min_x, max_x] × [min_y, max_y]`.
///
/// A domain is always paired with an objective; see [`Benchmark::bounds`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self {
            min: Point::new(min_x, min_y),
            max: Point::new(max_x, max_y),
        }
    }

    /// Same interval on both axes.
    pub fn square(min: f64, max: f64) -> Self {
        Self::new(min, max, min, max)
    }

    pub fn validate(&self) -> Result<(), PsoError> {
        for (i, &axis) in AXIS_NAMES.iter().enumerate() {
            let (min, max) = (self.min[i], self.max[i]);
            if !min.is_finite() || !max.is_finite() || min > max {
                return Err(PsoError::InvalidBounds { axis, min, max });
            }
        }
        Ok(())
    }

    pub fn contains(&self, p: &Point) -> bool {
        (0..DIMENSIONS).all(|i| p[i] >= self.min[i] && p[i] <= self.max[i])
    }

    /// Clamps `position` into the domain and zeroes any velocity component
    /// that lies outside the *position* bounds of its axis.
    ///
    /// There is no separate velocity cap: on `[-10, 10]` a velocity of `11.0`
    /// is reset to zero while `9.0` survives, whatever the particle's position.
    pub fn check_bounds(&self, position: &mut Point, velocity: &mut Point) {
        for i in 0..DIMENSIONS {
            if position[i] > self.max[i] {
                position[i] = self.max[i];
            } else if position[i] < self.min[i] {
                position[i] = self.min[i];
            }

            if velocity[i] > self.max[i] || velocity[i] < self.min[i] {
                velocity[i] = 0.0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case((12.0, 3.0), (10.0, 3.0); "above max x")]
    #[test_case((-12.0, 3.0), (-10.0, 3.0); "below min x")]
    #[test_case((0.5, 99.0), (0.5, 10.0); "above max y")]
    #[test_case((-11.0, -11.0), (-10.0, -10.0); "below both")]
    #[test_case((4.0, -2.0), (4.0, -2.0); "inside")]
    fn test_check_bounds_clamps_position((px, py): (f64, f64), (ex, ey): (f64, f64)) {
        let bounds = Bounds::square(-10.0, 10.0);
        let mut position = Point::new(px, py);
        let mut velocity = Point::zeros();
        bounds.check_bounds(&mut position, &mut velocity);
        assert_eq!(position, Point::new(ex, ey));
    }

    // Velocity is compared against the position bounds, not a velocity cap.
    #[test_case((11.0, 9.0), (0.0, 9.0); "x too fast")]
    #[test_case((-10.5, -10.0), (0.0, -10.0); "x too fast negative, y on the edge")]
    #[test_case((3.0, 25.0), (3.0, 0.0); "y too fast")]
    fn test_check_bounds_resets_velocity((vx, vy): (f64, f64), (ex, ey): (f64, f64)) {
        let bounds = Bounds::square(-10.0, 10.0);
        let mut position = Point::new(9.5, 9.5);
        let mut velocity = Point::new(vx, vy);
        bounds.check_bounds(&mut position, &mut velocity);
        assert_eq!(velocity, Point::new(ex, ey));
    }

    #[test]
    fn test_velocity_limit_uses_asymmetric_position_bounds() {
        // McCormick domain: x in [-1.5, 4]
        let bounds = Bounds::new(-1.5, 4.0, -3.0, 4.0);
        let mut position = Point::new(0.0, 0.0);
        let mut velocity = Point::new(-2.0, -2.0);
        bounds.check_bounds(&mut position, &mut velocity);
        assert_eq!(velocity, Point::new(0.0, -2.0));
    }

    #[test]
    fn test_validate_rejects_inverted_axis() {
        let err = Bounds::new(-1.0, 1.0, 5.0, -5.0).validate().unwrap_err();
        assert!(matches!(err, PsoError::InvalidBounds { axis: "y", .. }));
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        assert!(Bounds::new(f64::NEG_INFINITY, 1.0, 0.0, 1.0).validate().is_err());
        assert!(Bounds::new(0.0, f64::NAN, 0.0, 1.0).validate().is_err());
    }

    #[test]
    fn test_degenerate_interval_is_valid() {
        assert!(Bounds::new(2.0, 2.0, -1.0, 1.0).validate().is_ok());
    }
}
