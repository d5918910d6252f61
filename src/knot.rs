use nalgebra::{distance, Point3};

use crate::error::SplineError;

/// Knot spacing scheme of a Catmull-Rom spline, expressed through the exponent `alpha`
/// applied to the distance between consecutive control points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Parameterization {
    /// `alpha = 0.0`, knots are evenly spaced regardless of point distances.
    Uniform,
    /// `alpha = 0.5`, avoids cusps and self intersections within a segment.
    Centripetal,
    /// `alpha = 1.0`, knot spacing equals the chord length.
    Chordal,
    Custom(f64),
}

impl Parameterization {
    pub fn alpha(&self) -> f64 {
        match *self {
            Parameterization::Uniform => 0.0,
            Parameterization::Centripetal => 0.5,
            Parameterization::Chordal => 1.0,
            Parameterization::Custom(alpha) => alpha,
        }
    }
}

impl Default for Parameterization {
    fn default() -> Self {
        Parameterization::Centripetal
    }
}

/// Computes the knot following `t_prev`: `t_prev + |p_next - p_prev|^alpha`.
///
/// Coincident points with `alpha > 0` give `t_next == t_prev`. The step itself does not
/// reject this, [Knots::new] does.
/// # Example
/// ```
/// use nalgebra::Point3;
/// use catmull_rom_chain::parameter_step;
///
/// let t = parameter_step(1.0, &Point3::new(0.0, 0.0, 0.0), &Point3::new(3.0, 4.0, 0.0), 1.0);
/// assert_eq!(6.0, t);
/// ```
pub fn parameter_step(t_prev: f64, p_prev: &Point3<f64>, p_next: &Point3<f64>, alpha: f64) -> f64 {
    t_prev + distance(p_prev, p_next).powf(alpha)
}

pub(crate) fn check_alpha(alpha: f64) -> Result<(), SplineError> {
    if alpha.is_finite() {
        Ok(())
    } else {
        Err(SplineError::InvalidParameter(format!("alpha must be finite, got {}", alpha)))
    }
}

pub(crate) fn check_points(points: &[Point3<f64>]) -> Result<(), SplineError> {
    match points.iter().position(|p| !p.coords.iter().all(|c| c.is_finite())) {
        Some(index) => Err(SplineError::InvalidParameter(format!(
            "control point {} has non finite coordinates: {:?}",
            index, points[index]
        ))),
        None => Ok(()),
    }
}

/// The four knot values `t0..t3` of a single 4-point window, with `t0 = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Knots([f64; 4]);

impl Knots {
    /// Parameterizes `window` and checks that no knot interval collapsed.
    /// # Errors
    /// [SplineError::DegenerateSegment] when two consecutive points of the window coincide
    /// (for `alpha != 0`). The reported segment is always 0.
    /// [SplineError::InvalidParameter] when `alpha` or a point coordinate is not finite.
    pub fn new(window: &[Point3<f64>; 4], alpha: f64) -> Result<Self, SplineError> {
        check_alpha(alpha)?;
        check_points(window)?;

        let mut t = [0.0; 4];
        for i in 1..4 {
            t[i] = parameter_step(t[i - 1], &window[i - 1], &window[i], alpha);
        }

        let knots = Knots(t);
        knots.check_spacing()?;
        Ok(knots)
    }

    pub(crate) fn get(&self, index: usize) -> f64 {
        self.0[index]
    }

    pub fn as_array(&self) -> &[f64; 4] {
        &self.0
    }

    fn check_spacing(&self) -> Result<(), SplineError> {
        let degenerate = self.0
            .windows(2)
            .map(|w| w[1] - w[0])
            .position(|spacing| !spacing.is_finite() || spacing <= 0.0);

        match degenerate {
            Some(interval) => Err(SplineError::DegenerateSegment { segment: 0, interval }),
            None => Ok(()),
        }
    }
}
