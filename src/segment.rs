use nalgebra::Point3;

use crate::{error::SplineError, knot::Knots};

/// One piece of a Catmull-Rom chain, defined by a window of 4 consecutive control points.
/// The curve runs from the second point to the third; the outer two only shape tangents.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    points: [Point3<f64>; 4],
    knots: Knots,
}

impl Segment {
    /// # Errors
    /// [SplineError::DegenerateSegment] when consecutive points of `window` coincide,
    /// [SplineError::InvalidParameter] when `alpha` is not finite.
    pub fn new(window: [Point3<f64>; 4], alpha: f64) -> Result<Self, SplineError> {
        let knots = Knots::new(&window, alpha)?;
        Ok(Segment { points: window, knots })
    }

    pub fn knots(&self) -> &Knots {
        &self.knots
    }

    pub fn start(&self) -> f64 {
        self.knots.get(1)
    }

    pub fn end(&self) -> f64 {
        self.knots.get(2)
    }

    /// Evaluates the segment at knot parameter `t`. Values outside `[start, end]`
    /// extrapolate the same cubic.
    pub fn at(&self, t: f64) -> Point3<f64> {
        let p = &self.points;

        let a1 = self.blend(0, 1, &p[0], &p[1], t);
        let a2 = self.blend(1, 2, &p[1], &p[2], t);
        let a3 = self.blend(2, 3, &p[2], &p[3], t);

        let b1 = self.blend(0, 2, &a1, &a2, t);
        let b2 = self.blend(1, 3, &a2, &a3, t);

        self.blend(1, 2, &b1, &b2, t)
    }

    /// Samples `num_points` evenly spaced parameters over `[start, end]`, both ends included.
    /// A single sample is taken at `start`.
    pub fn sample(&self, num_points: usize) -> Result<Vec<Point3<f64>>, SplineError> {
        check_num_points(num_points)?;

        let t_start = self.start();
        let t_end = self.end();
        let mut samples = Vec::with_capacity(num_points);

        if num_points == 1 {
            samples.push(self.at(t_start));
            return Ok(samples);
        }

        let step = (t_end - t_start) / (num_points - 1) as f64;
        for i in 0..num_points - 1 {
            samples.push(self.at(t_start + step * i as f64));
        }
        samples.push(self.at(t_end));

        Ok(samples)
    }

    // Linear blend of `x` and `y` over the knot interval [t_i, t_j].
    fn blend(&self, i: usize, j: usize, x: &Point3<f64>, y: &Point3<f64>, t: f64) -> Point3<f64> {
        let t_i = self.knots.get(i);
        let t_j = self.knots.get(j);
        let span = t_j - t_i;

        Point3::from(x.coords * ((t_j - t) / span) + y.coords * ((t - t_i) / span))
    }
}

/// Samples the segment through `p1` and `p2`, with `p0` and `p3` shaping its tangents.
/// # Example
/// ```
/// use nalgebra::Point3;
/// use catmull_rom_chain::evaluate_segment;
///
/// let curve = evaluate_segment(
///     &Point3::new(0.0, 0.0, 0.0),
///     &Point3::new(0.0, 1.0, 0.0),
///     &Point3::new(1.0, 1.0, 0.0),
///     &Point3::new(1.0, 0.0, 0.0),
///     0.5,
///     3,
/// ).unwrap();
/// assert_eq!(3, curve.len());
/// ```
pub fn evaluate_segment(
    p0: &Point3<f64>,
    p1: &Point3<f64>,
    p2: &Point3<f64>,
    p3: &Point3<f64>,
    alpha: f64,
    num_points: usize,
) -> Result<Vec<Point3<f64>>, SplineError> {
    check_num_points(num_points)?;
    Segment::new([*p0, *p1, *p2, *p3], alpha)?.sample(num_points)
}

pub(crate) fn check_num_points(num_points: usize) -> Result<(), SplineError> {
    if num_points == 0 {
        return Err(SplineError::InvalidParameter("num_points must be positive".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    fn assert_point_approx_eq(expected: &Point3<f64>, actual: &Point3<f64>, eps: f64) {
        assert_approx_eq!(expected.x, actual.x, eps);
        assert_approx_eq!(expected.y, actual.y, eps);
        assert_approx_eq!(expected.z, actual.z, eps);
    }

    fn square_window() -> [Point3<f64>; 4] {
        [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
        ]
    }

    fn uneven_window() -> [Point3<f64>; 4] {
        [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 2.0, 1.0),
            Point3::new(9.0, 4.0, -3.0),
        ]
    }

    #[test]
    fn passes_through_interior_points() {
        let eps = 1e-9;
        let [p0, p1, p2, p3] = uneven_window();

        let curve = evaluate_segment(&p0, &p1, &p2, &p3, 0.5, 2).unwrap();

        assert_eq!(2, curve.len());
        assert_point_approx_eq(&p1, &curve[0], eps);
        assert_point_approx_eq(&p2, &curve[1], eps);
    }

    #[test]
    fn square_window_bulges_outwards() {
        let eps = 1e-9;
        let [p0, p1, p2, p3] = square_window();

        let curve = evaluate_segment(&p0, &p1, &p2, &p3, 0.5, 3).unwrap();

        assert_eq!(3, curve.len());
        assert_point_approx_eq(&p1, &curve[0], eps);
        assert_point_approx_eq(&p2, &curve[2], eps);

        // all knot intervals are 1, so the midpoint is (-p0 + 9 p1 + 9 p2 - p3) / 16
        assert_point_approx_eq(&Point3::new(0.5, 1.125, 0.0), &curve[1], eps);
        assert!(curve[1].y > 1.0);
    }

    #[test]
    fn single_sample_is_segment_start() {
        let eps = 1e-9;
        let [p0, p1, p2, p3] = uneven_window();

        let curve = evaluate_segment(&p0, &p1, &p2, &p3, 1.0, 1).unwrap();

        assert_eq!(1, curve.len());
        assert_point_approx_eq(&p1, &curve[0], eps);
    }

    #[test]
    fn collinear_evenly_spaced_is_linear() {
        let eps = 1e-9;
        let window = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(3.0, 0.0, 0.0),
        ];

        for alpha in [0.0, 0.5, 1.0] {
            let curve = Segment::new(window, alpha).unwrap().sample(5).unwrap();
            for (i, point) in curve.iter().enumerate() {
                assert_point_approx_eq(&Point3::new(1.0 + 0.25 * i as f64, 0.0, 0.0), point, eps);
            }
        }
    }

    #[test]
    fn alpha_changes_interior_of_uneven_window() {
        let [p0, p1, p2, p3] = uneven_window();

        let uniform = evaluate_segment(&p0, &p1, &p2, &p3, 0.0, 5).unwrap();
        let centripetal = evaluate_segment(&p0, &p1, &p2, &p3, 0.5, 5).unwrap();
        let chordal = evaluate_segment(&p0, &p1, &p2, &p3, 1.0, 5).unwrap();

        assert!((uniform[2] - centripetal[2]).norm() > 1e-6);
        assert!((centripetal[2] - chordal[2]).norm() > 1e-6);
        assert!((uniform[2] - chordal[2]).norm() > 1e-6);
    }

    #[test]
    fn samples_are_ordered_along_knots() {
        let segment = Segment::new(uneven_window(), 0.5).unwrap();
        let curve = segment.sample(4).unwrap();

        let step = (segment.end() - segment.start()) / 3.0;
        for (i, point) in curve.iter().enumerate() {
            assert_point_approx_eq(&segment.at(segment.start() + step * i as f64), point, 1e-12);
        }
    }

    #[test]
    fn degenerate_window() {
        let p0 = Point3::new(0.0, 0.0, 0.0);
        let p2 = Point3::new(1.0, 1.0, 1.0);
        let p3 = Point3::new(2.0, 2.0, 2.0);

        let curve = evaluate_segment(&p0, &p0, &p2, &p3, 0.5, 10);

        assert_eq!(Err(SplineError::DegenerateSegment { segment: 0, interval: 0 }), curve);
    }

    #[test]
    fn zero_points_error() {
        let [p0, p1, p2, p3] = square_window();

        let curve = evaluate_segment(&p0, &p1, &p2, &p3, 0.5, 0);

        assert!(matches!(curve, Err(SplineError::InvalidParameter(_))));
    }

    #[test]
    fn output_is_finite() {
        let segment = Segment::new(uneven_window(), 0.5).unwrap();

        assert!(segment
            .sample(50)
            .unwrap()
            .iter()
            .all(|p| p.coords.iter().all(|c| c.is_finite())));
    }
}
