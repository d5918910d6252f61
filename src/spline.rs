use log::{debug, trace};
use nalgebra::Point3;

use crate::{
    error::SplineError,
    knot::{check_alpha, check_points, Parameterization},
    segment::{check_num_points, Segment},
};

/// Points per segment used by [SplineParameters::default].
pub const DEFAULT_NUM_POINTS: usize = 100;

/// Per call configuration of a Catmull-Rom chain.
/// - `alpha` - knot parameterization exponent, see [Parameterization],
/// - `num_points` - number of samples produced for every segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplineParameters {
    alpha: f64,
    num_points: usize,
}

impl SplineParameters {
    /// # Errors
    /// [SplineError::InvalidParameter] when `num_points` is 0 or `alpha` is not finite.
    /// `alpha` is not restricted to `[0, 1]`.
    pub fn new(alpha: f64, num_points: usize) -> Result<Self, SplineError> {
        check_alpha(alpha)?;
        check_num_points(num_points)?;
        Ok(SplineParameters { alpha, num_points })
    }

    pub fn with_parameterization(parameterization: Parameterization, num_points: usize) -> Result<Self, SplineError> {
        SplineParameters::new(parameterization.alpha(), num_points)
    }

    pub fn get_alpha(&self) -> f64 {
        self.alpha
    }

    pub fn get_num_points(&self) -> usize {
        self.num_points
    }
}

impl Default for SplineParameters {
    /// Centripetal parameterization with [DEFAULT_NUM_POINTS] samples per segment.
    fn default() -> Self {
        SplineParameters { alpha: Parameterization::Centripetal.alpha(), num_points: DEFAULT_NUM_POINTS }
    }
}

impl From<Parameterization> for SplineParameters {
    /// Uses [DEFAULT_NUM_POINTS] samples per segment. A non finite [Parameterization::Custom]
    /// alpha is rejected later, when [Knots](crate::Knots) are computed.
    fn from(parameterization: Parameterization) -> Self {
        SplineParameters { alpha: parameterization.alpha(), num_points: DEFAULT_NUM_POINTS }
    }
}

/// Builder of Catmull-Rom chains. Holds only its [SplineParameters], so one builder can be
/// reused for any number of control point sequences.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CatmullRom {
    parameters: SplineParameters,
}

impl CatmullRom {
    pub fn new(parameters: SplineParameters) -> Self {
        CatmullRom { parameters }
    }

    pub fn get_parameters(&self) -> &SplineParameters {
        &self.parameters
    }

    /// Builds the whole chain through `points`, see [build_chain].
    pub fn build_chain(&self, points: &[Point3<f64>]) -> Result<Vec<Point3<f64>>, SplineError> {
        let number_of_segments = checked_segment_count(points)?;
        let num_points = self.parameters.num_points;

        debug!(
            "building Catmull-Rom chain: {} control points, {} segments, alpha {}, {} points per segment",
            points.len(),
            number_of_segments,
            self.parameters.alpha,
            num_points
        );

        let mut curve = Vec::with_capacity(number_of_segments * num_points);
        for segment in self.segment_iter(points) {
            curve.extend(segment?.sample(num_points)?);
        }
        Ok(curve)
    }

    /// Same samples as [CatmullRom::build_chain], kept apart per segment.
    pub fn segments(&self, points: &[Point3<f64>]) -> Result<Vec<Vec<Point3<f64>>>, SplineError> {
        let number_of_segments = checked_segment_count(points)?;

        let mut segments = Vec::with_capacity(number_of_segments);
        for segment in self.segment_iter(points) {
            segments.push(segment?.sample(self.parameters.num_points)?);
        }
        Ok(segments)
    }

    fn segment_iter<'a>(&'a self, points: &'a [Point3<f64>]) -> impl Iterator<Item = Result<Segment, SplineError>> + 'a {
        points.windows(4).enumerate().map(move |(i, window)| {
            trace!("segment {}: {:?}", i, window);
            let window = [window[0], window[1], window[2], window[3]];
            Segment::new(window, self.parameters.alpha).map_err(|error| at_segment(error, i))
        })
    }
}

/// Number of segments in the chain through `points`: `points.len() - 3`.
/// Sequences shorter than 4 points have no segments.
pub fn segment_count(points: &[Point3<f64>]) -> usize {
    points.len().saturating_sub(3)
}

/// Samples the Catmull-Rom chain through `points` with `num_points` samples per segment.
/// Segment `i` spans `points[i + 1]` to `points[i + 2]`, so the first and last control
/// points are never part of the curve. Samples at segment joints are not deduplicated.
/// # Errors
/// - [SplineError::InsufficientControlPoints] for fewer than 4 points,
/// - [SplineError::DegenerateSegment] when consecutive points coincide and `alpha != 0`,
/// - [SplineError::InvalidParameter] for `num_points == 0`, non finite `alpha` or a control
///   point with non finite coordinates.
/// # Example
/// ```
/// use nalgebra::Point3;
/// use catmull_rom_chain::build_chain;
///
/// let points = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 2.0, 0.0),
///     Point3::new(3.0, 2.0, 1.0),
///     Point3::new(4.0, 0.0, 1.0),
///     Point3::new(6.0, 1.0, 2.0),
/// ];
/// let curve = build_chain(&points, 0.5, 10).unwrap();
/// assert_eq!(20, curve.len());
/// ```
pub fn build_chain(points: &[Point3<f64>], alpha: f64, num_points: usize) -> Result<Vec<Point3<f64>>, SplineError> {
    CatmullRom::new(SplineParameters::new(alpha, num_points)?).build_chain(points)
}

fn checked_segment_count(points: &[Point3<f64>]) -> Result<usize, SplineError> {
    check_points(points)?;
    match segment_count(points) {
        0 => Err(SplineError::InsufficientControlPoints { found: points.len() }),
        count => Ok(count),
    }
}

fn at_segment(error: SplineError, segment: usize) -> SplineError {
    match error {
        SplineError::DegenerateSegment { interval, .. } => SplineError::DegenerateSegment { segment, interval },
        other => other,
    }
}
