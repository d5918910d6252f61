use thiserror::Error;

/// Errors returned while building a Catmull-Rom chain.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplineError {
    /// A chain needs at least 4 control points: 2 ghost points and 2 interpolated ones.
    #[error("Error in Spline: at least 4 control points are required, got {found}")]
    InsufficientControlPoints { found: usize },

    /// Two consecutive control points of a window coincide, so one knot interval is zero.
    #[error("Error in Spline: segment {segment} is degenerate, knot interval {interval} has zero length")]
    DegenerateSegment { segment: usize, interval: usize },

    #[error("Error in Spline: invalid parameter: {0}")]
    InvalidParameter(String),
}
