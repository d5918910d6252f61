//! Catmull-Rom spline chains through an ordered sequence of 3D control points.
//!
//! Every window of 4 consecutive control points defines one segment running between its
//! two inner points, so `n` control points give `n - 3` segments and the first and last
//! points only shape the tangents at the chain ends. Knot spacing is controlled by `alpha`:
//! 0.0 for uniform, 0.5 for centripetal and 1.0 for chordal parameterization.
//!
//! # Example
//! ```
//! use nalgebra::Point3;
//! use catmull_rom_chain::{CatmullRom, Parameterization, SplineParameters};
//! use assert_approx_eq::assert_approx_eq;
//!
//! let points = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//!     Point3::new(1.0, 1.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//! ];
//! let parameters = SplineParameters::with_parameterization(Parameterization::Centripetal, 3).unwrap();
//! let curve = CatmullRom::new(parameters).build_chain(&points).unwrap();
//!
//! assert_eq!(3, curve.len());
//! assert_approx_eq!(1.0, curve[0].y, 1e-9);
//! assert_approx_eq!(1.125, curve[1].y, 1e-9);
//! assert_approx_eq!(1.0, curve[2].x, 1e-9);
//! ```

mod error;
mod knot;
mod segment;
mod spline;

pub use error::SplineError;
pub use knot::{parameter_step, Knots, Parameterization};
pub use segment::{evaluate_segment, Segment};
pub use spline::{build_chain, segment_count, CatmullRom, SplineParameters, DEFAULT_NUM_POINTS};

/// A control point of the chain. Only read, never modified.
pub type ControlPoint = nalgebra::Point3<f64>;

/// A sampled point of the produced curve.
pub type CurvePoint = nalgebra::Point3<f64>;
