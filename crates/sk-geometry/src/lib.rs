//! Sketchbook geometry: B-spline basis evaluation, curves, surfaces, and
//! iterated function systems.

pub mod curve;
pub mod ifs;
pub mod nurbs;
pub mod point;
pub mod surface;
pub mod tessellate;

pub use curve::Curve;
pub use nurbs::KnotVector;
pub use point::ControlPoint;
pub use surface::{sample_surface, Surface, SurfaceGrid};
