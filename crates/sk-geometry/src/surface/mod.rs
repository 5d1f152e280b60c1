//! Surface trait, sampled grids, and implementations.

mod bspline;
mod grid;
mod revolution;
mod toroidal;
mod tube;

use sk_math::Point3;

pub use bspline::{sample_surface, BSplineSurface};
pub use grid::SurfaceGrid;
pub use revolution::RevolvedSurface;
pub use toroidal::ToroidalSection;
pub use tube::TubeSurface;

/// Trait for parametric surfaces in 3D space.
pub trait Surface: Send + Sync {
    /// Evaluate the surface at parameters `(u, v)`.
    fn point_at(&self, u: f64, v: f64) -> Point3;

    /// Return the u-parameter domain `(u_min, u_max)`.
    fn domain_u(&self) -> (f64, f64);

    /// Return the v-parameter domain `(v_min, v_max)`.
    fn domain_v(&self) -> (f64, f64);
}
