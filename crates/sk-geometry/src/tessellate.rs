//! Uniform parameter-grid sampling of surfaces.

use sk_core::{Result, SketchError};

use crate::surface::{Surface, SurfaceGrid};

/// Sample a surface on a uniform `u_count × v_count` parameter grid.
pub fn surface_to_grid(surface: &dyn Surface, u_count: usize, v_count: usize) -> Result<SurfaceGrid> {
    if u_count < 2 || v_count < 2 {
        return Err(SketchError::invalid(format!(
            "surface tessellation needs at least 2x2 samples, got {}x{}",
            u_count, v_count
        )));
    }
    let (u_min, u_max) = surface.domain_u();
    let (v_min, v_max) = surface.domain_v();

    let mut points = Vec::with_capacity(u_count * v_count);
    for j in 0..v_count {
        let v = v_min + (v_max - v_min) * j as f64 / (v_count - 1) as f64;
        for i in 0..u_count {
            let u = u_min + (u_max - u_min) * i as f64 / (u_count - 1) as f64;
            points.push(surface.point_at(u, v));
        }
    }

    SurfaceGrid::from_points(u_count, v_count, points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::ToroidalSection;
    use sk_math::DVec3;

    #[test]
    fn test_surface_to_grid_counts() {
        let torus = ToroidalSection::new(DVec3::ZERO, DVec3::Y, 2.0, 0.5);
        let grid = surface_to_grid(&torus, 5, 4).unwrap();
        assert_eq!(grid.points().len(), 20);
        assert_eq!(grid.triangles().len(), 4 * 3 * 2);
        assert!(surface_to_grid(&torus, 1, 4).is_err());
    }
}
