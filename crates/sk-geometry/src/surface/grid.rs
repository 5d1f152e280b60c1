//! Sampled surface point grids.

use sk_core::{Result, SketchError};
use sk_math::Point3;

/// A `v_count × u_count` grid of sampled surface points.
///
/// Row `j` holds the samples at the `j`-th v parameter, column `i` the
/// samples at the `i`-th u parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceGrid {
    u_count: usize,
    v_count: usize,
    points: Vec<Point3>,
}

impl SurfaceGrid {
    /// Build from row-major points; `points.len()` must equal `u_count * v_count`.
    pub fn from_points(u_count: usize, v_count: usize, points: Vec<Point3>) -> Result<Self> {
        if u_count < 2 || v_count < 2 {
            return Err(SketchError::invalid(format!(
                "surface grid needs at least 2x2 samples, got {}x{}",
                u_count, v_count
            )));
        }
        if points.len() != u_count * v_count {
            return Err(SketchError::invalid(format!(
                "surface grid {}x{} needs {} points, got {}",
                u_count,
                v_count,
                u_count * v_count,
                points.len()
            )));
        }
        Ok(Self {
            u_count,
            v_count,
            points,
        })
    }

    pub fn u_count(&self) -> usize {
        self.u_count
    }

    pub fn v_count(&self) -> usize {
        self.v_count
    }

    /// Sample at u index `i`, v index `j`.
    pub fn get(&self, i: usize, j: usize) -> Point3 {
        self.points[j * self.u_count + i]
    }

    /// All samples sharing v index `j`.
    pub fn row(&self, j: usize) -> &[Point3] {
        &self.points[j * self.u_count..(j + 1) * self.u_count]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Point3]> {
        self.points.chunks_exact(self.u_count)
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Two triangles per grid cell, indexing into [`points`](Self::points).
    pub fn triangles(&self) -> Vec<[u32; 3]> {
        let idx = |i: usize, j: usize| -> u32 { (j * self.u_count + i) as u32 };
        let mut triangles = Vec::with_capacity((self.u_count - 1) * (self.v_count - 1) * 2);
        for j in 0..self.v_count - 1 {
            for i in 0..self.u_count - 1 {
                triangles.push([idx(i, j), idx(i + 1, j), idx(i + 1, j + 1)]);
                triangles.push([idx(i, j), idx(i + 1, j + 1), idx(i, j + 1)]);
            }
        }
        triangles
    }

    /// Polylines along every row and every column.
    pub fn wire_lines(&self) -> Vec<Vec<Point3>> {
        let mut lines: Vec<Vec<Point3>> = self.rows().map(|r| r.to_vec()).collect();
        for i in 0..self.u_count {
            lines.push((0..self.v_count).map(|j| self.get(i, j)).collect());
        }
        lines
    }
}
