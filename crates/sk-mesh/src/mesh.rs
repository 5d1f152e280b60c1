use std::collections::BTreeSet;

use sk_geometry::SurfaceGrid;
use sk_math::{Aabb3, Point3, Transform, Vector3};

/// Indexed triangle mesh with optional per-vertex normals.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    pub positions: Vec<Point3>,
    pub normals: Vec<Vector3>,
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    /// Mesh the cells of a sampled surface grid, two triangles per cell,
    /// with smooth normals.
    pub fn from_grid(grid: &SurfaceGrid) -> Self {
        let mut mesh = Self {
            positions: grid.points().to_vec(),
            normals: Vec::new(),
            indices: grid.triangles().into_iter().flatten().collect(),
        };
        mesh.compute_normals();
        mesh
    }

    /// Number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Corner positions of every triangle.
    pub fn triangles(&self) -> impl Iterator<Item = [Point3; 3]> + '_ {
        self.indices.chunks_exact(3).map(move |tri| {
            [
                self.positions[tri[0] as usize],
                self.positions[tri[1] as usize],
                self.positions[tri[2] as usize],
            ]
        })
    }

    /// Unique undirected edges, each as `(low, high)` vertex indices.
    pub fn edges(&self) -> Vec<(u32, u32)> {
        let mut edges = BTreeSet::new();
        for tri in self.indices.chunks_exact(3) {
            for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                edges.insert((a.min(b), a.max(b)));
            }
        }
        edges.into_iter().collect()
    }

    /// Merge another mesh into this one, offsetting indices appropriately.
    pub fn merge(&mut self, other: &TriangleMesh) {
        let offset = self.positions.len() as u32;
        self.positions.extend_from_slice(&other.positions);
        self.normals.extend_from_slice(&other.normals);
        self.indices.extend(other.indices.iter().map(|&i| i + offset));
    }

    /// Apply a model transform to positions and normals in place.
    pub fn transform(&mut self, transform: &Transform) {
        for p in &mut self.positions {
            *p = transform.transform_point(*p);
        }
        for n in &mut self.normals {
            *n = transform.transform_vector(*n).normalize_or_zero();
        }
    }

    /// Accumulate face normals onto their vertices and normalize.
    ///
    /// Faces are weighted by area. Vertices with no non-degenerate face keep
    /// a zero normal.
    pub fn compute_normals(&mut self) {
        let n = self.positions.len();
        self.normals.clear();
        self.normals.resize(n, Vector3::ZERO);

        for tri in self.indices.chunks_exact(3) {
            let (i0, i1, i2) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let p0 = self.positions[i0];
            let normal = (self.positions[i1] - p0).cross(self.positions[i2] - p0);
            self.normals[i0] += normal;
            self.normals[i1] += normal;
            self.normals[i2] += normal;
        }

        for n in &mut self.normals {
            *n = n.normalize_or_zero();
        }
    }

    /// Axis-aligned bounding box of all positions, or a point box at the
    /// origin for an empty mesh.
    pub fn bounding_box(&self) -> Aabb3 {
        Aabb3::from_points(&self.positions).unwrap_or(Aabb3::new(Point3::ZERO, Point3::ZERO))
    }
}
