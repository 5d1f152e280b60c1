use crate::{DMat4, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Affine model transform stored column-major.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Transform {
    pub matrix: [f64; 16],
}

impl Transform {
    pub fn identity() -> Self {
        Self::from_mat4(DMat4::IDENTITY)
    }

    pub fn from_translation(t: Vector3) -> Self {
        Self::from_mat4(DMat4::from_translation(t))
    }

    pub fn from_scale(s: f64) -> Self {
        Self::from_mat4(DMat4::from_scale(Vector3::splat(s)))
    }

    /// Rotation about +Y by `angle` radians.
    pub fn rotation_y(angle: f64) -> Self {
        Self::from_mat4(DMat4::from_rotation_y(angle))
    }

    pub fn from_mat4(m: DMat4) -> Self {
        Self {
            matrix: m.to_cols_array(),
        }
    }

    pub fn to_mat4(&self) -> DMat4 {
        DMat4::from_cols_array(&self.matrix)
    }

    pub fn transform_point(&self, p: Point3) -> Point3 {
        self.to_mat4().transform_point3(p)
    }

    pub fn transform_vector(&self, v: Vector3) -> Vector3 {
        self.to_mat4().transform_vector3(v)
    }

    /// Apply `self` first, then `other`.
    pub fn then(&self, other: &Transform) -> Transform {
        Self::from_mat4(other.to_mat4() * self.to_mat4())
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
