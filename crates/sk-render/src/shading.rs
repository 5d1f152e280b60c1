//! Fixed-function style lighting: one directional light, one material.

use sk_math::Vector3;

use crate::Color;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
    pub shininess: f32,
}

impl Default for Material {
    /// The OpenGL default material.
    fn default() -> Self {
        Self {
            ambient: Color::gray(0.2),
            diffuse: Color::gray(0.8),
            specular: Color::BLACK,
            shininess: 0.0,
        }
    }
}

/// Light arriving from `direction` (towards the light, like a `w = 0`
/// `GL_POSITION`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub direction: Vector3,
    pub color: Color,
}

impl DirectionalLight {
    pub fn new(direction: Vector3) -> Self {
        Self {
            direction: direction.normalize_or_zero(),
            color: Color::WHITE,
        }
    }

    /// Blinn-Phong color of a surface point with unit `normal`, seen from
    /// `view_dir` (unit, pointing towards the viewer).
    pub fn shade(&self, material: &Material, normal: Vector3, view_dir: Vector3) -> Color {
        let n_dot_l = normal.dot(self.direction).max(0.0) as f32;
        let mut color = material.ambient + material.diffuse * self.color * n_dot_l;
        if n_dot_l > 0.0 && material.shininess > 0.0 {
            let half = (self.direction + view_dir).normalize_or_zero();
            let n_dot_h = normal.dot(half).max(0.0) as f32;
            color = color + material.specular * self.color * n_dot_h.powf(material.shininess);
        }
        color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teapot_material() -> Material {
        Material {
            ambient: Color::BLACK,
            diffuse: Color::gray(0.5),
            specular: Color::WHITE,
            shininess: 50.0,
        }
    }

    #[test]
    fn test_facing_light_is_brightest() {
        let light = DirectionalLight::new(Vector3::new(1.0, 1.0, 1.0));
        let m = teapot_material();
        let lit = light.shade(&m, light.direction, Vector3::Z);
        let grazing = light.shade(&m, Vector3::new(1.0, -1.0, 0.0).normalize(), Vector3::Z);
        assert!(lit.r > grazing.r);
    }

    #[test]
    fn test_back_face_gets_ambient_only() {
        let light = DirectionalLight::new(Vector3::Z);
        let m = Material {
            ambient: Color::gray(0.1),
            ..teapot_material()
        };
        let c = light.shade(&m, -Vector3::Z, Vector3::Z);
        assert_eq!(c, Color::gray(0.1));
    }

    #[test]
    fn test_specular_highlight() {
        let light = DirectionalLight::new(Vector3::Z);
        let c = light.shade(&teapot_material(), Vector3::Z, Vector3::Z);
        assert!((c.r - 1.5).abs() < 1e-6);
    }
}
