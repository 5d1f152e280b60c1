use sk_math::{DMat4, Point3, Vector3};

use crate::view::Projector;

/// Perspective look-at camera.
#[derive(Debug, Clone)]
pub struct Camera {
    pub eye: Point3,
    pub target: Point3,
    pub up: Vector3,
    /// Vertical field of view, radians.
    pub fov_y: f64,
    /// Width over height.
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
}

impl Camera {
    pub fn new(eye: Point3, target: Point3, up: Vector3, fov_y: f64, aspect: f64, near: f64, far: f64) -> Self {
        Self {
            eye,
            target,
            up,
            fov_y,
            aspect,
            near,
            far,
        }
    }

    /// Eye at `(0, 0, distance)` looking down -Z with a 45° field of view.
    pub fn looking_down_z(distance: f64, aspect: f64) -> Self {
        Self::new(
            Point3::new(0.0, 0.0, distance),
            Point3::ZERO,
            Vector3::Y,
            45f64.to_radians(),
            aspect,
            0.1,
            100.0,
        )
    }

    /// World to camera space, camera looking down -Z.
    pub fn view_matrix(&self) -> DMat4 {
        DMat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// OpenGL-style perspective projection (NDC z in `[-1, 1]`).
    pub fn projection_matrix(&self) -> DMat4 {
        DMat4::perspective_rh_gl(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> DMat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Slide eye and target along the view plane's right and up axes.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        let forward = (self.target - self.eye).normalize();
        let right = forward.cross(self.up).normalize();
        let up = right.cross(forward);

        let offset = right * dx + up * dy;
        self.eye += offset;
        self.target += offset;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::looking_down_z(3.0, 1.0)
    }
}

impl Projector for Camera {
    fn clip_matrix(&self) -> DMat4 {
        self.view_projection()
    }
}
