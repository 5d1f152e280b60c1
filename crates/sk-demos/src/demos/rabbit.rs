use std::path::Path;

use log::info;
use sk_core::Result;
use sk_math::Transform;
use sk_mesh::{read_off, TriangleMesh};
use sk_render::{Camera, Canvas, Color, Demo, Framebuffer, PointerEvent};

/// A wireframe OFF model spinning about +Y. Dragging pans the camera.
pub struct RabbitDemo {
    size: (u32, u32),
    mesh: TriangleMesh,
    camera: Camera,
    angle: f64,
    drag_from: Option<(i32, i32)>,
}

impl RabbitDemo {
    pub const DEFAULT_SIZE: (u32, u32) = (1200, 1000);
    pub const DEFAULT_MODEL: &'static str = "Rabbit/bunny10k.off";
    pub const BACKGROUND: Color = Color::rgb(0.2, 0.3, 0.3);
    pub const LINE_COLOR: Color = Color::rgb(0.46, 0.51, 0.64);
    /// World units panned per pixel dragged.
    pub const PAN_SENSITIVITY: f64 = 0.005;

    pub fn open(path: impl AsRef<Path>, size: (u32, u32)) -> Result<Self> {
        let path = path.as_ref();
        let mesh = read_off(path)?;
        info!(
            "loaded {}: {} vertices, {} triangles",
            path.display(),
            mesh.vertex_count(),
            mesh.triangle_count()
        );
        Ok(Self::from_mesh(mesh, size))
    }

    pub fn from_mesh(mesh: TriangleMesh, size: (u32, u32)) -> Self {
        Self {
            size,
            mesh,
            camera: Camera::looking_down_z(3.0, size.0 as f64 / size.1 as f64),
            angle: 0.0,
            drag_from: None,
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }
}

impl Demo for RabbitDemo {
    fn title(&self) -> &str {
        "Rabbit"
    }

    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn render(&mut self, fb: &mut Framebuffer) {
        let model = Transform::rotation_y(self.angle);
        let mut canvas = Canvas::new(fb, &self.camera).with_depth_test();
        canvas.clear(Self::BACKGROUND);
        canvas.wireframe(&self.mesh, &model, 1, Self::LINE_COLOR);
    }

    fn pointer(&mut self, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Pressed { x, y } => {
                self.drag_from = Some((x, y));
                false
            }
            PointerEvent::Moved { x, y } => {
                let Some((x0, y0)) = self.drag_from.replace((x, y)) else {
                    return false;
                };
                // Drag right and the model follows right: the camera moves left.
                self.camera.pan(
                    -((x - x0) as f64) * Self::PAN_SENSITIVITY,
                    ((y - y0) as f64) * Self::PAN_SENSITIVITY,
                );
                true
            }
            PointerEvent::Released { .. } => {
                self.drag_from = None;
                false
            }
        }
    }

    fn animate(&mut self, elapsed: f64) -> bool {
        self.angle = elapsed;
        true
    }
}
