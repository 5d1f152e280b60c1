use sk_render::canvas::lift;
use sk_render::{Canvas, Color, Demo, Framebuffer, OrthoView, PointerEvent};

use crate::editor::CurveEditor;

/// Press and drag to add control points to a clamped cubic B-spline.
pub struct BSplineEditorDemo {
    size: (u32, u32),
    editor: CurveEditor,
}

impl BSplineEditorDemo {
    pub const DEFAULT_SIZE: (u32, u32) = (800, 600);
    pub const CURVE_COLOR: Color = Color::RED;
    pub const POINT_COLOR: Color = Color::BLUE;

    pub fn new(size: (u32, u32)) -> Self {
        Self {
            size,
            editor: CurveEditor::new(size.0, size.1),
        }
    }

    pub fn editor(&self) -> &CurveEditor {
        &self.editor
    }
}

impl Demo for BSplineEditorDemo {
    fn title(&self) -> &str {
        "B-Spline Curve"
    }

    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn render(&mut self, fb: &mut Framebuffer) {
        let view = OrthoView::planar(self.editor.view());
        let mut canvas = Canvas::new(fb, &view);
        canvas.clear(Color::WHITE);
        canvas.line_strip(&lift(self.editor.samples()), 2, Self::CURVE_COLOR);
        canvas.points(&lift(self.editor.control_points()), 5, Self::POINT_COLOR);
    }

    fn pointer(&mut self, event: PointerEvent) -> bool {
        self.editor.handle(event)
    }
}
