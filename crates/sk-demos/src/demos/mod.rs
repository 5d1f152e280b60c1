//! One module per program.

pub mod bezier;
pub mod bspline_editor;
pub mod bspline_surface;
pub mod fern;
pub mod line;
pub mod rabbit;
pub mod teapot;

pub use bezier::BezierDemo;
pub use bspline_editor::BSplineEditorDemo;
pub use bspline_surface::BSplineSurfaceDemo;
pub use fern::FernDemo;
pub use line::LineDemo;
pub use rabbit::RabbitDemo;
pub use teapot::TeapotDemo;
