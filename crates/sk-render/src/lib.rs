//! Software rendering for the sketchbook demos.
//!
//! Everything draws into a [`Framebuffer`] through a [`Canvas`]. Frames can be
//! written to PPM with [`run_headless`] or shown in a window with
//! `run_windowed` (enabled by the `window` feature).

pub mod app;
pub mod camera;
pub mod canvas;
pub mod color;
pub mod framebuffer;
pub mod input;
pub mod raster;
pub mod shading;
pub mod view;
#[cfg(feature = "window")]
pub mod window;

pub use app::{render_frame, run_headless, Demo};
pub use camera::Camera;
pub use canvas::Canvas;
pub use color::Color;
pub use framebuffer::Framebuffer;
pub use input::{PointerEvent, PointerTracker};
pub use shading::{DirectionalLight, Material};
pub use view::{OrthoView, Projector, ScreenPoint};
#[cfg(feature = "window")]
pub use window::run_windowed;
