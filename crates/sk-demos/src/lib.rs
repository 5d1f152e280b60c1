//! The sketchbook programs as [`Demo`](sk_render::Demo) implementations,
//! plus the command line and logging setup the binaries share.

pub mod cli;
pub mod demos;
pub mod editor;

pub use cli::{init_logging, run, CommonArgs};
pub use editor::{CurveEditor, EditorState};
