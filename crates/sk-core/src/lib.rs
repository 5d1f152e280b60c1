pub mod error;
pub mod tolerance;
pub mod traits;

pub use error::{Result, SketchError};
pub use tolerance::Tolerance;
