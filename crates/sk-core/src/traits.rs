use crate::error::Result;

/// Validate that an entity is well-formed before it is evaluated.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
