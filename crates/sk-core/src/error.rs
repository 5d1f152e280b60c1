use thiserror::Error;

#[derive(Debug, Error)]
pub enum SketchError {
    /// Degenerate knot vectors, too few control points, bad sample counts.
    #[error("Invalid parameterization: {0}")]
    InvalidParameterization(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Window error: {0}")]
    Window(String),
}

impl SketchError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidParameterization(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, SketchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_message() {
        let err = SketchError::invalid("u_num must be >= 2, got 1");
        assert_eq!(
            err.to_string(),
            "Invalid parameterization: u_num must be >= 2, got 1"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "bunny.off");
        let err: SketchError = io.into();
        assert!(matches!(err, SketchError::Io(_)));
    }
}
