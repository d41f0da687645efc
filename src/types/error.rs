use thiserror::Error;

/// heatgrid error types
#[derive(Error, Debug)]
pub enum HeatgridError {
    /// Failed to parse a store file or level mapping
    #[error("parse error: {0}")]
    Parse(String),

    /// File I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid runtime input (dates, flags)
    #[error("config error: {0}")]
    Config(String),

    /// Device scale factor must be finite and positive
    #[error("invalid scale factor: {0}")]
    InvalidScale(f32),

    /// PNG encoding failed
    #[error("encode error: {0}")]
    Encode(String),
}

/// Result type alias for heatgrid
pub type Result<T> = std::result::Result<T, HeatgridError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HeatgridError::Parse("invalid json".into());
        assert_eq!(err.to_string(), "parse error: invalid json");
    }

    #[test]
    fn test_invalid_scale_display() {
        let err = HeatgridError::InvalidScale(-1.0);
        assert_eq!(err.to_string(), "invalid scale factor: -1");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: HeatgridError = io_err.into();
        assert!(err.to_string().contains("io error"));
    }
}
