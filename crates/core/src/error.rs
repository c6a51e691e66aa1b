//! Error types for the rmlines decoder.

use thiserror::Error;

/// Violations of the `.lines` binary layout.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("file too short to be a valid .lines file: {len} bytes")]
    TooShort { len: usize },

    #[error("not a valid .lines file: {0}")]
    InvalidHeader(String),

    #[error("unsupported .lines version '{0}'")]
    UnsupportedVersion(char),

    #[error("truncated {context} at offset {offset}")]
    Truncated { offset: usize, context: &'static str },
}

/// Rejected decoder configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid target dimensions {width}x{height}")]
    InvalidDimensions { width: f64, height: f64 },
}

/// Primary error type for decoding operations.
#[derive(Error, Debug)]
pub enum LinesError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl LinesError {
    /// The format violation behind this error, if any.
    pub const fn as_format(&self) -> Option<&FormatError> {
        match self {
            Self::Format(e) => Some(e),
            _ => None,
        }
    }
}

/// Convenience Result type alias for LinesError.
pub type Result<T> = std::result::Result<T, LinesError>;
