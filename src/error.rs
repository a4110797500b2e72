//! Crate-level error types.

use std::fmt;

/// Errors produced by the pickview crate.
///
/// Numerical degeneracy inside the per-frame geometry never surfaces here;
/// those paths fall back to documented sentinel values instead.
#[derive(Debug)]
pub enum ViewerError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Mesh data with inconsistent counts or out-of-range indices.
    InvalidMesh(String),
    /// A mesh source has no mesh under the requested identifier.
    UnknownMesh(String),
    /// Window dimensions outside the configured limits.
    InvalidWindowSize {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },
    /// Malformed command-line arguments.
    InvalidArgs(String),
}

impl fmt::Display for ViewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidMesh(msg) => write!(f, "invalid mesh: {msg}"),
            Self::UnknownMesh(id) => write!(f, "unknown mesh: {id}"),
            Self::InvalidWindowSize { width, height } => {
                write!(f, "invalid window size: {width}x{height}")
            }
            Self::InvalidArgs(msg) => write!(f, "invalid arguments: {msg}"),
        }
    }
}

impl std::error::Error for ViewerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ViewerError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
