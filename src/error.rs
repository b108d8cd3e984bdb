/// Error types for the manuf library
use std::fmt;

/// Result type alias for registry operations
pub type Result<T> = std::result::Result<T, ManufError>;

/// Main error type for registry operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManufError {
    /// The registry source could not be opened or read at all
    Io(String),

    /// The registry source failed partway through scanning
    Scan(String),

    /// Downloading or caching the upstream registry failed
    Fetch(String),

    /// No prefix matched the queried address at any supported specificity
    ///
    /// This is a normal, expected outcome of a lookup, not a crash
    /// condition. It is kept as its own variant so callers can report
    /// "manufacturer not found" distinctly from a registry that could
    /// not be loaded.
    NotFound,
}

impl fmt::Display for ManufError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManufError::Io(msg) => write!(f, "I/O error: {}", msg),
            ManufError::Scan(msg) => write!(f, "Registry scan error: {}", msg),
            ManufError::Fetch(msg) => write!(f, "Registry fetch error: {}", msg),
            ManufError::NotFound => write!(f, "Manufacturer not found in any block"),
        }
    }
}

impl std::error::Error for ManufError {}

impl From<std::io::Error> for ManufError {
    fn from(err: std::io::Error) -> Self {
        ManufError::Io(err.to_string())
    }
}
