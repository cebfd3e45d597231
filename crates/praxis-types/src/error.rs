use std::fmt;

/// Result type for praxis-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur when parsing domain vocabulary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Resource name is not one of the known collections
    UnknownResource(String),

    /// Sort key is not recognized
    UnknownSortKey(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownResource(name) => write!(f, "Unknown resource: {}", name),
            Error::UnknownSortKey(key) => write!(f, "Unknown sort key: {}", key),
        }
    }
}

impl std::error::Error for Error {}
