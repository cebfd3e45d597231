use praxis_engine::FieldError;
use praxis_types::ItemStatus;
use std::fmt;

/// Result type for praxis-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Result type returned by remote clients
pub type RemoteResult<T> = std::result::Result<T, RemoteError>;

/// Why a remote call failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteErrorKind {
    /// Transport never produced a response
    Network,
    /// Remote answered with an error status
    Server(u16),
    NotFound,
    /// Remote refused the payload
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteError {
    pub kind: RemoteErrorKind,
    pub message: String,
}

impl RemoteError {
    pub fn new(kind: RemoteErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(RemoteErrorKind::Network, message)
    }

    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::new(RemoteErrorKind::Server(status), message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(RemoteErrorKind::NotFound, message)
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self::new(RemoteErrorKind::Rejected, message)
    }

    /// Transient failures worth offering a retry for
    pub fn is_retryable(&self) -> bool {
        match self.kind {
            RemoteErrorKind::Network => true,
            RemoteErrorKind::Server(status) => status >= 500,
            RemoteErrorKind::NotFound | RemoteErrorKind::Rejected => false,
        }
    }
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            RemoteErrorKind::Network => write!(f, "Network error: {}", self.message),
            RemoteErrorKind::Server(status) => write!(f, "Server error ({}): {}", status, self.message),
            RemoteErrorKind::NotFound => write!(f, "Not found: {}", self.message),
            RemoteErrorKind::Rejected => write!(f, "Rejected: {}", self.message),
        }
    }
}

impl std::error::Error for RemoteError {}

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Remote call failed
    Remote(RemoteError),

    /// Draft failed validation; nothing was sent
    Validation(Vec<FieldError>),

    /// Status cannot be flipped by the two-state toggle
    InvalidTransition(ItemStatus),

    /// Local key-value storage failed
    Storage(String),

    /// Configuration error
    Config(String),

    /// Store layer error
    Index(praxis_index::Error),

    /// IO operation failed
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Remote(err) => write!(f, "{}", err),
            Error::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{}: {}", err.field, err.message)?;
                }
                Ok(())
            }
            Error::InvalidTransition(status) => write!(
                f,
                "Cannot toggle an item that is {}; only active and draft items can be toggled",
                status.label().to_lowercase()
            ),
            Error::Storage(msg) => write!(f, "Storage error: {}", msg),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Index(err) => write!(f, "Index error: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Remote(err) => Some(err),
            Error::Index(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Validation(_) | Error::InvalidTransition(_) | Error::Storage(_) | Error::Config(_) => {
                None
            }
        }
    }
}

impl From<RemoteError> for Error {
    fn from(err: RemoteError) -> Self {
        Error::Remote(err)
    }
}

impl From<praxis_index::Error> for Error {
    fn from(err: praxis_index::Error) -> Self {
        Error::Index(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Storage(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
