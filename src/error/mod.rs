//! Error types for path-mirroring copies

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit code for rejected invocations (bad flag, collision, missing marker)
pub const EXIT_VALIDATION: u8 = 1;

/// Exit code for filesystem failures
pub const EXIT_IO: u8 = 2;

/// Filesystem step that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoOperation {
    Canonicalize,
    CreateDir,
    Copy,
}

impl fmt::Display for IoOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IoOperation::Canonicalize => "resolve",
            IoOperation::CreateDir => "create directory",
            IoOperation::Copy => "copy to",
        };
        f.write_str(name)
    }
}

/// Broad classification of a [`MirrorError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorErrorKind {
    Validation,
    Io,
}

/// Main error type for mirror operations
#[derive(Debug, thiserror::Error)]
pub enum MirrorError {
    #[error("Invalid --extern value '{value}': expected 'yes' or 'no'")]
    InvalidMode { value: String },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Destination {} is an existing file", path.display())]
    DestinationIsFile { path: PathBuf },

    #[error("Marker '{marker}' not found in {}", path.display())]
    MarkerNotFound { marker: &'static str, path: PathBuf },

    #[error("Path is not valid UTF-8: {}", path.display())]
    NonUtf8Path { path: PathBuf },

    #[error("Input has no file name: {}", path.display())]
    MissingFileName { path: PathBuf },

    #[error("Failed to {operation} {}: {source}", path.display())]
    Io {
        operation: IoOperation,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl MirrorError {
    pub fn invalid_mode(value: impl Into<String>) -> Self {
        Self::InvalidMode {
            value: value.into(),
        }
    }

    pub fn destination_is_file(path: impl Into<PathBuf>) -> Self {
        Self::DestinationIsFile { path: path.into() }
    }

    pub fn marker_not_found(marker: &'static str, path: impl Into<PathBuf>) -> Self {
        Self::MarkerNotFound {
            marker,
            path: path.into(),
        }
    }

    pub fn io(operation: IoOperation, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> MirrorErrorKind {
        match self {
            Self::Io { .. } => MirrorErrorKind::Io,
            _ => MirrorErrorKind::Validation,
        }
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> u8 {
        match self.kind() {
            MirrorErrorKind::Validation => EXIT_VALIDATION,
            MirrorErrorKind::Io => EXIT_IO,
        }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidMode { .. } => "--extern yes/no".to_string(),
            Self::DestinationIsFile { .. } => "Will not copy the directory into a file.".to_string(),
            Self::MarkerNotFound { marker, path } => {
                format!(
                    "'{}' does not appear in {}; cannot work out where the relative path starts",
                    marker,
                    path.display()
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type for mirror operations
pub type MirrorResult<T> = Result<T, MirrorError>;
