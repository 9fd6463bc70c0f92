//! Error types for codechat.
//!
//! Every failure the chat session can observe is represented here: startup
//! configuration problems, rejected artifacts, and failed exchanges with the
//! Anthropic API.

use std::error;
use std::fmt;
use std::io;
use std::sync::Arc;

/// The main error type for codechat.
#[derive(Clone, Debug)]
pub enum Error {
    /// A required piece of configuration is absent.  Fatal at startup.
    ConfigurationMissing {
        /// Human-readable error message.
        message: String,
    },

    /// A directory supplied by the user does not exist.
    PathInvalid {
        /// The path as the user typed it.
        path: String,
    },

    /// A file the user asked to send does not exist.
    ArtifactNotFound {
        /// The path that was checked.
        path: String,
    },

    /// A file the user asked to send is over the size limit.
    ArtifactTooLarge {
        /// The path that was checked.
        path: String,
        /// Size of the file in bytes.
        size: u64,
        /// The limit that was exceeded.
        limit: u64,
    },

    /// A file the user asked to send has a binary extension.
    ArtifactBinaryRejected {
        /// Lowercased extension, including the leading dot.
        extension: String,
    },

    /// I/O error.
    Io {
        /// Human-readable error message.
        message: String,
        /// The underlying error.
        source: Arc<io::Error>,
    },

    /// A workbook could not be opened or read.
    Spreadsheet {
        /// Human-readable error message.
        message: String,
        /// The underlying error.
        source: Option<Arc<dyn error::Error + Send + Sync>>,
    },

    /// The API answered with a non-success status.
    Api {
        /// HTTP status code.
        status_code: u16,
        /// Canonical reason phrase for the status, if one exists.
        reason: String,
        /// Raw response body, verbatim.
        body: String,
    },

    /// Connection error.
    Connection {
        /// Human-readable error message.
        message: String,
        /// Underlying cause.
        source: Option<Arc<dyn error::Error + Send + Sync>>,
    },

    /// HTTP client error.
    HttpClient {
        /// Human-readable error message.
        message: String,
        /// The underlying error.
        source: Option<Arc<dyn error::Error + Send + Sync>>,
    },

    /// Error during JSON serialization or deserialization.
    Serialization {
        /// Human-readable error message.
        message: String,
        /// The underlying error.
        source: Option<Arc<dyn error::Error + Send + Sync>>,
    },

    /// Request was aborted by the client.
    Aborted {
        /// Human-readable error message.
        message: String,
    },
}

impl Error {
    /// Creates a new configuration-missing error.
    pub fn configuration_missing(message: impl Into<String>) -> Self {
        Error::ConfigurationMissing {
            message: message.into(),
        }
    }

    /// Creates a new invalid-path error.
    pub fn path_invalid(path: impl Into<String>) -> Self {
        Error::PathInvalid { path: path.into() }
    }

    /// Creates a new artifact-not-found error.
    pub fn artifact_not_found(path: impl Into<String>) -> Self {
        Error::ArtifactNotFound { path: path.into() }
    }

    /// Creates a new artifact-too-large error.
    pub fn artifact_too_large(path: impl Into<String>, size: u64, limit: u64) -> Self {
        Error::ArtifactTooLarge {
            path: path.into(),
            size,
            limit,
        }
    }

    /// Creates a new binary-rejected error.
    pub fn artifact_binary_rejected(extension: impl Into<String>) -> Self {
        Error::ArtifactBinaryRejected {
            extension: extension.into(),
        }
    }

    /// Creates a new I/O error.
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Error::Io {
            message: message.into(),
            source: Arc::new(source),
        }
    }

    /// Creates a new spreadsheet error.
    pub fn spreadsheet(
        message: impl Into<String>,
        source: Option<Box<dyn error::Error + Send + Sync>>,
    ) -> Self {
        Error::Spreadsheet {
            message: message.into(),
            source: source.map(Arc::from),
        }
    }

    /// Creates a new API error.
    pub fn api(status_code: u16, reason: impl Into<String>, body: impl Into<String>) -> Self {
        Error::Api {
            status_code,
            reason: reason.into(),
            body: body.into(),
        }
    }

    /// Creates a new connection error.
    pub fn connection(
        message: impl Into<String>,
        source: Option<Box<dyn error::Error + Send + Sync>>,
    ) -> Self {
        Error::Connection {
            message: message.into(),
            source: source.map(Arc::from),
        }
    }

    /// Creates a new HTTP client error.
    pub fn http_client(
        message: impl Into<String>,
        source: Option<Box<dyn error::Error + Send + Sync>>,
    ) -> Self {
        Error::HttpClient {
            message: message.into(),
            source: source.map(Arc::from),
        }
    }

    /// Creates a new serialization error.
    pub fn serialization(
        message: impl Into<String>,
        source: Option<Box<dyn error::Error + Send + Sync>>,
    ) -> Self {
        Error::Serialization {
            message: message.into(),
            source: source.map(Arc::from),
        }
    }

    /// Creates a new abort error.
    pub fn aborted(message: impl Into<String>) -> Self {
        Error::Aborted {
            message: message.into(),
        }
    }

    /// Returns true if this error is a fatal configuration problem.
    pub fn is_configuration_missing(&self) -> bool {
        matches!(self, Error::ConfigurationMissing { .. })
    }

    /// Returns true if this error is an invalid path.
    pub fn is_path_invalid(&self) -> bool {
        matches!(self, Error::PathInvalid { .. })
    }

    /// Returns true if this error rejected an artifact before anything was sent.
    pub fn is_artifact_rejection(&self) -> bool {
        matches!(
            self,
            Error::ArtifactNotFound { .. }
                | Error::ArtifactTooLarge { .. }
                | Error::ArtifactBinaryRejected { .. }
        )
    }

    /// Returns true if the API answered with a non-success status.
    pub fn is_api(&self) -> bool {
        matches!(self, Error::Api { .. })
    }

    /// Returns true if the response could not be decoded.
    pub fn is_serialization(&self) -> bool {
        matches!(self, Error::Serialization { .. })
    }

    /// Returns true if the request was aborted.
    pub fn is_aborted(&self) -> bool {
        matches!(self, Error::Aborted { .. })
    }

    /// Returns the status code associated with this error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Api { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ConfigurationMissing { message } => write!(f, "{message}"),
            Error::PathInvalid { path } => write!(f, "Folder not found: {path}"),
            Error::ArtifactNotFound { path } => write!(f, "File not found: {path}"),
            Error::ArtifactTooLarge { size, .. } => write!(
                f,
                "File too large to send ({size} bytes). Consider sending a smaller snippet."
            ),
            Error::ArtifactBinaryRejected { extension } => {
                write!(f, "Refusing to send binary file type: {extension}")
            }
            Error::Io { message, .. } => write!(f, "{message}"),
            Error::Spreadsheet { message, .. } => write!(f, "Spreadsheet error: {message}"),
            Error::Api {
                status_code,
                reason,
                body,
            } => write!(f, "[ERROR] Status {status_code} {reason}\n{body}"),
            Error::Connection { message, .. } => write!(f, "Connection error: {message}"),
            Error::HttpClient { message, .. } => write!(f, "HTTP client error: {message}"),
            Error::Serialization { message, .. } => write!(f, "Serialization error: {message}"),
            Error::Aborted { message } => write!(f, "Request aborted: {message}"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
            Error::Spreadsheet { source, .. } => source
                .as_ref()
                .map(|e| e.as_ref() as &(dyn error::Error + 'static)),
            Error::Connection { source, .. } => source
                .as_ref()
                .map(|e| e.as_ref() as &(dyn error::Error + 'static)),
            Error::HttpClient { source, .. } => source
                .as_ref()
                .map(|e| e.as_ref() as &(dyn error::Error + 'static)),
            Error::Serialization { source, .. } => source
                .as_ref()
                .map(|e| e.as_ref() as &(dyn error::Error + 'static)),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::io(err.to_string(), err)
    }
}

/// A specialized Result type for codechat operations.
pub type Result<T> = std::result::Result<T, Error>;
