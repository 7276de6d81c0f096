use std::fmt;
use thiserror::Error;

/// The error type for apisign operations
#[derive(Error, Debug)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The requested signature method has no implementation
    /// (OAuth1 RSA-SHA1: no private key material is modeled).
    UnsupportedSignatureMethod,

    /// Digest signing was attempted without a server challenge
    /// (realm or nonce absent). The caller must perform a prior
    /// unauthenticated round-trip and retry.
    MissingChallenge,

    /// The request URL cannot be parsed into scheme/host/path/query.
    InvalidUrl,

    /// Request cannot be signed (missing required fields, etc.)
    RequestInvalid,

    /// Unexpected errors (formatting, header construction, etc.)
    Unexpected,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Check if this error is a request-configuration error that the
    /// caller can fix without retrying (wrong method, missing challenge).
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::UnsupportedSignatureMethod
                | ErrorKind::MissingChallenge
                | ErrorKind::InvalidUrl
        )
    }
}

// Convenience constructors
impl Error {
    /// Create an unsupported signature method error
    pub fn unsupported_signature_method(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedSignatureMethod, message)
    }

    /// Create a missing challenge error
    pub fn missing_challenge(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingChallenge, message)
    }

    /// Create an invalid url error
    pub fn invalid_url(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidUrl, message)
    }

    /// Create a request invalid error
    pub fn request_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequestInvalid, message)
    }

    /// Create an unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::UnsupportedSignatureMethod => write!(f, "unsupported signature method"),
            ErrorKind::MissingChallenge => write!(f, "missing digest challenge"),
            ErrorKind::InvalidUrl => write!(f, "invalid url"),
            ErrorKind::RequestInvalid => write!(f, "invalid request"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

// Common From implementations
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(err)
    }
}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::Error> for Error {
    fn from(err: http::Error) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderValue> for Error {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderName> for Error {
    fn from(err: http::header::InvalidHeaderName) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::ToStrError> for Error {
    fn from(err: http::header::ToStrError) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}
