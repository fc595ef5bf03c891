//! Main error type for the rosterly SDK.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

use super::ErrorKind;

/// The primary error type for rosterly operations.
///
/// `Error` provides context for debugging and error handling:
/// - [`kind()`](Error::kind): Categorization for `match` statements
/// - [`is_retriable()`](Error::is_retriable): Hint for a manual "try again"
/// - [`source()`](StdError::source): Underlying cause, when available
///
/// ## Example
///
/// ```rust
/// use rosterly::{Error, ErrorKind};
///
/// fn handle_error(err: Error) {
///     match err.kind() {
///         ErrorKind::NotFound => {
///             println!("Record is gone, refresh the list");
///         }
///         kind if kind.is_retriable() => {
///             println!("Transient failure, offer a retry button");
///         }
///         _ => {
///             println!("Permanent error: {}", err);
///         }
///     }
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    /// The error category.
    kind: ErrorKind,

    /// Human-readable error message.
    message: Cow<'static, str>,

    /// The underlying error, if any.
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl Error {
    /// Creates a new error with the given kind and message.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rosterly::{Error, ErrorKind};
    ///
    /// let err = Error::new(ErrorKind::InvalidArgument, "page size cannot be zero");
    /// assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    /// ```
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Creates an error from a kind with a default message.
    pub fn from_kind(kind: ErrorKind) -> Self {
        let message = match kind {
            ErrorKind::InvalidArgument => "invalid argument",
            ErrorKind::NotFound => "resource not found",
            ErrorKind::Conflict => "conflict with existing state",
            ErrorKind::Timeout => "request timed out",
            ErrorKind::Connection => "connection failed",
            ErrorKind::Unavailable => "service unavailable",
            ErrorKind::Transport => "transport error",
            ErrorKind::InvalidResponse => "invalid response",
            ErrorKind::Configuration => "configuration error",
            ErrorKind::Aggregation => "statistics aggregation failed",
            ErrorKind::Unknown => "unknown error",
        };
        Self::new(kind, message)
    }

    /// Returns the error kind for categorization.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns `true` if re-triggering the operation may succeed.
    ///
    /// Equivalent to `self.kind().is_retriable()`. The SDK never retries
    /// automatically; retry is a manual user action.
    #[inline]
    pub fn is_retriable(&self) -> bool {
        self.kind.is_retriable()
    }

    /// Sets the source error for this error.
    #[must_use]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    // Convenience constructors for common error types

    /// Creates an invalid argument error.
    pub fn invalid_argument(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    /// Creates a not found error.
    pub fn not_found(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Creates a conflict error.
    pub fn conflict(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    /// Creates a timeout error.
    pub fn timeout(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Timeout, message)
    }

    /// Creates a connection error.
    pub fn connection(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Connection, message)
    }

    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Unavailable, message)
    }

    /// Creates a transport error.
    pub fn transport(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Transport, message)
    }

    /// Creates an invalid response error.
    pub fn invalid_response(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InvalidResponse, message)
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Creates an aggregation error wrapping a failed sub-fetch.
    pub fn aggregation(message: impl Into<Cow<'static, str>>, cause: Error) -> Self {
        Self::new(ErrorKind::Aggregation, message).with_source(cause)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

// Implement From for common error types

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::from_kind(kind)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::configuration(format!("invalid URL: {}", err)).with_source(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::invalid_response(format!("JSON error: {}", err)).with_source(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_new() {
        let err = Error::new(ErrorKind::InvalidArgument, "test message");
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(err.to_string().contains("test message"));
    }

    #[test]
    fn test_error_from_kind() {
        let err = Error::from_kind(ErrorKind::NotFound);
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.to_string().contains("resource not found"));
    }

    #[test]
    fn test_error_is_retriable() {
        assert!(Error::from_kind(ErrorKind::Timeout).is_retriable());
        assert!(Error::from_kind(ErrorKind::Unavailable).is_retriable());
        assert!(!Error::from_kind(ErrorKind::InvalidArgument).is_retriable());
        assert!(!Error::from_kind(ErrorKind::NotFound).is_retriable());
    }

    #[test]
    fn test_error_with_source() {
        let inner = Error::connection("connection refused");
        let err = Error::aggregation("enrollments fetch failed", inner);
        assert_eq!(err.kind(), ErrorKind::Aggregation);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_convenience_constructors() {
        assert_eq!(
            Error::invalid_argument("test").kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(Error::not_found("test").kind(), ErrorKind::NotFound);
        assert_eq!(Error::conflict("test").kind(), ErrorKind::Conflict);
        assert_eq!(Error::timeout("test").kind(), ErrorKind::Timeout);
        assert_eq!(Error::connection("test").kind(), ErrorKind::Connection);
        assert_eq!(Error::unavailable("test").kind(), ErrorKind::Unavailable);
        assert_eq!(Error::transport("test").kind(), ErrorKind::Transport);
        assert_eq!(
            Error::invalid_response("test").kind(),
            ErrorKind::InvalidResponse
        );
        assert_eq!(
            Error::configuration("test").kind(),
            ErrorKind::Configuration
        );
    }

    #[test]
    fn test_from_error_kind() {
        let err: Error = ErrorKind::Timeout.into();
        assert_eq!(err.kind(), ErrorKind::Timeout);
    }

    #[test]
    fn test_display_format() {
        let err = Error::new(ErrorKind::NotFound, "student 42 not found");
        let display = err.to_string();
        assert!(display.contains("not found"));
        assert!(display.contains("student 42 not found"));
    }
}
