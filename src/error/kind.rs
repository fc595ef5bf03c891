//! Error kind enumeration for categorizing SDK errors.

/// Categorization of SDK errors.
///
/// This enum provides a stable interface for matching on error types, enabling
/// different handling strategies for different failure modes.
///
/// The SDK never retries on its own (retry is a user action in this layer),
/// so [`is_retriable()`](ErrorKind::is_retriable) is purely a hint for
/// callers that want to offer a "try again" affordance.
///
/// | ErrorKind         | Retriable | Action                          |
/// |-------------------|-----------|---------------------------------|
/// | `Unavailable`     | Yes       | Re-trigger the operation        |
/// | `Timeout`         | Yes       | Re-trigger the operation        |
/// | `Connection`      | Yes       | Re-trigger the operation        |
/// | `Aggregation`     | Yes*      | Re-fetch the statistics panel   |
/// | `NotFound`        | No        | Resource doesn't exist          |
/// | `Conflict`        | No        | Resolve conflict first          |
/// | `InvalidArgument` | No        | Fix input                       |
///
/// *Aggregation errors wrap one of the joined sub-fetches; whether a retry
/// can succeed depends on the wrapped failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Invalid request argument or payload.
    ///
    /// HTTP: 400 Bad Request. Also raised locally, e.g. for a zero page
    /// size in result normalization.
    ///
    /// **Not retriable.** Fix the input and retry.
    #[error("invalid argument")]
    InvalidArgument,

    /// Requested resource was not found.
    ///
    /// HTTP: 404 Not Found.
    ///
    /// Note that a course-id display lookup that finds no match is *not*
    /// an error; it renders the `"N/A"` sentinel instead. This kind is for
    /// by-id reads, updates and deletes against a missing record.
    #[error("not found")]
    NotFound,

    /// Conflict with existing resource state.
    ///
    /// HTTP: 409 Conflict.
    #[error("conflict")]
    Conflict,

    /// Request timed out.
    ///
    /// HTTP: 504 or client-side timeout.
    ///
    /// **Retriable** by re-triggering the operation.
    #[error("timeout")]
    Timeout,

    /// Connection error (DNS, TLS handshake, network unreachable).
    ///
    /// **Retriable.** May indicate transient network issues.
    #[error("connection error")]
    Connection,

    /// Service temporarily unavailable.
    ///
    /// HTTP: 5xx.
    ///
    /// **Retriable** by re-triggering the operation.
    #[error("service unavailable")]
    Unavailable,

    /// Transport layer error.
    ///
    /// Generic HTTP error that doesn't fit a more specific category.
    #[error("transport error")]
    Transport,

    /// Invalid response from server.
    ///
    /// The response body could not be parsed as the expected shape.
    #[error("invalid response")]
    InvalidResponse,

    /// Configuration error (invalid base URL, bad client options).
    ///
    /// **Not retriable.** Fix the configuration.
    #[error("configuration error")]
    Configuration,

    /// One of the joined statistics sub-fetches failed.
    ///
    /// Course statistics fetch `/courses` and `/enrollments` with join
    /// semantics; either failure fails the whole snapshot. No partial
    /// numbers are ever published.
    #[error("statistics aggregation failed")]
    Aggregation,

    /// Unknown or unexpected error.
    #[error("unknown error")]
    Unknown,
}

impl ErrorKind {
    /// Returns `true` if re-triggering the operation may succeed.
    ///
    /// The SDK itself never retries; this is a hint for the caller's
    /// "try again" UI.
    pub fn is_retriable(&self) -> bool {
        matches!(
            self,
            ErrorKind::Timeout
                | ErrorKind::Connection
                | ErrorKind::Unavailable
                | ErrorKind::Aggregation
        )
    }
}
