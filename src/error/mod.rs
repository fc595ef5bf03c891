//! Error types for the rosterly SDK.
//!
//! A single [`Error`] type categorized by [`ErrorKind`] covers the failure
//! taxonomy of this layer:
//!
//! - transport failures (connection, timeout, HTTP status mapping),
//! - local invalid-argument conditions (e.g. zero page size),
//! - joined statistics sub-fetch failures ([`ErrorKind::Aggregation`]).
//!
//! Two conditions are deliberately *not* errors:
//!
//! - a form that fails validation produces a field-error map
//!   ([`crate::validate::FieldErrors`]), never an `Error`;
//! - a course-id display lookup with no match renders the `"N/A"` sentinel.

mod core;
mod kind;

pub use self::core::Error;
pub use kind::ErrorKind;

/// A specialized `Result` type for rosterly operations.
pub type Result<T> = std::result::Result<T, Error>;
