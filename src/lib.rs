//! # rosterly
//!
//! Typed async client for json-server style student and course roster
//! backends.
//!
//! The backend is a flat REST store (`/students`, `/courses`,
//! `/enrollments`) that speaks json-server list conventions: `q` for
//! search, `_sort`/`_order` for ordering, `_page`/`_limit` for range
//! pagination and an `x-total-count` response header for the total item
//! count. This crate covers everything an admin console needs between its
//! widgets and that backend: query translation, page normalization,
//! statistics aggregation, form validation, wire/form record mapping, and
//! a stale-response-safe page controller.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rosterly::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), rosterly::Error> {
//!     let client = Client::builder()
//!         .base_url("http://localhost:3000")?
//!         .build()?;
//!
//!     // One page of students, searched and sorted.
//!     let page = client
//!         .students()
//!         .list(&ListQuery::new().search("ann").sort("lastName", SortDirection::Ascending))
//!         .await?;
//!     println!("{} of {} students", page.content.len(), page.total_items);
//!
//!     // Dashboard numbers.
//!     let stats = client.student_statistics().await?;
//!     println!("{} active, {} enrolled this month", stats.active, stats.additional);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Key Concepts
//!
//! - **Pages are zero-based** in [`ListQuery`]; the backend's 1-based
//!   `_page` parameter is a translation detail.
//! - **Validation is not an error**: an invalid form yields a field-error
//!   map, and an unresolvable course reference renders `"N/A"`.
//! - **Statistics are whole-collection**: snapshots ignore list
//!   pagination/search state entirely, and the `additional` metric means
//!   different things for students (enrolled this month) and courses
//!   (total enrollments).
//! - **No automatic retry**: every failure surfaces once; retry is a user
//!   action.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

// Core modules
pub mod client;
pub mod error;
pub mod query;
pub mod resource;
pub mod stats;
pub mod types;

// Form handling
pub mod transform;
pub mod validate;

// View state and orchestration
pub mod controller;
pub mod notify;
pub mod state;

// Prelude for convenient imports
pub mod prelude;

// Re-export main types at crate root for convenience
pub use client::{Client, ClientBuilder, RequestStats};
pub use controller::{FetchTicket, PageController};
pub use error::{Error, ErrorKind, Result};
pub use notify::{NotificationKind, NotificationSink, TracingNotifier};
pub use query::{ListQuery, Page, SortDirection, TOTAL_COUNT_HEADER, normalize_page};
pub use resource::{ResourceDescriptor, ResourceService};
pub use state::{ViewAction, ViewState, reduce};
pub use transform::{COURSE_NOT_AVAILABLE, StudentForm, course_display_name};
pub use types::{
    CourseRecord, EnrollmentRecord, ResourceId, StatisticsSnapshot, StudentRecord,
};
pub use validate::{FieldErrors, validate_student_form};
