//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types for easy importing:
//!
//! ```rust
//! use rosterly::prelude::*;
//! ```

pub use crate::{
    client::{Client, ClientBuilder, RequestStats},
    controller::{FetchTicket, PageController},
    error::{Error, ErrorKind, Result},
    notify::{NotificationKind, NotificationSink, TracingNotifier},
    query::{ListQuery, Page, SortDirection},
    resource::{ResourceDescriptor, ResourceService},
    state::{ViewAction, ViewState},
    transform::StudentForm,
    types::{
        CourseRecord, EnrollmentRecord, ResourceId, StatisticsSnapshot, StudentRecord,
    },
    validate::{FieldErrors, validate_student_form},
};
