//! Core types for the rosterly SDK.
//!
//! This module provides the record and value types used throughout the SDK:
//!
//! - [`ResourceId`]: Opaque server-assigned identifier
//! - [`StudentRecord`], [`CourseRecord`], [`EnrollmentRecord`]: Wire records
//! - [`StatisticsSnapshot`]: Aggregate counts over a whole collection

mod course;
mod enrollment;
mod id;
mod snapshot;
mod student;

pub use course::CourseRecord;
pub use enrollment::EnrollmentRecord;
pub use id::ResourceId;
pub use snapshot::StatisticsSnapshot;
pub use student::{GENDERS, STATUS_ACTIVE, STATUS_INACTIVE, StudentRecord};

/// Format of calendar dates on the wire (`YYYY-MM-DD`).
pub const WIRE_DATE_FORMAT: &str = "%Y-%m-%d";
