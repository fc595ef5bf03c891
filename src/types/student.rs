//! Student wire record.

use serde::{Deserialize, Serialize};

use super::ResourceId;

/// The literal wire value for an active record.
pub const STATUS_ACTIVE: &str = "Active";

/// The literal wire value for an inactive record.
pub const STATUS_INACTIVE: &str = "Inactive";

/// Accepted gender values for a student record.
pub const GENDERS: [&str; 3] = ["Male", "Female", "Other"];

/// A student record as sent to and received from the backend.
///
/// Dates travel as `YYYY-MM-DD` strings and status as the literal strings
/// `"Active"` / `"Inactive"`. Both stay string-typed here so that records
/// with unexpected values still deserialize; the status enumeration only
/// defines two values, but the aggregator counts by case-sensitive exact
/// match and tolerates anything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    /// Server-assigned identifier; absent on create payloads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ResourceId>,
    /// First name (alphabetic).
    pub first_name: String,
    /// Last name (alphabetic).
    pub last_name: String,
    /// Age in years (positive).
    pub age: u32,
    /// One of [`GENDERS`].
    pub gender: String,
    /// Email address.
    pub email: String,
    /// Phone number, 10-12 digits.
    pub phone: String,
    /// Foreign reference to a course, or absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_id: Option<ResourceId>,
    /// Enrollment date as `YYYY-MM-DD`.
    pub enrollment_date: String,
    /// `"Active"` / `"Inactive"` on the wire.
    pub status: String,
}
