//! Enrollment wire record.

use serde::{Deserialize, Serialize};

use super::ResourceId;

/// An enrollment join record between a student and a course.
///
/// Course statistics only consume the *existence* of these records (the
/// collection size), so every field is optional and unrecognized fields
/// are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentRecord {
    /// Server-assigned identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ResourceId>,
    /// The enrolled student.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<ResourceId>,
    /// The course enrolled in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_id: Option<ResourceId>,
}
