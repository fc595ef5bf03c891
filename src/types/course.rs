//! Course wire record.

use serde::{Deserialize, Serialize};

use super::ResourceId;

/// A course record as sent to and received from the backend.
///
/// Same wire conventions as [`StudentRecord`](super::StudentRecord): dates
/// as `YYYY-MM-DD` strings, status as the literal `"Active"` / `"Inactive"`
/// strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRecord {
    /// Server-assigned identifier; absent on create payloads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ResourceId>,
    /// Display name of the course.
    pub course_name: String,
    /// Short course code.
    pub course_code: String,
    /// Optional free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Instructor name.
    pub instructor: String,
    /// Maximum enrollment capacity (positive).
    pub capacity: u32,
    /// Current enrollment count; the backend expects 0 at creation.
    #[serde(default)]
    pub current_enrollment: u32,
    /// Start date as `YYYY-MM-DD`.
    pub start_date: String,
    /// End date as `YYYY-MM-DD`.
    pub end_date: String,
    /// `"Active"` / `"Inactive"` on the wire.
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::STATUS_ACTIVE;

    fn sample() -> CourseRecord {
        CourseRecord {
            id: Some(ResourceId::from(3)),
            course_name: "Intro to Databases".into(),
            course_code: "DB101".into(),
            description: None,
            instructor: "Dr. Pham".into(),
            capacity: 40,
            current_enrollment: 12,
            start_date: "2026-02-01".into(),
            end_date: "2026-06-30".into(),
            status: STATUS_ACTIVE.into(),
        }
    }

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["courseName"], "Intro to Databases");
        assert_eq!(json["currentEnrollment"], 12);
        assert_eq!(json["startDate"], "2026-02-01");
        assert!(json.get("description").is_none());
    }

    #[test]
    fn test_current_enrollment_defaults_to_zero() {
        let course: CourseRecord = serde_json::from_value(serde_json::json!({
            "courseName": "Algorithms",
            "courseCode": "ALG201",
            "instructor": "Dr. Ngo",
            "capacity": 30,
            "startDate": "2026-03-01",
            "endDate": "2026-07-15",
            "status": "Active"
        }))
        .unwrap();

        assert_eq!(course.current_enrollment, 0);
    }
}
