//! Mapping between wire records and the form shape edited in the UI.
//!
//! The wire keeps string-typed dates and status; the form keeps a typed
//! date and a boolean status. Text inputs (including age) stay strings in
//! the form so the validator can report format errors instead of the parse
//! silently failing.

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::types::{
    CourseRecord, ResourceId, STATUS_ACTIVE, STATUS_INACTIVE, StudentRecord, WIRE_DATE_FORMAT,
};

/// Sentinel rendered when a referenced course cannot be resolved.
pub const COURSE_NOT_AVAILABLE: &str = "N/A";

/// The in-memory shape of the student form.
///
/// Field values mirror the modal's inputs: free text as entered, status as
/// the toggle's boolean, enrollment date as a typed calendar date once
/// picked.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentForm {
    /// First name input.
    pub first_name: String,
    /// Last name input.
    pub last_name: String,
    /// Age input, kept as entered so validation can report format errors.
    pub age: String,
    /// Selected gender.
    pub gender: String,
    /// Email input.
    pub email: String,
    /// Phone input.
    pub phone: String,
    /// Selected course, if any.
    pub course_id: Option<ResourceId>,
    /// Picked enrollment date, if any.
    pub enrollment_date: Option<NaiveDate>,
    /// Status toggle; `true` means active.
    pub status: bool,
}

impl Default for StudentForm {
    /// An empty "add" form. New records default to active.
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            age: String::new(),
            gender: String::new(),
            email: String::new(),
            phone: String::new(),
            course_id: None,
            enrollment_date: None,
            status: true,
        }
    }
}

impl StudentForm {
    /// Maps a validated form to its wire representation.
    ///
    /// Status becomes the `"Active"` / `"Inactive"` literal and the date an
    /// ISO `YYYY-MM-DD` string. The form is expected to have passed
    /// [`validate_student_form`](crate::validate::validate_student_form);
    /// a missing date or non-numeric age is an
    /// [`invalid argument`](crate::ErrorKind::InvalidArgument) error here.
    pub fn to_wire(&self) -> Result<StudentRecord> {
        let age = self
            .age
            .trim()
            .parse::<u32>()
            .map_err(|_| Error::invalid_argument("age is not a positive integer"))?;
        let enrollment_date = self
            .enrollment_date
            .ok_or_else(|| Error::invalid_argument("enrollment date is not set"))?;

        Ok(StudentRecord {
            id: None,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            age,
            gender: self.gender.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            course_id: self.course_id.clone(),
            enrollment_date: enrollment_date.format(WIRE_DATE_FORMAT).to_string(),
            status: if self.status {
                STATUS_ACTIVE.to_string()
            } else {
                STATUS_INACTIVE.to_string()
            },
        })
    }

    /// Maps a wire record to the form shape for edit/view modals.
    ///
    /// `"Active"` maps to `true`, any other status string to `false`. An
    /// unparseable wire date leaves the date picker empty.
    pub fn from_wire(record: &StudentRecord) -> Self {
        Self {
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            age: record.age.to_string(),
            gender: record.gender.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            course_id: record.course_id.clone(),
            enrollment_date: NaiveDate::parse_from_str(&record.enrollment_date, WIRE_DATE_FORMAT)
                .ok(),
            status: record.status == STATUS_ACTIVE,
        }
    }
}

/// Resolves a course reference to a display name.
///
/// Looks the identifier up in the current course collection by equality;
/// an absent reference or a missing course yields the literal
/// [`COURSE_NOT_AVAILABLE`] sentinel, never an error.
pub fn course_display_name(course_id: Option<&ResourceId>, courses: &[CourseRecord]) -> String {
    course_id
        .and_then(|id| {
            courses
                .iter()
                .find(|c| c.id.as_ref() == Some(id))
                .map(|c| c.course_name.clone())
        })
        .unwrap_or_else(|| COURSE_NOT_AVAILABLE.to_string())
}
