//! Client-side validation of the student form.
//!
//! Pure and synchronous; no network calls. Every field is checked in one
//! pass and all applicable errors are collected, so the UI can render
//! inline messages for every invalid input at once.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::transform::StudentForm;
use crate::types::GENDERS;

/// Mapping of field name to error message; empty means the form is valid.
///
/// Keys are the wire field names (`firstName`, `lastName`, `age`, `gender`,
/// `email`, `phone`, `courseId`, `enrollmentDate`) so the UI can attach
/// each message to its input.
pub type FieldErrors = BTreeMap<&'static str, &'static str>;

#[allow(clippy::expect_used)]
static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+$").expect("valid regex"));

#[allow(clippy::expect_used)]
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

#[allow(clippy::expect_used)]
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10,12}$").expect("valid regex"));

fn is_positive_integer(value: &str) -> bool {
    value.trim().parse::<i64>().is_ok_and(|n| n >= 1)
}

/// Validates a student form, returning one error per invalid field.
///
/// The record is valid iff the returned mapping is empty. Rules:
///
/// | Field            | Empty check | Format check                       |
/// |------------------|-------------|------------------------------------|
/// | `firstName`      | required    | letters only                       |
/// | `lastName`       | required    | letters only                       |
/// | `age`            | required    | integer, >= 1                      |
/// | `gender`         | required    | one of Male/Female/Other           |
/// | `email`          | required    | `local@domain.tld`, no whitespace  |
/// | `phone`          | required    | digits only, 10-12 long            |
/// | `courseId`       | required    | —                                  |
/// | `enrollmentDate` | required    | —                                  |
///
/// ## Example
///
/// ```rust
/// use rosterly::validate::validate_student_form;
/// use rosterly::transform::StudentForm;
///
/// let errors = validate_student_form(&StudentForm::default());
/// assert!(errors.contains_key("firstName"));
/// assert!(errors.contains_key("enrollmentDate"));
/// ```
pub fn validate_student_form(form: &StudentForm) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if form.first_name.is_empty() {
        errors.insert("firstName", "FirstName cannot be empty");
    } else if !NAME_RE.is_match(&form.first_name) {
        errors.insert("firstName", "FirstName must follow the format [A-Za-z]");
    }

    if form.last_name.is_empty() {
        errors.insert("lastName", "LastName cannot be empty");
    } else if !NAME_RE.is_match(&form.last_name) {
        errors.insert("lastName", "Lastname must follow the format [A-Za-z]");
    }

    if form.age.is_empty() {
        errors.insert("age", "Age cannot be empty");
    } else if !is_positive_integer(&form.age) {
        errors.insert("age", "Age must be a positive integer");
    }

    if form.gender.is_empty() {
        errors.insert("gender", "Gender must be selected");
    } else if !GENDERS.contains(&form.gender.as_str()) {
        errors.insert("gender", "Gender must be one of Male, Female, Other");
    }

    if form.email.is_empty() {
        errors.insert("email", "Email cannot be empty");
    } else if !EMAIL_RE.is_match(&form.email) {
        errors.insert("email", "Email must be in the correct format");
    }

    if form.phone.is_empty() {
        errors.insert("phone", "Phone cannot be empty");
    } else if !PHONE_RE.is_match(&form.phone) {
        errors.insert("phone", "Phone must be 10-12 digits and in the range [0-9]");
    }

    if form.course_id.is_none() {
        errors.insert("courseId", "Course must be selected");
    }

    if form.enrollment_date.is_none() {
        errors.insert("enrollmentDate", "Enrollment Date must be selected");
    }

    errors
}
