//! Statistics aggregation over full resource collections.
//!
//! Snapshots are always computed from unpaginated collection fetches and
//! are never cached; the list page's search/sort/pagination state has no
//! influence on them. The `additional` metric is resource-specific:
//! students count enrollments since the start of the current month, courses
//! count the whole enrollment collection.

use chrono::{Datelike, Local, NaiveDate};
use tracing::debug;

use crate::Client;
use crate::error::{Error, Result};
use crate::types::{
    CourseRecord, STATUS_ACTIVE, STATUS_INACTIVE, StatisticsSnapshot, StudentRecord,
    WIRE_DATE_FORMAT,
};

/// Returns the first calendar day of `today`'s month.
pub fn month_start(today: NaiveDate) -> NaiveDate {
    today.with_day(1).unwrap_or(today)
}

/// Counts students whose enrollment date is on or after `cutoff`.
///
/// Dates are compared as calendar dates; records with unparseable dates are
/// excluded from the count, not treated as errors.
pub fn count_enrolled_since(students: &[StudentRecord], cutoff: NaiveDate) -> usize {
    students
        .iter()
        .filter_map(|s| NaiveDate::parse_from_str(&s.enrollment_date, WIRE_DATE_FORMAT).ok())
        .filter(|date| *date >= cutoff)
        .count()
}

fn status_counts<'a>(statuses: impl Iterator<Item = &'a str>) -> (usize, usize) {
    let mut active = 0;
    let mut inactive = 0;
    for status in statuses {
        // Case-sensitive exact match; anything else counts toward neither,
        // so active + inactive <= total.
        if status == STATUS_ACTIVE {
            active += 1;
        } else if status == STATUS_INACTIVE {
            inactive += 1;
        }
    }
    (active, inactive)
}

/// Computes the student snapshot from a full collection.
///
/// `month_start` is the cutoff for the `additional` metric; production
/// callers pass the first day of the current local month, tests pass a
/// fixed date.
pub fn summarize_students(students: &[StudentRecord], month_start: NaiveDate) -> StatisticsSnapshot {
    let (active, inactive) = status_counts(students.iter().map(|s| s.status.as_str()));
    StatisticsSnapshot {
        total: students.len(),
        active,
        inactive,
        additional: count_enrolled_since(students, month_start),
    }
}

/// Computes the course snapshot from the full course and enrollment
/// collections.
///
/// `additional` is the raw enrollment count, not filtered by date or by
/// course.
pub fn summarize_courses(
    courses: &[CourseRecord],
    enrollment_count: usize,
) -> StatisticsSnapshot {
    let (active, inactive) = status_counts(courses.iter().map(|c| c.status.as_str()));
    StatisticsSnapshot {
        total: courses.len(),
        active,
        inactive,
        additional: enrollment_count,
    }
}

impl Client {
    /// Computes the student statistics snapshot.
    ///
    /// Fetches the entire `/students` collection and counts total, active,
    /// inactive, and students enrolled since the first day of the current
    /// local month.
    pub async fn student_statistics(&self) -> Result<StatisticsSnapshot> {
        let students = self.students().get_all().await?;
        let snapshot = summarize_students(&students, month_start(Local::now().date_naive()));
        debug!(?snapshot, "computed student statistics");
        Ok(snapshot)
    }

    /// Computes the course statistics snapshot.
    ///
    /// Fetches `/courses` and `/enrollments` concurrently with join
    /// semantics: if either request fails the whole operation fails with an
    /// [`Aggregation`](crate::ErrorKind::Aggregation) error and no partial
    /// snapshot is produced.
    pub async fn course_statistics(&self) -> Result<StatisticsSnapshot> {
        let courses = self.courses();
        let enrollments = self.enrollments();
        let (courses, enrollments) = tokio::try_join!(courses.get_all(), enrollments.get_all())
            .map_err(|e| Error::aggregation("course statistics sub-fetch failed", e))?;

        let snapshot = summarize_courses(&courses, enrollments.len());
        debug!(?snapshot, "computed course statistics");
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ResourceId;

    fn student(status: &str, enrollment_date: &str) -> StudentRecord {
        StudentRecord {
            id: Some(ResourceId::from(1)),
            first_name: "Ann".into(),
            last_name: "Lee".into(),
            age: 20,
            gender: "Female".into(),
            email: "ann@example.com".into(),
            phone: "0123456789".into(),
            course_id: None,
            enrollment_date: enrollment_date.into(),
            status: status.into(),
        }
    }

    fn course(status: &str) -> CourseRecord {
        CourseRecord {
            id: Some(ResourceId::from(1)),
            course_name: "Databases".into(),
            course_code: "DB101".into(),
            description: None,
            instructor: "Dr. Pham".into(),
            capacity: 40,
            current_enrollment: 5,
            start_date: "2026-02-01".into(),
            end_date: "2026-06-30".into(),
            status: status.into(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_start() {
        assert_eq!(month_start(date(2026, 8, 24)), date(2026, 8, 1));
        assert_eq!(month_start(date(2026, 8, 1)), date(2026, 8, 1));
        assert_eq!(month_start(date(2026, 2, 28)), date(2026, 2, 1));
    }

    #[test]
    fn test_summarize_students_known_distribution() {
        // 5 students, 3 Active / 2 Inactive, 2 enrolled this month.
        let students = vec![
            student("Active", "2026-08-03"),
            student("Active", "2026-08-15"),
            student("Active", "2026-07-31"),
            student("Inactive", "2026-01-10"),
            student("Inactive", "2025-11-02"),
        ];

        let snapshot = summarize_students(&students, date(2026, 8, 1));
        assert_eq!(snapshot.total, 5);
        assert_eq!(snapshot.active, 3);
        assert_eq!(snapshot.inactive, 2);
        assert_eq!(snapshot.additional, 2);
    }

    #[test]
    fn test_enrollment_on_cutoff_day_counts() {
        let students = vec![student("Active", "2026-08-01")];
        assert_eq!(count_enrolled_since(&students, date(2026, 8, 1)), 1);
    }

    #[test]
    fn test_unparseable_dates_are_excluded() {
        let students = vec![
            student("Active", "not-a-date"),
            student("Active", "2026/08/05"),
            student("Active", "2026-08-05"),
            student("Active", ""),
        ];
        assert_eq!(count_enrolled_since(&students, date(2026, 8, 1)), 1);
    }

    #[test]
    fn test_status_match_is_case_sensitive() {
        let students = vec![
            student("Active", "2026-08-03"),
            student("active", "2026-08-03"),
            student("ACTIVE", "2026-08-03"),
            student("Suspended", "2026-08-03"),
        ];

        let snapshot = summarize_students(&students, date(2026, 8, 1));
        assert_eq!(snapshot.total, 4);
        assert_eq!(snapshot.active, 1);
        assert_eq!(snapshot.inactive, 0);
        // The invariant holds even with unknown status values.
        assert!(snapshot.active + snapshot.inactive <= snapshot.total);
    }

    #[test]
    fn test_summarize_courses_counts_enrollments_raw() {
        let courses = vec![course("Active"), course("Inactive"), course("Active")];
        let snapshot = summarize_courses(&courses, 42);
        assert_eq!(snapshot.total, 3);
        assert_eq!(snapshot.active, 2);
        assert_eq!(snapshot.inactive, 1);
        assert_eq!(snapshot.additional, 42);
    }

    #[test]
    fn test_empty_collections() {
        assert_eq!(
            summarize_students(&[], date(2026, 8, 1)),
            StatisticsSnapshot::default()
        );
        assert_eq!(summarize_courses(&[], 0), StatisticsSnapshot::default());
    }
}

#[cfg(test)]
mod wiremock_tests {
    use super::*;
    use crate::query::ListQuery;
    use crate::{Client, ErrorKind};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn test_client(server: &MockServer) -> Client {
        Client::builder()
            .base_url(server.uri())
            .unwrap()
            .build()
            .unwrap()
    }

    fn student_json(status: &str, enrollment_date: &str) -> serde_json::Value {
        serde_json::json!({
            "firstName": "Ann",
            "lastName": "Lee",
            "age": 20,
            "gender": "Female",
            "email": "ann@example.com",
            "phone": "0123456789",
            "enrollmentDate": enrollment_date,
            "status": status
        })
    }

    fn course_json(status: &str) -> serde_json::Value {
        serde_json::json!({
            "courseName": "Databases",
            "courseCode": "DB101",
            "instructor": "Dr. Pham",
            "capacity": 40,
            "currentEnrollment": 5,
            "startDate": "2026-02-01",
            "endDate": "2026-06-30",
            "status": status
        })
    }

    #[tokio::test]
    async fn test_student_statistics_counts_statuses() {
        let server = MockServer::start().await;

        // Enrollment dates far in the past keep `additional` at 0 no matter
        // when this test runs.
        Mock::given(method("GET"))
            .and(path("/students"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                student_json("Active", "2000-01-10"),
                student_json("Active", "2000-02-10"),
                student_json("Inactive", "2000-03-10"),
            ])))
            .mount(&server)
            .await;

        let client = test_client(&server).await;
        let snapshot = client.student_statistics().await.unwrap();
        assert_eq!(snapshot.total, 3);
        assert_eq!(snapshot.active, 2);
        assert_eq!(snapshot.inactive, 1);
        assert_eq!(snapshot.additional, 0);
    }

    #[tokio::test]
    async fn test_course_statistics_joins_both_collections() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/courses"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                course_json("Active"),
                course_json("Inactive"),
            ])))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/enrollments"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 1}, {"id": 2}, {"id": 3}, {"id": 4}
            ])))
            .mount(&server)
            .await;

        let client = test_client(&server).await;
        let snapshot = client.course_statistics().await.unwrap();
        assert_eq!(snapshot.total, 2);
        assert_eq!(snapshot.active, 1);
        assert_eq!(snapshot.inactive, 1);
        assert_eq!(snapshot.additional, 4);
    }

    #[tokio::test]
    async fn test_course_statistics_fails_whole_when_enrollments_fail() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/courses"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!([course_json("Active")])),
            )
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/enrollments"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = test_client(&server).await;
        let err = client.course_statistics().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Aggregation);
    }

    #[tokio::test]
    async fn test_course_statistics_fails_whole_when_courses_fail() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/courses"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/enrollments"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        let client = test_client(&server).await;
        let err = client.course_statistics().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Aggregation);
    }

    #[tokio::test]
    async fn test_additional_unaffected_by_course_list_state() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/courses"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("x-total-count", "1")
                    .set_body_json(serde_json::json!([course_json("Active")])),
            )
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/enrollments"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 1}, {"id": 2}, {"id": 3}
            ])))
            .mount(&server)
            .await;

        let client = test_client(&server).await;

        let baseline = client.course_statistics().await.unwrap();

        // Paginate and search the course list; the snapshot must not move.
        let _ = client
            .courses()
            .list(&ListQuery::new().page(4).size(2).search("data"))
            .await
            .unwrap();
        let after_list = client.course_statistics().await.unwrap();

        assert_eq!(baseline.additional, 3);
        assert_eq!(after_list.additional, 3);
        assert_eq!(baseline, after_list);
    }
}
