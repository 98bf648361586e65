use lms_core::enrollment::EnrollmentSummary;
use lms_core::types::CourseId;
use serde::Serialize;
use sqlx::FromRow;

/// `(course_id, status, progress)` projection of the `enrollments` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct EnrollmentRow {
    pub course_id: CourseId,
    pub status: String,
    pub progress: i32,
}

impl EnrollmentRow {
    /// Split the row into its view key and value.
    pub fn into_entry(self) -> (CourseId, EnrollmentSummary) {
        (
            self.course_id,
            EnrollmentSummary {
                status: self.status,
                progress: self.progress,
            },
        )
    }
}
