use std::sync::Arc;

use lms_core::enrollment::{build_enrollment_view, EnrollmentView};
use lms_db::models::enrollment::EnrollmentRow;
use lms_db::{StorageError, StudentRecords};

/// Builds a student's [`EnrollmentView`].
#[derive(Clone)]
pub struct EnrollmentLookupService {
    records: Arc<dyn StudentRecords>,
}

impl EnrollmentLookupService {
    pub fn new(records: Arc<dyn StudentRecords>) -> Self {
        Self { records }
    }

    /// Map each course the student is enrolled in to its status and progress.
    ///
    /// No enrollments yields an empty view. Storage failures are returned
    /// as-is; there is no retry.
    pub async fn lookup(&self, student_id: &str) -> Result<EnrollmentView, StorageError> {
        let rows = self.records.find_enrollments_by_student(student_id).await?;
        let view = build_enrollment_view(rows.into_iter().map(EnrollmentRow::into_entry));

        tracing::debug!(student_id, courses = view.len(), "Enrollment lookup complete");
        Ok(view)
    }
}
