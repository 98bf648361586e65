use std::sync::Arc;

use lms_core::progress::{build_progress_view, ProgressView};
use lms_db::models::progress::ProgressRow;
use lms_db::{StorageError, StudentRecords};

/// Builds a student's [`ProgressView`].
///
/// For a course with several progress rows the last row returned by the
/// store wins. The Postgres store returns rows oldest first, so the view
/// holds the most recently reached lesson.
#[derive(Clone)]
pub struct ProgressLookupService {
    records: Arc<dyn StudentRecords>,
}

impl ProgressLookupService {
    pub fn new(records: Arc<dyn StudentRecords>) -> Self {
        Self { records }
    }

    /// Map each course the student has progress in to the last lesson reached.
    pub async fn lookup(&self, student_id: &str) -> Result<ProgressView, StorageError> {
        let rows = self.records.find_progress_by_student(student_id).await?;
        let row_count = rows.len();
        let view = build_progress_view(rows.into_iter().map(ProgressRow::into_entry));

        tracing::debug!(
            student_id,
            rows = row_count,
            courses = view.len(),
            "Progress lookup complete"
        );
        Ok(view)
    }
}
