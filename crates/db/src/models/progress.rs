use lms_core::types::{CourseId, LessonId};
use serde::Serialize;
use sqlx::FromRow;

/// `(course_id, lesson_id)` projection of the `lesson_progress` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct ProgressRow {
    pub course_id: CourseId,
    pub lesson_id: LessonId,
}

impl ProgressRow {
    pub fn into_entry(self) -> (CourseId, LessonId) {
        (self.course_id, self.lesson_id)
    }
}
