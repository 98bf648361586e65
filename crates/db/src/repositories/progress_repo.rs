//! Repository for the `lesson_progress` table.

use sqlx::PgPool;

use crate::models::progress::ProgressRow;

/// Column list for progress projections.
const COLUMNS: &str = "course_id, lesson_id";

/// Read access to lesson progress rows.
pub struct ProgressRepo;

impl ProgressRepo {
    /// List every progress row of a student, oldest first.
    ///
    /// Rows are ordered by `(updated_at, id)` so that a consumer keeping the
    /// last row per course ends up with the most recently reached lesson.
    pub async fn list_by_student(
        pool: &PgPool,
        student_id: &str,
    ) -> Result<Vec<ProgressRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM lesson_progress \
             WHERE student_id = $1 \
             ORDER BY updated_at, id"
        );
        sqlx::query_as::<_, ProgressRow>(&query)
            .bind(student_id)
            .fetch_all(pool)
            .await
    }
}
