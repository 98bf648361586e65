//! Repository for the `enrollments` table.

use sqlx::PgPool;

use crate::models::enrollment::EnrollmentRow;

/// Column list for enrollment projections.
const COLUMNS: &str = "course_id, status, progress";

/// Read access to course enrollments.
pub struct EnrollmentRepo;

impl EnrollmentRepo {
    /// List every enrollment of a student, ordered by course id.
    ///
    /// A student with no enrollments yields an empty vector.
    pub async fn list_by_student(
        pool: &PgPool,
        student_id: &str,
    ) -> Result<Vec<EnrollmentRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM enrollments \
             WHERE student_id = $1 \
             ORDER BY course_id"
        );
        sqlx::query_as::<_, EnrollmentRow>(&query)
            .bind(student_id)
            .fetch_all(pool)
            .await
    }
}
