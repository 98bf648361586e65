//! Storage seam for the student lookups.
//!
//! Services receive an `Arc<dyn StudentRecords>` instead of reaching for a
//! global pool, so tests can substitute [`InMemoryStudentRecords`].
//!
//! [`InMemoryStudentRecords`]: crate::memory::InMemoryStudentRecords

use async_trait::async_trait;

use crate::error::StorageError;
use crate::models::enrollment::EnrollmentRow;
use crate::models::progress::ProgressRow;
use crate::repositories::{EnrollmentRepo, ProgressRepo};
use crate::DbPool;

/// Read-only access to a student's enrollments and lesson progress.
#[async_trait]
pub trait StudentRecords: Send + Sync {
    /// All enrollments where `student_id` matches, projected to
    /// `(course_id, status, progress)`.
    async fn find_enrollments_by_student(
        &self,
        student_id: &str,
    ) -> Result<Vec<EnrollmentRow>, StorageError>;

    /// All progress rows where `student_id` matches, projected to
    /// `(course_id, lesson_id)`, in the order the store hands them out.
    async fn find_progress_by_student(
        &self,
        student_id: &str,
    ) -> Result<Vec<ProgressRow>, StorageError>;

    /// Check that the store is reachable.
    async fn ping(&self) -> Result<(), StorageError>;
}

/// [`StudentRecords`] backed by Postgres.
#[derive(Clone)]
pub struct PgStudentRecords {
    pool: DbPool,
}

impl PgStudentRecords {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentRecords for PgStudentRecords {
    async fn find_enrollments_by_student(
        &self,
        student_id: &str,
    ) -> Result<Vec<EnrollmentRow>, StorageError> {
        Ok(EnrollmentRepo::list_by_student(&self.pool, student_id).await?)
    }

    async fn find_progress_by_student(
        &self,
        student_id: &str,
    ) -> Result<Vec<ProgressRow>, StorageError> {
        Ok(ProgressRepo::list_by_student(&self.pool, student_id).await?)
    }

    async fn ping(&self) -> Result<(), StorageError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
