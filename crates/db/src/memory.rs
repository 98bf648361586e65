//! In-memory [`StudentRecords`] for tests and local prototyping.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use lms_core::enrollment::{validate_progress, validate_status};

use crate::error::StorageError;
use crate::models::enrollment::EnrollmentRow;
use crate::models::progress::ProgressRow;
use crate::records::StudentRecords;

#[derive(Default)]
struct Tables {
    enrollments: HashMap<String, Vec<EnrollmentRow>>,
    progress: HashMap<String, Vec<ProgressRow>>,
    outage: Option<String>,
}

/// Keeps rows per student in insertion order.
///
/// Enrollment inserts enforce the same rules as the Postgres schema
/// (unique course per student, known status, progress in `0..=100`).
/// [`fail_with`](Self::fail_with) simulates an unreachable store.
#[derive(Default)]
pub struct InMemoryStudentRecords {
    tables: Mutex<Tables>,
    reads: AtomicUsize,
}

impl InMemoryStudentRecords {
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> Result<MutexGuard<'_, Tables>, StorageError> {
        self.tables
            .lock()
            .map_err(|_| StorageError::Unavailable("in-memory store lock poisoned".into()))
    }

    /// Insert an enrollment row for a student.
    pub fn insert_enrollment(
        &self,
        student_id: &str,
        course_id: &str,
        status: &str,
        progress: i32,
    ) -> Result<(), StorageError> {
        validate_status(status).map_err(|e| StorageError::ConstraintViolation(e.to_string()))?;
        validate_progress(progress)
            .map_err(|e| StorageError::ConstraintViolation(e.to_string()))?;

        let mut tables = self.tables()?;
        let rows = tables.enrollments.entry(student_id.to_string()).or_default();
        if rows.iter().any(|r| r.course_id == course_id) {
            return Err(StorageError::ConstraintViolation(format!(
                "duplicate enrollment for student {student_id} in course {course_id}"
            )));
        }
        rows.push(EnrollmentRow {
            course_id: course_id.to_string(),
            status: status.to_string(),
            progress,
        });
        Ok(())
    }

    /// Append a progress row for a student.
    pub fn insert_progress(
        &self,
        student_id: &str,
        course_id: &str,
        lesson_id: &str,
    ) -> Result<(), StorageError> {
        self.tables()?
            .progress
            .entry(student_id.to_string())
            .or_default()
            .push(ProgressRow {
                course_id: course_id.to_string(),
                lesson_id: lesson_id.to_string(),
            });
        Ok(())
    }

    /// Make every subsequent read fail with [`StorageError::Unavailable`].
    pub fn fail_with(&self, reason: &str) -> Result<(), StorageError> {
        self.tables()?.outage = Some(reason.to_string());
        Ok(())
    }

    /// Number of read queries served so far (pings excluded).
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    fn check_outage(tables: &Tables) -> Result<(), StorageError> {
        match &tables.outage {
            Some(reason) => Err(StorageError::Unavailable(reason.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl StudentRecords for InMemoryStudentRecords {
    async fn find_enrollments_by_student(
        &self,
        student_id: &str,
    ) -> Result<Vec<EnrollmentRow>, StorageError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        let tables = self.tables()?;
        Self::check_outage(&tables)?;
        Ok(tables
            .enrollments
            .get(student_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn find_progress_by_student(
        &self,
        student_id: &str,
    ) -> Result<Vec<ProgressRow>, StorageError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        let tables = self.tables()?;
        Self::check_outage(&tables)?;
        Ok(tables.progress.get(student_id).cloned().unwrap_or_default())
    }

    async fn ping(&self) -> Result<(), StorageError> {
        let tables = self.tables()?;
        Self::check_outage(&tables)
    }
}
