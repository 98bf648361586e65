//! Enrollment statuses, validation, and the per-course enrollment view.
//!
//! The view is built from `(course_id, status, progress)` projections and is
//! keyed by course id. Stored values are carried over verbatim.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::CourseId;

// ---------------------------------------------------------------------------
// Statuses
// ---------------------------------------------------------------------------

/// The student is currently taking the course.
pub const STATUS_ACTIVE: &str = "active";
/// The student finished the course.
pub const STATUS_COMPLETED: &str = "completed";
/// The student left the course.
pub const STATUS_DROPPED: &str = "dropped";
/// The student suspended the course.
pub const STATUS_PAUSED: &str = "paused";

/// All valid enrollment statuses.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_ACTIVE,
    STATUS_COMPLETED,
    STATUS_DROPPED,
    STATUS_PAUSED,
];

/// Upper bound of the progress percentage.
pub const MAX_PROGRESS: i32 = 100;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate that a status is one of [`VALID_STATUSES`].
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid enrollment status '{status}'. Must be one of: {VALID_STATUSES:?}"
        )))
    }
}

/// Validate that a progress percentage lies in `0..=100`.
pub fn validate_progress(progress: i32) -> Result<(), CoreError> {
    if (0..=MAX_PROGRESS).contains(&progress) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Enrollment progress must be between 0 and {MAX_PROGRESS}, got {progress}"
        )))
    }
}

// ---------------------------------------------------------------------------
// View
// ---------------------------------------------------------------------------

/// Status and progress of one enrollment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentSummary {
    pub status: String,
    pub progress: i32,
}

/// Enrollments of one student keyed by course id.
pub type EnrollmentView = HashMap<CourseId, EnrollmentSummary>;

/// Build an [`EnrollmentView`] from `(course_id, summary)` pairs.
///
/// `(student_id, course_id)` is unique in storage, so each course appears at
/// most once; should a duplicate slip through, the later pair wins.
pub fn build_enrollment_view<I>(rows: I) -> EnrollmentView
where
    I: IntoIterator<Item = (CourseId, EnrollmentSummary)>,
{
    rows.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn summary(status: &str, progress: i32) -> EnrollmentSummary {
        EnrollmentSummary {
            status: status.to_string(),
            progress,
        }
    }

    #[test]
    fn all_statuses_are_valid() {
        for status in VALID_STATUSES {
            assert!(validate_status(status).is_ok(), "{status} should be valid");
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert_matches!(validate_status("archived"), Err(CoreError::Validation(_)));
        assert_matches!(validate_status(""), Err(CoreError::Validation(_)));
    }

    #[test]
    fn progress_bounds() {
        assert!(validate_progress(0).is_ok());
        assert!(validate_progress(100).is_ok());
        assert!(validate_progress(-1).is_err());
        assert!(validate_progress(101).is_err());
    }

    #[test]
    fn empty_rows_give_empty_view() {
        let view = build_enrollment_view(Vec::new());
        assert!(view.is_empty());
    }

    #[test]
    fn single_enrollment_is_keyed_by_course() {
        let view = build_enrollment_view(vec![("c1".to_string(), summary("active", 40))]);

        assert_eq!(view.len(), 1);
        assert_eq!(view["c1"], summary("active", 40));
    }

    #[test]
    fn values_are_preserved_verbatim() {
        let view = build_enrollment_view(vec![
            ("a".to_string(), summary("completed", 100)),
            ("b".to_string(), summary("whatever-legacy", 250)),
        ]);

        let mut keys: Vec<_> = view.keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(view["b"], summary("whatever-legacy", 250));
    }

    #[test]
    fn summary_serializes_as_flat_object() {
        let json = serde_json::to_value(summary("active", 40)).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "active", "progress": 40 }));
    }
}
