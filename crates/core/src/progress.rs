//! Per-course lesson progress view.
//!
//! Built from `(course_id, lesson_id)` projections. A student usually has
//! several rows per course (one per lesson reached); the view keeps one entry
//! per course and the last row processed wins. Callers that want "latest
//! lesson" semantics must hand the rows over in chronological order.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{CourseId, LessonId};

/// Last lesson reached in one course.
///
/// Serialized as `lastLessonId`, the key dashboard clients read. Every other
/// payload in the API (receipts, health) keeps serde's snake_case field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonProgressSummary {
    pub last_lesson_id: LessonId,
}

/// Lesson progress of one student keyed by course id.
pub type ProgressView = HashMap<CourseId, LessonProgressSummary>;

/// Build a [`ProgressView`] from `(course_id, lesson_id)` pairs, in order.
pub fn build_progress_view<I>(rows: I) -> ProgressView
where
    I: IntoIterator<Item = (CourseId, LessonId)>,
{
    let mut view = ProgressView::new();
    for (course_id, lesson_id) in rows {
        view.insert(
            course_id,
            LessonProgressSummary {
                last_lesson_id: lesson_id,
            },
        );
    }
    view
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(course: &str, lesson: &str) -> (CourseId, LessonId) {
        (course.to_string(), lesson.to_string())
    }

    #[test]
    fn empty_rows_give_empty_view() {
        assert!(build_progress_view(Vec::new()).is_empty());
    }

    #[test]
    fn last_row_for_a_course_wins() {
        let view = build_progress_view(vec![row("c1", "l3"), row("c1", "l5")]);

        assert_eq!(view.len(), 1);
        assert_eq!(view["c1"].last_lesson_id, "l5");
    }

    #[test]
    fn row_order_decides_not_lesson_name() {
        let view = build_progress_view(vec![row("c1", "l5"), row("c1", "l3")]);
        assert_eq!(view["c1"].last_lesson_id, "l3");
    }

    #[test]
    fn interleaved_courses_keep_one_entry_each() {
        let view = build_progress_view(vec![row("A", "a1"), row("B", "b1"), row("A", "a2")]);

        let mut keys: Vec<_> = view.keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, vec!["A", "B"]);
        assert_eq!(view["A"].last_lesson_id, "a2");
        assert_eq!(view["B"].last_lesson_id, "b1");
    }

    #[test]
    fn summary_serializes_with_camel_case_key() {
        let json = serde_json::to_value(LessonProgressSummary {
            last_lesson_id: "l5".to_string(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({ "lastLessonId": "l5" }));
    }
}
