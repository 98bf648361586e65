/// Opaque student identifier.
pub type StudentId = String;

/// Opaque course identifier. Key of every per-course view.
pub type CourseId = String;

/// Opaque lesson identifier.
pub type LessonId = String;
