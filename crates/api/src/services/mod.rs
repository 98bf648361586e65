//! Read-side lookup services.
//!
//! Each service performs exactly one storage read per call and reshapes the
//! rows into a per-course view. The two services are independent: callers
//! may run them sequentially or concurrently and merge the views themselves.

pub mod enrollment_lookup;
pub mod progress_lookup;

pub use enrollment_lookup::EnrollmentLookupService;
pub use progress_lookup::ProgressLookupService;
