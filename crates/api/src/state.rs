use std::sync::Arc;

use lms_db::StudentRecords;
use lms_notifications::NotificationSender;

use crate::config::ServerConfig;
use crate::services::{EnrollmentLookupService, ProgressLookupService};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (JWT settings are read by the auth extractors).
    pub config: Arc<ServerConfig>,
    /// Storage seam, kept for health checks.
    pub records: Arc<dyn StudentRecords>,
    pub enrollments: EnrollmentLookupService,
    pub progress: ProgressLookupService,
    /// Mail sender; `None` when SMTP is not configured.
    pub notifier: Option<Arc<dyn NotificationSender>>,
}

impl AppState {
    /// Wire both lookup services onto the same store.
    pub fn new(
        config: ServerConfig,
        records: Arc<dyn StudentRecords>,
        notifier: Option<Arc<dyn NotificationSender>>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            enrollments: EnrollmentLookupService::new(Arc::clone(&records)),
            progress: ProgressLookupService::new(Arc::clone(&records)),
            records,
            notifier,
        }
    }
}
