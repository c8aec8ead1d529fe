use std::path::PathBuf;
use std::sync::Arc;

use crate::content::SiteContent;
use crate::nav::NavConfig;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Everything here is immutable after startup. Per-request state (the active
/// section, the contact form fields) travels in the URL and the POST body, so
/// any number of concurrent sessions share one `AppState` without locking.
#[derive(Clone)]
pub struct AppState {
    /// Content store, authored once, read-only at runtime.
    pub content: Arc<SiteContent>,
    pub nav: NavConfig,
    /// Re-read on each request that needs it, so dropping a PDF in place
    /// takes effect without a restart.
    pub resume_path: PathBuf,
}
