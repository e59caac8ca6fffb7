//! Application state and composition.

use std::sync::Arc;

use ucp_domain::Catalogs;

use crate::infrastructure::auth::AuthService;
use crate::infrastructure::ports::RecordSource;

/// Main application state.
///
/// Holds the record source, the session auth service and the catalog
/// tables. Passed to HTTP handlers via Axum state.
pub struct App {
    pub records: Arc<dyn RecordSource>,
    pub auth: AuthService,
    pub catalogs: Catalogs,
}

impl App {
    pub fn new(records: Arc<dyn RecordSource>, auth: AuthService) -> Self {
        Self {
            records,
            auth,
            catalogs: Catalogs::default(),
        }
    }

    /// Replace the default catalog tables (deployment overrides).
    pub fn with_catalogs(mut self, catalogs: Catalogs) -> Self {
        self.catalogs = catalogs;
        self
    }
}
