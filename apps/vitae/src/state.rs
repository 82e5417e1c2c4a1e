use crate::config::Config;
use crate::layout::PageGeometry;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Page the fitting engine measures against.
    pub geometry: PageGeometry,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        AppState {
            geometry: config.page_geometry(),
        }
    }
}
