use std::sync::Arc;

use bistro_core::services::SiteService;

use crate::html::HtmlRenderer;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub site: Arc<SiteService>,
    pub html: Arc<HtmlRenderer>,
}

impl AppState {
    pub fn new(site: SiteService, html: HtmlRenderer) -> Self {
        Self {
            site: Arc::new(site),
            html: Arc::new(html),
        }
    }
}
