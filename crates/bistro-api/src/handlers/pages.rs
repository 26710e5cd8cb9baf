// ============================================================================
// Bistro API - Page Handlers
// File: crates/bistro-api/src/handlers/pages.rs
// ============================================================================
//! Server-rendered HTML pages

use axum::{extract::State, http::Uri, response::Html};
use tracing::debug;

use bistro_core::Page;

use crate::error::ApiError;
use crate::state::AppState;

fn respond(state: &AppState, page: &Page) -> Result<Html<String>, ApiError> {
    state.html.render(page).map(Html)
}

/// Home page - GET /
pub async fn home(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    debug!("Rendering home page");
    respond(&state, &state.site.home())
}

/// Menu page - GET /menu
pub async fn menu(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    debug!("Rendering menu page");
    respond(&state, &state.site.menu())
}

/// Contact page - GET /contact
pub async fn contact(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    debug!("Rendering contact page");
    respond(&state, &state.site.contact())
}

pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
