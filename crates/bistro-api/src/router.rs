use axum::{handler::HandlerWithoutStateExt, routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, TraceLayer},
};

use bistro_shared::config::AssetSettings;
use bistro_shared::constants::{CONTACT_PATH, HEALTH_PATH, HOME_PATH, MENU_PATH};

use crate::handlers::{health, pages};
use crate::state::AppState;

/// Builds the site router. A root asset mount serves files for any path no
/// page route claims; unknown files still get the JSON not-found body.
pub fn build_router(state: AppState, assets: &AssetSettings) -> Router {
    let router = Router::new()
        // Pages
        .route(HOME_PATH, get(pages::home))
        .route(MENU_PATH, get(pages::menu))
        .route(CONTACT_PATH, get(pages::contact))
        // Health check
        .route(HEALTH_PATH, get(health::health_check));

    // Static Assets
    let router = if assets.is_root_mount() {
        router.fallback_service(
            ServeDir::new(&assets.dir).not_found_service(pages::not_found.into_service()),
        )
    } else {
        router
            .nest_service(&assets.mount_path(), ServeDir::new(&assets.dir))
            .fallback(pages::not_found)
    };

    router
        .with_state(state)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}
