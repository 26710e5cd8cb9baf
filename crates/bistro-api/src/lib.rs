//! # Bistro API
//! 
//! HTTP handlers, HTML rendering, application state, and routing.

pub mod error;
pub mod handlers;
pub mod html;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
