//! # Bistro Core
//! 
//! Menu domain, the display-unit tree, page renderers, and the repository port.

pub mod domain;
pub mod view;
pub mod components;
pub mod repositories;
pub mod services;
pub mod render_log;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
pub use render_log::{NoopRenderLog, RenderLog, TracingRenderLog};
pub use view::{ContainerKind, Node, Page};
