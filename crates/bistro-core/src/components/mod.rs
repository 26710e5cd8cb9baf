//! Page and section renderers.
//!
//! Every renderer is a pure function from its inputs to a [`Node`] tree.
//!
//! [`Node`]: crate::view::Node

pub mod menu_item;
pub mod menu_section;
pub mod menu_page;
pub mod header;
pub mod about_us;
pub mod menu_preview;
pub mod image_gallery;
pub mod contact_section;
pub mod contact_page;
pub mod home_page;

use bistro_shared::Environment;

use crate::domain::SiteLinks;
use crate::render_log::RenderLog;

pub use menu_item::render_menu_item;
pub use menu_section::render_menu_section;
pub use menu_page::render_menu_page;
pub use header::render_header;
pub use about_us::render_about_us;
pub use menu_preview::render_menu_preview;
pub use image_gallery::render_image_gallery;
pub use contact_section::render_contact_section;
pub use contact_page::render_contact_page;
pub use home_page::render_home_page;

/// Per-render collaborators shared by the page renderers.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub environment: Environment,
    pub links: &'a SiteLinks,
    pub log: &'a dyn RenderLog,
}

impl<'a> RenderContext<'a> {
    pub fn new(environment: Environment, links: &'a SiteLinks, log: &'a dyn RenderLog) -> Self {
        Self {
            environment,
            links,
            log,
        }
    }
}
