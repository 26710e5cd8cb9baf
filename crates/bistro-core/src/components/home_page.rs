// ============================================================================
// Bistro Core - Home Page
// File: crates/bistro-core/src/components/home_page.rs
// ============================================================================
//! Landing page composition.

use bistro_shared::constants::HOME_RENDER_NOTICE;

use crate::domain::SiteContent;
use crate::view::Node;

use super::{
    render_about_us, render_contact_section, render_header, render_image_gallery,
    render_menu_preview, RenderContext,
};

pub const COMPONENT: &str = "Home";

/// Header, About Us, menu preview, gallery and contact, always in that order.
pub fn render_home_page(site: &SiteContent, ctx: &RenderContext<'_>) -> Node {
    ctx.log.info(COMPONENT, HOME_RENDER_NOTICE);

    Node::div(
        "home-page",
        vec![
            render_header(site, ctx.links),
            render_about_us(site),
            render_menu_preview(ctx.links),
            render_image_gallery(&site.gallery),
            render_contact_section(site),
        ],
    )
}
