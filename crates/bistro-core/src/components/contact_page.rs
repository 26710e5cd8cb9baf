use crate::domain::SiteContent;
use crate::view::{ContainerKind, Node};

use super::render_contact_section;

pub const PAGE_TITLE: &str = "Contact";

/// Destination of the menu page's booking call-to-action.
pub fn render_contact_page(site: &SiteContent) -> Node {
    Node::container(
        ContainerKind::Main,
        "contact-page",
        vec![Node::heading(1, PAGE_TITLE), render_contact_section(site)],
    )
}
