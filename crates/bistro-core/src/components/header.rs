use crate::domain::{SiteContent, SiteLinks};
use crate::view::{ContainerKind, Node};

pub const MENU_LINK_LABEL: &str = "Our Menu";
pub const BOOK_LINK_LABEL: &str = "Book a table";

/// Hero banner with the restaurant name and the two primary links.
pub fn render_header(site: &SiteContent, links: &SiteLinks) -> Node {
    Node::container(
        ContainerKind::Header,
        "site-header",
        vec![
            Node::heading(1, site.name.as_str()),
            Node::text("site-tagline", site.tagline.as_str()),
            Node::div(
                "site-header-actions",
                vec![
                    Node::link(links.menu.as_str(), vec![Node::button(MENU_LINK_LABEL)]),
                    Node::link(links.contact.as_str(), vec![Node::button(BOOK_LINK_LABEL)]),
                ],
            ),
        ],
    )
}
