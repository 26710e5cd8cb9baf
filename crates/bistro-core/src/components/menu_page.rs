// ============================================================================
// Bistro Core - Menu Page
// File: crates/bistro-core/src/components/menu_page.rs
// ============================================================================
//! Full menu: title, the five category sections, and the booking call-to-action.

use bistro_shared::constants::MENU_REVIEW_HINT;

use crate::domain::{MenuCategory, MenuDataset};
use crate::view::{ContainerKind, Node};

use super::{render_menu_section, RenderContext};

pub const COMPONENT: &str = "Menu";
pub const PAGE_TITLE: &str = "Menu";
pub const CTA_LABEL: &str = "Book your table";

/// Renders the menu page from `dataset`.
///
/// Sections always appear in [`MenuCategory::ALL`] order. The review hint is
/// logged outside production only.
pub fn render_menu_page(dataset: &MenuDataset, ctx: &RenderContext<'_>) -> Node {
    if !ctx.environment.is_production() {
        ctx.log.info(COMPONENT, MENU_REVIEW_HINT);
    }

    let sections = MenuCategory::ALL
        .iter()
        .map(|category| render_menu_section(*category, dataset.records(*category)))
        .collect();

    Node::container(
        ContainerKind::Main,
        "menu-page",
        vec![
            Node::container(
                ContainerKind::Header,
                "menu-page-header",
                vec![Node::heading(1, PAGE_TITLE)],
            ),
            Node::div("menu-sections", sections),
            Node::div(
                "menu-cta",
                vec![Node::link(
                    ctx.links.contact.as_str(),
                    vec![Node::button(CTA_LABEL)],
                )],
            ),
        ],
    )
}
