use crate::domain::{MenuCategory, MenuRecord};
use crate::view::Node;

use super::render_menu_item;

pub const SECTION_CLASS: &str = "menu-section";

/// Heading for the category followed by one card per record, in input order.
///
/// The heading is present even when `records` is empty. Records are not
/// sorted, filtered, or deduplicated.
pub fn render_menu_section(category: MenuCategory, records: &[MenuRecord]) -> Node {
    Node::section(
        SECTION_CLASS,
        vec![
            Node::image(category.image()),
            Node::heading(2, category.label()),
            Node::div("menu-items", records.iter().map(render_menu_item).collect()),
        ],
    )
}
