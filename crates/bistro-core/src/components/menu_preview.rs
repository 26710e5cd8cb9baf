use crate::domain::{MenuCategory, SiteLinks};
use crate::view::Node;

pub const CATEGORY_TILE_CLASS: &str = "menu-preview-category";
pub const EXPLORE_LABEL: &str = "Explore Menu";

/// Home-page teaser: one tile per category and a link to the full menu.
pub fn render_menu_preview(links: &SiteLinks) -> Node {
    let tiles = MenuCategory::ALL
        .iter()
        .map(|category| {
            Node::div(
                CATEGORY_TILE_CLASS,
                vec![Node::image(category.image()), Node::heading(3, category.label())],
            )
        })
        .collect();

    Node::section(
        "menu-preview",
        vec![
            Node::heading(2, "Our Menu"),
            Node::div("menu-preview-categories", tiles),
            Node::link(links.menu.as_str(), vec![Node::button(EXPLORE_LABEL)]),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_lists_every_category() {
        let preview = render_menu_preview(&SiteLinks::default());
        assert_eq!(
            preview.headings_at(3),
            vec!["Breakfast", "Lunch", "Dinner", "Dessert", "Drinks"]
        );
        assert_eq!(preview.find_by_class(CATEGORY_TILE_CLASS).len(), 5);
        assert_eq!(preview.links(), vec!["/menu"]);
    }
}
