use crate::domain::MenuRecord;
use crate::view::{ContainerKind, Node};

pub const ITEM_CLASS: &str = "menu-item";
pub const PRICE_CLASS: &str = "menu-item-price";
pub const DESCRIPTION_CLASS: &str = "menu-item-description";

/// Card for one record: name heading, price, and the description if any.
pub fn render_menu_item(record: &MenuRecord) -> Node {
    let mut children = vec![Node::div(
        "menu-item-header",
        vec![
            Node::heading(3, record.name.as_str()),
            Node::text(PRICE_CLASS, record.price.as_str()),
        ],
    )];

    if let Some(description) = record.description() {
        children.push(Node::text(DESCRIPTION_CLASS, description));
    }

    Node::container(ContainerKind::Article, ITEM_CLASS, children)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_with_description() {
        let record = MenuRecord::new(1, "Pancakes", "$8.50").with_description("Fluffy with syrup");
        let card = render_menu_item(&record);

        assert_eq!(card.headings(), vec![(3, "Pancakes")]);
        assert_eq!(card.texts(PRICE_CLASS), vec!["$8.50"]);
        assert_eq!(card.texts(DESCRIPTION_CLASS), vec!["Fluffy with syrup"]);
    }

    #[test]
    fn test_item_without_description_renders_no_description_line() {
        let card = render_menu_item(&MenuRecord::new(40, "Coffee", "$3.00"));

        assert!(card.texts(DESCRIPTION_CLASS).is_empty());
        assert_eq!(card.text_content(), vec!["Coffee", "$3.00"]);
    }

    #[test]
    fn test_price_is_rendered_verbatim() {
        let card = render_menu_item(&MenuRecord::new(7, "Oysters", "market price"));
        assert_eq!(card.texts(PRICE_CLASS), vec!["market price"]);
    }
}
