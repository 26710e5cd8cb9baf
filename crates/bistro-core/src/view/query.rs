//! Structural lookups over a rendered tree.

use super::Node;

impl Node {
    /// This node and all descendants, collected depth-first in document order.
    pub fn descendants(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(node.children().iter().rev());
        }
        out
    }

    /// `(level, text)` of every heading, in document order.
    pub fn headings(&self) -> Vec<(u8, &str)> {
        self.descendants()
            .into_iter()
            .filter_map(|node| match node {
                Node::Heading { level, text } => Some((*level, text.as_str())),
                _ => None,
            })
            .collect()
    }

    pub fn headings_at(&self, level: u8) -> Vec<&str> {
        self.headings()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, text)| text)
            .collect()
    }

    /// Text of every `Text` node with the given class.
    pub fn texts(&self, class: &str) -> Vec<&str> {
        self.descendants()
            .into_iter()
            .filter_map(|node| match node {
                Node::Text { class: c, text } if *c == class => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Every link href, in document order.
    pub fn links(&self) -> Vec<&str> {
        self.descendants()
            .into_iter()
            .filter_map(|node| match node {
                Node::Link { href, .. } => Some(href.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Containers carrying the given class.
    pub fn find_by_class(&self, class: &str) -> Vec<&Node> {
        self.descendants()
            .into_iter()
            .filter(|node| matches!(node, Node::Container { class: c, .. } if *c == class))
            .collect()
    }

    /// Every piece of visible text under this node.
    pub fn text_content(&self) -> Vec<&str> {
        self.descendants()
            .into_iter()
            .filter_map(|node| match node {
                Node::Heading { text, .. } | Node::Text { text, .. } => Some(text.as_str()),
                Node::Button { label } => Some(label.as_str()),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Node::section(
            "outer",
            vec![
                Node::heading(2, "Lunch"),
                Node::div(
                    "card",
                    vec![Node::heading(3, "Burger"), Node::text("price", "$9.50")],
                ),
                Node::link("/contact", vec![Node::button("Book")]),
            ],
        )
    }

    #[test]
    fn test_descendants_in_document_order() {
        let tree = sample();
        assert_eq!(tree.headings(), vec![(2, "Lunch"), (3, "Burger")]);
        assert_eq!(tree.text_content(), vec!["Lunch", "Burger", "$9.50", "Book"]);
    }

    #[test]
    fn test_lookups() {
        let tree = sample();
        assert_eq!(tree.headings_at(3), vec!["Burger"]);
        assert_eq!(tree.texts("price"), vec!["$9.50"]);
        assert_eq!(tree.links(), vec!["/contact"]);
        assert_eq!(tree.find_by_class("card").len(), 1);
        assert!(tree.find_by_class("missing").is_empty());
    }
}
