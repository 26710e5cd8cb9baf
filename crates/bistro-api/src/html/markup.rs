use bistro_core::{ContainerKind, ImageRef, Node};
use handlebars::html_escape;

/// Serializes [`Node`] trees to HTML fragments.
///
/// Text and attribute values are escaped. Image keys are resolved against
/// the static asset mount unless they are already absolute.
#[derive(Debug, Clone)]
pub struct MarkupWriter {
    assets_mount: String,
}

impl MarkupWriter {
    pub fn new(assets_mount: &str) -> Self {
        Self {
            assets_mount: assets_mount.trim_end_matches('/').to_string(),
        }
    }

    pub fn asset_url(&self, key: &str) -> String {
        if key.starts_with('/') || key.contains("://") {
            key.to_string()
        } else {
            format!("{}/{}", self.assets_mount, key)
        }
    }

    pub fn write(&self, node: &Node) -> String {
        let mut out = String::new();
        self.write_node(node, &mut out);
        out
    }

    fn write_node(&self, node: &Node, out: &mut String) {
        match node {
            Node::Container { kind, class, children } => {
                let tag = container_tag(*kind);
                out.push_str(&format!("<{} class=\"{}\">", tag, html_escape(class)));
                self.write_children(children, out);
                out.push_str(&format!("</{}>", tag));
            }
            Node::Heading { level, text } => {
                out.push_str(&format!("<h{0}>{1}</h{0}>", level, html_escape(text)));
            }
            Node::Text { class, text } => {
                out.push_str(&format!(
                    "<p class=\"{}\">{}</p>",
                    html_escape(class),
                    html_escape(text)
                ));
            }
            Node::Link { href, children } => {
                out.push_str(&format!("<a href=\"{}\">", html_escape(href)));
                self.write_children(children, out);
                out.push_str("</a>");
            }
            Node::Button { label } => {
                out.push_str(&format!("<button type=\"button\">{}</button>", html_escape(label)));
            }
            Node::Image(image) => self.write_image(image, out),
        }
    }

    fn write_children(&self, children: &[Node], out: &mut String) {
        for child in children {
            self.write_node(child, out);
        }
    }

    fn write_image(&self, image: &ImageRef, out: &mut String) {
        out.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\">",
            html_escape(&self.asset_url(&image.key)),
            html_escape(&image.alt)
        ));
    }
}

fn container_tag(kind: ContainerKind) -> &'static str {
    match kind {
        ContainerKind::Div => "div",
        ContainerKind::Section => "section",
        ContainerKind::Article => "article",
        ContainerKind::Header => "header",
        ContainerKind::Main => "main",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_nested_containers() {
        let node = Node::section(
            "menu-section",
            vec![Node::heading(2, "Lunch"), Node::text("menu-item-price", "$9.50")],
        );
        assert_eq!(
            MarkupWriter::new("/assets").write(&node),
            "<section class=\"menu-section\"><h2>Lunch</h2><p class=\"menu-item-price\">$9.50</p></section>"
        );
    }

    #[test]
    fn test_escapes_text_and_attributes() {
        let node = Node::link(
            "/contact?a=1&b=\"2\"",
            vec![Node::button("Fish & <Chips>")],
        );
        let html = MarkupWriter::new("/assets").write(&node);

        assert!(html.contains("Fish &amp; &lt;Chips&gt;"));
        assert!(html.contains("&amp;b"));
        assert!(!html.contains("\"2\""));
        assert!(!html.contains("<Chips>"));
    }

    #[test]
    fn test_image_keys_resolve_against_mount() {
        let writer = MarkupWriter::new("/assets/");
        assert_eq!(writer.asset_url("images/lunch-img.jpg"), "/assets/images/lunch-img.jpg");
        assert_eq!(writer.asset_url("/static/logo.png"), "/static/logo.png");
        assert_eq!(writer.asset_url("https://cdn.example/a.jpg"), "https://cdn.example/a.jpg");

        let html = writer.write(&Node::image(ImageRef::new("images/a.jpg", "A")));
        assert_eq!(html, "<img src=\"/assets/images/a.jpg\" alt=\"A\">");
    }
}
