use crate::domain::SiteContent;
use crate::view::Node;

pub fn render_about_us(site: &SiteContent) -> Node {
    Node::section(
        "about-us",
        vec![
            Node::image(site.about_image.clone()),
            Node::heading(2, "About Us"),
            Node::text("about-us-text", site.about.as_str()),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ImageRef;

    #[test]
    fn test_about_us_heading_text_and_image() {
        let site = SiteContent {
            about: "Family run since 1998.".to_string(),
            about_image: ImageRef::new("images/kitchen.jpg", "Our kitchen"),
            ..SiteContent::default()
        };
        let section = render_about_us(&site);

        assert_eq!(section.headings(), vec![(2, "About Us")]);
        assert_eq!(section.texts("about-us-text"), vec!["Family run since 1998."]);
        assert!(section
            .descendants()
            .contains(&&Node::image(ImageRef::new("images/kitchen.jpg", "Our kitchen"))));
    }
}
