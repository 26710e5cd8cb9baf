use crate::domain::ImageRef;
use crate::view::Node;

pub fn render_image_gallery(images: &[ImageRef]) -> Node {
    Node::section(
        "image-gallery",
        vec![
            Node::heading(2, "Gallery"),
            Node::div("image-gallery-grid", images.iter().cloned().map(Node::image).collect()),
        ],
    )
}
