//! HTML output for the display-unit tree.

mod layout;
mod markup;

pub use layout::PageLayout;
pub use markup::MarkupWriter;

use bistro_core::Page;

use crate::error::ApiError;

/// Turns a rendered [`Page`] into a complete HTML document.
pub struct HtmlRenderer {
    markup: MarkupWriter,
    layout: PageLayout,
}

impl HtmlRenderer {
    pub fn new(assets_mount: &str) -> Result<Self, ApiError> {
        let markup = MarkupWriter::new(assets_mount);
        let layout = PageLayout::new(markup.asset_url("site.css"))?;
        Ok(Self { markup, layout })
    }

    pub fn render(&self, page: &Page) -> Result<String, ApiError> {
        let body = self.markup.write(&page.body);
        self.layout.render(&page.title, &body)
    }
}
