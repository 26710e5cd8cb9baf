use handlebars::Handlebars;
use serde::Serialize;

use crate::error::ApiError;

const LAYOUT_NAME: &str = "layout";
const LAYOUT_TEMPLATE: &str = include_str!("../../templates/layout.hbs");

#[derive(Serialize)]
struct LayoutData<'a> {
    title: &'a str,
    stylesheet: &'a str,
    body: &'a str,
}

/// Document shell wrapped around every page body.
pub struct PageLayout {
    registry: Handlebars<'static>,
    stylesheet: String,
}

impl PageLayout {
    pub fn new(stylesheet: String) -> Result<Self, ApiError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_template_string(LAYOUT_NAME, LAYOUT_TEMPLATE)?;
        Ok(Self { registry, stylesheet })
    }

    /// `body` must already be escaped markup; `title` is escaped here.
    pub fn render(&self, title: &str, body: &str) -> Result<String, ApiError> {
        let data = LayoutData {
            title,
            stylesheet: &self.stylesheet,
            body,
        };
        Ok(self.registry.render(LAYOUT_NAME, &data)?)
    }
}
