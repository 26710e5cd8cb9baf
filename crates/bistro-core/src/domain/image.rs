use serde::{Deserialize, Serialize};

/// Opaque reference to a static image. The key is resolved to a URL by
/// whoever serializes the view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub key: String,
    pub alt: String,
}

impl ImageRef {
    pub fn new(key: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            alt: alt.into(),
        }
    }
}
