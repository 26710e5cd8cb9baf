use serde::{Deserialize, Serialize};

use super::ImageRef;

/// The five fixed menu categories, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuCategory {
    Breakfast,
    Lunch,
    Dinner,
    Dessert,
    Drinks,
}

impl MenuCategory {
    pub const ALL: [MenuCategory; 5] = [
        Self::Breakfast,
        Self::Lunch,
        Self::Dinner,
        Self::Dessert,
        Self::Drinks,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::Dessert => "Dessert",
            Self::Drinks => "Drinks",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Dessert => "dessert",
            Self::Drinks => "drinks",
        }
    }

    pub fn image(&self) -> ImageRef {
        ImageRef::new(
            format!("images/{}-img.jpg", self.slug()),
            format!("{} dishes", self.label()),
        )
    }
}
