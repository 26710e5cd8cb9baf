// ============================================================================
// Bistro Core - Menu Dataset
// File: crates/bistro-core/src/domain/menu_dataset.rs
// Description: The five category sequences, read-only once loaded
// ============================================================================

use serde::{Deserialize, Serialize};

use super::{MenuCategory, MenuRecord};

/// Menu data for every category. A category missing from the input is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuDataset {
    #[serde(default)]
    pub breakfast: Vec<MenuRecord>,
    #[serde(default)]
    pub lunch: Vec<MenuRecord>,
    #[serde(default)]
    pub dinner: Vec<MenuRecord>,
    #[serde(default)]
    pub dessert: Vec<MenuRecord>,
    #[serde(default, alias = "drink")]
    pub drinks: Vec<MenuRecord>,
}

impl MenuDataset {
    pub fn records(&self, category: MenuCategory) -> &[MenuRecord] {
        match category {
            MenuCategory::Breakfast => &self.breakfast,
            MenuCategory::Lunch => &self.lunch,
            MenuCategory::Dinner => &self.dinner,
            MenuCategory::Dessert => &self.dessert,
            MenuCategory::Drinks => &self.drinks,
        }
    }

    pub fn with_category(mut self, category: MenuCategory, records: Vec<MenuRecord>) -> Self {
        let slot = match category {
            MenuCategory::Breakfast => &mut self.breakfast,
            MenuCategory::Lunch => &mut self.lunch,
            MenuCategory::Dinner => &mut self.dinner,
            MenuCategory::Dessert => &mut self.dessert,
            MenuCategory::Drinks => &mut self.drinks,
        };
        *slot = records;
        self
    }

    pub fn total_items(&self) -> usize {
        MenuCategory::ALL
            .iter()
            .map(|category| self.records(*category).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_items() == 0
    }
}
