// ============================================================================
// Bistro Core - Menu Record Entity
// File: crates/bistro-core/src/domain/menu_record.rs
// Description: One orderable item on the menu
// ============================================================================

use serde::{Deserialize, Serialize};

/// Menu record as supplied by the menu data file.
///
/// `price` is display text and is never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuRecord {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: String,
}

impl MenuRecord {
    pub fn new(id: i64, name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            price: price.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Description worth displaying. Blank descriptions count as absent.
    pub fn description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
    }
}
