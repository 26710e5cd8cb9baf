//! Menu repository trait (port)

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::MenuDataset;
use crate::error::DomainError;

/// Source of the menu data. Loaded once; the result is never mutated.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MenuRepository: Send + Sync {
    async fn load(&self) -> Result<MenuDataset, DomainError>;
}

/// Repository over a dataset that is already in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMenuRepository {
    dataset: MenuDataset,
}

impl InMemoryMenuRepository {
    pub fn new(dataset: MenuDataset) -> Self {
        Self { dataset }
    }
}

#[async_trait]
impl MenuRepository for InMemoryMenuRepository {
    async fn load(&self) -> Result<MenuDataset, DomainError> {
        Ok(self.dataset.clone())
    }
}
