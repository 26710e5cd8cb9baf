// ============================================================================
// Bistro Core - Site Service
// File: crates/bistro-core/src/services/site_service.rs
// ============================================================================
//! Holds the loaded, read-only site data and renders pages from it.

use std::sync::Arc;
use tracing::{info, warn};

use bistro_shared::Environment;

use crate::components::{
    contact_page, menu_page, render_contact_page, render_home_page, render_menu_page,
    RenderContext,
};
use crate::domain::{MenuDataset, SiteContent, SiteLinks};
use crate::error::DomainError;
use crate::render_log::RenderLog;
use crate::repositories::MenuRepository;
use crate::view::Page;

/// Page renderer over immutable site data. Safe to share across requests.
pub struct SiteService {
    dataset: Arc<MenuDataset>,
    content: SiteContent,
    links: SiteLinks,
    environment: Environment,
    log: Arc<dyn RenderLog>,
}

impl SiteService {
    pub fn new(
        dataset: MenuDataset,
        content: SiteContent,
        links: SiteLinks,
        environment: Environment,
        log: Arc<dyn RenderLog>,
    ) -> Self {
        Self {
            dataset: Arc::new(dataset),
            content,
            links,
            environment,
            log,
        }
    }

    /// Loads the menu from `repo`. A missing dataset is served as empty.
    pub async fn from_repository<R: MenuRepository + ?Sized>(
        repo: &R,
        content: SiteContent,
        links: SiteLinks,
        environment: Environment,
        log: Arc<dyn RenderLog>,
    ) -> Result<Self, DomainError> {
        let dataset = match repo.load().await {
            Ok(dataset) => dataset,
            Err(DomainError::MenuDataNotFound(source)) => {
                warn!("Menu data not found at {}, serving an empty menu", source);
                MenuDataset::default()
            }
            Err(e) => return Err(e),
        };

        info!("Menu loaded: {} items", dataset.total_items());
        Ok(Self::new(dataset, content, links, environment, log))
    }

    pub fn dataset(&self) -> &MenuDataset {
        &self.dataset
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    fn context(&self) -> RenderContext<'_> {
        RenderContext::new(self.environment, &self.links, self.log.as_ref())
    }

    pub fn home(&self) -> Page {
        Page::new(
            self.content.name.as_str(),
            render_home_page(&self.content, &self.context()),
        )
    }

    pub fn menu(&self) -> Page {
        Page::new(
            format!("{} | {}", menu_page::PAGE_TITLE, self.content.name),
            render_menu_page(&self.dataset, &self.context()),
        )
    }

    pub fn contact(&self) -> Page {
        Page::new(
            format!("{} | {}", contact_page::PAGE_TITLE, self.content.name),
            render_contact_page(&self.content),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MenuCategory, MenuRecord};
    use crate::render_log::NoopRenderLog;
    use crate::repositories::menu_repository::MockMenuRepository;
    use crate::repositories::InMemoryMenuRepository;

    async fn service_from<R: MenuRepository>(repo: &R) -> Result<SiteService, DomainError> {
        SiteService::from_repository(
            repo,
            SiteContent::default(),
            SiteLinks::default(),
            Environment::Test,
            Arc::new(NoopRenderLog),
        )
        .await
    }

    #[tokio::test]
    async fn test_loads_dataset_from_repository() {
        let dataset = MenuDataset::default()
            .with_category(MenuCategory::Drinks, vec![MenuRecord::new(40, "Coffee", "$3.00")]);
        let service = service_from(&InMemoryMenuRepository::new(dataset.clone()))
            .await
            .unwrap();

        assert_eq!(service.dataset(), &dataset);
        assert_eq!(service.menu().title, "Menu | Bistro");
        assert!(service.menu().body.text_content().contains(&"Coffee"));
    }

    #[tokio::test]
    async fn test_missing_menu_data_serves_empty_menu() {
        let mut repo = MockMenuRepository::new();
        repo.expect_load()
            .times(1)
            .returning(|| Err(DomainError::MenuDataNotFound("data/menu.toml".to_string())));

        let service = service_from(&repo).await.unwrap();
        assert!(service.dataset().is_empty());
        assert_eq!(service.menu().body.headings_at(2).len(), 5);
    }

    #[tokio::test]
    async fn test_malformed_menu_data_is_an_error() {
        let mut repo = MockMenuRepository::new();
        repo.expect_load()
            .returning(|| Err(DomainError::MenuDataMalformed("expected table".to_string())));

        let result = service_from(&repo).await;
        assert!(matches!(result, Err(DomainError::MenuDataMalformed(_))));
    }

    #[tokio::test]
    async fn test_pages_are_stable_across_renders() {
        let service = service_from(&InMemoryMenuRepository::default()).await.unwrap();
        assert_eq!(service.home(), service.home());
        assert_eq!(service.contact().body.headings_at(1), vec!["Contact"]);
    }
}
