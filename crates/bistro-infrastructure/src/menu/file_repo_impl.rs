// ============================================================================
// Bistro Infrastructure - File Menu Repository
// File: crates/bistro-infrastructure/src/menu/file_repo_impl.rs
// ============================================================================
//! Loads the menu dataset from a TOML or JSON file.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use bistro_core::repositories::MenuRepository;
use bistro_core::{DomainError, MenuDataset};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DataFormat {
    Toml,
    Json,
}

impl DataFormat {
    fn from_path(path: &Path) -> Result<Self, DomainError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            _ => Err(DomainError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Menu repository reading a single data file. The format follows the
/// file extension.
#[derive(Debug, Clone)]
pub struct FileMenuRepository {
    path: PathBuf,
}

impl FileMenuRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse(&self, format: DataFormat, raw: &str) -> Result<MenuDataset, DomainError> {
        let parsed: Result<MenuDataset, String> = match format {
            DataFormat::Toml => toml::from_str(raw).map_err(|e| e.to_string()),
            DataFormat::Json => serde_json::from_str(raw).map_err(|e| e.to_string()),
        };
        parsed.map_err(|e| DomainError::MenuDataMalformed(format!("{}: {}", self.path.display(), e)))
    }
}

#[async_trait]
impl MenuRepository for FileMenuRepository {
    async fn load(&self) -> Result<MenuDataset, DomainError> {
        let format = DataFormat::from_path(&self.path)?;
        debug!("Reading menu data from {}", self.path.display());

        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => DomainError::MenuDataNotFound(self.path.display().to_string()),
                _ => DomainError::MenuDataUnreadable(format!("{}: {}", self.path.display(), e)),
            })?;

        self.parse(format, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bistro_core::MenuCategory;
    use std::io::Write;

    fn write_file(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_load_toml() {
        let file = write_file(
            ".toml",
            r#"
            [[breakfast]]
            id = 1
            name = "Pancakes"
            description = "Fluffy with syrup"
            price = "$8.50"

            [[drinks]]
            id = 40
            name = "Coffee"
            price = "$3.00"
            "#,
        );

        let dataset = FileMenuRepository::new(file.path()).load().await.unwrap();
        assert_eq!(dataset.records(MenuCategory::Breakfast)[0].name, "Pancakes");
        assert!(dataset.records(MenuCategory::Drinks)[0].description.is_none());
        assert!(dataset.records(MenuCategory::Lunch).is_empty());
    }

    #[tokio::test]
    async fn test_load_json() {
        let file = write_file(
            ".json",
            r#"{"dessert": [{"id": 30, "name": "Cheesecake", "description": "Creamy", "price": "$6.00"}]}"#,
        );

        let dataset = FileMenuRepository::new(file.path()).load().await.unwrap();
        assert_eq!(dataset.total_items(), 1);
        assert_eq!(dataset.dessert[0].price, "$6.00");
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileMenuRepository::new(dir.path().join("menu.toml"));

        let result = repo.load().await;
        assert!(matches!(result, Err(DomainError::MenuDataNotFound(_))));
    }

    #[tokio::test]
    async fn test_malformed_file_is_rejected() {
        let file = write_file(".toml", "[[lunch]]\nid = \"not a number\"\n");

        let result = FileMenuRepository::new(file.path()).load().await;
        assert!(matches!(result, Err(DomainError::MenuDataMalformed(_))));
    }

    #[tokio::test]
    async fn test_unknown_extension_is_rejected() {
        let file = write_file(".yaml", "breakfast: []");

        let result = FileMenuRepository::new(file.path()).load().await;
        assert!(matches!(result, Err(DomainError::UnsupportedFormat(_))));
    }
}
