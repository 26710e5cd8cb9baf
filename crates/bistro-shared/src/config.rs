//! Configuration management

use config::{Config, ConfigError, Environment as EnvSource, File};
use serde::Deserialize;

use crate::constants::{
    DEFAULT_APP_NAME, DEFAULT_ASSETS_DIR, DEFAULT_ASSETS_MOUNT, DEFAULT_HOST,
    DEFAULT_MENU_DATA_PATH, DEFAULT_PORT,
};
use crate::types::Environment;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub menu: MenuSettings,
    pub assets: AssetSettings,
    #[serde(default)]
    pub site: SiteSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MenuSettings {
    pub data_path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AssetSettings {
    pub dir: String,
    pub mount: String,
}

impl AssetSettings {
    /// Mount point with exactly one leading slash and no trailing slash.
    /// An empty or slash-only mount yields `"/"`.
    pub fn mount_path(&self) -> String {
        format!("/{}", self.mount.trim().trim_matches('/'))
    }

    pub fn is_root_mount(&self) -> bool {
        self.mount_path() == "/"
    }
}

/// Optional overrides for the static site copy.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SiteSettings {
    #[serde(default)]
    pub base_url: String,
    pub name: Option<String>,
    pub tagline: Option<String>,
    pub about: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub hours: Option<String>,
    pub gallery: Option<Vec<ImageSettings>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ImageSettings {
    pub src: String,
    pub alt: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        Self::builder(&env)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(EnvSource::default().separator("__").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    fn builder(env: &str) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.env", env)?
            .set_default("app.host", DEFAULT_HOST)?
            .set_default("app.port", i64::from(DEFAULT_PORT))?
            .set_default("app.name", DEFAULT_APP_NAME)?
            .set_default("menu.data_path", DEFAULT_MENU_DATA_PATH)?
            .set_default("assets.dir", DEFAULT_ASSETS_DIR)?
            .set_default("assets.mount", DEFAULT_ASSETS_MOUNT)
    }

    pub fn environment(&self) -> Environment {
        Environment::parse(&self.app.env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(env: &str, toml: &str) -> AppConfig {
        AppConfig::builder(env)
            .unwrap()
            .add_source(File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults_apply() {
        let config = from_toml("development", "");
        assert_eq!(config.app.host, "127.0.0.1");
        assert_eq!(config.app.port, 8080);
        assert_eq!(config.menu.data_path, "data/menu.toml");
        assert_eq!(config.assets.mount, "/assets");
        assert_eq!(config.environment(), Environment::Development);
        assert!(config.site.name.is_none());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let config = from_toml(
            "production",
            r#"
            [app]
            port = 9000

            [site]
            name = "Chez Test"
            gallery = [{ src = "/assets/a.jpg", alt = "A" }]
            "#,
        );
        assert_eq!(config.app.port, 9000);
        assert!(config.environment().is_production());
        assert_eq!(config.site.name.as_deref(), Some("Chez Test"));
        assert_eq!(config.site.gallery.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn test_mount_path_is_normalized() {
        let assets = |mount: &str| AssetSettings {
            dir: "static/assets".to_string(),
            mount: mount.to_string(),
        };
        assert_eq!(assets("/assets").mount_path(), "/assets");
        assert_eq!(assets("assets").mount_path(), "/assets");
        assert_eq!(assets("/static/assets/").mount_path(), "/static/assets");
        assert!(assets("/").is_root_mount());
        assert!(assets("").is_root_mount());
        assert!(!assets("assets").is_root_mount());
    }

    // Only test in the crate that touches process environment.
    #[test]
    fn test_load_applies_environment_overrides() {
        std::env::set_var("APP_ENV", "production");
        std::env::set_var("APP__PORT", "9000");
        std::env::set_var("SITE__BASE_URL", "https://bistro.example/");

        let config = AppConfig::load();

        std::env::remove_var("APP_ENV");
        std::env::remove_var("APP__PORT");
        std::env::remove_var("SITE__BASE_URL");

        let config = config.unwrap();
        assert_eq!(config.app.port, 9000);
        assert_eq!(config.app.env, "production");
        assert!(config.environment().is_production());
        assert_eq!(config.site.base_url, "https://bistro.example/");
        assert_eq!(config.menu.data_path, "data/menu.toml");
    }
}
