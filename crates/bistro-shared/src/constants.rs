//! Application-wide constants

pub const HOME_PATH: &str = "/";
pub const MENU_PATH: &str = "/menu";
pub const CONTACT_PATH: &str = "/contact";
pub const HEALTH_PATH: &str = "/health";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_APP_NAME: &str = "bistro-server";
pub const DEFAULT_MENU_DATA_PATH: &str = "data/menu.toml";
pub const DEFAULT_ASSETS_DIR: &str = "static/assets";
pub const DEFAULT_ASSETS_MOUNT: &str = "/assets";

/// Emitted by the menu page outside production.
pub const MENU_REVIEW_HINT: &str = "CodeRabbit should review this change!";
/// Emitted by the home page on every render.
pub const HOME_RENDER_NOTICE: &str = "coderabbit called from HOME screen";
