use bistro_shared::constants::{CONTACT_PATH, HOME_PATH, MENU_PATH};

/// Navigation targets, prefixed with the configured base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLinks {
    pub home: String,
    pub menu: String,
    pub contact: String,
}

impl SiteLinks {
    pub fn new(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            home: format!("{}{}", base, HOME_PATH),
            menu: format!("{}{}", base, MENU_PATH),
            contact: format!("{}{}", base, CONTACT_PATH),
        }
    }
}

impl Default for SiteLinks {
    fn default() -> Self {
        Self::new("")
    }
}
