//! Site configuration: the wordmark and the ordered main navigation items.
//!
//! The document is embedded at compile time from `assets/site.json`:
//! ```json
//! {
//!   "name": "Veil",
//!   "mainNav": [
//!     { "title": "Features", "href": "/features" },
//!     { "title": "Careers", "href": "/careers", "disabled": true }
//!   ]
//! }
//! ```

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::core::location::NavLocation;
use crate::error::Result;
use crate::logging::{log_config_error, log_config_loaded};

const SITE_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/site.json"));

/// One entry of the main navigation. Order in the config is display order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NavItem {
    pub title: String,
    pub href: String,
    /// Disabled items render but do not navigate.
    #[serde(default)]
    pub disabled: bool,
}

impl NavItem {
    pub fn new(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
            disabled: false,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub name: String,
    #[serde(default)]
    pub main_nav: Vec<NavItem>,
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Parse the embedded site document.
    pub fn load() -> Result<Self> {
        Self::from_json(SITE_JSON)
    }

    /// The nav item a page path belongs to: an exact href match, else the
    /// first item highlighted for that path.
    pub fn section_for(&self, path: &str) -> Option<&NavItem> {
        let location = NavLocation::from_path(path);
        self.main_nav
            .iter()
            .find(|item| item.href == location.path())
            .or_else(|| {
                self.main_nav
                    .iter()
                    .find(|item| location.highlights(&item.href))
            })
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Veil".to_string(),
            main_nav: Vec::new(),
        }
    }
}

static SITE: Lazy<SiteConfig> = Lazy::new(|| match SiteConfig::load() {
    Ok(site) => {
        log_config_loaded(&site.name, site.main_nav.len());
        site
    }
    Err(err) => {
        log_config_error(&err.to_string());
        SiteConfig::default()
    }
});

/// Global site configuration (parsed once).
pub fn site_config() -> &'static SiteConfig {
    &SITE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UiError;

    #[test]
    fn embedded_config_parses_in_order() {
        let site = SiteConfig::load().expect("embedded site config parses");
        assert_eq!(site.name, "Veil");
        let titles: Vec<_> = site.main_nav.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(
            titles,
            ["Features", "Pricing", "Blog", "Documentation", "Careers"]
        );
        assert!(site.main_nav.iter().any(|i| i.disabled));
    }

    #[test]
    fn disabled_defaults_to_false() {
        let site = SiteConfig::from_json(r#"{"name":"X","mainNav":[{"title":"A","href":"/a"}]}"#)
            .expect("valid json");
        assert_eq!(site.main_nav, vec![NavItem::new("A", "/a")]);
    }

    #[test]
    fn missing_nav_is_empty() {
        let site = SiteConfig::from_json(r#"{"name":"X"}"#).expect("valid json");
        assert!(site.main_nav.is_empty());
    }

    #[test]
    fn malformed_config_is_an_error() {
        let err = SiteConfig::from_json("{ name: ").unwrap_err();
        assert!(matches!(err, UiError::Config(_)));
    }

    #[test]
    fn hrefs_pass_through_unchecked() {
        let site =
            SiteConfig::from_json(r#"{"name":"X","mainNav":[{"title":"Odd","href":"not a path"}]}"#)
                .expect("valid json");
        assert_eq!(site.main_nav[0].href, "not a path");
    }

    #[test]
    fn section_lookup_prefers_exact_match() {
        let site = SiteConfig {
            name: "X".into(),
            main_nav: vec![NavItem::new("About", "/about"), NavItem::new("Docs", "/docs")],
        };
        assert_eq!(site.section_for("/docs").map(|i| i.title.as_str()), Some("Docs"));
        assert_eq!(
            site.section_for("/docs/getting-started?x=1").map(|i| i.title.as_str()),
            Some("Docs")
        );
        assert_eq!(site.section_for("/nowhere"), None);
        assert_eq!(site.section_for("/"), None);
    }
}
