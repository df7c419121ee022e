//! Shared UI crate for the Veil site. Components, site configuration and
//! routing glue live here; platform crates only own the `Route` enum.

use dioxus::prelude::*;

pub mod config;
pub mod core;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod views;

pub mod components {
    // Top navigation bar (components/main_nav.rs)
    pub mod main_nav;
    pub use main_nav::MainNav;
    pub use main_nav::{register_links, LinkBuilder, NavAnchor};

    // Full-screen overlay shown by the navbar toggle (components/mobile_nav.rs)
    pub mod mobile_nav;
    pub use mobile_nav::MobileNav;

    // Header shell with stylesheet and locale switcher (components/site_header.rs)
    pub mod site_header;
    pub use site_header::{LocalePicker, SiteHeader};

    mod icons;
    pub use icons::CloseIcon;

    mod image;
    pub use image::Image;
}

pub use config::{site_config, NavItem, SiteConfig};
pub use error::{Result, UiError};

/// Site logo, used by the navbar, the mobile overlay and as favicon.
pub const LOGO: Asset = asset!("/assets/logo.svg");

/// Shared theme stylesheet.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

#[cfg(test)]
mod tests {
    mod i18n_completeness;
}
