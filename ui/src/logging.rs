//! Structured logging helpers for the navigation UI.
//!
//! Every event carries an `operation` field so traces from the navbar,
//! the config loader and the locale switcher can be filtered apart.

use crate::core::menu::MenuVisibility;

#[derive(Debug, Clone, Copy)]
pub enum NavOperation {
    ConfigLoad,
    Location,
    MenuToggle,
    LocaleSwitch,
    Registration,
}

impl NavOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavOperation::ConfigLoad => "config_load",
            NavOperation::Location => "location",
            NavOperation::MenuToggle => "menu_toggle",
            NavOperation::LocaleSwitch => "locale_switch",
            NavOperation::Registration => "registration",
        }
    }
}

pub fn log_config_loaded(site: &str, item_count: usize) {
    tracing::info!(
        operation = NavOperation::ConfigLoad.as_str(),
        site = site,
        nav_items = item_count,
        "Site config loaded"
    );
}

pub fn log_config_error(error: &str) {
    tracing::error!(
        operation = NavOperation::ConfigLoad.as_str(),
        error = error,
        "Failed to parse site config, rendering without nav items"
    );
}

pub fn log_location(path: &str, segment: Option<&str>) {
    tracing::trace!(
        operation = NavOperation::Location.as_str(),
        path = path,
        segment = segment.unwrap_or("<root>"),
        "Resolved nav location"
    );
}

pub fn log_menu_toggle(next: MenuVisibility, item_count: usize) {
    tracing::debug!(
        operation = NavOperation::MenuToggle.as_str(),
        state = next.as_str(),
        nav_items = item_count,
        "Mobile menu toggled"
    );
}

pub fn log_locale_switch(tag: &str) {
    tracing::info!(
        operation = NavOperation::LocaleSwitch.as_str(),
        locale = tag,
        "Switched locale"
    );
}

pub fn log_locale_error(tag: &str, error: &str) {
    tracing::warn!(
        operation = NavOperation::LocaleSwitch.as_str(),
        locale = tag,
        error = error,
        "Locale switch failed"
    );
}

pub fn log_duplicate_registration(what: &str) {
    tracing::warn!(
        operation = NavOperation::Registration.as_str(),
        registry = what,
        "Already registered; keeping the first registration"
    );
}
