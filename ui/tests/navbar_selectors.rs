//! Every class the navbar components emit must be styled in
//! `assets/styling/navbar.css`; the responsive behaviour lives entirely there.

use ui::components::{main_nav, mobile_nav};

const NAVBAR_CSS: &str = include_str!("../assets/styling/navbar.css");

fn has_selector(class: &str) -> bool {
    let selector = format!(".{class}");
    NAVBAR_CSS.match_indices(&selector).any(|(at, _)| {
        // Reject prefixes of longer class names (`.main-nav` vs `.main-nav__home`).
        NAVBAR_CSS[at + selector.len()..]
            .chars()
            .next()
            .is_some_and(|c| !(c.is_alphanumeric() || c == '-' || c == '_'))
    })
}

#[test]
fn navbar_classes_are_styled() {
    let classes = [
        main_nav::NAV,
        main_nav::HOME,
        main_nav::HOME_COMPACT_HIDDEN,
        main_nav::WORDMARK,
        main_nav::LINKS,
        main_nav::LINK,
        main_nav::LINK_ACTIVE,
        main_nav::LINK_MUTED,
        main_nav::LINK_DISABLED,
        main_nav::TOGGLE,
        main_nav::TOGGLE_LABEL,
        mobile_nav::OVERLAY,
        mobile_nav::PANEL,
        mobile_nav::HOME,
        mobile_nav::LINKS,
        mobile_nav::LINK,
        mobile_nav::LINK_DISABLED,
        mobile_nav::EXTRA,
        "site-header",
        "site-header__inner",
        "site-header__locale",
        "visually-hidden",
        "icon--close",
    ];
    let missing: Vec<_> = classes.iter().filter(|c| !has_selector(c)).collect();
    assert!(missing.is_empty(), "Unstyled navbar classes: {missing:?}");
}

#[test]
fn compact_rules_use_medium_breakpoint() {
    assert!(NAVBAR_CSS.contains("@media (max-width: 767px)"));
    assert!(NAVBAR_CSS.contains("@media (min-width: 768px)"));
}
