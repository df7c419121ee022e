use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use crate::components::{CloseIcon, Image, MobileNav};
use crate::config::{site_config, NavItem};
use crate::core::classes::{class_names, when};
use crate::core::location::{registered_location, NavLocation};
use crate::core::menu::MenuVisibility;
use crate::logging::log_menu_toggle;
use crate::{t, LOGO};

pub const NAV: &str = "main-nav";
pub const HOME: &str = "main-nav__home";
pub const HOME_COMPACT_HIDDEN: &str = "main-nav__home--compact-hidden";
pub const WORDMARK: &str = "main-nav__wordmark";
pub const LINKS: &str = "main-nav__links";
pub const LINK: &str = "main-nav__link";
pub const LINK_ACTIVE: &str = "main-nav__link--active";
pub const LINK_MUTED: &str = "main-nav__link--muted";
pub const LINK_DISABLED: &str = "main-nav__link--disabled";
pub const TOGGLE: &str = "main-nav__toggle";
pub const TOGGLE_LABEL: &str = "main-nav__toggle-label";

/// Link target for an item: disabled items go nowhere.
pub fn link_target(item: &NavItem) -> &str {
    if item.disabled {
        "#"
    } else {
        &item.href
    }
}

/// Class list for a desktop nav link at `location`.
pub fn link_class(item: &NavItem, location: &NavLocation) -> String {
    let active = location.highlights(&item.href);
    class_names([
        Some(LINK),
        Some(if active { LINK_ACTIVE } else { LINK_MUTED }),
        when(item.disabled, LINK_DISABLED),
    ])
}

/// Class list for the logo/wordmark home link. Off the root path the link
/// hides below the medium breakpoint.
pub fn home_class(location: &NavLocation) -> String {
    class_names([Some(HOME), when(!location.is_root(), HOME_COMPACT_HIDDEN)])
}

/// Platforms can register how an internal link is built (typically a router
/// `Link`), so `ui` does not need each platform's `Route` enum.
///
/// ```ignore
/// fn router_link(target: &str, class: &str, children: Element) -> Element {
///     rsx!(Link { class: "{class}", to: target.to_string(), {children} })
/// }
/// ui::components::register_links(LinkBuilder { link: router_link });
/// ```
///
/// Without a registration links render as plain anchors.
pub struct LinkBuilder {
    pub link: fn(target: &str, class: &str, children: Element) -> Element,
}

static LINK_BUILDER: OnceCell<LinkBuilder> = OnceCell::new();

pub fn register_links(builder: LinkBuilder) {
    if LINK_BUILDER.set(builder).is_err() {
        crate::logging::log_duplicate_registration("links");
    }
}

/// A navigation link, built by the registered `LinkBuilder` when there is one.
#[component]
pub fn NavAnchor(target: String, class: String, children: Element) -> Element {
    match LINK_BUILDER.get() {
        // `#` is never a route; keep it a plain anchor.
        Some(builder) if target != "#" => (builder.link)(&target, &class, children),
        _ => rsx! {
            a { href: "{target}", class: "{class}", {children} }
        },
    }
}

/// Responsive top navigation: home link, desktop link row and the mobile
/// menu toggle. `children` are forwarded into the mobile overlay.
#[component]
pub fn MainNav(#[props(default)] items: Vec<NavItem>, children: Element) -> Element {
    crate::i18n::init();

    let provided = try_use_context::<NavLocation>();
    let registered = registered_location();
    let location = provided.or(registered).unwrap_or_default();

    let mut menu = use_signal(MenuVisibility::default);
    let item_count = items.len();
    let open = menu().is_open();
    let site_name = &site_config().name;

    let on_toggle = move |_: MouseEvent| {
        let next = menu().toggled();
        log_menu_toggle(next, item_count);
        menu.set(next);
    };

    rsx! {
        div { class: NAV,
            NavAnchor { target: "/", class: home_class(&location),
                Image { src: "{LOGO}", height: 40, width: 40, alt: "MB" }
                span { class: WORDMARK, "{site_name}" }
            }

            if !items.is_empty() {
                nav { class: LINKS,
                    for (index, item) in items.iter().enumerate() {
                        NavAnchor {
                            key: "{index}",
                            target: link_target(item).to_string(),
                            class: link_class(item, &location),
                            {item.title.clone()}
                        }
                    }
                }
            }

            button {
                class: TOGGLE,
                r#type: "button",
                aria_expanded: "{open}",
                aria_label: t!("nav-toggle-label"),
                onclick: on_toggle,
                if open {
                    CloseIcon {}
                } else {
                    Image { src: "{LOGO}", height: 50, width: 50, alt: "BML" }
                }
                span { class: TOGGLE_LABEL, {t!("nav-menu")} }
            }

            if menu().shows_overlay(item_count) {
                MobileNav { items: items.clone(), {children} }
            }
        }
    }
}
