use dioxus::prelude::*;

use crate::components::main_nav::{link_target, NavAnchor};
use crate::components::Image;
use crate::config::{site_config, NavItem};
use crate::core::classes::{class_names, when};
use crate::LOGO;

pub const OVERLAY: &str = "mobile-nav";
pub const PANEL: &str = "mobile-nav__panel";
pub const HOME: &str = "mobile-nav__home";
pub const LINKS: &str = "mobile-nav__links";
pub const LINK: &str = "mobile-nav__link";
pub const LINK_DISABLED: &str = "mobile-nav__link--disabled";
pub const EXTRA: &str = "mobile-nav__extra";

/// Full-screen menu overlay shown below the medium breakpoint when the
/// navbar toggle is open. Lists the same items, then any forwarded children.
#[component]
pub fn MobileNav(items: Vec<NavItem>, children: Element) -> Element {
    let site_name = &site_config().name;

    rsx! {
        div { class: OVERLAY,
            div { class: PANEL,
                NavAnchor { target: "/", class: HOME,
                    Image { src: "{LOGO}", height: 32, width: 32, alt: "{site_name}" }
                    span { "{site_name}" }
                }
                nav { class: LINKS,
                    for (index, item) in items.iter().enumerate() {
                        NavAnchor {
                            key: "{index}",
                            target: link_target(item).to_string(),
                            class: class_names([Some(LINK), when(item.disabled, LINK_DISABLED)]),
                            {item.title.clone()}
                        }
                    }
                }
                div { class: EXTRA, {children} }
            }
        }
    }
}
