use dioxus::prelude::*;

use crate::components::MainNav;
use crate::config::site_config;
use crate::i18n;
use crate::t;

// Navbar stylesheet (linked as an asset, inlined in release native builds)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Page header: the site's main navigation plus a locale picker.
///
/// `children` are forwarded into the mobile overlay (e.g. a call-to-action
/// that should only appear in the compact menu).
#[component]
pub fn SiteHeader(children: Element) -> Element {
    i18n::init();

    let items = site_config().main_nav.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header { id: "site-header", class: "site-header",
            div { class: "site-header__inner",
                MainNav { items, {children} }
                LocalePicker {}
            }
        }
    }
}

/// Locale `<select>` over the embedded languages; renders nothing when only
/// one is embedded.
///
/// The selected tag lives in a context `Signal<String>` when the platform
/// provides one, so pages reading that signal re-render in the new locale.
/// Without it the picker keeps its own signal.
#[component]
pub fn LocalePicker() -> Element {
    let shared: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let local = use_signal(|| "en-US".to_string());
    let mut current = shared.unwrap_or(local);
    let langs = use_hook(i18n::available_languages);

    if langs.len() < 2 {
        return rsx! {};
    }

    let on_pick = move |evt: FormEvent| {
        let tag = evt.value();
        if i18n::set_language(&tag).is_ok() {
            current.set(tag);
        }
    };

    rsx! {
        div { class: "site-header__locale",
            label { class: "visually-hidden", r#for: "locale-select",
                {t!("nav-language-label")}
            }
            select {
                id: "locale-select",
                value: current(),
                oninput: on_pick,
                for code in langs {
                    option { key: "{code}", value: "{code}", selected: *current.read() == code, "{code}" }
                }
            }
        }
    }
}
