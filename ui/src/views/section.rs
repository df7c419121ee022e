use dioxus::prelude::*;

use crate::config::site_config;

/// Landing page for a top-level nav section. `path` is the routed path;
/// unknown sections render a not-found notice.
#[component]
pub fn SectionPage(path: String) -> Element {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_current = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    match site_config().section_for(&path) {
        Some(item) => {
            let title = item.title.clone();
            rsx! {
                section { class: "page page-section",
                    h1 { "{title}" }
                    p { {crate::t!("section-intro", section = title.clone())} }
                    p { class: "page-section__path", code { "{path}" } }
                }
            }
        }
        None => rsx! {
            section { class: "page page-missing",
                h1 { {crate::t!("not-found-title")} }
                p { {crate::t!("not-found-body", path = path.clone())} }
            }
        },
    }
}
