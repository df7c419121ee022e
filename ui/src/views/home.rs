use dioxus::prelude::*;

use crate::config::site_config;

#[component]
pub fn Home() -> Element {
    // Subscribe to global language code (if provided) so we re-render on change.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_current = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let site = site_config();

    rsx! {
        section { class: "page page-home",
            h1 { {crate::t!("home-title", site = site.name.clone())} }
            p { {crate::t!("home-intro")} }

            ul { class: "page-home__sections",
                for (index, item) in site.main_nav.iter().enumerate() {
                    li { key: "{index}", {item.title.clone()} }
                }
            }
            p { class: "page-home__cta",
                {crate::t!("home-cta")}
            }
        }
    }
}
