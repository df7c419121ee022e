use dioxus::prelude::*;

use ui::components::{register_links, LinkBuilder, SiteHeader};
use ui::core::location::register_location;
use ui::views::{Home, SectionPage};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebLayout)]
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    Section { segments: Vec<String> },
}

fn router_link(target: &str, class: &str, children: Element) -> Element {
    rsx!(Link {
        class: "{class}",
        to: target.to_string(),
        {children}
    })
}

fn current_path() -> String {
    use_route::<Route>().to_string()
}

fn main() {
    register_links(LinkBuilder { link: router_link });
    register_location(current_path);
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: ui::LOGO }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Router::<Route> {}
    }
}

#[component]
fn Section(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!(path = %path, "Rendering section page");
    rsx! {
        SectionPage { path }
    }
}

/// Web layout: the shared site header above the routed page.
#[component]
fn WebLayout() -> Element {
    rsx! {
        SiteHeader {}
        main { Outlet::<Route> {} }
    }
}
