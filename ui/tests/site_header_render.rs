//! Server-side renders of the locale picker in the site header.

use dioxus::prelude::*;
use ui::components::LocalePicker;

fn render(app: fn() -> Element) -> String {
    ui::i18n::init();
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn lists_every_embedded_locale() {
    #[allow(non_snake_case)]
    fn Picker() -> Element {
        rsx! { LocalePicker {} }
    }

    let html = render(Picker);
    for code in ["en-US", "es-ES", "fr-FR"] {
        assert!(html.contains(&format!("value=\"{code}\"")), "{code} missing in {html}");
    }
    assert!(html.contains("id=\"locale-select\" value=\"en-US\""), "{html}");
}

#[test]
fn follows_platform_language_signal() {
    #[allow(non_snake_case)]
    fn Picker() -> Element {
        let lang = use_signal(|| "fr-FR".to_string());
        use_context_provider(|| lang);
        rsx! { LocalePicker {} }
    }

    let html = render(Picker);
    assert!(html.contains("id=\"locale-select\" value=\"fr-FR\""), "{html}");
}
