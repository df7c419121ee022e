use dioxus::prelude::*;

/// Fixed-size, lazily loaded image.
#[component]
pub fn Image(src: String, height: u32, width: u32, alt: String) -> Element {
    rsx! {
        img {
            src: "{src}",
            height: "{height}",
            width: "{width}",
            alt: "{alt}",
            loading: "lazy",
        }
    }
}
