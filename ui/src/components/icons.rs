use dioxus::prelude::*;

use crate::t;

/// "X" glyph shown by the navbar toggle while the menu is open.
#[component]
pub fn CloseIcon(#[props(default = 24)] size: u32) -> Element {
    rsx! {
        svg {
            class: "icon icon--close",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            title { {t!("nav-close")} }
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        }
    }
}
