use dioxus::prelude::*;

use crate::core::platform;

/// Floating control that scrolls the window back to the hero.
#[component]
pub fn ScrollToTop() -> Element {
    rsx! {
        button {
            r#type: "button",
            class: "scroll-top",
            aria_label: "Back to top",
            onclick: move |_| platform::scroll_to_top(),
            "↑"
        }
    }
}
