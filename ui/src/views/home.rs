use dioxus::prelude::*;

use crate::sections::{About, Contact, Contributions, Gallery, Hero, Leadership};

const SECTIONS_CSS: Asset = asset!("/assets/styling/sections.css");

/// The single page: every section stacked under the shared shell. Sections
/// are independent; the only state they share is the locale context.
#[component]
pub fn Home() -> Element {
    let lang = crate::use_locale();
    let _lang_tag = lang().language_tag();

    #[cfg(debug_assertions)]
    println!("[home] render lang={_lang_tag}");

    rsx! {
        document::Link { rel: "stylesheet", href: SECTIONS_CSS }

        Hero {}
        About {}
        Contributions {}
        Leadership {}
        Gallery {}
        Contact {}
    }
}
