use dioxus::prelude::*;

use crate::components::SectionHeading;
use crate::content::gallery::CATEGORIES;
use crate::t;

/// Category-tabbed photo wall. Selection is plain local state; images are
/// static assets resolved at compile time.
#[component]
pub fn Gallery() -> Element {
    let lang = crate::use_locale();
    let mut selected = use_signal(|| 0usize);

    let locale = lang();
    let tabs: Vec<(usize, &'static str, String)> = CATEGORIES
        .iter()
        .enumerate()
        .map(|(idx, category)| {
            let class = if idx == selected() {
                "gallery__tab gallery__tab--active"
            } else {
                "gallery__tab"
            };
            (idx, class, category.title(locale).to_string())
        })
        .collect();

    let active = &CATEGORIES[selected() % CATEGORIES.len()];
    let images: Vec<(usize, Asset)> = active
        .images
        .iter()
        .cloned()
        .enumerate()
        .collect();
    let active_title = active.title(locale);

    rsx! {
        section { id: "gallery", class: "gallery",
            SectionHeading {
                subtitle: t!("gallery-subtitle"),
                title: t!("gallery-title"),
            }

            div { class: "gallery__tabs", role: "tablist",
                for (idx, class, title) in tabs {
                    button {
                        key: "{idx}",
                        r#type: "button",
                        class: "{class}",
                        onclick: move |_| selected.set(idx),
                        "{title}"
                    }
                }
            }

            div { class: "gallery__grid",
                for (idx, image) in images {
                    img {
                        key: "{active.id}-{idx}",
                        class: "gallery__image",
                        src: image,
                        alt: "{active_title}",
                    }
                }
            }
        }
    }
}
