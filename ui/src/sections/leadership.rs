use dioxus::prelude::*;

use crate::components::SectionHeading;
use crate::t;

struct LeadershipCard {
    key: usize,
    index_label: String,
    class: String,
    title: String,
    desc: String,
}

/// Bento layout: wide/narrow spans alternate so the grid reads as two
/// uneven rows on desktop.
fn cards() -> Vec<LeadershipCard> {
    let copy = [
        (
            t!("leadership-experience-title"),
            t!("leadership-experience-desc"),
            "wide",
            "blue",
        ),
        (
            t!("leadership-engagement-title"),
            t!("leadership-engagement-desc"),
            "narrow",
            "orange",
        ),
        (
            t!("leadership-stability-title"),
            t!("leadership-stability-desc"),
            "narrow",
            "emerald",
        ),
        (
            t!("leadership-coordination-title"),
            t!("leadership-coordination-desc"),
            "wide",
            "purple",
        ),
    ];

    copy.into_iter()
        .enumerate()
        .map(|(idx, (title, desc, span, tone))| LeadershipCard {
            key: idx,
            index_label: format!("0{}", idx + 1),
            class: format!(
                "leadership-card leadership-card--{span} leadership-card--{tone}"
            ),
            title,
            desc,
        })
        .collect()
}

/// Leadership pillars plus the accountability highlight band.
#[component]
pub fn Leadership() -> Element {
    rsx! {
        section { id: "leadership", class: "leadership",
            SectionHeading {
                subtitle: t!("leadership-subtitle"),
                title: t!("leadership-title"),
            }

            div { class: "leadership__grid",
                for card in cards() {
                    article {
                        key: "{card.key}",
                        class: "{card.class}",
                        div { class: "leadership-card__head",
                            span { class: "leadership-card__glyph", aria_hidden: "true" }
                            span { class: "leadership-card__index", aria_hidden: "true", "{card.index_label}" }
                        }
                        h3 { class: "leadership-card__title", "{card.title}" }
                        p { class: "leadership-card__desc", "{card.desc}" }
                        div { class: "leadership-card__rule", aria_hidden: "true" }
                    }
                }

                article { class: "leadership__highlight",
                    div { class: "leadership__highlight-copy",
                        div { class: "leadership__highlight-badge", {t!("leadership-accountability-badge")} }
                        h3 { class: "leadership__highlight-title", {t!("leadership-accountability-title")} }
                        p { class: "leadership__highlight-desc", {t!("leadership-accountability-desc")} }
                    }
                    div { class: "leadership__highlight-stat",
                        span { class: "leadership__highlight-value", "100%" }
                        span { class: "leadership__highlight-label", "Verified" }
                    }
                }
            }

            div { class: "leadership__footer",
                a { class: "leadership__cta", href: "#contributions", {t!("leadership-cta")} }
            }
        }
    }
}
