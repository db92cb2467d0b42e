use dioxus::prelude::*;

use crate::components::SectionHeading;
use crate::t;

struct ContributionCard {
    key: usize,
    index_label: String,
    class: String,
    title: String,
    desc: String,
}

/// Card copy resolved per render; the accent cycle follows the tricolor.
fn cards() -> Vec<ContributionCard> {
    let copy = [
        (t!("contrib-infra-title"), t!("contrib-infra-desc"), "saffron"),
        (t!("contrib-agri-title"), t!("contrib-agri-desc"), "green"),
        (
            t!("contrib-education-title"),
            t!("contrib-education-desc"),
            "navy",
        ),
        (
            t!("contrib-parliament-title"),
            t!("contrib-parliament-desc"),
            "saffron",
        ),
        (
            t!("contrib-welfare-title"),
            t!("contrib-welfare-desc"),
            "green",
        ),
        (t!("contrib-growth-title"), t!("contrib-growth-desc"), "navy"),
    ];

    copy.into_iter()
        .enumerate()
        .map(|(idx, (title, desc, accent))| ContributionCard {
            key: idx,
            index_label: format!("0{}", idx + 1),
            class: format!("contribution-card contribution-card--{accent}"),
            title,
            desc,
        })
        .collect()
}

/// Six-card grid of the headline works, each with an index watermark.
#[component]
pub fn Contributions() -> Element {
    rsx! {
        section { id: "contributions", class: "contributions",
            SectionHeading {
                subtitle: t!("contrib-subtitle"),
                title: t!("contrib-title"),
            }

            div { class: "contributions__grid",
                for card in cards() {
                    article {
                        key: "{card.key}",
                        class: "{card.class}",
                        span { class: "contribution-card__index", aria_hidden: "true", "{card.index_label}" }
                        span { class: "contribution-card__glyph", aria_hidden: "true" }
                        h3 { class: "contribution-card__title", "{card.title}" }
                        p { class: "contribution-card__desc", "{card.desc}" }
                        div { class: "contribution-card__rule", aria_hidden: "true" }
                    }
                }
            }
        }
    }
}
