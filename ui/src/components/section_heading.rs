use dioxus::prelude::*;

/// Shared section heading: a faint watermark of the first word, the accent
/// rules around the subtitle, and a word-staggered title reveal.
///
/// The stagger is per word (not per grapheme); only the splash needs
/// letter-level splitting.
#[component]
pub fn SectionHeading(title: String, subtitle: String) -> Element {
    struct Word {
        key: usize,
        class: String,
        style: String,
        text: String,
    }

    let words: Vec<Word> = title
        .split_whitespace()
        .enumerate()
        .map(|(idx, word)| Word {
            key: idx,
            class: format!("section-heading__word section-heading__word--{}", idx % 3),
            style: format!("animation-delay: {}ms", idx * 150),
            text: word.to_string(),
        })
        .collect();
    let watermark = words
        .first()
        .map(|word| word.text.clone())
        .unwrap_or_default();

    rsx! {
        div { class: "section-heading",
            div { class: "section-heading__watermark", aria_hidden: "true", "{watermark}" }

            div { class: "section-heading__subtitle",
                span { class: "section-heading__rule", aria_hidden: "true" }
                span { "{subtitle}" }
                span { class: "section-heading__rule", aria_hidden: "true" }
            }

            h2 { class: "section-heading__title",
                for word in words {
                    span {
                        key: "{word.key}",
                        class: "{word.class}",
                        style: "{word.style}",
                        "{word.text}"
                    }
                }
            }

            div { class: "section-heading__accent", aria_hidden: "true",
                span { class: "section-heading__dot section-heading__dot--saffron" }
                span { class: "section-heading__dot section-heading__dot--white" }
                span { class: "section-heading__dot section-heading__dot--green" }
            }
        }
    }
}
