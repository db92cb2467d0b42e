use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedReceiver;
use futures_util::{FutureExt, StreamExt};

use crate::core::timing;
use crate::t;

const SLIDES: [Asset; 3] = [
    asset!("/assets/images/portrait-1.svg"),
    asset!("/assets/images/portrait-2.svg"),
    asset!("/assets/images/portrait-3.svg"),
];

/// Auto-advance cadence of the hero carousel.
const ROTATE_INTERVAL_MS: u64 = 5_000;

#[derive(Debug, Clone)]
enum CarouselEvent {
    Select(usize),
}

fn indicator_classes(active: usize) -> Vec<(usize, &'static str)> {
    (0..SLIDES.len())
        .map(|idx| {
            let class = if idx == active {
                "hero__indicator hero__indicator--active"
            } else {
                "hero__indicator"
            };
            (idx, class)
        })
        .collect()
}

/// Landing section: rotating portrait, badge, the name lockup, and the
/// service-record stats.
#[component]
pub fn Hero() -> Element {
    let lang = crate::use_locale();
    let mut current = use_signal(|| 0usize);

    // Carousel loop. A manual selection re-arms the interval so the next
    // auto-advance starts counting from the tap. The coroutine is dropped
    // with the component, taking the pending timer with it.
    let carousel = use_coroutine(move |mut rx: UnboundedReceiver<CarouselEvent>| async move {
        loop {
            let tick = timing::sleep_ms(ROTATE_INTERVAL_MS).fuse();
            futures_util::pin_mut!(tick);
            futures_util::select! {
                event = rx.next() => match event {
                    Some(CarouselEvent::Select(slide)) => current.set(slide),
                    None => break,
                },
                _ = tick => current.set((current() + 1) % SLIDES.len()),
            }
        }
    });

    let _lang_tag = lang().language_tag();
    let slide = SLIDES[current()].clone();
    let slide_number = current() + 1;

    rsx! {
        section { id: "home", class: "hero",
            div { class: "hero__media",
                div { class: "hero__tricolor-rail", aria_hidden: "true",
                    span { class: "hero__tricolor-rail--saffron" }
                    span { class: "hero__tricolor-rail--white" }
                    span { class: "hero__tricolor-rail--green" }
                }
                img {
                    key: "{slide_number}",
                    class: "hero__slide",
                    src: slide,
                    alt: "Portrait {slide_number}",
                }
            }

            div { class: "hero__panel",
                div { class: "hero__badge",
                    span { class: "hero__badge-mark", aria_hidden: "true" }
                    span { class: "hero__badge-text", {t!("hero-badge")} }
                }

                p { class: "hero__kicker", {t!("hero-kicker")} }
                h1 { class: "hero__name",
                    span { class: "hero__name-first", {t!("name-first")} }
                    span { class: "hero__name-last", {t!("name-last")} }
                }

                p { class: "hero__desc", {t!("hero-desc")} }

                div { class: "hero__actions",
                    a { class: "hero__cta", href: "#contributions", {t!("hero-cta")} }

                    div { class: "hero__decades",
                        span { class: "hero__decades-value", {t!("hero-decades-value")} }
                        span { class: "hero__decades-label", {t!("hero-decades-label")} }
                        span { class: "hero__decades-caption", {t!("hero-decades-caption")} }
                    }
                }

                div { class: "hero__indicators", role: "tablist",
                    for (idx, class) in indicator_classes(current()) {
                        button {
                            key: "{idx}",
                            r#type: "button",
                            class: "{class}",
                            aria_label: "Slide {idx}",
                            onclick: move |_| carousel.send(CarouselEvent::Select(idx)),
                        }
                    }
                }
            }
        }
    }
}
