use dioxus::prelude::*;
use rand::Rng;

use crate::core::splash::{SplashSequencer, DEFAULT_SPLASH_MS};
use crate::core::text;
use crate::core::timing;
use crate::t;

const SPLASH_CSS: Asset = asset!("/assets/styling/splash.css");

/// Background tiles floating behind the name reveal.
const TILES: [Asset; 6] = [
    asset!("/assets/images/rally-1.svg"),
    asset!("/assets/images/portrait-1.svg"),
    asset!("/assets/images/development-1.svg"),
    asset!("/assets/images/portrait-3.svg"),
    asset!("/assets/images/cultural-1.svg"),
    asset!("/assets/images/rally-2.svg"),
];

/// Cadence of the decorative drift refresh on the background tiles.
const DRIFT_INTERVAL_MS: u64 = 3_000;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Drift {
    x: f32,
    y: f32,
    rot: f32,
}

/// Full-screen entry loader. Owns the splash sequencer: one deferred
/// callback takes the `Showing → Hidden` edge after the fixed delay and
/// reports it through `on_done`. Both timers live in this component's
/// scope, so unmounting tears them down with it.
#[component]
pub fn SplashScreen(on_done: EventHandler<()>) -> Element {
    let lang = crate::use_locale();
    let mut sequencer = use_signal(SplashSequencer::default);
    let mut drifts = use_signal(|| [Drift::default(); TILES.len()]);

    // The one-shot gate. If the host throttles the timer the splash simply
    // stays up; there is no fallback path.
    use_future(move || async move {
        timing::sleep_ms(DEFAULT_SPLASH_MS).await;
        if sequencer.with_mut(|seq| seq.dismiss()) {
            on_done.call(());
        }
    });

    // Decorative drift loop on the background tiles.
    use_future(move || async move {
        loop {
            timing::sleep_ms(DRIFT_INTERVAL_MS).await;
            let mut rng = rand::thread_rng();
            drifts.with_mut(|slots| {
                for slot in slots.iter_mut() {
                    slot.x = rng.gen_range(-15.0..15.0);
                    slot.y = rng.gen_range(-20.0..20.0);
                    slot.rot = rng.gen_range(-8.0..8.0);
                }
            });
        }
    });

    let _lang_tag = lang().language_tag();

    // Per-grapheme spans keep Devanagari matras whole during the staggered
    // reveal; the sequences are rebuilt whenever the locale changes the
    // source strings.
    let first_name: Vec<(usize, String, String)> = text::split_graphemes(&t!("name-first"))
        .into_iter()
        .enumerate()
        .map(|(idx, piece)| (idx, format!("animation-delay: {}ms", idx * 40), piece))
        .collect();
    let last_name: Vec<(usize, String, String)> = text::split_graphemes(&t!("name-last"))
        .into_iter()
        .enumerate()
        .map(|(idx, piece)| (idx, format!("animation-delay: {}ms", 400 + idx * 40), piece))
        .collect();

    let tiles: Vec<(usize, Asset, String)> = TILES
        .into_iter()
        .enumerate()
        .map(|(idx, tile)| {
            let drift = drifts()[idx];
            let style = format!(
                "transform: translate({:.1}px, {:.1}px) rotate({:.1}deg)",
                drift.x, drift.y, drift.rot
            );
            (idx, tile, style)
        })
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: SPLASH_CSS }

        div { class: "splash", role: "status",
            div { class: "splash__tiles", aria_hidden: "true",
                for (idx, tile, style) in tiles {
                    img {
                        key: "{idx}",
                        class: "splash__tile splash__tile--{idx}",
                        style: "{style}",
                        src: tile,
                        alt: "",
                    }
                }
            }

            div { class: "splash__center",
                span { class: "splash__mark", aria_hidden: "true" }

                h2 { class: "splash__name",
                    span { class: "splash__name-part splash__name-part--first",
                        for (idx, style, piece) in first_name {
                            span { key: "f{idx}", class: "splash__letter", style: "{style}", "{piece}" }
                        }
                    }
                    span { class: "splash__name-part splash__name-part--last",
                        for (idx, style, piece) in last_name {
                            span { key: "l{idx}", class: "splash__letter", style: "{style}", "{piece}" }
                        }
                    }
                }

                div { class: "splash__progress", aria_hidden: "true" }
            }

            p { class: "splash__constituency", {t!("splash-constituency")} }
        }
    }
}
