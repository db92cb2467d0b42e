use dioxus::prelude::*;

use ui::components::{AppNavbar, Footer, ScrollToTop, SplashScreen, StickySocial};
use ui::core::locale::{self, Locale};
use ui::views::Home;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteShell)]
    #[route("/")]
    Home {},
}

const FAVICON: Asset = asset!("/assets/icon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Resolve the persisted preference before anything renders, then share
    // it with every component through context. The navbar toggle is the
    // only writer.
    let initial = locale::initial();
    ui::i18n::init(initial);
    let lang = use_signal(|| initial);
    use_context_provider(|| lang);

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Layout shell: the splash gates the entire layout on first load, then the
/// navbar, social rail, routed content, and footer mount in its place.
#[component]
fn SiteShell() -> Element {
    let lang = use_context::<Signal<Locale>>();
    // Mount gate for the layout. Lives outside the keyed subtree below so a
    // locale toggle can never replay the splash within this page load.
    let mut splash_done = use_signal(|| false);

    let lang_key = lang().as_str();
    let lang_tag = lang().language_tag();

    rsx! {
        if !splash_done() {
            SplashScreen { on_done: move |_| splash_done.set(true) }
        } else {
            // Key the mounted subtree by locale: a toggle remounts the page
            // in one update cycle, so translated copy and rebuilt grapheme
            // sequences land together with no half-updated frame.
            div {
                key: "{lang_key}",
                class: "site",
                lang: "{lang_tag}",
                AppNavbar {}
                StickySocial {}
                ScrollToTop {}
                main { class: "site__main",
                    Outlet::<Route> {}
                }
                Footer {}
            }
        }
    }
}
