use dioxus::prelude::*;

use crate::core::locale;
use crate::t;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Section anchors with their localized labels, resolved fresh on every
/// render so a locale switch relabels the whole nav in one pass.
fn nav_items() -> Vec<(&'static str, String)> {
    vec![
        ("#home", t!("nav-home")),
        ("#about", t!("nav-about")),
        ("#contributions", t!("nav-works")),
        ("#leadership", t!("nav-leadership")),
        ("#gallery", t!("nav-gallery")),
        ("#contact", t!("nav-contact")),
    ]
}

/// Pill navbar: brand block, anchor links, the language toggle, and a
/// full-screen overlay menu for small viewports.
///
/// The toggle is the only writer of the shared locale signal. It activates
/// the new locale first (persist + bundle switch), then updates the signal;
/// the shell's keyed remount applies both in the same update cycle.
#[component]
pub fn AppNavbar() -> Element {
    let mut lang = crate::use_locale();
    let mut menu_open = use_signal(|| false);

    let toggle_locale = move |_| {
        let next = lang().toggled();
        locale::activate(next);
        lang.set(next);
    };

    let toggle_locale_and_close = move |_| {
        let next = lang().toggled();
        locale::activate(next);
        lang.set(next);
        menu_open.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header { class: "navbar",
            div { class: "navbar__inner",
                a { class: "navbar__brand", href: "#home",
                    span { class: "navbar__brand-mark", aria_hidden: "true" }
                    span { class: "navbar__brand-text",
                        span { class: "navbar__brand-name", {t!("name-full")} }
                        span { class: "navbar__brand-subtitle", {t!("brand-subtitle")} }
                    }
                }

                nav { class: "navbar__links",
                    for (href, label) in nav_items() {
                        a { key: "{href}", class: "navbar__link", href: "{href}", "{label}" }
                    }
                }

                div { class: "navbar__actions",
                    button {
                        r#type: "button",
                        class: "navbar__lang",
                        onclick: toggle_locale,
                        {t!("nav-lang-toggle")}
                    }
                    a { class: "navbar__cta", href: "#contact", {t!("nav-contact-cta")} }
                    button {
                        r#type: "button",
                        class: "navbar__menu-toggle",
                        aria_label: "Menu",
                        onclick: move |_| menu_open.set(true),
                        "☰"
                    }
                }
            }

            if menu_open() {
                div { class: "navbar__overlay",
                    div { class: "navbar__overlay-head",
                        span { class: "navbar__overlay-title", "Menu" }
                        button {
                            r#type: "button",
                            class: "navbar__overlay-close",
                            aria_label: "Close menu",
                            onclick: move |_| menu_open.set(false),
                            "✕"
                        }
                    }

                    nav { class: "navbar__overlay-links",
                        for (href, label) in nav_items() {
                            a {
                                key: "{href}",
                                class: "navbar__overlay-link",
                                href: "{href}",
                                onclick: move |_| menu_open.set(false),
                                "{label}"
                            }
                        }
                    }

                    div { class: "navbar__overlay-actions",
                        button {
                            r#type: "button",
                            class: "navbar__overlay-lang",
                            onclick: toggle_locale_and_close,
                            {t!("nav-lang-toggle-full")}
                        }
                        a {
                            class: "navbar__overlay-cta",
                            href: "#contact",
                            onclick: move |_| menu_open.set(false),
                            {t!("nav-contact-cta")}
                        }
                    }
                }
            }
        }
    }
}
