use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::t;

const FOOTER_CSS: Asset = asset!("/assets/styling/footer.css");

/// Footer anchor set mirrors the navbar (minus the contact CTA, which gets
/// its own block above).
fn footer_links() -> Vec<(&'static str, String)> {
    vec![
        ("#home", t!("nav-home")),
        ("#about", t!("nav-about")),
        ("#contributions", t!("nav-works")),
        ("#leadership", t!("nav-leadership")),
        ("#gallery", t!("nav-gallery")),
    ]
}

#[component]
pub fn Footer() -> Element {
    let year = OffsetDateTime::now_utc().year();

    rsx! {
        document::Link { rel: "stylesheet", href: FOOTER_CSS }

        footer { class: "footer",
            div { class: "footer__tricolor", aria_hidden: "true",
                span { class: "footer__tricolor-saffron" }
                span { class: "footer__tricolor-green" }
            }

            div { class: "footer__inner",
                div { class: "footer__top",
                    div { class: "footer__brand",
                        h2 { class: "footer__name", {t!("name-full")} }
                        div { class: "footer__brand-rule", aria_hidden: "true",
                            span { class: "footer__brand-rule--saffron" }
                            span { class: "footer__brand-rule--green" }
                        }
                    }

                    nav { class: "footer__links",
                        for (href, label) in footer_links() {
                            a { key: "{href}", class: "footer__link", href: "{href}", "{label}" }
                        }
                    }
                }

                div { class: "footer__partner-bar",
                    p { class: "footer__copyright", "© {year} Exclusive" }
                    a {
                        class: "footer__partner",
                        href: "https://www.inedconetworks.com/",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        span { class: "footer__partner-label", {t!("footer-partner")} }
                        span { class: "footer__partner-name", "Inedco Networks" }
                    }
                }

                div { class: "footer__bottom",
                    div { class: "footer__dots", aria_hidden: "true",
                        span { class: "footer__dot footer__dot--saffron" }
                        span { class: "footer__dot footer__dot--green" }
                        span { class: "footer__dot footer__dot--navy" }
                    }
                    p { class: "footer__portal", {t!("footer-portal")} }
                }
            }
        }
    }
}
