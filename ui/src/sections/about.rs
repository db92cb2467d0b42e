use dioxus::prelude::*;

use crate::components::SectionHeading;
use crate::t;

const PORTRAIT: Asset = asset!("/assets/images/portrait-2.svg");

/// Biography section: badge, lede, the info-card grid, and the framed
/// portrait with the constituency plate.
#[component]
pub fn About() -> Element {
    rsx! {
        section { id: "about", class: "about",
            SectionHeading {
                subtitle: t!("about-subtitle"),
                title: t!("about-title"),
            }

            div { class: "about__grid",
                div { class: "about__content",
                    div { class: "about__badge",
                        span { class: "about__badge-pulse", aria_hidden: "true" }
                        span { {t!("about-badge")} }
                    }

                    h3 { class: "about__heading", {t!("about-heading")} }
                    p { class: "about__bio", {t!("about-bio")} }

                    div { class: "about__cards",
                        div { class: "about__card about__card--green",
                            h5 { class: "about__card-title", {t!("about-education-title")} }
                            p { class: "about__card-value", {t!("about-education-value")} }
                        }
                        div { class: "about__card about__card--saffron",
                            h5 { class: "about__card-title", {t!("about-experience-title")} }
                            p { class: "about__card-value", {t!("about-experience-value")} }
                        }

                        div { class: "about__card about__card--feature",
                            div { class: "about__terms",
                                p { class: "about__terms-label", {t!("about-terms-label")} }
                                h4 { class: "about__terms-value", {t!("about-terms-value")} }
                            }
                            div { class: "about__stat",
                                span { class: "about__stat-value", "100%" }
                                span { class: "about__stat-label", {t!("about-popularity-label")} }
                            }
                        }
                    }
                }

                div { class: "about__media",
                    img { class: "about__portrait", src: PORTRAIT, alt: "Ganesh Singh" }
                    div { class: "about__plate",
                        p { class: "about__plate-label", {t!("about-constituency-label")} }
                        h4 { class: "about__plate-value", {t!("about-constituency-value")} }
                    }
                }
            }
        }
    }
}
