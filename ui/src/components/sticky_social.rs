use dioxus::prelude::*;

/// Outbound social destinations, shared by the sticky rail and the contact
/// section. Opened in a new browsing context; nothing beyond the URL is
/// exchanged.
pub const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("Facebook", "https://www.facebook.com/share/17G8ZiAHdx/"),
    ("X", "https://x.com/OfficeofGS"),
    ("Instagram", "https://www.instagram.com/officeofgs"),
];

/// Edge-pinned rail of social links, visible on every page state except
/// the splash.
#[component]
pub fn StickySocial() -> Element {
    rsx! {
        aside { class: "sticky-social", aria_label: "Social profiles",
            for (label, url) in SOCIAL_LINKS {
                a {
                    key: "{label}",
                    class: "sticky-social__link",
                    href: "{url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    span { class: "sticky-social__label", "{label}" }
                }
            }
        }
    }
}
