use dioxus::prelude::*;

use crate::components::{SectionHeading, SOCIAL_LINKS};
use crate::core::contact::{self, ContactDraft, OFFICE_ADDRESS};
use crate::t;

/// Contact section: info column with the office address and socials, and
/// the five-field form. Submission builds a `mailto:` link and navigates;
/// there is no backend and no delivery feedback.
#[component]
pub fn Contact() -> Element {
    let lang = crate::use_locale();

    let mut name = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut city = use_signal(String::new);
    let mut message = use_signal(String::new);

    let on_submit = move |event: FormEvent| {
        event.prevent_default();
        let draft = ContactDraft {
            name: name(),
            phone: phone(),
            email: email(),
            city: city(),
            message: message(),
        };
        // The browser's required-field validation already gated this; the
        // mirror check covers hosts that skip it.
        if draft.is_submittable() {
            contact::submit(&draft, lang());
        }
    };

    rsx! {
        section { id: "contact", class: "contact",
            SectionHeading {
                subtitle: t!("contact-subtitle"),
                title: t!("contact-title"),
            }

            div { class: "contact__grid",
                div { class: "contact__info",
                    div { class: "contact__badge", {t!("contact-badge")} }
                    h3 { class: "contact__heading", {t!("contact-heading")} }
                    p { class: "contact__desc", {t!("contact-desc")} }

                    div { class: "contact__card",
                        p { class: "contact__card-label", {t!("contact-email-label")} }
                        p { class: "contact__card-value", "{OFFICE_ADDRESS}" }
                    }
                    div { class: "contact__card",
                        p { class: "contact__card-label", {t!("contact-constituency-label")} }
                        p { class: "contact__card-value", {t!("about-constituency-value")} }
                    }

                    div { class: "contact__socials",
                        p { class: "contact__socials-heading", {t!("contact-social-heading")} }
                        div { class: "contact__socials-row",
                            for (label, url) in SOCIAL_LINKS {
                                a {
                                    key: "{label}",
                                    class: "contact__social",
                                    href: "{url}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    "{label}"
                                }
                            }
                        }
                    }
                }

                form { class: "contact__form", onsubmit: on_submit,
                    div { class: "contact__field",
                        label { r#for: "contact-name", {t!("contact-name")} }
                        input {
                            id: "contact-name",
                            name: "name",
                            r#type: "text",
                            required: true,
                            value: "{name}",
                            oninput: move |event| name.set(event.value()),
                        }
                    }
                    div { class: "contact__field",
                        label { r#for: "contact-phone", {t!("contact-phone")} }
                        input {
                            id: "contact-phone",
                            name: "phone",
                            r#type: "tel",
                            required: true,
                            value: "{phone}",
                            oninput: move |event| phone.set(event.value()),
                        }
                    }
                    div { class: "contact__field",
                        label { r#for: "contact-email", {t!("contact-email")} }
                        input {
                            id: "contact-email",
                            name: "email",
                            r#type: "email",
                            required: true,
                            value: "{email}",
                            oninput: move |event| email.set(event.value()),
                        }
                    }
                    div { class: "contact__field",
                        label { r#for: "contact-city", {t!("contact-city")} }
                        input {
                            id: "contact-city",
                            name: "city",
                            r#type: "text",
                            required: true,
                            value: "{city}",
                            oninput: move |event| city.set(event.value()),
                        }
                    }

                    div { class: "contact__field contact__field--wide",
                        label { r#for: "contact-message", {t!("contact-message")} }
                        textarea {
                            id: "contact-message",
                            name: "message",
                            rows: "4",
                            value: "{message}",
                            oninput: move |event| message.set(event.value()),
                        }
                    }

                    button { r#type: "submit", class: "contact__send", {t!("contact-send")} }
                }
            }
        }
    }
}
