//! Contact-form draft and the mail-composer hand-off.
//!
//! There is no backend: submitting the form builds a `mailto:` URI and
//! points the browsing context at it. Our responsibility ends at URI
//! construction; whether the visitor's mail client sends anything is
//! unobservable. The builder is a pure function so the link format stays
//! unit-testable without a browser.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::core::locale::Locale;
use crate::core::platform;

/// Office inbox the composer is pre-addressed to.
pub const OFFICE_ADDRESS: &str = "ganeshsinghsatnamp@gmail.com";

/// The `encodeURIComponent` escape set: everything except alphanumerics and
/// the unreserved marks. An unescaped `&` or newline in a field would
/// truncate the composer body.
const MAIL_URI: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Field values collected by the contact section. Created empty on mount,
/// mutated per keystroke, read once on submit.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub city: String,
    pub message: String,
}

impl ContactDraft {
    /// Everything except the message is required. The form controls enforce
    /// this in the browser; this mirror exists for callers without one.
    pub fn is_submittable(&self) -> bool {
        [&self.name, &self.phone, &self.email, &self.city]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

fn subject(locale: Locale) -> &'static str {
    match locale {
        Locale::Hi => "जनसंपर्क वेबसाइट से नया संदेश",
        Locale::En => "New Message",
    }
}

fn body(draft: &ContactDraft) -> String {
    format!(
        "Name: {}\nPhone: {}\nEmail: {}\nCity: {}\n\nMessage:\n{}",
        draft.name, draft.phone, draft.email, draft.city, draft.message
    )
}

/// Build the composer link with a localized subject and the fixed
/// plain-text body enumerating every field.
pub fn build_mail_uri(draft: &ContactDraft, locale: Locale) -> String {
    format!(
        "mailto:{OFFICE_ADDRESS}?subject={}&body={}",
        utf8_percent_encode(subject(locale), MAIL_URI),
        utf8_percent_encode(&body(draft), MAIL_URI),
    )
}

/// Hand the draft to the default mail client. Fire-and-forget: no network
/// call, no callback, no retry.
pub fn submit(draft: &ContactDraft, locale: Locale) {
    platform::navigate(&build_mail_uri(draft, locale));
}

#[cfg(test)]
mod tests {
    use super::*;
    use percent_encoding::percent_decode_str;

    fn fixture() -> ContactDraft {
        ContactDraft {
            name: "A & B".into(),
            phone: "123".into(),
            email: "a@b.com".into(),
            city: "X".into(),
            message: "hi?there".into(),
        }
    }

    #[test]
    fn body_round_trips_through_percent_decoding() {
        let uri = build_mail_uri(&fixture(), Locale::En);
        let encoded_body = uri.split("&body=").nth(1).expect("body parameter");
        let decoded = percent_decode_str(encoded_body)
            .decode_utf8()
            .expect("valid utf-8");
        assert_eq!(
            decoded,
            "Name: A & B\nPhone: 123\nEmail: a@b.com\nCity: X\n\nMessage:\nhi?there"
        );
    }

    #[test]
    fn reserved_characters_never_leak_into_the_uri() {
        let uri = build_mail_uri(&fixture(), Locale::En);

        // Exactly the structural separators survive unescaped.
        assert_eq!(uri.matches('?').count(), 1);
        assert_eq!(uri.matches('&').count(), 1);
        assert!(!uri.contains(' '));
        assert!(!uri.contains('\n'));
        assert!(uri.starts_with(&format!("mailto:{OFFICE_ADDRESS}?subject=")));
    }

    #[test]
    fn hindi_subject_is_fully_escaped() {
        let uri = build_mail_uri(&fixture(), Locale::Hi);
        assert!(uri.is_ascii(), "non-ASCII must be percent-encoded: {uri}");

        let encoded_subject = uri
            .split("subject=")
            .nth(1)
            .and_then(|rest| rest.split('&').next())
            .expect("subject parameter");
        let decoded = percent_decode_str(encoded_subject)
            .decode_utf8()
            .expect("valid utf-8");
        assert_eq!(decoded, "जनसंपर्क वेबसाइट से नया संदेश");
    }

    #[test]
    fn message_is_optional_but_other_fields_are_not() {
        let mut draft = fixture();
        draft.message.clear();
        assert!(draft.is_submittable());

        draft.city = "   ".into();
        assert!(!draft.is_submittable());
    }
}
