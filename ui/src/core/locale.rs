//! The display-language preference.
//!
//! Exactly two languages exist; Hindi is the default whenever the stored
//! preference is absent, malformed, or unreadable. The preference is read
//! once at startup and written back on every toggle.

use crate::core::storage;
use crate::i18n;

/// localStorage key holding the preference. Raw values are `"hi"` / `"en"`.
pub const STORAGE_KEY: &str = "lang";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Hi,
    En,
}

impl Locale {
    /// The raw persisted form.
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::Hi => "hi",
            Locale::En => "en",
        }
    }

    /// BCP-47 tag used for fluent bundle selection and the `lang` attribute.
    pub fn language_tag(self) -> &'static str {
        match self {
            Locale::Hi => "hi-IN",
            Locale::En => "en-IN",
        }
    }

    /// Strict parse of a persisted value: `En` only for exactly `"en"`,
    /// Hindi for everything else (absent, corrupted, wrong case).
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("en") => Locale::En,
            _ => Locale::Hi,
        }
    }

    /// The other language.
    pub fn toggled(self) -> Self {
        match self {
            Locale::Hi => Locale::En,
            Locale::En => Locale::Hi,
        }
    }

    pub fn is_hindi(self) -> bool {
        self == Locale::Hi
    }
}

/// Preference at startup. Storage failures degrade silently to Hindi.
pub fn initial() -> Locale {
    Locale::from_stored(storage::read(STORAGE_KEY).as_deref())
}

/// Make `next` the active locale: persist it (best-effort) and switch the
/// message bundles. The caller updates its own in-memory signal regardless
/// of whether the write stuck; a full storage must not block the toggle.
pub fn activate(next: Locale) {
    if let Err(err) = storage::write(STORAGE_KEY, next.as_str()) {
        eprintln!("[locale] preference not persisted: {err}");
    }
    i18n::select_locale(next);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn en_is_recognised_only_verbatim() {
        assert_eq!(Locale::from_stored(Some("en")), Locale::En);

        assert_eq!(Locale::from_stored(None), Locale::Hi);
        assert_eq!(Locale::from_stored(Some("hi")), Locale::Hi);
        assert_eq!(Locale::from_stored(Some("EN")), Locale::Hi);
        assert_eq!(Locale::from_stored(Some("english")), Locale::Hi);
        assert_eq!(Locale::from_stored(Some("en ")), Locale::Hi);
        assert_eq!(Locale::from_stored(Some("")), Locale::Hi);
    }

    #[test]
    fn double_toggle_is_identity() {
        for locale in [Locale::Hi, Locale::En] {
            assert_eq!(locale.toggled().toggled(), locale);
            assert_ne!(locale.toggled(), locale);
        }
    }

    #[test]
    fn activate_round_trips_through_storage() {
        let _guard = crate::i18n::loader_test_lock();

        activate(Locale::En);
        assert_eq!(initial(), Locale::En);

        activate(Locale::Hi);
        assert_eq!(initial(), Locale::Hi);
    }
}
