//! Internationalization support for `jansampark-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (bundle selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile-time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   hi-IN/jansampark-ui.ftl   (fallback/reference)
//!   en-IN/jansampark-ui.ftl
//! ```
//!
//! Unlike a conventional app there is no OS-language detection here: the
//! site defaults to Hindi and the persisted preference key is the only
//! startup signal (see `core::locale`). The visitor switches languages with
//! the navbar toggle, which routes through [`select_locale`].
//!
//! Public API surface:
//! - `init(locale)` – load the bundles for the persisted preference
//!   (idempotent).
//! - `select_locale(locale)` – switch bundles at runtime.
//! - `available_languages()` – embedded language tags.
//! - `fl` macro re-export plus the crate-wide `t!` wrapper.
//! - `LOADER` – global `FluentLanguageLoader` consumed by `fl!`.

use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

use crate::core::locale::Locale;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("nav-home")
///     t!("greeting", name = "…")
///
/// Expands to `fl!(&*LOADER, ...)` so every lookup routes through the
/// shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
///
/// Fallback file path must be: `i18n/hi-IN/{DOMAIN}.ftl`
const DOMAIN: &str = "jansampark-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = Locale::Hi
        .language_tag()
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Load bundles for the persisted preference (idempotent).
pub fn init(locale: Locale) {
    INIT.call_once(|| select(locale));
}

/// Switch the active bundles at runtime.
pub fn select_locale(locale: Locale) {
    select(locale);
}

fn select(locale: Locale) {
    let lang: LanguageIdentifier = match locale.language_tag().parse() {
        Ok(lang) => lang,
        // The two tags are static and always parse; nothing sane to do
        // otherwise, and the loader falls back to Hindi anyway.
        Err(_) => return,
    };
    if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &[lang]) {
        eprintln!(
            "[i18n] failed selecting {} ({err}); keeping previous bundle",
            locale.language_tag()
        );
    }
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Tests that re-select bundles share the process-global loader; they
/// serialize on this guard so parallel test threads don't interleave.
#[cfg(test)]
pub(crate) static LOADER_TEST_GUARD: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
pub(crate) fn loader_test_lock() -> std::sync::MutexGuard<'static, ()> {
    LOADER_TEST_GUARD
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fl;

    #[test]
    fn both_site_languages_are_embedded() {
        let langs = available_languages();
        assert!(langs.iter().any(|l| l == "hi-IN"));
        assert!(langs.iter().any(|l| l == "en-IN"));
    }

    #[test]
    fn lookup_follows_the_selected_locale() {
        let _guard = loader_test_lock();
        init(Locale::Hi);

        select_locale(Locale::En);
        assert_eq!(fl!(&*LOADER, "nav-home"), "Home");

        select_locale(Locale::Hi);
        assert_eq!(fl!(&*LOADER, "nav-home"), "होम");
    }

    #[test]
    fn toggle_and_back_restores_every_rendered_string() {
        let _guard = loader_test_lock();
        init(Locale::Hi);

        select_locale(Locale::Hi);
        let before = (fl!(&*LOADER, "hero-desc"), fl!(&*LOADER, "contact-title"));

        select_locale(Locale::En);
        select_locale(Locale::Hi);
        let after = (fl!(&*LOADER, "hero-desc"), fl!(&*LOADER, "contact-title"));

        assert_eq!(before, after);
    }
}
