//! Shared UI crate for the jansampark portal. Components, localization,
//! and the non-presentational core all live here; platform crates only
//! supply routing and launch glue.

use dioxus::prelude::*;

pub mod components;
pub mod content;
pub mod core;
pub mod i18n;
pub mod sections;
pub mod views;

use crate::core::locale::Locale;

/// Locale signal provided by the platform shell. Sections read the current
/// language through this context; only the navbar toggle writes it.
pub fn use_locale() -> Signal<Locale> {
    use_context::<Signal<Locale>>()
}
