//! Gallery categories and their artwork.
//!
//! One record per category; titles carry both languages so the section can
//! relabel without re-resolving assets.

use dioxus::prelude::*;

use crate::core::locale::Locale;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalleryCategory {
    pub id: &'static str,
    pub title_hi: &'static str,
    pub title_en: &'static str,
    pub images: &'static [Asset],
}

impl GalleryCategory {
    pub fn title(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Hi => self.title_hi,
            Locale::En => self.title_en,
        }
    }

    pub fn thumbnail(&self) -> Option<Asset> {
        self.images.first().copied()
    }
}

static PUBLIC_RELATION: [Asset; 4] = [
    asset!("/assets/images/rally-1.svg"),
    asset!("/assets/images/rally-2.svg"),
    asset!("/assets/images/portrait-1.svg"),
    asset!("/assets/images/portrait-3.svg"),
];

static DEVELOPMENT: [Asset; 3] = [
    asset!("/assets/images/development-1.svg"),
    asset!("/assets/images/development-2.svg"),
    asset!("/assets/images/portrait-2.svg"),
];

static CULTURAL: [Asset; 2] = [
    asset!("/assets/images/cultural-1.svg"),
    asset!("/assets/images/rally-2.svg"),
];

static YOUTH: [Asset; 2] = [
    asset!("/assets/images/youth-1.svg"),
    asset!("/assets/images/development-2.svg"),
];

pub static CATEGORIES: [GalleryCategory; 4] = [
    GalleryCategory {
        id: "public",
        title_hi: "जनसंपर्क",
        title_en: "Public Relation",
        images: &PUBLIC_RELATION,
    },
    GalleryCategory {
        id: "development",
        title_hi: "विकास कार्य",
        title_en: "Development",
        images: &DEVELOPMENT,
    },
    GalleryCategory {
        id: "cultural",
        title_hi: "सांस्कृतिक",
        title_en: "Cultural",
        images: &CULTURAL,
    },
    GalleryCategory {
        id: "youth",
        title_hi: "युवा एवं खेल",
        title_en: "Youth & Sports",
        images: &YOUTH,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_is_renderable() {
        assert!(!CATEGORIES.is_empty());
        for category in &CATEGORIES {
            assert!(!category.images.is_empty(), "{} has no images", category.id);
            assert!(category.thumbnail().is_some());
            assert!(!category.title(Locale::Hi).is_empty());
            assert!(!category.title(Locale::En).is_empty());
        }
    }

    #[test]
    fn category_ids_are_unique() {
        let mut ids: Vec<_> = CATEGORIES.iter().map(|category| category.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), CATEGORIES.len());
    }
}
