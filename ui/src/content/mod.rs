//! Static site content that is data rather than copy (copy lives in the
//! FTL bundles).

pub mod gallery;
