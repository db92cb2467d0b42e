//! Non-presentational core: locale store, splash sequencing, grapheme
//! splitting, and the mail-composer link builder.

pub mod contact;
pub mod locale;
pub mod platform;
pub mod splash;
pub mod storage;
pub mod text;
pub mod timing;
