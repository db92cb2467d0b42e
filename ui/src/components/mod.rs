mod app_navbar;
pub use app_navbar::AppNavbar;

mod splash;
pub use splash::SplashScreen;

mod section_heading;
pub use section_heading::SectionHeading;

mod footer;
pub use footer::Footer;

mod sticky_social;
pub use sticky_social::{StickySocial, SOCIAL_LINKS};

mod scroll_to_top;
pub use scroll_to_top::ScrollToTop;
