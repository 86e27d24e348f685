//! Page chrome shared by every view.

pub mod app_navbar;
pub mod footer;
pub mod language_switcher;
pub mod scroll_progress;

pub use app_navbar::AppNavbar;
pub use footer::SiteFooter;
pub use language_switcher::LanguageSwitcher;
pub use scroll_progress::ScrollProgress;
