//! Landing page sections, top to bottom.

mod allergy;
mod awards;
mod faq;
mod featured_menu;
mod final_cta;
mod gallery;
mod hero;
mod how_it_works;
mod location;
mod reviews;
mod story;
mod trust_strip;

pub use allergy::AllergyCare;
pub use awards::Awards;
pub use faq::Faq;
pub use featured_menu::FeaturedMenu;
pub use final_cta::FinalCta;
pub use gallery::Gallery;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use location::Location;
pub use reviews::ReviewsCarousel;
pub use story::Story;
pub use trust_strip::TrustStrip;
