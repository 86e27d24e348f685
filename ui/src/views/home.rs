use dioxus::prelude::*;

use crate::builder::CustomBuilder;
use crate::components::{AppNavbar, ScrollProgress, SiteFooter};
use crate::sections::{
    AllergyCare, Awards, Faq, FeaturedMenu, FinalCta, Gallery, Hero, HowItWorks, Location,
    ReviewsCarousel, Story, TrustStrip,
};

/// The single landing page.
#[component]
pub fn Home() -> Element {
    rsx! {
        ScrollProgress {}
        AppNavbar {}
        main { class: "page page-home",
            Hero {}
            TrustStrip {}
            Awards {}
            FeaturedMenu {}
            HowItWorks {}
            CustomBuilder {}
            Story {}
            AllergyCare {}
            Gallery {}
            ReviewsCarousel {}
            Location {}
            Faq {}
            FinalCta {}
        }
        SiteFooter {}
    }
}
