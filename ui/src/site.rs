//! Static shop details, outbound links and page anchors.
//!
//! Outbound URLs are passed through to the markup untouched.

pub const SHOP_NAME: &str = "Spoonz";
pub const PHONE_URI: &str = "tel:+12567364021";
pub const PHONE_DISPLAY: &str = "(256) 736-4021";
pub const ADDRESS_STREET: &str = "1544 Gulf Shores Pkwy";
pub const ADDRESS_CITY: &str = "Gulf Shores, AL 36542, USA";
pub const DIRECTIONS_URL: &str =
    "https://maps.google.com/?q=1544+Gulf+Shores+Pkwy,+Gulf+Shores,+AL+36542";
pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3448.513337229987!2d-87.6888258!3d30.2508492!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x889a059728b79f67%3A0x7d6c54c0e6435f30!2s1544%20Gulf%20Shores%20Pkwy%2C%20Gulf%20Shores%2C%20AL%2036542%2C%20USA!5e0!3m2!1sen!2sbr!4v1700000000000!5m2!1sen!2sbr";
pub const REVIEWS_URL: &str =
    "https://www.google.com/search?q=Spoonz+Rolled+Ice+Cream+Gulf+Shores+reviews";
pub const DESIGNER_URL: &str = "https://gustavo-goedert-hcac.vercel.app/";
pub const DESIGNER_NAME: &str = "Gustavo Goedert Graphic Designer";
pub const COPYRIGHT: &str = "© 2026 Spoonz Rolled Ice Cream.";

pub const GOOGLE_RATING: &str = "4.9";
pub const REVIEW_COUNT: &str = "102+";
pub const AWARD_YEARS: [u16; 3] = [2024, 2025, 2026];

/// Testimonial carousel auto-advance period.
pub const REVIEW_INTERVAL_MS: u64 = 5_000;
/// Page offset after which the navbar switches to its compact style.
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;
/// How long the share notice stays visible.
pub const SHARE_NOTICE_MS: u64 = 4_000;

const UNSPLASH: &str = "https://images.unsplash.com/photo-";

pub const HERO_PHOTO: &str = "1563805042-7684c019e1cb";
pub const ALLERGY_PHOTO: &str = "1549416878-b9ca35c2d47a";
pub const STORY_PHOTO: &str = "1551024506-0bccd828d307";

/// Photos for the featured menu, in menu order.
pub const MENU_PHOTOS: [&str; 6] = [
    "1516559828984-fb3b92374751",
    "1488477181946-6428a0291777",
    "1572490122747-3968b75cc699",
    "1497034825429-c343d7c6a68f",
    "1505394033223-264f1c140451",
    "1534706936160-d5ee67737249",
];

pub const GALLERY_PHOTOS: [&str; 12] = [
    "1516559828984-fb3b92374751",
    "1488477181946-6428a0291777",
    "1572490122747-3968b75cc699",
    "1497034825429-c343d7c6a68f",
    "1505394033223-264f1c140451",
    "1534706936160-d5ee67737249",
    "1551024506-0bccd828d307",
    "1472555950005-75215169a501",
    "1481391319762-47dff72954d9",
    "1543662923-38096f92605f",
    "1515516089376-88db1e26e9c0",
    "1562967962-e2e1282f6333",
];

/// Cropped Unsplash URL for `photo` at `width` pixels.
pub fn photo_url(photo: &str, width: u32, quality: u8) -> String {
    format!("{UNSPLASH}{photo}?auto=format&fit=crop&q={quality}&w={width}")
}

/// In-page destinations reachable from the navbar and call-to-action buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Top,
    Menu,
    How,
    Builder,
    Story,
    Allergy,
    Gallery,
    Reviews,
    Location,
    Faq,
}

impl Section {
    /// Sections linked from the navbar, in display order.
    pub const NAV: [Section; 6] = [
        Section::Menu,
        Section::How,
        Section::Story,
        Section::Reviews,
        Section::Gallery,
        Section::Location,
    ];

    /// Element id of the section; `None` for the top of the page.
    pub fn anchor(self) -> Option<&'static str> {
        match self {
            Section::Top => None,
            Section::Menu => Some("menu"),
            Section::How => Some("how"),
            Section::Builder => Some("builder"),
            Section::Story => Some("story"),
            Section::Allergy => Some("allergy"),
            Section::Gallery => Some("gallery"),
            Section::Reviews => Some("reviews"),
            Section::Location => Some("location"),
            Section::Faq => Some("faq"),
        }
    }

    /// Element id for a section root. Empty for [`Section::Top`].
    pub fn id(self) -> &'static str {
        self.anchor().unwrap_or_default()
    }

    /// `href` fallback for links (`#menu`).
    pub fn href(self) -> String {
        match self.anchor() {
            Some(id) => format!("#{id}"),
            None => "#".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn photo_url_carries_crop_parameters() {
        assert_eq!(
            photo_url(HERO_PHOTO, 1200, 80),
            "https://images.unsplash.com/photo-1563805042-7684c019e1cb?auto=format&fit=crop&q=80&w=1200"
        );
    }

    #[test]
    fn nav_sections_have_anchors() {
        for section in Section::NAV {
            assert!(section.anchor().is_some(), "{section:?}");
            assert_eq!(section.href(), format!("#{}", section.id()));
        }
        assert_eq!(Section::Top.href(), "#");
    }
}
