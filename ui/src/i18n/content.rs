//! Typed shape of the localized site copy.
//!
//! Every language resolves to the same [`ContentBundle`] struct, so a bundle
//! can never be missing a section or list entry. Lists are fixed-size arrays
//! and the `.ftl` IDs that feed them are numbered from 1 (`menu-item-1-name`).

use super::{CatalogError, Messages};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBundle {
    pub nav: NavCopy,
    pub hero: HeroCopy,
    pub trust: [String; 7],
    pub awards: AwardsCopy,
    pub menu: MenuCopy,
    pub how: HowCopy,
    pub allergy: AllergyCopy,
    pub builder: BuilderCopy,
    pub about: AboutCopy,
    pub gallery: GalleryCopy,
    pub reviews: ReviewsCopy,
    pub location: LocationCopy,
    pub faq: FaqCopy,
    pub cta: CtaCopy,
    pub footer: FooterCopy,
    pub not_found: NotFoundCopy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavCopy {
    pub menu: String,
    pub how: String,
    pub story: String,
    pub reviews: String,
    pub gallery: String,
    pub allergy: String,
    pub location: String,
    pub faq: String,
    pub call: String,
    pub directions: String,
    pub language_label: String,
    pub open_menu: String,
    pub close_menu: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroCopy {
    pub badge: String,
    pub headline: String,
    pub subheadline: String,
    pub cta_build: String,
    pub cta_visit: String,
    pub chips: [String; 4],
    pub rating_caption: String,
    pub fresh_caption: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwardsCopy {
    pub title: String,
    pub subtitle: String,
    pub badge: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuCopy {
    pub title: String,
    pub subtitle: String,
    pub items: [MenuItem; 6],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub name: String,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HowCopy {
    pub title: String,
    pub steps: [HowStep; 3],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HowStep {
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllergyCopy {
    pub badge: String,
    pub title: String,
    pub subtitle: String,
    pub items: [String; 4],
    pub disclaimer: String,
}

/// Copy for the dessert configurator. `steps` is indexed by
/// [`WizardStep::index`](crate::builder::WizardStep::index).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderCopy {
    pub title: String,
    pub subtitle: String,
    pub steps: [String; 4],
    pub score: String,
    pub share: String,
    /// Prefix of the shared combo text. Carries its trailing space.
    pub share_msg: String,
    pub visit: String,
    pub back: String,
    pub next: String,
    pub review: String,
    pub creation: String,
    pub none: String,
    pub copied: String,
    pub copy_failed: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutCopy {
    pub title: String,
    pub paragraphs: [String; 2],
    pub quote: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryCopy {
    pub title: String,
    pub filters: [String; 4],
    pub close: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewsCopy {
    pub title: String,
    pub subtitle: String,
    pub count: String,
    pub verified: String,
    pub leave: String,
    pub entries: [Review; 4],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub name: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationCopy {
    pub title: String,
    pub rating: String,
    pub total_reviews: String,
    pub phone_note: String,
    pub tip_title: String,
    pub tip: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqCopy {
    pub title: String,
    pub entries: [FaqEntry; 5],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CtaCopy {
    pub headline: String,
    pub body: String,
    pub rating: String,
    pub reviews: String,
    pub family: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterCopy {
    pub rights: String,
    pub designed: String,
    pub tagline: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundCopy {
    pub title: String,
    pub body: String,
    pub back: String,
}

impl ContentBundle {
    /// Resolve every message the site renders. Fails on the first ID the
    /// language does not define.
    pub(crate) fn from_messages(m: &Messages) -> Result<Self, CatalogError> {
        Ok(Self {
            nav: NavCopy {
                menu: m.text("nav-menu")?,
                how: m.text("nav-how")?,
                story: m.text("nav-story")?,
                reviews: m.text("nav-reviews")?,
                gallery: m.text("nav-gallery")?,
                allergy: m.text("nav-allergy")?,
                location: m.text("nav-location")?,
                faq: m.text("nav-faq")?,
                call: m.text("nav-call")?,
                directions: m.text("nav-directions")?,
                language_label: m.text("nav-language-label")?,
                open_menu: m.text("nav-open-menu")?,
                close_menu: m.text("nav-close-menu")?,
            },
            hero: HeroCopy {
                badge: m.text("hero-badge")?,
                headline: m.text("hero-headline")?,
                subheadline: m.text("hero-subheadline")?,
                cta_build: m.text("hero-cta-build")?,
                cta_visit: m.text("hero-cta-visit")?,
                chips: m.numbered(|m, i| m.text(&format!("hero-chip-{i}")))?,
                rating_caption: m.text("hero-rating-caption")?,
                fresh_caption: m.text("hero-fresh-caption")?,
            },
            trust: m.numbered(|m, i| m.text(&format!("trust-{i}")))?,
            awards: AwardsCopy {
                title: m.text("awards-title")?,
                subtitle: m.text("awards-subtitle")?,
                badge: m.text("awards-badge")?,
            },
            menu: MenuCopy {
                title: m.text("menu-title")?,
                subtitle: m.text("menu-subtitle")?,
                items: m.numbered(|m, i| {
                    Ok(MenuItem {
                        name: m.text(&format!("menu-item-{i}-name"))?,
                        desc: m.text(&format!("menu-item-{i}-desc"))?,
                    })
                })?,
            },
            how: HowCopy {
                title: m.text("how-title")?,
                steps: m.numbered(|m, i| {
                    Ok(HowStep {
                        title: m.text(&format!("how-step-{i}-title"))?,
                        desc: m.text(&format!("how-step-{i}-desc"))?,
                    })
                })?,
            },
            allergy: AllergyCopy {
                badge: m.text("allergy-badge")?,
                title: m.text("allergy-title")?,
                subtitle: m.text("allergy-subtitle")?,
                items: m.numbered(|m, i| m.text(&format!("allergy-item-{i}")))?,
                disclaimer: m.text("allergy-disclaimer")?,
            },
            builder: BuilderCopy {
                title: m.text("builder-title")?,
                subtitle: m.text("builder-subtitle")?,
                steps: m.numbered(|m, i| m.text(&format!("builder-step-{i}")))?,
                score: m.text("builder-score")?,
                share: m.text("builder-share")?,
                share_msg: m.text("builder-share-msg")?,
                visit: m.text("builder-visit")?,
                back: m.text("builder-back")?,
                next: m.text("builder-next")?,
                review: m.text("builder-review")?,
                creation: m.text("builder-creation")?,
                none: m.text("builder-none")?,
                copied: m.text("builder-copied")?,
                copy_failed: m.text("builder-copy-failed")?,
            },
            about: AboutCopy {
                title: m.text("about-title")?,
                paragraphs: m.numbered(|m, i| m.text(&format!("about-paragraph-{i}")))?,
                quote: m.text("about-quote")?,
            },
            gallery: GalleryCopy {
                title: m.text("gallery-title")?,
                filters: m.numbered(|m, i| m.text(&format!("gallery-filter-{i}")))?,
                close: m.text("gallery-close")?,
            },
            reviews: ReviewsCopy {
                title: m.text("reviews-title")?,
                subtitle: m.text("reviews-subtitle")?,
                count: m.text("reviews-count")?,
                verified: m.text("reviews-verified")?,
                leave: m.text("reviews-leave")?,
                entries: m.numbered(|m, i| {
                    Ok(Review {
                        name: m.text(&format!("review-{i}-name"))?,
                        text: m.text(&format!("review-{i}-text"))?,
                    })
                })?,
            },
            location: LocationCopy {
                title: m.text("location-title")?,
                rating: m.text("location-rating")?,
                total_reviews: m.text("location-total-reviews")?,
                phone_note: m.text("location-phone-note")?,
                tip_title: m.text("location-tip-title")?,
                tip: m.text("location-tip")?,
            },
            faq: FaqCopy {
                title: m.text("faq-title")?,
                entries: m.numbered(|m, i| {
                    Ok(FaqEntry {
                        question: m.text(&format!("faq-{i}-question"))?,
                        answer: m.text(&format!("faq-{i}-answer"))?,
                    })
                })?,
            },
            cta: CtaCopy {
                headline: m.text("cta-headline")?,
                body: m.text("cta-body")?,
                rating: m.text("cta-rating")?,
                reviews: m.text("cta-reviews")?,
                family: m.text("cta-family")?,
            },
            footer: FooterCopy {
                rights: m.text("footer-rights")?,
                designed: m.text("footer-designed")?,
                tagline: m.text("footer-tagline")?,
            },
            not_found: NotFoundCopy {
                title: m.text("not-found-title")?,
                body: m.text("not-found-body")?,
                back: m.text("not-found-back")?,
            },
        })
    }
}
