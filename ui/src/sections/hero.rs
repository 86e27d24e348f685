use dioxus::prelude::*;

use crate::core::platform::scroll_to;
use crate::i18n::use_localized;
use crate::site::{photo_url, Section, GOOGLE_RATING, HERO_PHOTO, REVIEW_COUNT};

#[component]
pub fn Hero() -> Element {
    let localized = use_localized();
    let copy = &localized.content().hero;
    let badge = &localized.content().awards.badge;
    let photo = photo_url(HERO_PHOTO, 1200, 80);

    rsx! {
        section { class: "hero",
            div { class: "hero__glow hero__glow--rose", aria_hidden: "true" }
            div { class: "hero__glow hero__glow--amber", aria_hidden: "true" }

            div { class: "hero__inner",
                div { class: "hero__copy",
                    span { class: "pill",
                        span { class: "pill__dot" }
                        "{copy.badge}"
                    }
                    h1 { class: "hero__headline", "{copy.headline}" }
                    p { class: "hero__subheadline", "{copy.subheadline}" }

                    div { class: "hero__actions",
                        button {
                            r#type: "button",
                            class: "button button--primary button--large",
                            onclick: move |_| scroll_to(Section::Builder),
                            "{copy.cta_build}"
                        }
                        button {
                            r#type: "button",
                            class: "button button--ghost button--large",
                            onclick: move |_| scroll_to(Section::Location),
                            "{copy.cta_visit}"
                        }
                    }

                    ul { class: "hero__chips",
                        for chip in copy.chips.iter() {
                            li { key: "{chip}", class: "hero__chip", "{chip}" }
                        }
                    }
                }

                figure { class: "hero__media",
                    img { src: "{photo}", alt: "{copy.fresh_caption}" }
                    div { class: "hero__card hero__card--rating",
                        span { class: "hero__stars", aria_hidden: "true", "★★★★★" }
                        strong { "{GOOGLE_RATING}/5" }
                        small { "{REVIEW_COUNT} {copy.rating_caption}" }
                    }
                    div { class: "hero__card hero__card--award",
                        strong { "{badge}" }
                        small { "{copy.fresh_caption}" }
                    }
                }
            }
        }
    }
}
