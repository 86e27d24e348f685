use dioxus::prelude::*;

use crate::i18n::use_localized;
use crate::site::{photo_url, Section, ALLERGY_PHOTO};

#[component]
pub fn AllergyCare() -> Element {
    let localized = use_localized();
    let copy = &localized.content().allergy;

    rsx! {
        section { id: Section::Allergy.id(), class: "section allergy",
            div { class: "section__inner allergy__layout",
                div { class: "allergy__copy",
                    span { class: "pill", "{copy.badge}" }
                    h2 { class: "section__title", "{copy.title}" }
                    p { class: "section__subtitle", "{copy.subtitle}" }
                    ul { class: "allergy__items",
                        for item in copy.items.iter() {
                            li { key: "{item}", class: "allergy__item", "{item}" }
                        }
                    }
                    p { class: "allergy__disclaimer", "{copy.disclaimer}" }
                }
                img {
                    class: "allergy__photo",
                    src: photo_url(ALLERGY_PHOTO, 1000, 80),
                    alt: "{copy.title}",
                    loading: "lazy",
                }
            }
        }
    }
}
