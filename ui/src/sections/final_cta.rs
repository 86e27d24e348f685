use dioxus::prelude::*;

use crate::i18n::use_localized;
use crate::site::{DIRECTIONS_URL, GOOGLE_RATING, PHONE_URI, REVIEW_COUNT};

#[component]
pub fn FinalCta() -> Element {
    let localized = use_localized();
    let content = localized.content();
    let copy = &content.cta;
    let nav = &content.nav;

    rsx! {
        section { class: "section final-cta",
            div { class: "section__inner final-cta__inner",
                h2 { class: "final-cta__headline", "{copy.headline}" }
                p { class: "final-cta__body", "{copy.body}" }
                div { class: "final-cta__actions",
                    a { class: "button button--primary button--large", href: DIRECTIONS_URL, target: "_blank", rel: "noopener noreferrer",
                        "{nav.directions}"
                    }
                    a { class: "button button--ghost button--large", href: PHONE_URI, "{nav.call}" }
                }
                dl { class: "final-cta__stats",
                    div {
                        dt { "{copy.rating}" }
                        dd { "{GOOGLE_RATING}" }
                    }
                    div {
                        dt { "{copy.reviews}" }
                        dd { "{REVIEW_COUNT}" }
                    }
                    div {
                        dt { "{copy.family}" }
                        dd { "100%" }
                    }
                }
            }
        }
    }
}
