use dioxus::prelude::*;

use crate::i18n::use_localized;
use crate::site::{
    Section, ADDRESS_CITY, ADDRESS_STREET, DIRECTIONS_URL, GOOGLE_RATING, MAP_EMBED_URL,
    PHONE_DISPLAY, PHONE_URI, REVIEW_COUNT,
};

#[component]
pub fn Location() -> Element {
    let localized = use_localized();
    let content = localized.content();
    let copy = &content.location;
    let nav = &content.nav;

    rsx! {
        section { id: Section::Location.id(), class: "section location",
            div { class: "section__inner location__layout",
                div { class: "location__details",
                    h2 { class: "section__title", "{copy.title}" }
                    address { class: "location__address",
                        span { "{ADDRESS_STREET}" }
                        span { "{ADDRESS_CITY}" }
                    }

                    dl { class: "location__stats",
                        div {
                            dt { "{copy.rating}" }
                            dd { "{GOOGLE_RATING}" }
                        }
                        div {
                            dt { "{copy.total_reviews}" }
                            dd { "{REVIEW_COUNT}" }
                        }
                    }

                    div { class: "location__phone",
                        a { href: PHONE_URI, "{PHONE_DISPLAY}" }
                        small { "{copy.phone_note}" }
                    }

                    div { class: "location__actions",
                        a { class: "button button--primary", href: PHONE_URI, "{nav.call}" }
                        a { class: "button button--ghost", href: DIRECTIONS_URL, target: "_blank", rel: "noopener noreferrer",
                            "{nav.directions}"
                        }
                    }

                    aside { class: "location__tip",
                        h3 { "{copy.tip_title}" }
                        p { "{copy.tip}" }
                    }
                }

                iframe {
                    class: "location__map",
                    src: MAP_EMBED_URL,
                    title: "{copy.title}",
                    referrerpolicy: "no-referrer-when-downgrade",
                    "loading": "lazy",
                    allowfullscreen: true,
                }
            }
        }
    }
}
