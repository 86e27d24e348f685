use dioxus::prelude::*;

use crate::i18n::use_localized;
use crate::site::AWARD_YEARS;

#[component]
pub fn Awards() -> Element {
    let localized = use_localized();
    let copy = &localized.content().awards;

    rsx! {
        section { class: "section awards",
            div { class: "section__inner",
                header { class: "section__header",
                    h2 { class: "section__title", "{copy.title}" }
                    p { class: "section__subtitle", "{copy.subtitle}" }
                }
                div { class: "awards__grid",
                    for year in AWARD_YEARS {
                        article { key: "{year}", class: "awards__card",
                            span { class: "awards__year", "{year}" }
                            p { class: "awards__badge", "{copy.badge}" }
                        }
                    }
                }
            }
        }
    }
}
