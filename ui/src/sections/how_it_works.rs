use dioxus::prelude::*;

use crate::i18n::use_localized;
use crate::site::Section;

#[component]
pub fn HowItWorks() -> Element {
    let localized = use_localized();
    let copy = &localized.content().how;
    let last = copy.steps.len() - 1;

    rsx! {
        section { id: Section::How.id(), class: "section section--tinted how",
            div { class: "section__inner",
                header { class: "section__header",
                    h2 { class: "section__title", "{copy.title}" }
                }
                ol { class: "how__steps",
                    for (i, step) in copy.steps.iter().enumerate() {
                        li { key: "{i}", class: "how__step",
                            span { class: "how__number", "0{i + 1}" }
                            h3 { class: "how__title", "{step.title}" }
                            p { class: "how__desc", "{step.desc}" }
                            if i < last {
                                span { class: "how__chevron", aria_hidden: "true", "›" }
                            }
                        }
                    }
                }
            }
        }
    }
}
