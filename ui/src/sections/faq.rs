use dioxus::prelude::*;

use crate::core::accordion::Accordion;
use crate::i18n::use_localized;
use crate::site::Section;

#[component]
pub fn Faq() -> Element {
    let localized = use_localized();
    let copy = &localized.content().faq;
    let mut accordion = use_signal(|| Accordion::with_open(0));

    rsx! {
        section { id: Section::Faq.id(), class: "section faq",
            div { class: "section__inner faq__inner",
                header { class: "section__header",
                    h2 { class: "section__title", "{copy.title}" }
                }
                div { class: "faq__list",
                    for (i, entry) in copy.entries.iter().enumerate() {
                        div {
                            key: "{i}",
                            class: if accordion.read().is_open(i) { "faq__item faq__item--open" } else { "faq__item" },
                            button {
                                r#type: "button",
                                class: "faq__question",
                                aria_expanded: accordion.read().is_open(i).to_string(),
                                onclick: move |_| accordion.write().toggle(i),
                                span { "{entry.question}" }
                                span { class: "faq__icon", aria_hidden: "true",
                                    if accordion.read().is_open(i) { "−" } else { "+" }
                                }
                            }
                            if accordion.read().is_open(i) {
                                p { class: "faq__answer", "{entry.answer}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
