use dioxus::prelude::*;

use crate::i18n::use_localized;
use crate::site::{photo_url, Section, STORY_PHOTO};

#[component]
pub fn Story() -> Element {
    let localized = use_localized();
    let copy = &localized.content().about;

    rsx! {
        section { id: Section::Story.id(), class: "section story",
            div { class: "section__inner story__layout",
                figure { class: "story__media",
                    img { src: photo_url(STORY_PHOTO, 1200, 80), alt: "{copy.title}", loading: "lazy" }
                    blockquote { class: "story__quote", "“{copy.quote}”" }
                }
                div { class: "story__copy",
                    h2 { class: "section__title", "{copy.title}" }
                    for (i, paragraph) in copy.paragraphs.iter().enumerate() {
                        p { key: "{i}", class: "story__paragraph", "{paragraph}" }
                    }
                }
            }
        }
    }
}
