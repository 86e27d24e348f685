use dioxus::prelude::*;

use crate::i18n::use_localized;
use crate::site::{photo_url, Section, MENU_PHOTOS};

#[component]
pub fn FeaturedMenu() -> Element {
    let localized = use_localized();
    let copy = &localized.content().menu;

    rsx! {
        section { id: Section::Menu.id(), class: "section menu",
            div { class: "section__inner",
                header { class: "section__header",
                    h2 { class: "section__title", "{copy.title}" }
                    p { class: "section__subtitle", "{copy.subtitle}" }
                }
                div { class: "menu__grid",
                    for (item, photo) in copy.items.iter().zip(MENU_PHOTOS) {
                        article { key: "{photo}", class: "menu__card",
                            img {
                                class: "menu__photo",
                                src: photo_url(photo, 800, 80),
                                alt: "{item.name}",
                                loading: "lazy",
                            }
                            div { class: "menu__body",
                                h3 { class: "menu__name", "{item.name}" }
                                p { class: "menu__desc", "{item.desc}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
