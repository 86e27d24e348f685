use dioxus::prelude::*;

use crate::i18n::use_localized;
use crate::site::{photo_url, Section, GALLERY_PHOTOS};

/// Photo wall with a full-screen lightbox. Filter chips are decorative.
#[component]
pub fn Gallery() -> Element {
    let localized = use_localized();
    let copy = &localized.content().gallery;
    let mut open_photo = use_signal(|| Option::<usize>::None);

    let lightbox = open_photo().and_then(|i| GALLERY_PHOTOS.get(i).copied());

    rsx! {
        section { id: Section::Gallery.id(), class: "section gallery",
            div { class: "section__inner",
                header { class: "section__header",
                    h2 { class: "section__title", "{copy.title}" }
                    div { class: "gallery__filters",
                        for filter in copy.filters.iter() {
                            button { key: "{filter}", r#type: "button", class: "gallery__filter", "{filter}" }
                        }
                    }
                }
                div { class: "gallery__grid",
                    for (i, photo) in GALLERY_PHOTOS.into_iter().enumerate() {
                        button {
                            key: "{photo}",
                            r#type: "button",
                            class: "gallery__item",
                            onclick: move |_| open_photo.set(Some(i)),
                            img { src: photo_url(photo, 600, 80), alt: "{copy.title}", loading: "lazy" }
                        }
                    }
                }
            }

            if let Some(photo) = lightbox {
                div {
                    class: "lightbox",
                    role: "dialog",
                    aria_modal: "true",
                    onclick: move |_| open_photo.set(None),
                    button { r#type: "button", class: "lightbox__close", aria_label: "{copy.close}", "×" }
                    img { class: "lightbox__image", src: photo_url(photo, 1200, 100), alt: "{copy.title}" }
                }
            }
        }
    }
}
