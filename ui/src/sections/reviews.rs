use dioxus::prelude::*;

use crate::core::rotation::Rotation;
use crate::core::timing::sleep_ms;
use crate::i18n::use_localized;
use crate::site::{Section, GOOGLE_RATING, REVIEWS_URL, REVIEW_INTERVAL_MS};

#[component]
pub fn ReviewsCarousel() -> Element {
    let localized = use_localized();
    let copy = &localized.content().reviews;
    let mut rotation = use_signal(|| Rotation::new(copy.entries.len()));

    // Dropped with the component, which stops the timer.
    use_future(move || async move {
        loop {
            sleep_ms(REVIEW_INTERVAL_MS).await;
            rotation.write().advance();
        }
    });

    let current = rotation.read().index();
    let review = &copy.entries[current];
    let initial = review.name.chars().next().unwrap_or('★');

    rsx! {
        section { id: Section::Reviews.id(), class: "section section--tinted reviews",
            div { class: "section__inner reviews__inner",
                header { class: "section__header",
                    h2 { class: "section__title", "{copy.title}" }
                    p { class: "reviews__rating",
                        span { class: "reviews__stars", aria_hidden: "true", "★★★★★" }
                        strong { "{GOOGLE_RATING} / 5" }
                    }
                    p { class: "reviews__count", "{copy.count}" }
                }

                figure { key: "{current}", class: "reviews__card", aria_live: "polite",
                    blockquote { class: "reviews__text", "“{review.text}”" }
                    figcaption { class: "reviews__author",
                        span { class: "reviews__avatar", "{initial}" }
                        span { class: "reviews__who",
                            strong { "{review.name}" }
                            small { "{copy.verified}" }
                        }
                    }
                }

                div { class: "reviews__dots",
                    for (i, entry) in copy.entries.iter().enumerate() {
                        button {
                            key: "{i}",
                            r#type: "button",
                            class: if i == current { "reviews__dot reviews__dot--active" } else { "reviews__dot" },
                            aria_label: "{entry.name}",
                            onclick: move |_| {
                                rotation.write().go_to(i);
                            },
                        }
                    }
                }

                a { class: "reviews__leave", href: REVIEWS_URL, target: "_blank", rel: "noopener noreferrer",
                    "{copy.leave}"
                }
            }
        }
    }
}
