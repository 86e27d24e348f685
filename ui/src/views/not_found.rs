use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::i18n::use_localized;

/// Fallback for unknown paths. `segments` is the unmatched route.
#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let localized = use_localized();
    let copy = &localized.content().not_found;
    debug!(path = %segments.join("/"), "no route matched");

    rsx! {
        main { class: "page page-not-found",
            h1 { "{copy.title}" }
            p { "{copy.body}" }
            a { class: "button button--primary", href: "/", "{copy.back}" }
        }
    }
}
