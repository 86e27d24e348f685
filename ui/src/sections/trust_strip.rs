use dioxus::prelude::*;

use crate::i18n::use_localized;

/// Scrolling band of customer quotes. The list is rendered twice so the CSS
/// marquee can loop without a gap.
#[component]
pub fn TrustStrip() -> Element {
    let localized = use_localized();
    let quotes = &localized.content().trust;

    rsx! {
        div { class: "trust-strip",
            div { class: "trust-strip__track",
                for (i, quote) in quotes.iter().chain(quotes.iter()).enumerate() {
                    span {
                        key: "{i}",
                        class: "trust-strip__item",
                        aria_hidden: (i >= quotes.len()).to_string(),
                        "“{quote}”"
                    }
                }
            }
        }
    }
}
