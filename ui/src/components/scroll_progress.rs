use dioxus::prelude::*;

use crate::core::format::bar_width;
use crate::core::scroll::use_scroll_metrics;

/// Thin bar across the top of the viewport tracking page scroll.
#[component]
pub fn ScrollProgress() -> Element {
    let metrics = use_scroll_metrics();
    let style = bar_width(metrics().progress());

    rsx! {
        div { class: "scroll-progress", aria_hidden: "true",
            div { class: "scroll-progress__fill", style }
        }
    }
}
