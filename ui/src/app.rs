//! Root providers shared by every launcher.

use dioxus::logger::tracing::error;
use dioxus::prelude::*;

use crate::core::scroll::use_scroll_tracker;
use crate::i18n::{preferred_language, Catalog, Localized};

/// Shared theme. Launchers that cannot serve assets inline
/// [`THEME_CSS_INLINE`] instead.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
pub const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));

/// Loads the copy catalog and provides [`Localized`] and the page scroll
/// metrics to `children`. Renders a plain notice if the catalog is broken.
#[component]
pub fn SiteProviders(children: Element) -> Element {
    let catalog = use_hook(|| match Catalog::global() {
        Ok(catalog) => Some(catalog),
        Err(err) => {
            error!(%err, "site copy failed to load");
            None
        }
    });

    match catalog {
        Some(catalog) => rsx! {
            LocalizedProvider { catalog, {children} }
        },
        None => rsx! {
            main { class: "catalog-failure",
                h1 { "Spoonz" }
                p { "This page could not be loaded. Please refresh and try again." }
            }
        },
    }
}

#[component]
fn LocalizedProvider(catalog: &'static Catalog, children: Element) -> Element {
    let language = use_signal(preferred_language);
    use_context_provider(|| Localized::new(catalog, language));

    let metrics = use_scroll_tracker();
    use_context_provider(|| metrics);

    let lang = language().locale();
    rsx! {
        div { class: "site", lang: "{lang}", {children} }
    }
}
