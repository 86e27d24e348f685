use dioxus::prelude::*;

use crate::core::platform::scroll_to;
use crate::core::scroll::use_scroll_metrics;
use crate::i18n::{use_localized, NavCopy};
use crate::site::{Section, DIRECTIONS_URL, PHONE_URI, SHOP_NAME};

use super::LanguageSwitcher;

fn nav_label(copy: &NavCopy, section: Section) -> &str {
    match section {
        Section::Menu => &copy.menu,
        Section::How => &copy.how,
        Section::Story => &copy.story,
        Section::Reviews => &copy.reviews,
        Section::Gallery => &copy.gallery,
        Section::Allergy => &copy.allergy,
        Section::Location => &copy.location,
        Section::Faq => &copy.faq,
        Section::Top | Section::Builder => "",
    }
}

/// Fixed page header: brand, section links, language switcher and the call /
/// directions actions. Collapses into a toggled drawer on narrow screens.
#[component]
pub fn AppNavbar() -> Element {
    let localized = use_localized();
    let copy = &localized.content().nav;
    let metrics = use_scroll_metrics();
    let mut menu_open = use_signal(|| false);

    let header_class = if metrics().is_scrolled() {
        "navbar navbar--scrolled"
    } else {
        "navbar"
    };
    let drawer_class = if menu_open() {
        "navbar__drawer navbar__drawer--open"
    } else {
        "navbar__drawer"
    };
    let toggle_label = if menu_open() {
        copy.close_menu.clone()
    } else {
        copy.open_menu.clone()
    };

    rsx! {
        header { id: "navbar", class: header_class,
            div { class: "navbar__inner",
                a {
                    class: "navbar__brand",
                    href: Section::Top.href(),
                    onclick: move |evt| {
                        evt.prevent_default();
                        menu_open.set(false);
                        scroll_to(Section::Top);
                    },
                    span { class: "navbar__brand-spark", aria_hidden: "true" }
                    span { class: "navbar__brand-mark", "{SHOP_NAME}" }
                }

                button {
                    r#type: "button",
                    class: "navbar__toggle",
                    aria_expanded: menu_open().to_string(),
                    aria_label: "{toggle_label}",
                    onclick: move |_| menu_open.set(!menu_open()),
                    span { class: "navbar__toggle-bar" }
                    span { class: "navbar__toggle-bar" }
                    span { class: "navbar__toggle-bar" }
                }

                div { class: drawer_class,
                    nav { class: "navbar__links",
                        for section in Section::NAV {
                            a {
                                key: "{section:?}",
                                class: "navbar__link",
                                href: section.href(),
                                onclick: move |evt| {
                                    evt.prevent_default();
                                    menu_open.set(false);
                                    scroll_to(section);
                                },
                                {nav_label(copy, section)}
                            }
                        }
                    }

                    div { class: "navbar__actions",
                        LanguageSwitcher {}
                        a { class: "button button--ghost", href: DIRECTIONS_URL, target: "_blank", rel: "noopener noreferrer",
                            "{copy.directions}"
                        }
                        a { class: "button button--primary", href: PHONE_URI, "{copy.call}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Catalog, Language};

    #[test]
    fn every_nav_section_has_a_label() {
        let catalog = Catalog::load().expect("catalog loads");
        for language in Language::ALL {
            let copy = &catalog.bundle(language).nav;
            for section in Section::NAV {
                assert!(!nav_label(copy, section).is_empty(), "{language} {section:?}");
            }
        }
    }
}
