use dioxus::prelude::*;

use crate::i18n::use_localized;
use crate::site::{
    ADDRESS_CITY, ADDRESS_STREET, COPYRIGHT, DESIGNER_NAME, DESIGNER_URL, PHONE_DISPLAY, PHONE_URI,
    SHOP_NAME,
};

#[component]
pub fn SiteFooter() -> Element {
    let localized = use_localized();
    let copy = &localized.content().footer;

    rsx! {
        footer { class: "footer",
            div { class: "footer__inner",
                div { class: "footer__brand",
                    span { class: "footer__brand-mark", "{SHOP_NAME}" }
                    span { class: "footer__tagline", "{copy.tagline}" }
                }
                address { class: "footer__contact",
                    span { "{ADDRESS_STREET}" }
                    span { "{ADDRESS_CITY}" }
                    a { href: PHONE_URI, "{PHONE_DISPLAY}" }
                }
                div { class: "footer__legal",
                    p { "{COPYRIGHT} {copy.rights}" }
                    p {
                        "{copy.designed} "
                        a { href: DESIGNER_URL, target: "_blank", rel: "noopener noreferrer", "{DESIGNER_NAME}" }
                    }
                }
            }
        }
    }
}
