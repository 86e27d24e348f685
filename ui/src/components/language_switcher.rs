use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::i18n::{use_localized, Language};

#[component]
pub fn LanguageSwitcher() -> Element {
    let localized = use_localized();
    let copy = &localized.content().nav;
    let current = localized.language();

    let on_change = move |evt: FormEvent| {
        let value = evt.value();
        match Language::from_code(&value) {
            Some(language) => localized.set_language(language),
            None => warn!(%value, "ignoring unknown language code"),
        }
    };

    rsx! {
        div { class: "navbar__locale",
            label { class: "visually-hidden", r#for: "locale-select", "{copy.language_label}" }
            select {
                id: "locale-select",
                value: current.code(),
                oninput: on_change,
                for language in Language::ALL {
                    option {
                        key: "{language}",
                        value: language.code(),
                        selected: language == current,
                        "{language}"
                    }
                }
            }
        }
    }
}
