//! Internationalization (i18n) support for `spoonz-ui`.
//!
//! This module wires together:
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `fluent` (message parsing + formatting)
//! - `i18n-embed` (OS / browser language preferences)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n/
//!   en-US/spoonz-ui.ftl   (reference for key completeness)
//!   es-ES/spoonz-ui.ftl
//!   pt-BR/spoonz-ui.ftl
//! ```
//!
//! Every language is resolved once into a typed [`ContentBundle`] when the
//! [`Catalog`] loads. Languages do not fall back to each other: a message
//! missing from one locale fails the load instead of silently rendering
//! English.
//!
//! Usage in a component (below [`crate::app::SiteProviders`]):
//! ```ignore
//! let localized = use_localized();
//! let copy = &localized.content().hero;
//! rsx! { h1 { "{copy.headline}" } }
//! ```
//!
//! To add a new locale:
//! 1. Copy `en-US/spoonz-ui.ftl` to `i18n/<lang-id>/spoonz-ui.ftl`.
//! 2. Translate each message value (keep IDs identical).
//! 3. Add a [`Language`] variant and run the tests to ensure completeness.

mod content;
pub use content::*;

use std::fmt;

use dioxus::logger::tracing::{debug, info};
use dioxus::prelude::*;
use fluent::{FluentBundle, FluentResource};
use once_cell::sync::OnceCell;
use rust_embed::Embed;
use thiserror::Error;
use unic_langid::LanguageIdentifier;

/// Fluent "domain" (matches the crate / the FTL filename in every locale).
const DOMAIN: &str = "spoonz-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
pub(crate) struct Localizations;

/// Supported site languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    Es,
    Pt,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Es, Language::Pt];

    /// Short code shown in the language switcher.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Es => "ES",
            Language::Pt => "PT",
        }
    }

    /// Locale folder holding this language's messages.
    pub fn locale(self) -> &'static str {
        match self {
            Language::En => "en-US",
            Language::Es => "es-ES",
            Language::Pt => "pt-BR",
        }
    }

    /// Accepts switcher codes (`EN`) as well as locale tags (`pt-BR`, `es_MX`),
    /// matching on the primary language subtag.
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code.split(['-', '_']).next()?.to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Language::En),
            "es" => Some(Language::Es),
            "pt" => Some(Language::Pt),
            _ => None,
        }
    }

    /// First supported entry of a preference list, or the default language.
    pub fn negotiate(requested: &[LanguageIdentifier]) -> Self {
        requested
            .iter()
            .find_map(|id| Self::from_code(id.language.as_str()))
            .unwrap_or_default()
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("missing translation file `{0}`")]
    MissingFile(String),
    #[error("translation file `{0}` is not valid UTF-8")]
    Encoding(String),
    #[error("translation file `{path}` has {count} syntax error(s)")]
    Parse { path: String, count: usize },
    #[error("invalid locale identifier `{0}`")]
    Locale(&'static str),
    #[error("{language} messages could not be registered ({count} conflict(s))")]
    Register { language: Language, count: usize },
    #[error("{language} does not define message `{id}`")]
    MissingMessage { language: Language, id: String },
    #[error("{language} message `{id}` is empty")]
    EmptyMessage { language: Language, id: String },
    #[error("{language} message `{id}` failed to format")]
    Format { language: Language, id: String },
    #[error("expected {expected} numbered messages, found {found}")]
    ListLength { expected: usize, found: usize },
}

/// Strict message lookup over a single language's `.ftl` file.
pub(crate) struct Messages {
    language: Language,
    bundle: FluentBundle<FluentResource>,
}

impl Messages {
    pub(crate) fn load(language: Language) -> Result<Self, CatalogError> {
        let path = ftl_path(language);
        let file = Localizations::get(&path).ok_or_else(|| CatalogError::MissingFile(path.clone()))?;
        let source = String::from_utf8(file.data.into_owned())
            .map_err(|_| CatalogError::Encoding(path.clone()))?;
        let resource = FluentResource::try_new(source).map_err(|(_, errors)| CatalogError::Parse {
            path,
            count: errors.len(),
        })?;

        let locale: LanguageIdentifier = language
            .locale()
            .parse()
            .map_err(|_| CatalogError::Locale(language.locale()))?;
        let mut bundle = FluentBundle::new(vec![locale]);
        bundle.set_use_isolating(false);
        bundle
            .add_resource(resource)
            .map_err(|errors| CatalogError::Register {
                language,
                count: errors.len(),
            })?;

        Ok(Self { language, bundle })
    }

    pub(crate) fn text(&self, id: &str) -> Result<String, CatalogError> {
        let pattern = self
            .bundle
            .get_message(id)
            .and_then(|message| message.value())
            .ok_or_else(|| CatalogError::MissingMessage {
                language: self.language,
                id: id.to_string(),
            })?;

        let mut errors = Vec::new();
        let value = self.bundle.format_pattern(pattern, None, &mut errors);
        if !errors.is_empty() {
            return Err(CatalogError::Format {
                language: self.language,
                id: id.to_string(),
            });
        }
        if value.trim().is_empty() {
            return Err(CatalogError::EmptyMessage {
                language: self.language,
                id: id.to_string(),
            });
        }
        Ok(value.into_owned())
    }

    /// Build `N` entries from IDs numbered `1..=N`.
    pub(crate) fn numbered<T, const N: usize>(
        &self,
        build: impl Fn(&Self, usize) -> Result<T, CatalogError>,
    ) -> Result<[T; N], CatalogError> {
        let items = (1..=N)
            .map(|i| build(self, i))
            .collect::<Result<Vec<_>, _>>()?;
        items
            .try_into()
            .map_err(|items: Vec<T>| CatalogError::ListLength {
                expected: N,
                found: items.len(),
            })
    }
}

fn ftl_path(language: Language) -> String {
    format!("{}/{DOMAIN}.ftl", language.locale())
}

/// All resolved bundles, indexed by [`Language`].
#[derive(Debug, PartialEq, Eq)]
pub struct Catalog {
    bundles: [ContentBundle; 3],
}

static CATALOG: OnceCell<Catalog> = OnceCell::new();

impl Catalog {
    /// Resolve every language. The first gap in any locale aborts the load.
    pub fn load() -> Result<Self, CatalogError> {
        let [en, es, pt] = Language::ALL
            .map(|language| Messages::load(language).and_then(|m| ContentBundle::from_messages(&m)));
        Ok(Self {
            bundles: [en?, es?, pt?],
        })
    }

    /// Process-wide catalog, loaded on first use.
    pub fn global() -> Result<&'static Catalog, CatalogError> {
        CATALOG.get_or_try_init(|| {
            let catalog = Self::load()?;
            info!(languages = Language::ALL.len(), "site copy loaded");
            Ok(catalog)
        })
    }

    pub fn bundle(&self, language: Language) -> &ContentBundle {
        &self.bundles[language.index()]
    }
}

/// Language selection plus the catalog it reads from. Provided as context by
/// [`crate::app::SiteProviders`].
#[derive(Clone, Copy)]
pub struct Localized {
    catalog: &'static Catalog,
    language: Signal<Language>,
}

impl Localized {
    pub fn new(catalog: &'static Catalog, language: Signal<Language>) -> Self {
        Self { catalog, language }
    }

    /// Current language. Subscribes the calling component.
    pub fn language(&self) -> Language {
        (self.language)()
    }

    /// Bundle for the current language. Subscribes the calling component.
    pub fn content(&self) -> &'static ContentBundle {
        self.catalog.bundle(self.language())
    }

    pub fn set_language(&self, language: Language) {
        let mut signal = self.language;
        if *signal.peek() != language {
            info!(%language, "switching language");
            signal.set(language);
        }
    }
}

pub fn use_localized() -> Localized {
    use_context::<Localized>()
}

/// Initial language from the OS / browser preference list.
pub fn preferred_language() -> Language {
    let requested = requested_languages();
    let language = Language::negotiate(&requested);
    debug!(?requested, %language, "negotiated initial language");
    language
}

/// List available (embedded) locale folders.
pub fn available_locales() -> Vec<String> {
    let mut locales = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    locales.sort();
    locales.dedup();
    locales
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
