use std::collections::{BTreeSet, HashSet};

/// Every locale ships the same message IDs as `en-US/spoonz-ui.ftl`, with no
/// duplicates. The loader refuses a catalog with gaps, so a missing key here
/// means the site would not render at all.
///
/// If you add a new locale:
/// 1. Create `ui/i18n/<locale>/spoonz-ui.ftl`
/// 2. Copy all keys from `en-US/spoonz-ui.ftl`
/// 3. Register it below and run `cargo test -p spoonz-ui`.
const EN_US: &str = include_str!("../i18n/en-US/spoonz-ui.ftl");
const ES_ES: &str = include_str!("../i18n/es-ES/spoonz-ui.ftl");
const PT_BR: &str = include_str!("../i18n/pt-BR/spoonz-ui.ftl");

const LOCALES: &[(&str, &str)] = &[("es-ES", ES_ES), ("pt-BR", PT_BR)];

#[test]
fn all_locales_have_all_fallback_keys() {
    let fallback_keys = extract_keys(EN_US);
    assert!(!fallback_keys.is_empty(), "en-US contains no keys");

    let mut failures = Vec::new();
    for (locale, src) in LOCALES {
        let keys = extract_keys(src);
        let missing: BTreeSet<&String> = fallback_keys.difference(&keys).collect();
        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing.into_iter().cloned().collect::<Vec<_>>().join("\n  ")
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "Translation completeness check failed:\n\n{}\n\nHint: copy the missing keys from en-US, then translate.",
            failures.join("\n\n")
        );
    }
}

#[test]
fn no_locale_defines_a_key_twice() {
    for (locale, src) in [("en-US", EN_US)].iter().chain(LOCALES) {
        assert_no_dup_keys(src, locale);
    }
}

#[test]
fn share_prefix_keeps_its_trailing_space() {
    for (locale, src) in [("en-US", EN_US)].iter().chain(LOCALES) {
        let line = src
            .lines()
            .find(|line| line.starts_with("builder-share-msg"))
            .unwrap_or_else(|| panic!("{locale} has no builder-share-msg"));
        assert!(line.ends_with(r#":{" "}"#), "{locale}: {line}");
    }
}

fn key_of(line: &str) -> Option<&str> {
    if line.is_empty() || line.starts_with([' ', '\t', '#', '.', '-']) {
        return None;
    }
    let (left, _) = line.split_once('=')?;
    let key = left.trim();
    (!key.is_empty() && !key.contains(char::is_whitespace)).then_some(key)
}

fn extract_keys(src: &str) -> HashSet<String> {
    src.lines().filter_map(key_of).map(str::to_string).collect()
}

fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let dups: BTreeSet<String> = src
        .lines()
        .filter_map(|raw| key_of(raw).map(|key| (key, raw)))
        .filter(|(key, _)| !seen.insert(key.to_string()))
        .map(|(key, raw)| format!("{key}  (line: \"{raw}\")"))
        .collect();

    if !dups.is_empty() {
        panic!(
            "Duplicate key definitions in {locale}:\n  {}",
            dups.into_iter().collect::<Vec<_>>().join("\n  ")
        );
    }
}
