use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::i18n::Language;

/// Name of the message file in every locale folder.
const FTL_FILENAME: &str = "spoonz-ui.ftl";

const I18N_DIR: &str = "i18n";

/// Upper bound for numbered IDs (`menu-item-{i}-name`).
const MAX_NUMBERED: usize = 9;

/// Message IDs defined in a Fluent file. Terms, comments and continuation
/// lines are skipped.
fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .filter(|line| !line.starts_with([' ', '\t', '#', '-', '.']))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| !id.is_empty() && id.chars().all(valid_key_char))
        .map(str::to_string)
        .collect()
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Every string literal passed to `.text(...)` under `src/`, either a plain
/// ID (`"nav-menu"`) or a numbered template (`"hero-chip-{i}"`).
fn referenced_ids(src_root: &Path) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let mut stack = vec![src_root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(read_dir) = fs::read_dir(&path) {
                stack.extend(read_dir.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        for needle in ["text(\"", "text(&format!(\""] {
            for (pos, _) in content.match_indices(needle) {
                let rest = &content[pos + needle.len()..];
                if let Some(end) = rest.find('"') {
                    let id = &rest[..end];
                    let plain = id.replace("{i}", "");
                    if !plain.is_empty() && plain.chars().all(valid_key_char) {
                        found.insert(id.to_string());
                    }
                }
            }
        }
    }

    found
}

/// Resolve a referenced ID against the defined keys. Numbered templates must
/// exist at least for index 1.
fn expand(reference: &str, defined: &BTreeSet<String>) -> Vec<String> {
    if !reference.contains("{i}") {
        return vec![reference.to_string()];
    }
    let expanded: Vec<String> = (1..=MAX_NUMBERED)
        .map(|i| reference.replace("{i}", &i.to_string()))
        .take_while(|id| defined.contains(id))
        .collect();
    if expanded.is_empty() {
        vec![reference.replace("{i}", "1")]
    } else {
        expanded
    }
}

fn read_locale(i18n_root: &Path, locale: &str) -> BTreeSet<String> {
    let path = i18n_root.join(locale).join(FTL_FILENAME);
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {path:?}: {err}"));
    parse_ftl_keys(&content)
}

#[test]
fn every_language_defines_the_reference_keys() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let i18n_root = crate_root.join(I18N_DIR);

    let reference = read_locale(&i18n_root, Language::En.locale());
    assert!(!reference.is_empty(), "no message keys parsed for en-US");

    let mut per_locale_gaps: BTreeMap<&str, Vec<String>> = BTreeMap::new();
    for language in Language::ALL {
        let keys = read_locale(&i18n_root, language.locale());
        let missing: Vec<String> = reference.difference(&keys).cloned().collect();
        let extra: Vec<String> = keys
            .difference(&reference)
            .map(|k| format!("{k} (not in en-US)"))
            .collect();
        let gaps: Vec<String> = missing.into_iter().chain(extra).collect();
        if !gaps.is_empty() {
            per_locale_gaps.insert(language.locale(), gaps);
        }
    }

    if !per_locale_gaps.is_empty() {
        let mut report = String::from("Locales out of sync with en-US:\n");
        for (locale, gaps) in &per_locale_gaps {
            report.push_str(&format!("  {locale} ({} keys)\n", gaps.len()));
            for k in gaps {
                report.push_str(&format!("    {k}\n"));
            }
        }
        panic!("{report}");
    }
}

#[test]
fn loader_and_message_files_agree() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let reference = read_locale(&crate_root.join(I18N_DIR), Language::En.locale());
    let referenced = referenced_ids(&crate_root.join("src"));
    assert!(!referenced.is_empty(), "no `.text(...)` calls found under src/");

    let used: BTreeSet<String> = referenced
        .iter()
        .flat_map(|id| expand(id, &reference))
        .collect();

    let missing: Vec<_> = used.difference(&reference).collect();
    assert!(
        missing.is_empty(),
        "IDs read by the loader but missing from en-US: {missing:?}"
    );

    let unused: Vec<_> = reference.difference(&used).collect();
    assert!(unused.is_empty(), "IDs defined but never read: {unused:?}");
}

#[test]
fn parser_skips_comments_and_terms() {
    let keys = parse_ftl_keys("# note\n-brand = Spoonz\nnav-menu = Menu\n    .attr = x\n");
    assert_eq!(keys.into_iter().collect::<Vec<_>>(), vec!["nav-menu".to_string()]);
}
