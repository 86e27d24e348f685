#![cfg(test)]
//! The desktop binary inlines the shared theme from `ui/assets/theme/main.css`.
//! A broken path or truncated file would only show up as an unstyled window at
//! runtime, so check it at test time instead.
//!
//! If you rename or relocate the theme, update both this test and the
//! `include_str!` constant in `ui/src/app.rs`.

const EMBEDDED_CSS: &str = ui::app::THEME_CSS_INLINE;

#[test]
fn embedded_css_file_exists_and_is_not_empty() {
    assert!(
        !EMBEDDED_CSS.trim().is_empty(),
        "Embedded CSS file appears to be empty."
    );
}

#[test]
fn embedded_css_contains_expected_tokens() {
    let required = ["--color-bg", "--color-accent", "body {", ".button--primary"];
    for token in required {
        assert!(
            EMBEDDED_CSS.contains(token),
            "Expected token `{token}` missing from embedded CSS"
        );
    }
}

#[test]
fn embedded_css_braces_balance() {
    let open = EMBEDDED_CSS.matches('{').count();
    let close = EMBEDDED_CSS.matches('}').count();
    assert_eq!(open, close, "unbalanced braces in embedded CSS");
}
