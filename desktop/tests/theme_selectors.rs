#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Components in `ui` rely on these class names. The theme is embedded at
compile time, so a selector dropped in a refactor would silently leave part
of the page unstyled in packaged builds.

If you intentionally rename or remove a selector:
    1. Update the component markup.
    2. Adjust REQUIRED_SELECTORS accordingly.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".section__inner",
    ".visually-hidden",
    // Buttons
    ".button {",
    ".button--primary",
    ".button--secondary",
    ".button--ghost",
    // Navbar and scroll progress
    ".navbar--scrolled",
    ".navbar__toggle",
    ".navbar__drawer--open",
    ".navbar__locale",
    ".scroll-progress__fill",
    // Builder
    ".builder__step--active",
    ".builder__option--selected",
    ".builder__score-fill",
    ".builder__notice",
    ".builder__notice--error",
    // Carousel, accordion, lightbox
    ".reviews__dot--active",
    ".faq__item--open",
    ".faq__answer",
    ".lightbox",
    ".lightbox__close",
    // Marquee
    ".trust-strip__track",
    "@keyframes marquee",
    // Responsive block
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({non_ws_len} non-whitespace chars). \
         Did the file get truncated or the path change?"
    );
}

#[test]
fn mobile_drawer_is_hidden_until_opened() {
    let drawer = THEME_CSS
        .find("@media (max-width: 720px)")
        .map(|start| &THEME_CSS[start..])
        .expect("responsive block present");
    assert!(drawer.contains(".navbar__drawer {"));
    assert!(drawer.contains(".navbar__drawer--open {"));
}
