//! Platform glue: clipboard access and in-page scrolling.

use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use thiserror::Error;

use crate::site::Section;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

/// Write `payload` to the system clipboard.
#[cfg(all(
    not(target_arch = "wasm32"),
    any(target_os = "windows", target_os = "macos", target_os = "linux")
))]
pub async fn copy_to_clipboard(payload: String) -> Result<(), ClipboardError> {
    use arboard::Clipboard;

    let mut clipboard =
        Clipboard::new().map_err(|err| ClipboardError::Unavailable(err.to_string()))?;
    clipboard
        .set_text(payload)
        .map_err(|err| ClipboardError::Rejected(err.to_string()))
}

/// Write `payload` to the system clipboard through the webview's async
/// Clipboard API. The script resolves to `null` on success or the failure
/// reason as a string.
#[cfg(not(all(
    not(target_arch = "wasm32"),
    any(target_os = "windows", target_os = "macos", target_os = "linux")
)))]
pub async fn copy_to_clipboard(payload: String) -> Result<(), ClipboardError> {
    let literal = serde_json::to_string(&payload)
        .map_err(|err| ClipboardError::Unavailable(err.to_string()))?;
    let script = format!(
        r#"
        if (!navigator.clipboard) {{ return "Clipboard API unavailable"; }}
        try {{
            await navigator.clipboard.writeText({literal});
            return null;
        }} catch (err) {{
            return String(err);
        }}
        "#
    );

    let outcome = document::eval(&script)
        .await
        .map_err(|err| ClipboardError::Unavailable(err.to_string()))?;
    match outcome.as_str() {
        Some(reason) => Err(ClipboardError::Rejected(reason.to_string())),
        None => Ok(()),
    }
}

/// Smooth-scroll the page to a section. Must be called from an event handler
/// or another place with an active Dioxus scope.
pub fn scroll_to(section: Section) {
    let script = scroll_script(section);
    spawn(async move {
        if let Err(err) = document::eval(&script).await {
            warn!(%err, ?section, "scroll request failed");
        }
    });
}

fn scroll_script(section: Section) -> String {
    match section.anchor() {
        None => "window.scrollTo({ top: 0, behavior: 'smooth' }); return null;".to_string(),
        Some(id) => format!(
            "document.getElementById('{id}')?.scrollIntoView({{ behavior: 'smooth' }}); return null;"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_script_targets_section_anchor() {
        let script = scroll_script(Section::Builder);
        assert!(script.contains("getElementById('builder')"));
    }

    #[test]
    fn scroll_script_for_top_scrolls_window() {
        let script = scroll_script(Section::Top);
        assert!(script.starts_with("window.scrollTo"));
    }
}
