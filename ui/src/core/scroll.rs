//! Page scroll tracking for the progress bar and the navbar's scrolled style.

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::site::SCROLLED_THRESHOLD_PX;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    /// Vertical page offset in CSS pixels.
    pub offset: f64,
    /// Largest reachable offset (document height minus viewport height).
    pub max_offset: f64,
}

impl ScrollMetrics {
    /// Fraction of the page scrolled, clamped to `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.max_offset <= 0.0 {
            return 0.0;
        }
        (self.offset / self.max_offset).clamp(0.0, 1.0)
    }

    pub fn is_scrolled(&self) -> bool {
        self.offset > SCROLLED_THRESHOLD_PX
    }
}

// Per-frame poll; only changed offsets are sent back. The trailing await keeps
// the channel open for as long as the Rust side listens.
const SCROLL_FEED_JS: &str = r#"
let last = -1;
const tick = () => {
    const offset = window.scrollY;
    if (offset !== last) {
        last = offset;
        const max = document.documentElement.scrollHeight - window.innerHeight;
        dioxus.send([offset, Math.max(0, max)]);
    }
    window.requestAnimationFrame(tick);
};
tick();
await new Promise(() => {});
"#;

/// Start tracking scroll metrics for the lifetime of the calling component.
pub fn use_scroll_tracker() -> Signal<ScrollMetrics> {
    let mut metrics = use_signal(ScrollMetrics::default);

    use_future(move || async move {
        let mut feed = document::eval(SCROLL_FEED_JS);
        loop {
            match feed.recv::<(f64, f64)>().await {
                Ok((offset, max_offset)) => metrics.set(ScrollMetrics { offset, max_offset }),
                Err(err) => {
                    debug!(%err, "scroll feed closed");
                    break;
                }
            }
        }
    });

    metrics
}

/// Scroll metrics provided by [`crate::app::SiteProviders`].
pub fn use_scroll_metrics() -> Signal<ScrollMetrics> {
    use_context::<Signal<ScrollMetrics>>()
}
