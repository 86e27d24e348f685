//! Formatting helpers for presenting builder and carousel state.

pub fn format_percent(value: u8) -> String {
    format!("{value}%")
}

/// Inline style for a progress bar filled to `fraction` (0..=1).
pub fn bar_width(fraction: f64) -> String {
    format!("width: {:.2}%;", fraction.clamp(0.0, 1.0) * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_has_suffix() {
        assert_eq!(format_percent(75), "75%");
    }

    #[test]
    fn bar_width_is_clamped() {
        assert_eq!(bar_width(0.5), "width: 50.00%;");
        assert_eq!(bar_width(2.0), "width: 100.00%;");
    }
}
