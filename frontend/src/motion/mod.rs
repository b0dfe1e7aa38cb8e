//! Scroll and time driven presentation math.
//!
//! Everything in here is a pure function of its inputs (progress, geometry,
//! waypoint lists) and returns plain descriptors. The components turn those
//! into inline styles; nothing here touches the DOM.

pub mod reveal;
pub mod scroll_progress;
pub mod skill_track;
pub mod slide_sequencer;

/// Clamp to [0, 1]. NaN maps to 0 so a bad layout read never leaks into styles.
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Compact number formatting for css: at most four decimals, no trailing
/// zeros, never "-0".
pub fn css_number(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let text = format!("{:.4}", rounded);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_unit_handles_edges() {
        assert_eq!(clamp_unit(-3.0), 0.0);
        assert_eq!(clamp_unit(0.25), 0.25);
        assert_eq!(clamp_unit(7.0), 1.0);
        assert_eq!(clamp_unit(f64::NAN), 0.0);
    }

    #[test]
    fn css_number_is_compact() {
        assert_eq!(css_number(1.0), "1");
        assert_eq!(css_number(0.8), "0.8");
        assert_eq!(css_number(-0.0), "0");
        assert_eq!(css_number(-0.00001), "0");
        assert_eq!(css_number(16.666666), "16.6667");
        assert_eq!(css_number(-100.0), "-100");
    }
}
