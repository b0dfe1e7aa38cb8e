pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// One-shot visibility latch. Once an element has been seen it stays shown,
/// whatever the observer reports afterwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    visible: bool,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feed one intersection report. Returns true only on the report that
    /// flips the latch, which is when the caller should stop observing.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.visible || !intersecting {
            return false;
        }
        self.visible = true;
        true
    }
}

/// Class list for a reveal wrapper: hidden until latched, then the entrance
/// animation plus its optional delay.
pub fn reveal_classes(visible: bool, animation: &str, delay: &str, extra: &str) -> String {
    let state = if visible {
        format!("{} {}", animation, delay)
    } else {
        "reveal-hidden".to_string()
    };
    format!("{} {}", extra, state)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_flips_once_and_never_back() {
        let mut latch = RevealLatch::new();
        assert!(!latch.observe(false));
        assert!(!latch.is_visible());

        assert!(latch.observe(true));
        assert!(latch.is_visible());

        // leaving and re-entering the viewport changes nothing
        assert!(!latch.observe(false));
        assert!(!latch.observe(true));
        assert!(latch.is_visible());
    }

    #[test]
    fn latches_are_independent() {
        let mut a = RevealLatch::new();
        let b = RevealLatch::new();
        a.observe(true);
        assert!(a.is_visible());
        assert!(!b.is_visible());
    }

    #[test]
    fn classes_follow_the_latch() {
        assert_eq!(reveal_classes(false, "fly-left", "delay-200", "inline-block"), "inline-block reveal-hidden");
        assert_eq!(reveal_classes(true, "fly-left", "delay-200", "inline-block"), "inline-block fly-left delay-200");
        assert_eq!(reveal_classes(true, "fly-left", "", ""), "fly-left");
    }
}
