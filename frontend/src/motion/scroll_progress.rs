use super::clamp_unit;

/// Layout geometry read from the DOM on a scroll tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackedRegion {
    pub top: f64,    // bounding rect top, negative once scrolled past
    pub height: f64, // bounding rect height
    pub viewport_height: f64,
}

/// `clamp(-top / (height - viewport), 0, 1)`, or `None` when the region is
/// not taller than the viewport and there is nothing to scroll through.
pub fn scroll_progress(region: TrackedRegion) -> Option<f64> {
    let scrollable = region.height - region.viewport_height;
    if !(scrollable > 0.0) {
        return None;
    }
    Some(clamp_unit(-region.top / scrollable))
}

/// Holds the last good progress value between scroll ticks.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollProgressTracker {
    progress: f64,
}

impl ScrollProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Recompute from fresh geometry. Degenerate geometry keeps the previous
    /// value. Returns true when the value changed.
    pub fn update(&mut self, region: TrackedRegion) -> bool {
        match scroll_progress(region) {
            Some(progress) if progress != self.progress => {
                self.progress = progress;
                true
            }
            _ => false,
        }
    }
}

/// Hero fade: fully transparent once the page has scrolled 80% of a viewport.
pub fn hero_opacity(scroll_y: f64, viewport_height: f64) -> f64 {
    let fade_distance = viewport_height * 0.8;
    if !(fade_distance > 0.0) {
        return 1.0;
    }
    clamp_unit(1.0 - scroll_y / fade_distance)
}
