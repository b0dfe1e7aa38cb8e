use super::{clamp_unit, css_number};

pub const SLIDE_COUNT: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideMotion {
    ZoomIn,
    FromRight,
    FromLeft,
    FromTop,
}

/// The slice of overall progress during which one slide animates in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlidePhase {
    pub start: f64,
    pub end: f64,
    pub motion: SlideMotion,
}

pub const PHASES: [SlidePhase; SLIDE_COUNT] = [
    SlidePhase { start: 0.0, end: 0.2, motion: SlideMotion::ZoomIn },
    SlidePhase { start: 0.2, end: 0.45, motion: SlideMotion::FromRight },
    SlidePhase { start: 0.45, end: 0.7, motion: SlideMotion::FromLeft },
    SlidePhase { start: 0.7, end: 0.95, motion: SlideMotion::FromTop },
];

impl SlidePhase {
    pub fn local_progress(&self, progress: f64) -> f64 {
        clamp_unit((progress - self.start) / (self.end - self.start))
    }
}

/// Visual state of one slide. Offsets are percentages of the container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideTransform {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub opacity: f64,
    pub z_index: i32,
}

impl SlideTransform {
    fn at_rest(z_index: i32) -> Self {
        SlideTransform {
            scale: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
            opacity: 1.0,
            z_index,
        }
    }

    pub fn to_style(&self) -> String {
        format!(
            "z-index: {}; opacity: {}; transform: translate({}%, {}%) scale({}); transition: transform 0.1s linear;",
            self.z_index,
            css_number(self.opacity),
            css_number(self.translate_x),
            css_number(self.translate_y),
            css_number(self.scale),
        )
    }
}

/// Transform for slide `index` at overall `progress`. Later slides stack on
/// top of earlier ones. Indices past the table sit at rest.
pub fn slide_transform(index: usize, progress: f64) -> SlideTransform {
    let mut transform = SlideTransform::at_rest(index as i32 * 10);
    let Some(phase) = PHASES.get(index) else {
        return transform;
    };

    let p = phase.local_progress(progress);
    match phase.motion {
        SlideMotion::ZoomIn => transform.scale = 0.8 + 0.2 * p,
        SlideMotion::FromRight => transform.translate_x = 100.0 * (1.0 - p),
        SlideMotion::FromLeft => transform.translate_x = -100.0 * (1.0 - p),
        SlideMotion::FromTop => transform.translate_y = -100.0 * (1.0 - p),
    }
    transform
}

/// Exactly one slide is active for any progress. Ranges are closed on the
/// left and open on the right; the last one runs to the end.
pub fn active_slide(progress: f64) -> usize {
    PHASES
        .iter()
        .rposition(|phase| progress >= phase.start)
        .unwrap_or(0)
}

/// Section title overlay, gone by the time the first slide finishes zooming.
pub fn title_opacity(progress: f64) -> f64 {
    (1.0 - 5.0 * progress).max(0.0).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn samples() -> impl Iterator<Item = f64> {
        (0..=1000).map(|i| i as f64 / 1000.0)
    }

    #[test]
    fn output_depends_on_progress_only() {
        for p in samples() {
            for index in 0..SLIDE_COUNT {
                assert_eq!(slide_transform(index, p), slide_transform(index, p));
            }
        }
    }

    #[test]
    fn exactly_one_slide_is_active() {
        let active_ranges = [(0.0, 0.2), (0.2, 0.45), (0.45, 0.7), (0.7, f64::INFINITY)];
        for p in samples() {
            let containing: Vec<usize> = active_ranges
                .iter()
                .enumerate()
                .filter(|(_, (start, end))| p >= *start && p < *end)
                .map(|(i, _)| i)
                .collect();
            assert_eq!(containing.len(), 1, "progress {}", p);
            assert_eq!(active_slide(p), containing[0], "progress {}", p);
        }
    }

    #[test]
    fn active_slide_boundaries() {
        assert_eq!(active_slide(0.0), 0);
        assert_eq!(active_slide(0.199), 0);
        assert_eq!(active_slide(0.2), 1);
        assert_eq!(active_slide(0.449), 1);
        assert_eq!(active_slide(0.45), 2);
        assert_eq!(active_slide(0.699), 2);
        assert_eq!(active_slide(0.7), 3);
        assert_eq!(active_slide(1.0), 3);
        assert_eq!(active_slide(-0.5), 0);
    }

    #[test]
    fn first_slide_zooms_from_eighty_percent() {
        assert!((slide_transform(0, 0.0).scale - 0.8).abs() < EPS);
        assert!((slide_transform(0, 0.2).scale - 1.0).abs() < EPS);
        assert!((slide_transform(0, 0.9).scale - 1.0).abs() < EPS);

        let mut last = 0.0;
        for i in 0..=200 {
            let scale = slide_transform(0, i as f64 / 1000.0).scale;
            assert!(scale >= last);
            last = scale;
        }

        for p in samples() {
            assert_eq!(slide_transform(0, p).opacity, 1.0);
        }
    }

    #[test]
    fn second_slide_comes_in_from_the_right() {
        assert!((slide_transform(1, 0.0).translate_x - 100.0).abs() < EPS);
        assert!((slide_transform(1, 0.2).translate_x - 100.0).abs() < EPS);
        assert!((slide_transform(1, 0.325).translate_x - 50.0).abs() < EPS);
        assert!(slide_transform(1, 0.45).translate_x.abs() < EPS);
        assert!(slide_transform(1, 1.0).translate_x.abs() < EPS);
        assert_eq!(slide_transform(1, 0.3).translate_y, 0.0);
    }

    #[test]
    fn third_slide_comes_in_from_the_left() {
        assert!((slide_transform(2, 0.45).translate_x + 100.0).abs() < EPS);
        assert!(slide_transform(2, 0.7).translate_x.abs() < EPS);
        assert!(slide_transform(2, 0.6).translate_x < 0.0);
    }

    #[test]
    fn fourth_slide_drops_from_the_top() {
        assert!((slide_transform(3, 0.7).translate_y + 100.0).abs() < EPS);
        assert!(slide_transform(3, 0.95).translate_y.abs() < EPS);
        assert!(slide_transform(3, 1.0).translate_y.abs() < EPS);
        assert_eq!(slide_transform(3, 0.8).translate_x, 0.0);
    }

    #[test]
    fn later_slides_stack_on_top() {
        let z: Vec<i32> = (0..SLIDE_COUNT).map(|i| slide_transform(i, 0.5).z_index).collect();
        assert_eq!(z, vec![0, 10, 20, 30]);
    }

    #[test]
    fn unknown_slide_sits_at_rest() {
        let t = slide_transform(9, 0.5);
        assert_eq!((t.scale, t.translate_x, t.translate_y, t.opacity), (1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn title_fades_out_by_twenty_percent() {
        assert_eq!(title_opacity(0.0), 1.0);
        assert!((title_opacity(0.1) - 0.5).abs() < EPS);
        for p in samples().filter(|p| *p >= 0.2) {
            assert_eq!(title_opacity(p), 0.0, "progress {}", p);
        }
    }

    #[test]
    fn style_string_is_css_ready() {
        assert_eq!(
            slide_transform(2, 0.7).to_style(),
            "z-index: 20; opacity: 1; transform: translate(0%, 0%) scale(1); transition: transform 0.1s linear;"
        );
        assert!(slide_transform(0, 0.0).to_style().contains("scale(0.8)"));
        assert!(slide_transform(1, 0.2).to_style().contains("translate(100%, 0%)"));
    }
}
