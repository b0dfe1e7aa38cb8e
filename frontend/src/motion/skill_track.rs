//! Looping path for the runner that hops along the skill bars.
//!
//! The loop is split into one equal step per waypoint. In each step the
//! marker runs right along its row to the waypoint's percentage during the
//! first 40% of the step, waits, then jumps straight down to the next row at
//! the step boundary. On the last row it shrinks and fades instead, and the
//! loop closes back at row 0 / 0% while invisible.

use super::css_number;

pub const DEFAULT_LOOP_SECONDS: f64 = 10.0;
/// Lifts the 60px marker so its feet sit on the bar line under the label.
pub const MARKER_BASELINE_OFFSET_PX: f64 = 18.0;
const RUN_FRACTION: f64 = 0.4;
// width, in loop percent, of an instantaneous change
const JUMP_GAP: f64 = 0.01;

/// How the marker got to a keyframe from the one before it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentKind {
    Start,
    Run,
    Hold,
    Drop,
    Fade,
    Restart,
}

/// Vertical position of a row: `calc(row_percent% - offset_px)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowPosition {
    pub row_percent: f64,
    pub offset_px: f64,
}

impl RowPosition {
    fn for_row(row: usize, rows: usize) -> Self {
        RowPosition {
            row_percent: row as f64 * (100.0 / rows as f64),
            offset_px: MARKER_BASELINE_OFFSET_PX,
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "calc({}% - {}px)",
            css_number(self.row_percent),
            css_number(self.offset_px)
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackKeyframe {
    pub at: f64, // percent of the loop
    pub kind: SegmentKind,
    pub top: RowPosition,
    pub left: f64, // percent of the row width
    pub opacity: f64,
    pub scale: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SkillTrack {
    keyframes: Vec<TrackKeyframe>,
    loop_seconds: f64,
}

impl SkillTrack {
    pub fn new(percentages: &[f64]) -> Self {
        Self::with_period(percentages, DEFAULT_LOOP_SECONDS)
    }

    pub fn with_period(percentages: &[f64], loop_seconds: f64) -> Self {
        Self {
            keyframes: build_keyframes(percentages),
            loop_seconds,
        }
    }

    pub fn keyframes(&self) -> &[TrackKeyframe] {
        &self.keyframes
    }

    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    pub fn loop_seconds(&self) -> f64 {
        self.loop_seconds
    }

    /// Transitions between consecutive keyframes, in loop order.
    pub fn segments(&self) -> Vec<SegmentKind> {
        self.keyframes.iter().skip(1).map(|frame| frame.kind).collect()
    }

    pub fn count(&self, kind: SegmentKind) -> usize {
        self.segments().into_iter().filter(|k| *k == kind).count()
    }

    /// `@keyframes` block for the path; empty when there are no waypoints.
    pub fn to_css_keyframes(&self, animation_name: &str) -> String {
        if self.keyframes.is_empty() {
            return String::new();
        }
        let mut css = format!("@keyframes {} {{\n", animation_name);
        for frame in &self.keyframes {
            css.push_str(&format!(
                "  {}% {{ top: {}; left: {}%; opacity: {}; transform: scale({}); }}\n",
                css_number(frame.at),
                frame.top.to_css(),
                css_number(frame.left),
                css_number(frame.opacity),
                css_number(frame.scale),
            ));
        }
        css.push('}');
        css
    }

    pub fn animation_style(&self, animation_name: &str) -> String {
        format!(
            "animation: {} {}s linear infinite;",
            animation_name,
            css_number(self.loop_seconds)
        )
    }
}

fn build_keyframes(percentages: &[f64]) -> Vec<TrackKeyframe> {
    let rows = percentages.len();
    if rows == 0 {
        return Vec::new();
    }
    let step = 100.0 / rows as f64;
    let targets: Vec<f64> = percentages.iter().map(|p| p.clamp(0.0, 100.0)).collect();

    let mut frames = Vec::with_capacity(rows * 3 + 1);
    frames.push(TrackKeyframe {
        at: 0.0,
        kind: SegmentKind::Start,
        top: RowPosition::for_row(0, rows),
        left: 0.0,
        opacity: 1.0,
        scale: 1.0,
    });

    for (row, &target) in targets.iter().enumerate() {
        let step_start = row as f64 * step;
        let step_end = step_start + step;
        let top = RowPosition::for_row(row, rows);

        frames.push(TrackKeyframe {
            at: step_start + step * RUN_FRACTION,
            kind: SegmentKind::Run,
            top,
            left: target,
            opacity: 1.0,
            scale: 1.0,
        });

        if row + 1 < rows {
            frames.push(TrackKeyframe {
                at: step_end - JUMP_GAP,
                kind: SegmentKind::Hold,
                top,
                left: target,
                opacity: 1.0,
                scale: 1.0,
            });
            // the next run starts where this one ended
            frames.push(TrackKeyframe {
                at: step_end,
                kind: SegmentKind::Drop,
                top: RowPosition::for_row(row + 1, rows),
                left: target,
                opacity: 1.0,
                scale: 1.0,
            });
        } else {
            frames.push(TrackKeyframe {
                at: step_end - JUMP_GAP,
                kind: SegmentKind::Fade,
                top,
                left: target,
                opacity: 0.0,
                scale: 0.0,
            });
            frames.push(TrackKeyframe {
                at: 100.0,
                kind: SegmentKind::Restart,
                top: RowPosition::for_row(0, rows),
                left: 0.0,
                opacity: 0.0,
                scale: 0.0,
            });
        }
    }
    frames
}
