use crate::diagnostics::{SegmentSample, SideStage, TimingBreakdown};
use crate::extrapolate::VerticalBand;
use crate::segments::ClassificationCounts;
use crate::types::{LaneResult, LineParams, Side};
use serde::Serialize;

/// Result produced by [`LaneDetector::process_with_diagnostics`](crate::LaneDetector).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameReport {
    pub lanes: LaneResult,
    pub trace: FrameTrace,
}

fn format_optional(val: Option<f64>) -> String {
    val.map(|v| format!("{:.3}", v))
        .unwrap_or_else(|| "-".to_string())
}

impl FrameReport {
    pub fn side(&self, side: Side) -> Option<&SideStage> {
        self.trace.sides.iter().find(|s| s.side == side)
    }

    pub fn print_text_summary(&self) {
        let t = &self.trace;
        println!(
            "Frame {}: segments={} height={} band=[{}, {}] lanes={} latency_ms={:.3}",
            t.input.frame_index,
            t.input.segments,
            t.input.frame_height,
            t.input.band.y_top,
            t.input.band.y_bottom,
            self.lanes.lane_count(),
            self.lanes.latency_ms
        );
        let c = &t.classification;
        println!(
            "  classify: left={} right={} rejected_vertical={} rejected_slope={}",
            c.left, c.right, c.rejected_vertical, c.rejected_slope
        );
        for s in &t.sides {
            println!(
                "  {}: {} segs={} outliers={} m0={} m={} b={}",
                s.side.label(),
                s.status.describe(),
                s.segments,
                s.outliers_removed(),
                format_optional(s.initial_fit.map(|f| f.slope)),
                format_optional(s.final_fit.map(|f| f.slope)),
                format_optional(s.final_fit.map(|f| f.intercept)),
            );
            if let Some(lane) = &s.lane {
                println!(
                    "    lane: ({}, {}) -> ({}, {})",
                    lane.top[0], lane.top[1], lane.bottom[0], lane.bottom[1]
                );
            }
        }
        let sm = &t.smoothing;
        println!(
            "  smoothing: enabled={} history={}/{} signal=(m={:.3}, b={:.1})",
            sm.enabled, sm.history_len, sm.capacity, sm.signal.slope, sm.signal.intercept
        );
    }
}

/// Per-frame trace describing every stage the detector executed.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    pub classification: ClassificationCounts,
    pub sides: Vec<SideStage>,
    pub smoothing: SmoothingStage,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub samples: Vec<SegmentSample>,
}

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub frame_index: u64,
    pub segments: usize,
    pub frame_height: u32,
    pub band: VerticalBand,
}

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SmoothingStage {
    pub enabled: bool,
    pub history_len: usize,
    pub capacity: usize,
    /// Entry appended for this frame, absent when the stage is disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recorded: Option<LineParams>,
    pub signal: LineParams,
}
