//! Frame pipeline driving lane estimation end-to-end.
//!
//! The [`LaneDetector`] takes one frame's Hough segments plus the frame height
//! and returns up to two lane lines. Internally it classifies segments by
//! slope band, fits each side with a length-weighted average, prunes slope
//! outliers once, refits, extrapolates to the ROI band and finally records the
//! frame's fit in its own smoothing window.
//!
//! Typical usage:
//! ```no_run
//! use lane_detector::{LaneDetector, LaneParams, Segment};
//!
//! # fn example(frames: Vec<Vec<Segment>>) {
//! let mut detector = LaneDetector::new(LaneParams::default());
//! for segments in &frames {
//!     let lanes = detector.process(segments, 540);
//!     if let Some(left) = lanes.left {
//!         println!("left: {:?} -> {:?}", left.top, left.bottom);
//!     }
//! }
//! # }
//! ```
use super::outliers::prune_outliers;
use super::params::LaneParams;
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{
    FrameReport, FrameTrace, InputDescriptor, SegmentSample, SideStage, SideStatus,
    SmoothingStage, TimingBreakdown,
};
use crate::extrapolate::{extrapolate, VerticalBand};
use crate::fit::fit_weighted;
use crate::history::TemporalSmoother;
use crate::segments::{classify_segments, ClassifiedSegment, Segment};
use crate::types::{LaneResult, LineParams, Side};
use log::{debug, log, warn, Level};
use std::time::Instant;

/// Lane detector for a single video stream.
///
/// Each instance owns its smoothing window, so independent streams must use
/// independent detectors. Frames are processed strictly in call order.
pub struct LaneDetector {
    params: LaneParams,
    smoother: TemporalSmoother,
    frame_index: u64,
}

impl LaneDetector {
    /// Create a detector with the supplied parameters.
    pub fn new(params: LaneParams) -> Self {
        let smoother = TemporalSmoother::new(params.history);
        Self {
            params,
            smoother,
            frame_index: 0,
        }
    }

    pub fn params(&self) -> &LaneParams {
        &self.params
    }

    pub fn smoother(&self) -> &TemporalSmoother {
        &self.smoother
    }

    pub fn frames_processed(&self) -> u64 {
        self.frame_index
    }

    /// Forget all cross-frame state (start of a new clip).
    pub fn reset(&mut self) {
        self.smoother.reset();
        self.frame_index = 0;
    }

    /// Run the detector on one frame, returning the compact result.
    pub fn process(&mut self, segments: &[Segment], frame_height: u32) -> LaneResult {
        self.process_with_diagnostics(segments, frame_height).lanes
    }

    /// Run the detector and return both the result and a per-stage trace.
    pub fn process_with_diagnostics(
        &mut self,
        segments: &[Segment],
        frame_height: u32,
    ) -> FrameReport {
        let total_start = Instant::now();
        let frame_index = self.frame_index;
        self.frame_index += 1;
        let level = self.report_level();
        let band = VerticalBand::from_frame_height(frame_height, self.params.roi_top_fraction);
        debug!(
            "LaneDetector::process frame={} segments={} height={} band=[{}, {}]",
            frame_index,
            segments.len(),
            frame_height,
            band.y_top,
            band.y_bottom
        );

        let mut timings = TimingBreakdown::default();
        let band_params = self.params.slope_band;
        let mut classified = timings.time("classify", || classify_segments(segments, &band_params));
        let counts = classified.counts;
        log!(
            level,
            "frame {}: {} segments -> left={} right={} discarded={} (vertical={} slope={})",
            frame_index,
            counts.total,
            counts.left,
            counts.right,
            counts.rejected(),
            counts.rejected_vertical,
            counts.rejected_slope
        );

        let mut samples = Vec::new();
        if self.params.collect_samples {
            samples.extend(
                classified
                    .rejected
                    .iter()
                    .map(|&(seg, r)| SegmentSample::rejected(seg, r)),
            );
        }

        let kept_segments: Vec<Segment> = if self.params.keep_segments {
            classified
                .left
                .iter()
                .chain(classified.right.iter())
                .map(|c| c.segment)
                .collect()
        } else {
            Vec::new()
        };

        let prior = if self.params.outliers.prior_gate {
            self.smoother.prior_slope()
        } else {
            None
        };

        let mut result = LaneResult::default();
        let mut sides = Vec::with_capacity(Side::ALL.len());
        let mut frame_fit: Option<LineParams> = None;
        for side in Side::ALL {
            let group = classified.take_side(side);
            let params = &self.params;
            let (stage, computed) = timings.time(side_label(side), || {
                run_side(params, level, side, group, prior, &band, &mut samples)
            });
            match side {
                Side::Left => result.left = stage.lane,
                Side::Right => result.right = stage.lane,
            }
            frame_fit = computed.or(frame_fit);
            sides.push(stage);
        }

        let signal = timings.time("smooth", || self.smoother.update(frame_fit));
        let smoothing = SmoothingStage {
            enabled: self.smoother.is_enabled(),
            history_len: self.smoother.history().len(),
            capacity: self.smoother.history().capacity(),
            recorded: if self.smoother.is_enabled() {
                self.smoother.history().latest()
            } else {
                None
            },
            signal,
        };

        let outliers: usize = sides.iter().map(SideStage::outliers_removed).sum();
        result.smoothing = signal;
        result.segments = kept_segments;
        result.latency_ms = elapsed_ms(total_start);
        timings.total_ms = result.latency_ms;

        log!(
            level,
            "frame {}: lanes={} outliers_removed={} history={}/{}",
            frame_index,
            result.lane_count(),
            outliers,
            smoothing.history_len,
            smoothing.capacity
        );

        FrameReport {
            lanes: result,
            trace: FrameTrace {
                input: InputDescriptor {
                    frame_index,
                    segments: segments.len(),
                    frame_height,
                    band,
                },
                timings,
                classification: counts,
                sides,
                smoothing,
                samples,
            },
        }
    }

    fn report_level(&self) -> Level {
        if self.params.verbose {
            Level::Info
        } else {
            Level::Debug
        }
    }
}

fn side_label(side: Side) -> &'static str {
    match side {
        Side::Left => "left",
        Side::Right => "right",
    }
}

/// Fit → prune → refit → extrapolate for one side.
///
/// Returns the stage trace and the last slope/intercept computed for the side
/// (the pre-pruning average when pruning emptied it), which feeds the frame
/// history.
fn run_side(
    params: &LaneParams,
    level: Level,
    side: Side,
    group: Vec<ClassifiedSegment>,
    prior: Option<f64>,
    band: &VerticalBand,
    samples: &mut Vec<SegmentSample>,
) -> (SideStage, Option<LineParams>) {
    let mut stage = SideStage::new(side, group.len());

    let Some(initial) = fit_weighted(&group) else {
        log!(level, "{}: No lines detected", side.label());
        return (stage, None);
    };
    stage.initial_fit = Some(initial);

    let (kept, diag) = prune_outliers(group, &initial, prior, &params.outliers);
    for r in &diag.removed {
        log!(
            level,
            "{} m outlier removed ({:?}). m={:.3} off by {:.3} len={:.1}",
            side.label(),
            r.reason,
            r.slope,
            r.deviation,
            r.weight
        );
    }
    if params.collect_samples {
        samples.extend(diag.removed.iter().map(|r| SegmentSample::pruned(side, r)));
        samples.extend(kept.iter().map(SegmentSample::kept));
    }

    let refit = if diag.removed.is_empty() {
        Some(initial)
    } else {
        fit_weighted(&kept)
    };
    stage.outliers = Some(diag);

    let Some(fit) = refit else {
        stage.status = SideStatus::PrunedEmpty;
        log!(level, "{}: No lines detected", side.label());
        return (stage, Some(initial.params()));
    };
    stage.final_fit = Some(fit);
    log!(level, "{} lines: {}", side.label(), kept.len());

    match extrapolate(&fit, band) {
        Some(lane) => {
            stage.lane = Some(lane);
            stage.status = SideStatus::Detected;
        }
        None => {
            warn!(
                "{}: cannot extrapolate fit m={} b={}",
                side.label(),
                fit.slope,
                fit.intercept
            );
            stage.status = SideStatus::Degenerate;
        }
    }
    (stage, Some(fit.params()))
}
