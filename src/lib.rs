#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod detector;
pub mod diagnostics;
pub mod segments;
pub mod types;

// Single-stage building blocks, usable on their own.
pub mod extrapolate;
pub mod fit;
pub mod history;

// Collaborators around the estimator: I/O, rendering, batch driving.
pub mod batch;
pub mod config;
pub mod io;
pub mod overlay;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{LaneDetector, LaneParams, OutlierParams};
pub use crate::segments::{Segment, SlopeBand};
pub use crate::types::{LaneLine, LaneResult, LineParams, SegmentStream, Side};

// High-level diagnostics returned by the detector.
pub use crate::diagnostics::{FrameReport, FrameTrace};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use lane_detector::prelude::*;
///
/// # fn main() {
/// let frame = vec![
///     Segment::from([100, 500, 150, 400]),
///     Segment::from([600, 400, 650, 500]),
/// ];
/// let mut det = LaneDetector::new(LaneParams::default());
/// let lanes = det.process(&frame, 540);
/// println!("lanes={} latency_ms={:.3}", lanes.lane_count(), lanes.latency_ms);
/// # }
/// ```
pub mod prelude {
    pub use crate::{LaneDetector, LaneLine, LaneParams, LaneResult, Segment, Side};
}

// --- Stage-level API (for tools & advanced users) --------------------------

pub mod stages {
    pub use crate::detector::outliers::{prune_outliers, relative_deviation, PruneDiagnostics};
    pub use crate::extrapolate::{extrapolate, floor_div_abs, VerticalBand};
    pub use crate::fit::{fit_weighted, LineFit};
    pub use crate::history::{FrameHistory, HistoryParams, TemporalSmoother};
    pub use crate::segments::{classify_segments, Classified, ClassifiedSegment};

    pub use crate::diagnostics::{
        InputDescriptor, SegmentClass, SegmentSample, SideStage, SideStatus, SmoothingStage,
        StageTiming, TimingBreakdown,
    };
}
