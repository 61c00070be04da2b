//! Diagnostics data model returned by the detector and the demo binary.
//!
//! `FrameReport` is the main entry point: it bundles the per-frame
//! [`LaneResult`](crate::LaneResult) with a `FrameTrace` describing the
//! classification counts, each side's fit/prune/extrapolate path, the
//! smoothing window and stage timings.

pub mod pipeline;
pub mod segments;
pub mod sides;
pub mod timing;

pub use pipeline::{FrameReport, FrameTrace, InputDescriptor, SmoothingStage};
pub use segments::{SegmentClass, SegmentSample};
pub use sides::{SideStage, SideStatus};
pub use timing::{StageTiming, TimingBreakdown};
