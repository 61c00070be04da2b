//! Lane detector orchestrating the per-frame estimation pipeline.
//!
//! Overview
//! - Classifies raw Hough segments into left/right groups by slope sign and
//!   magnitude band; vertical segments are dropped.
//! - Fits each side with a length-weighted mean slope and intercept.
//! - Prunes segments whose slope deviates from the side mean by more than a
//!   relative threshold (one pass), then refits.
//! - Extrapolates each surviving fit to the ROI band `[0.6·H, H-1]`.
//! - Appends the frame's last computed fit to a bounded smoothing window.
//!
//! Modules
//! - [`params`] – configuration types used by the detector and the demo.
//! - `pipeline` – the main [`LaneDetector`] implementation.
//! - [`outliers`] – single-pass slope outlier pruning.
//!
//! A side with no segments, or whose segments were all pruned, simply has no
//! lane for that frame. None of the stages can fail.

pub mod outliers;
pub mod params;
mod pipeline;

pub use outliers::{prune_outliers, relative_deviation, PruneDiagnostics, PruneReason};
pub use params::{LaneParams, OutlierParams};
pub use pipeline::LaneDetector;
