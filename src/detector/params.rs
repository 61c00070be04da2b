//! Parameter types configuring the detector stages.
//!
//! Defaults reproduce the tuning the pipeline was developed with on 960×540
//! dashcam footage. Everything derives `Deserialize` with `#[serde(default)]`
//! so a JSON config only needs the fields it overrides.

use crate::history::HistoryParams;
use crate::segments::SlopeBand;
use serde::{Deserialize, Serialize};

/// Detector-wide parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaneParams {
    /// Slope magnitudes accepted as lane-edge evidence.
    pub slope_band: SlopeBand,
    /// Single-pass slope outlier rejection.
    pub outliers: OutlierParams,
    /// Fraction of the frame height where the ROI (and drawn lanes) start.
    pub roi_top_fraction: f64,
    /// Temporal smoothing window.
    pub history: HistoryParams,
    /// Emit per-frame counts and every pruned segment at `info` level.
    pub verbose: bool,
    /// Attach accepted raw segments to the result for debug overlays.
    pub keep_segments: bool,
    /// Record per-segment samples in the diagnostics trace.
    pub collect_samples: bool,
}

impl Default for LaneParams {
    fn default() -> Self {
        Self {
            slope_band: SlopeBand::default(),
            outliers: OutlierParams::default(),
            roi_top_fraction: 0.6,
            history: HistoryParams::default(),
            verbose: false,
            keep_segments: false,
            collect_samples: false,
        }
    }
}

/// Configuration for slope outlier pruning.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlierParams {
    /// Maximum relative slope deviation `|m - avg| / (0.5·(m + avg))`.
    pub max_relative_deviation: f64,
    /// Compare the magnitude of the deviation so negative (left) slopes are
    /// pruned as well. Off by default, which leaves the left side untouched.
    pub symmetric: bool,
    /// Also prune against the smoothed slope of previous frames.
    pub prior_gate: bool,
}

impl Default for OutlierParams {
    fn default() -> Self {
        Self {
            max_relative_deviation: 0.15,
            symmetric: false,
            prior_gate: false,
        }
    }
}
