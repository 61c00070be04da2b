use crate::detector::outliers::PruneDiagnostics;
use crate::fit::LineFit;
use crate::types::{LaneLine, Side};
use serde::Serialize;

/// Outcome of one side for one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SideStatus {
    Detected,
    NoSegments,
    PrunedEmpty,
    Degenerate,
}

impl SideStatus {
    pub fn describe(self) -> &'static str {
        match self {
            SideStatus::Detected => "lane detected",
            SideStatus::NoSegments => "no lines detected",
            SideStatus::PrunedEmpty => "no lines detected (all pruned)",
            SideStatus::Degenerate => "degenerate fit",
        }
    }
}

/// Fit, pruning and extrapolation trace for one side.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SideStage {
    pub side: Side,
    pub status: SideStatus,
    pub segments: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_fit: Option<LineFit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outliers: Option<PruneDiagnostics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_fit: Option<LineFit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lane: Option<LaneLine>,
}

impl SideStage {
    pub fn new(side: Side, segments: usize) -> Self {
        Self {
            side,
            status: SideStatus::NoSegments,
            segments,
            initial_fit: None,
            outliers: None,
            final_fit: None,
            lane: None,
        }
    }

    pub fn outliers_removed(&self) -> usize {
        self.outliers.as_ref().map_or(0, |o| o.removed_count())
    }
}
