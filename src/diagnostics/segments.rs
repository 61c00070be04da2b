use crate::detector::outliers::{PruneReason, RemovedSegment};
use crate::segments::{ClassifiedSegment, Rejection, Segment};
use crate::types::Side;
use serde::{Deserialize, Serialize};

/// Classification outcome for a single input segment.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentSample {
    pub segment: Segment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<Side>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slope: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deviation: Option<f64>,
    pub class: SegmentClass,
}

impl SegmentSample {
    pub fn kept(seg: &ClassifiedSegment) -> Self {
        Self {
            segment: seg.segment,
            side: Some(seg.side),
            slope: Some(seg.slope),
            deviation: None,
            class: SegmentClass::Kept,
        }
    }

    pub fn rejected(segment: Segment, rejection: Rejection) -> Self {
        let class = match rejection {
            Rejection::Vertical => SegmentClass::RejectedVertical,
            Rejection::SlopeOutOfBand => SegmentClass::RejectedSlope,
        };
        Self {
            segment,
            side: None,
            slope: segment.slope(),
            deviation: None,
            class,
        }
    }

    pub fn pruned(side: Side, removed: &RemovedSegment) -> Self {
        let class = match removed.reason {
            PruneReason::SideAverage => SegmentClass::PrunedAverage,
            PruneReason::HistoryPrior => SegmentClass::PrunedPrior,
        };
        Self {
            segment: removed.segment,
            side: Some(side),
            slope: Some(removed.slope),
            deviation: Some(removed.deviation),
            class,
        }
    }
}

/// Normalised label for where a segment ended up.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SegmentClass {
    Kept,
    RejectedVertical,
    RejectedSlope,
    PrunedAverage,
    PrunedPrior,
}
