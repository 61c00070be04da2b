use super::options::SlopeBand;
use super::segment::Segment;
use crate::types::Side;
use serde::Serialize;

/// Segment admitted to one of the two lane sides, with its line parameters
/// and length weight precomputed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ClassifiedSegment {
    pub segment: Segment,
    pub side: Side,
    pub slope: f64,
    pub intercept: f64,
    pub weight: f64,
}

/// Why a segment was not admitted to either side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rejection {
    Vertical,
    SlopeOutOfBand,
}

/// Per-segment decision of the slope-band classifier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Decision {
    Accepted(ClassifiedSegment),
    Rejected(Rejection),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationCounts {
    pub total: usize,
    pub left: usize,
    pub right: usize,
    pub rejected_vertical: usize,
    pub rejected_slope: usize,
}

impl ClassificationCounts {
    pub fn rejected(&self) -> usize {
        self.rejected_vertical + self.rejected_slope
    }
}

/// Both side groups of one frame, plus the discarded segments, in input order.
#[derive(Clone, Debug, Default)]
pub struct Classified {
    pub left: Vec<ClassifiedSegment>,
    pub right: Vec<ClassifiedSegment>,
    pub rejected: Vec<(Segment, Rejection)>,
    pub counts: ClassificationCounts,
}

impl Classified {
    pub fn take_side(&mut self, side: Side) -> Vec<ClassifiedSegment> {
        match side {
            Side::Left => std::mem::take(&mut self.left),
            Side::Right => std::mem::take(&mut self.right),
        }
    }
}

/// Side implied by a slope, or `None` when it falls outside the band.
/// Bounds are exclusive on both ends.
pub fn side_for_slope(slope: f64, band: &SlopeBand) -> Option<Side> {
    if !band.contains(slope) {
        None
    } else if slope < 0.0 {
        Some(Side::Left)
    } else {
        Some(Side::Right)
    }
}

pub fn classify_segment(segment: &Segment, band: &SlopeBand) -> Decision {
    let Some(slope) = segment.slope() else {
        return Decision::Rejected(Rejection::Vertical);
    };
    match side_for_slope(slope, band) {
        Some(side) => Decision::Accepted(ClassifiedSegment {
            segment: *segment,
            side,
            slope,
            intercept: segment.intercept(slope),
            weight: segment.length(),
        }),
        None => Decision::Rejected(Rejection::SlopeOutOfBand),
    }
}

/// Partitions a frame's segments into left and right groups.
pub fn classify_segments(segments: &[Segment], band: &SlopeBand) -> Classified {
    let mut out = Classified {
        counts: ClassificationCounts {
            total: segments.len(),
            ..Default::default()
        },
        ..Default::default()
    };
    for seg in segments {
        match classify_segment(seg, band) {
            Decision::Accepted(c) => match c.side {
                Side::Left => out.left.push(c),
                Side::Right => out.right.push(c),
            },
            Decision::Rejected(r) => {
                match r {
                    Rejection::Vertical => out.counts.rejected_vertical += 1,
                    Rejection::SlopeOutOfBand => out.counts.rejected_slope += 1,
                }
                out.rejected.push((*seg, r));
            }
        }
    }
    out.counts.left = out.left.len();
    out.counts.right = out.right.len();
    out
}
