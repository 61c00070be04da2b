//! Raw Hough segments and their slope-band classification.
//!
//! Each frame arrives as an unordered list of short segments in integer pixel
//! coordinates. The classifier computes `m = (y2 - y1) / (x2 - x1)` for every
//! segment and sorts it into one of two lane sides:
//!
//! - `-max_slope < m < -min_slope` → [`Side::Left`](crate::types::Side)
//! - ` min_slope < m <  max_slope` → [`Side::Right`](crate::types::Side)
//! - everything else is discarded.
//!
//! Segments with `x1 == x2` have no slope and are rejected up front as
//! vertical; they never reach a side. Accepted segments carry their intercept
//! (`b = y1 - m·x1`) and their Euclidean length, which the fitter uses as the
//! weight.
//!
//! Notes
//! - Image rows grow downward, so a left boundary (bottom-left towards the
//!   vanishing point) has a negative slope.
//! - Classification is a pure partition; input order is preserved inside each
//!   side.

mod classify;
mod options;
mod segment;

pub use classify::{
    classify_segment, classify_segments, side_for_slope, ClassificationCounts, Classified,
    ClassifiedSegment, Decision, Rejection,
};
pub use options::SlopeBand;
pub use segment::Segment;
