//! Length-weighted line fit for one lane side.
//!
//! Every accepted segment contributes its own `(m, b)` pair weighted by its
//! Euclidean length, so long, confidently detected segments dominate:
//!
//! ```text
//! avg_m = Σ wᵢ·mᵢ / Σ wᵢ        avg_b = Σ wᵢ·bᵢ / Σ wᵢ
//! ```
//!
//! An empty side (or one whose total weight is zero) has no fit. That is a
//! normal sparse-detection outcome, not an error.
use crate::segments::ClassifiedSegment;
use crate::types::LineParams;
use nalgebra::DVector;
use serde::Serialize;

/// Weighted average line of one side.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineFit {
    pub slope: f64,
    pub intercept: f64,
    pub support: usize,
    pub total_weight: f64,
}

impl LineFit {
    pub fn params(&self) -> LineParams {
        LineParams {
            slope: self.slope,
            intercept: self.intercept,
        }
    }
}

/// Fits the length-weighted mean slope and intercept of `segments`.
pub fn fit_weighted(segments: &[ClassifiedSegment]) -> Option<LineFit> {
    if segments.is_empty() {
        return None;
    }
    let w = DVector::from_iterator(segments.len(), segments.iter().map(|s| s.weight));
    let m = DVector::from_iterator(segments.len(), segments.iter().map(|s| s.slope));
    let b = DVector::from_iterator(segments.len(), segments.iter().map(|s| s.intercept));
    let total = w.sum();
    if total <= 0.0 || !total.is_finite() {
        return None;
    }
    Some(LineFit {
        slope: w.dot(&m) / total,
        intercept: w.dot(&b) / total,
        support: segments.len(),
        total_weight: total,
    })
}
