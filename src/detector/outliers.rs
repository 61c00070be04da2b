//! Single-pass slope outlier rejection for one fitted side.
//!
//! A segment is an outlier when its slope disagrees with the side average by
//! more than a relative threshold:
//!
//! ```text
//! d = |m - avg_m| / (0.5 · (m + avg_m))
//! ```
//!
//! The denominator keeps its sign. On the left side both slopes are negative,
//! so `d` is negative and never exceeds the threshold: only the right side is
//! pruned unless [`OutlierParams::symmetric`] compares `|d|` instead. When
//! `m + avg_m` is (close to) zero the ratio is undefined and the segment is
//! kept. All outliers are removed at once by filtering into a
//! new list; the caller refits the survivors exactly once.
//!
//! The optional prior gate applies the same test against the smoothed slope
//! from previous frames. It is off by default and ignored when the prior and
//! the side disagree in sign, since the frame history is not per side.
use crate::detector::params::OutlierParams;
use crate::fit::LineFit;
use crate::segments::{ClassifiedSegment, Segment};
use serde::Serialize;

const EPS: f64 = 1e-6;

/// Why a segment was pruned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PruneReason {
    SideAverage,
    HistoryPrior,
}

/// A segment removed by the pruner together with its score.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemovedSegment {
    pub segment: Segment,
    pub slope: f64,
    pub weight: f64,
    pub deviation: f64,
    pub reason: PruneReason,
}

/// Diagnostics emitted by the pruner.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PruneDiagnostics {
    pub total: usize,
    pub kept: usize,
    pub skipped_degenerate: usize,
    pub threshold: f64,
    pub removed: Vec<RemovedSegment>,
}

impl PruneDiagnostics {
    fn new(total: usize, threshold: f64) -> Self {
        Self {
            total,
            threshold,
            ..Default::default()
        }
    }

    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }
}

/// Signed relative slope difference, `None` when the denominator degenerates.
pub fn relative_deviation(slope: f64, reference: f64) -> Option<f64> {
    let denom = 0.5 * (slope + reference);
    if !denom.is_finite() || denom.abs() <= EPS {
        return None;
    }
    Some((slope - reference).abs() / denom)
}

/// Removes segments whose slope deviates from `fit.slope` (and, when the gate
/// is enabled, from `prior_slope`) by more than the configured threshold.
pub fn prune_outliers(
    segments: Vec<ClassifiedSegment>,
    fit: &LineFit,
    prior_slope: Option<f64>,
    params: &OutlierParams,
) -> (Vec<ClassifiedSegment>, PruneDiagnostics) {
    let threshold = params.max_relative_deviation;
    let score = |d: f64| if params.symmetric { d.abs() } else { d };
    let mut diag = PruneDiagnostics::new(segments.len(), threshold);
    let prior = prior_slope.filter(|p| {
        params.prior_gate && *p != 0.0 && p.signum() == fit.slope.signum()
    });

    let mut kept = Vec::with_capacity(segments.len());
    for seg in segments {
        let Some(d) = relative_deviation(seg.slope, fit.slope) else {
            diag.skipped_degenerate += 1;
            kept.push(seg);
            continue;
        };
        if score(d) > threshold {
            diag.removed.push(removed(&seg, d, PruneReason::SideAverage));
            continue;
        }
        if let Some(p) = prior {
            if let Some(dp) = relative_deviation(seg.slope, p) {
                if score(dp) > threshold {
                    diag.removed.push(removed(&seg, dp, PruneReason::HistoryPrior));
                    continue;
                }
            }
        }
        kept.push(seg);
    }
    diag.kept = kept.len();
    (kept, diag)
}

fn removed(seg: &ClassifiedSegment, deviation: f64, reason: PruneReason) -> RemovedSegment {
    RemovedSegment {
        segment: seg.segment,
        slope: seg.slope,
        weight: seg.weight,
        deviation,
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fit::fit_weighted;
    use crate::types::Side;

    fn obs(slope: f64, weight: f64) -> ClassifiedSegment {
        ClassifiedSegment {
            segment: Segment::new([0, 0], [1, 1]),
            side: if slope < 0.0 { Side::Left } else { Side::Right },
            slope,
            intercept: 0.0,
            weight,
        }
    }

    #[test]
    fn steep_minority_segment_is_pruned() {
        let side = vec![obs(1.0, 100.0), obs(1.05, 100.0), obs(3.8, 5.0)];
        let fit = fit_weighted(&side).unwrap();
        let (kept, diag) = prune_outliers(side, &fit, None, &OutlierParams::default());
        assert_eq!(kept.len(), 2);
        assert_eq!(diag.removed_count(), 1);
        assert!((diag.removed[0].slope - 3.8).abs() < 1e-6);
        assert!(diag.removed[0].deviation > 0.15);
        let refit = fit_weighted(&kept).unwrap();
        assert!((refit.slope - 1.025).abs() < 1e-4, "slope={}", refit.slope);
    }

    #[test]
    fn left_side_keeps_all_segments_by_default() {
        let side = vec![obs(-2.0, 111.8), obs(-2.2857, 87.3), obs(-0.9, 10.0)];
        let fit = fit_weighted(&side).unwrap();
        assert!(relative_deviation(-0.9, fit.slope).unwrap() < 0.0);
        let (kept, diag) = prune_outliers(side, &fit, None, &OutlierParams::default());
        assert_eq!(kept.len(), 3);
        assert_eq!(diag.removed_count(), 0);
    }

    #[test]
    fn symmetric_scoring_prunes_left_side_too() {
        let side = vec![obs(-2.0, 111.8), obs(-2.2857, 87.3), obs(-0.9, 10.0)];
        let fit = fit_weighted(&side).unwrap();
        let params = OutlierParams {
            symmetric: true,
            ..Default::default()
        };
        let (kept, diag) = prune_outliers(side, &fit, None, &params);
        assert_eq!(kept.len(), 2);
        assert_eq!(diag.removed[0].reason, PruneReason::SideAverage);
        assert!((diag.removed[0].slope + 0.9).abs() < 1e-9);
    }

    #[test]
    fn pruning_never_grows_and_second_pass_is_a_no_op() {
        let side = vec![
            obs(1.0, 100.0),
            obs(1.05, 100.0),
            obs(0.98, 60.0),
            obs(3.8, 5.0),
            obs(0.5, 4.0),
        ];
        let n = side.len();
        let fit = fit_weighted(&side).unwrap();
        let params = OutlierParams::default();
        let (kept, _) = prune_outliers(side, &fit, None, &params);
        assert!(kept.len() <= n);

        let refit = fit_weighted(&kept).unwrap();
        let (again, diag) = prune_outliers(kept.clone(), &refit, None, &params);
        assert_eq!(again.len(), kept.len());
        assert_eq!(diag.removed_count(), 0);
    }

    #[test]
    fn degenerate_denominator_keeps_segment() {
        assert!(relative_deviation(1.0, -1.0).is_none());
        let fit = LineFit {
            slope: -1.0,
            intercept: 0.0,
            support: 1,
            total_weight: 1.0,
        };
        let (kept, diag) = prune_outliers(vec![obs(1.0, 1.0)], &fit, None, &OutlierParams::default());
        assert_eq!(kept.len(), 1);
        assert_eq!(diag.skipped_degenerate, 1);
    }

    #[test]
    fn prior_gate_only_applies_when_enabled_and_sign_matches() {
        let side = vec![obs(1.0, 10.0), obs(1.02, 10.0)];
        let fit = fit_weighted(&side).unwrap();

        let (kept, _) = prune_outliers(side.clone(), &fit, Some(2.0), &OutlierParams::default());
        assert_eq!(kept.len(), 2, "gate is off by default");

        let gated = OutlierParams {
            prior_gate: true,
            ..Default::default()
        };
        let (kept, diag) = prune_outliers(side.clone(), &fit, Some(2.0), &gated);
        assert!(kept.is_empty());
        assert!(diag
            .removed
            .iter()
            .all(|r| r.reason == PruneReason::HistoryPrior));

        let (kept, _) = prune_outliers(side, &fit, Some(-2.0), &gated);
        assert_eq!(kept.len(), 2, "opposite-sign prior is ignored");
    }
}
