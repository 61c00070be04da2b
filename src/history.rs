//! Sliding-window history of per-frame line fits.
//!
//! One `(slope, intercept)` entry is appended per processed frame and the
//! oldest entry is evicted once the window exceeds its capacity. Once the
//! window is full its mean is exposed as the smoothing signal; before that the
//! signal is neutral (all zeros).
//!
//! The signal is informational. It only influences pruning when the outlier
//! prior gate is switched on in [`OutlierParams`](crate::detector::OutlierParams).
use crate::types::LineParams;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Smoothing stage configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryParams {
    /// Disables the stage entirely: nothing is recorded, the signal stays zero.
    pub enabled: bool,
    /// Number of frames kept in the window.
    pub capacity: usize,
}

impl Default for HistoryParams {
    fn default() -> Self {
        Self {
            enabled: true,
            capacity: 3,
        }
    }
}

/// Bounded FIFO of recent frame fits.
#[derive(Clone, Debug)]
pub struct FrameHistory {
    entries: VecDeque<LineParams>,
    capacity: usize,
}

impl FrameHistory {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn push(&mut self, entry: LineParams) {
        self.entries.push_back(entry);
        if self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn latest(&self) -> Option<LineParams> {
        self.entries.back().copied()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &LineParams> {
        self.entries.iter()
    }

    /// Mean of all entries, `None` when empty.
    pub fn mean(&self) -> Option<LineParams> {
        if self.entries.is_empty() {
            return None;
        }
        let n = self.entries.len() as f64;
        let (m, b) = self
            .entries
            .iter()
            .fold((0.0f64, 0.0f64), |(m, b), e| (m + e.slope, b + e.intercept));
        Some(LineParams {
            slope: m / n,
            intercept: b / n,
        })
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Owns the frame history of one stream and turns it into a smoothing signal.
#[derive(Clone, Debug)]
pub struct TemporalSmoother {
    history: FrameHistory,
    enabled: bool,
}

impl TemporalSmoother {
    pub fn new(params: HistoryParams) -> Self {
        Self {
            history: FrameHistory::new(params.capacity),
            enabled: params.enabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Mean of the window when full, zero otherwise.
    pub fn signal(&self) -> LineParams {
        if self.enabled && self.history.is_full() {
            self.history.mean().unwrap_or_default()
        } else {
            LineParams::default()
        }
    }

    /// Prior slope for the outlier gate, available only with a full window.
    pub fn prior_slope(&self) -> Option<f64> {
        (self.enabled && self.history.is_full()).then(|| self.signal().slope)
    }

    /// Records this frame's fit and returns the updated signal. A frame that
    /// produced no fit repeats the latest entry so the window keeps sliding.
    pub fn update(&mut self, frame_fit: Option<LineParams>) -> LineParams {
        if !self.enabled {
            return LineParams::default();
        }
        let entry = frame_fit
            .or_else(|| self.history.latest())
            .unwrap_or_default();
        self.history.push(entry);
        self.signal()
    }

    pub fn history(&self) -> &FrameHistory {
        &self.history
    }

    /// Clears the window, e.g. when a new clip starts.
    pub fn reset(&mut self) {
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lp(slope: f64, intercept: f64) -> LineParams {
        LineParams { slope, intercept }
    }

    #[test]
    fn history_length_is_bounded_by_capacity() {
        let mut h = FrameHistory::new(3);
        for i in 0..10 {
            h.push(lp(i as f64, 0.0));
            assert_eq!(h.len(), (i + 1).min(3));
        }
    }

    #[test]
    fn fourth_append_evicts_first_entry() {
        let mut h = FrameHistory::new(3);
        for i in 1..=4 {
            h.push(lp(i as f64, 10.0 * i as f64));
        }
        let slopes: Vec<f64> = h.iter().map(|e| e.slope).collect();
        assert_eq!(slopes, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn signal_is_neutral_until_window_is_full() {
        let mut s = TemporalSmoother::new(HistoryParams::default());
        assert_eq!(s.update(Some(lp(1.0, -100.0))), LineParams::default());
        assert_eq!(s.update(Some(lp(2.0, -200.0))), LineParams::default());
        assert!(s.prior_slope().is_none());
        let signal = s.update(Some(lp(3.0, -300.0)));
        assert!((signal.slope - 2.0).abs() < 1e-6);
        assert!((signal.intercept + 200.0).abs() < 1e-4);
        assert_eq!(s.prior_slope(), Some(signal.slope));
    }

    #[test]
    fn missing_fit_repeats_latest_entry() {
        let mut s = TemporalSmoother::new(HistoryParams::default());
        s.update(None);
        assert_eq!(s.history().latest(), Some(LineParams::default()));
        s.update(Some(lp(1.5, 20.0)));
        s.update(None);
        assert_eq!(s.history().len(), 3);
        assert_eq!(s.history().latest(), Some(lp(1.5, 20.0)));
    }

    #[test]
    fn disabled_stage_records_nothing() {
        let mut s = TemporalSmoother::new(HistoryParams {
            enabled: false,
            capacity: 3,
        });
        for _ in 0..5 {
            assert_eq!(s.update(Some(lp(1.0, 1.0))), LineParams::default());
        }
        assert!(s.history().is_empty());
    }

    #[test]
    fn reset_clears_window() {
        let mut s = TemporalSmoother::new(HistoryParams::default());
        for _ in 0..3 {
            s.update(Some(lp(1.0, 1.0)));
        }
        s.reset();
        assert!(s.history().is_empty());
        assert_eq!(s.signal(), LineParams::default());
    }
}
