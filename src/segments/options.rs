use serde::{Deserialize, Serialize};

/// Admissible slope magnitudes for lane-edge evidence.
///
/// - `min_slope`: rejects near-horizontal clutter (horizon, shadows, car hoods).
/// - `max_slope`: rejects near-vertical noise (poles, vehicle edges).
///
/// Both bounds are exclusive and apply symmetrically to negative (left) and
/// positive (right) slopes in image coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlopeBand {
    pub min_slope: f64,
    pub max_slope: f64,
}

impl Default for SlopeBand {
    fn default() -> Self {
        Self {
            min_slope: 0.4,
            max_slope: 4.0,
        }
    }
}

impl SlopeBand {
    pub fn contains(&self, slope: f64) -> bool {
        let m = slope.abs();
        self.min_slope < m && m < self.max_slope
    }
}
