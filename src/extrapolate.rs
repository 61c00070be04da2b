//! Converts a fitted side line into a renderable segment spanning the ROI band.
//!
//! The band runs from `y_top = floor(height · roi_top_fraction)` to the last
//! image row `y_bottom = height - 1`. Endpoint columns are obtained with
//! [`floor_div_abs`], which floors `(b - y) / m` and strips the sign. For the
//! lane geometries this crate targets (left: `m < 0`, `b > y`; right: `m > 0`,
//! `b < y`) the quotient is `-x`, so the absolute value recovers the column.
//! It is not a general line/scanline intersection: a line whose true crossing
//! lies at negative `x` is mirrored to the positive side.
use crate::fit::LineFit;
use crate::types::LaneLine;
use serde::{Deserialize, Serialize};

/// Vertical pixel band lane lines are drawn in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerticalBand {
    pub y_top: i32,
    pub y_bottom: i32,
}

impl VerticalBand {
    pub fn from_frame_height(height: u32, roi_top_fraction: f64) -> Self {
        let y_top = (height as f64 * roi_top_fraction).floor() as i32;
        Self {
            y_top,
            y_bottom: height as i32 - 1,
        }
    }
}

/// `|floor(num / den)|` as a pixel coordinate, `None` for a zero or
/// non-finite quotient.
pub fn floor_div_abs(num: f64, den: f64) -> Option<i32> {
    if den == 0.0 {
        return None;
    }
    let q = (num / den).floor();
    q.is_finite().then(|| q.abs() as i32)
}

/// Lane segment for `fit` between the band's top and bottom scanlines.
pub fn extrapolate(fit: &LineFit, band: &VerticalBand) -> Option<LaneLine> {
    let x_top = floor_div_abs(fit.intercept - band.y_top as f64, fit.slope)?;
    let x_bottom = floor_div_abs(fit.intercept - band.y_bottom as f64, fit.slope)?;
    Some(LaneLine {
        top: [x_top, band.y_top],
        bottom: [x_bottom, band.y_bottom],
    })
}
