use crate::segments::Segment;
use serde::{Deserialize, Serialize};

/// Lane boundary a segment is attributed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Processing order used by the detector. Right comes last, which is the
    /// side whose fit ends up in the frame history.
    pub const ALL: [Side; 2] = [Side::Left, Side::Right];

    pub fn label(self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
        }
    }
}

/// Renderable lane boundary clipped to the ROI band. `top` lies on the ROI
/// top scanline, `bottom` on the last image row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneLine {
    pub top: [i32; 2],
    pub bottom: [i32; 2],
}

impl LaneLine {
    /// Same endpoints in the `[x1, y1, x2, y2]` layout used for segments.
    pub fn as_segment(&self) -> Segment {
        Segment::new(self.top, self.bottom)
    }
}

/// Slope/intercept pair (`y = m·x + b`) recorded by the temporal smoother.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LineParams {
    pub slope: f64,
    pub intercept: f64,
}

/// Per-frame output of [`LaneDetector`](crate::LaneDetector).
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaneResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<LaneLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<LaneLine>,
    /// Mean of the frame history once it is full, zero otherwise.
    pub smoothing: LineParams,
    /// Accepted input segments, only filled when `keep_segments` is set.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub segments: Vec<Segment>,
    pub latency_ms: f64,
}

impl LaneResult {
    pub fn lane_count(&self) -> usize {
        self.left.is_some() as usize + self.right.is_some() as usize
    }

    /// All renderable lines: lane lines first, then any kept segments.
    pub fn render_lines(&self) -> Vec<Segment> {
        self.left
            .iter()
            .chain(self.right.iter())
            .map(LaneLine::as_segment)
            .chain(self.segments.iter().copied())
            .collect()
    }
}

/// Segments of consecutive frames from one clip, as stored on disk.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentStream {
    pub frame_height: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_width: Option<u32>,
    pub frames: Vec<Vec<Segment>>,
}
