use serde::{Deserialize, Serialize};

/// Raw line segment in integer pixel coordinates, as emitted by a
/// probabilistic Hough transform. Serialized as `[x1, y1, x2, y2]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[i32; 4]", into = "[i32; 4]")]
pub struct Segment {
    pub p0: [i32; 2],
    pub p1: [i32; 2],
}

impl From<[i32; 4]> for Segment {
    fn from(v: [i32; 4]) -> Self {
        Self::new([v[0], v[1]], [v[2], v[3]])
    }
}

impl From<Segment> for [i32; 4] {
    fn from(s: Segment) -> Self {
        [s.p0[0], s.p0[1], s.p1[0], s.p1[1]]
    }
}

impl Segment {
    pub fn new(p0: [i32; 2], p1: [i32; 2]) -> Self {
        Self { p0, p1 }
    }

    pub fn dx(&self) -> i32 {
        self.p1[0] - self.p0[0]
    }

    pub fn dy(&self) -> i32 {
        self.p1[1] - self.p0[1]
    }

    /// True when both endpoints share the same column (undefined slope).
    pub fn is_vertical(&self) -> bool {
        self.dx() == 0
    }

    /// Slope of `y = m·x + b`, `None` for vertical segments.
    pub fn slope(&self) -> Option<f64> {
        if self.is_vertical() {
            None
        } else {
            Some(self.dy() as f64 / self.dx() as f64)
        }
    }

    /// Intercept `b = y1 - m·x1` for a given slope through `p0`.
    pub fn intercept(&self, slope: f64) -> f64 {
        self.p0[1] as f64 - slope * self.p0[0] as f64
    }

    pub fn length(&self) -> f64 {
        let dx = self.dx() as f64;
        let dy = self.dy() as f64;
        (dx * dx + dy * dy).sqrt()
    }
}
