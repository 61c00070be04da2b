use lane_detector::Segment;

/// Hough-like pieces along the left boundary (150, 539) → (450, 324).
pub const LEFT_PIECES: [[i32; 4]; 6] = [
    [153, 537, 197, 505],
    [203, 501, 247, 469],
    [253, 465, 297, 434],
    [303, 429, 347, 398],
    [353, 394, 397, 362],
    [403, 358, 447, 326],
];

/// Hough-like pieces along the right boundary (820, 539) → (510, 324).
pub const RIGHT_PIECES: [[i32; 4]; 6] = [
    [817, 537, 771, 505],
    [765, 501, 720, 469],
    [714, 465, 668, 434],
    [662, 429, 616, 398],
    [610, 394, 565, 362],
    [559, 358, 513, 326],
];

/// Horizon clutter, a pole and a short steep edge on the right side.
pub const CLUTTER: [[i32; 4]; 4] = [
    [0, 330, 300, 336],
    [620, 340, 900, 338],
    [880, 300, 880, 420],
    [700, 400, 703, 409],
];

pub fn to_segments(raw: &[[i32; 4]]) -> Vec<Segment> {
    raw.iter().copied().map(Segment::from).collect()
}

/// One 960×540 road frame: both boundaries plus clutter.
pub fn road_frame() -> Vec<Segment> {
    let mut frame = to_segments(&LEFT_PIECES);
    frame.extend(to_segments(&RIGHT_PIECES));
    frame.extend(to_segments(&CLUTTER));
    frame
}
