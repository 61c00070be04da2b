use lane_detector::{LaneDetector, LaneParams, Segment};

fn main() {
    // Demo stub: feeds one synthetic frame of Hough segments to the detector
    let height = 540u32;
    let frame = vec![
        Segment::from([100, 500, 150, 400]),
        Segment::from([105, 500, 140, 420]),
        Segment::from([600, 400, 650, 500]),
        Segment::from([0, 330, 200, 335]),
    ];

    let mut det = LaneDetector::new(LaneParams::default());
    let res = det.process(&frame, height);
    println!(
        "left={:?} right={:?} latency_ms={:.3}",
        res.left, res.right, res.latency_ms
    );
}
