mod common;

use common::synthetic_segments::{road_frame, to_segments, LEFT_PIECES, RIGHT_PIECES};
use lane_detector::diagnostics::{SegmentClass, SideStatus};
use lane_detector::{LaneDetector, LaneParams, Segment, Side};

const HEIGHT: u32 = 540;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn road_frame_yields_both_lanes_near_ground_truth() {
    init_logging();
    let mut detector = LaneDetector::new(LaneParams {
        verbose: true,
        collect_samples: true,
        ..Default::default()
    });
    let report = detector.process_with_diagnostics(&road_frame(), HEIGHT);

    let c = &report.trace.classification;
    assert_eq!(c.total, 16);
    assert_eq!((c.left, c.right), (6, 7));
    assert_eq!((c.rejected_vertical, c.rejected_slope), (1, 2));

    let left = report.lanes.left.expect("left lane");
    let right = report.lanes.right.expect("right lane");
    assert_eq!(left.top[1], 324);
    assert_eq!(left.bottom[1], 539);
    assert!((left.top[0] - 450).abs() <= 1, "left top {:?}", left.top);
    assert!((left.bottom[0] - 151).abs() <= 1, "left bottom {:?}", left.bottom);
    assert!((right.top[0] - 510).abs() <= 1, "right top {:?}", right.top);
    assert!((right.bottom[0] - 821).abs() <= 1, "right bottom {:?}", right.bottom);

    let right_stage = report.side(Side::Right).unwrap();
    assert_eq!(right_stage.status, SideStatus::Detected);
    assert_eq!(right_stage.outliers_removed(), 1);
    assert_eq!(report.side(Side::Left).unwrap().outliers_removed(), 0);

    let pruned: Vec<_> = report
        .trace
        .samples
        .iter()
        .filter(|s| s.class == SegmentClass::PrunedAverage)
        .collect();
    assert_eq!(pruned.len(), 1);
    assert_eq!(pruned[0].segment, Segment::from([700, 400, 703, 409]));
    assert_eq!(report.trace.samples.len(), 16);
}

#[test]
fn scenario_two_parallel_left_segments() {
    let mut detector = LaneDetector::new(LaneParams::default());
    let frame = to_segments(&[[100, 500, 150, 400], [105, 500, 140, 420]]);
    let report = detector.process_with_diagnostics(&frame, HEIGHT);

    let left = report.side(Side::Left).unwrap();
    assert_eq!(left.segments, 2);
    assert_eq!(left.outliers_removed(), 0);
    let fit = left.final_fit.unwrap();
    assert!((fit.slope + 2.125).abs() < 0.01, "slope={}", fit.slope);

    let lane = report.lanes.left.unwrap();
    // Left boundary: the line moves right as it climbs towards the horizon.
    assert!(lane.top[0] > lane.bottom[0]);
    assert!((185..=186).contains(&lane.top[0]), "top={:?}", lane.top);
    assert!((84..=85).contains(&lane.bottom[0]), "bottom={:?}", lane.bottom);
    assert!(report.lanes.right.is_none());
}

#[test]
fn scenario_near_horizontal_segment_is_discarded() {
    let mut detector = LaneDetector::new(LaneParams::default());
    let report = detector.process_with_diagnostics(&to_segments(&[[0, 100, 100, 105]]), HEIGHT);
    assert_eq!(report.trace.classification.rejected_slope, 1);
    assert!(report.lanes.left.is_none() && report.lanes.right.is_none());
    assert!(report
        .trace
        .sides
        .iter()
        .all(|s| s.status == SideStatus::NoSegments));
}

#[test]
fn scenario_steep_right_segment_is_pruned_and_fit_recomputed() {
    let mut detector = LaneDetector::new(LaneParams::default());
    // Slopes 1.0, 1.05 and 3.8; the steep one is short.
    let frame = to_segments(&[
        [500, 300, 700, 500],
        [480, 300, 680, 510],
        [600, 330, 605, 349],
    ]);
    let report = detector.process_with_diagnostics(&frame, HEIGHT);
    let right = report.side(Side::Right).unwrap();
    let initial = right.initial_fit.unwrap();
    let fin = right.final_fit.unwrap();
    assert!((initial.slope - 1.117).abs() < 1e-3, "initial={}", initial.slope);
    assert_eq!(right.outliers_removed(), 1);
    let removed = &right.outliers.as_ref().unwrap().removed[0];
    assert!((removed.slope - 3.8).abs() < 1e-5);
    assert!((fin.slope - 1.025).abs() < 1e-3, "final={}", fin.slope);
    assert_eq!(fin.support, 2);
    assert!(report.lanes.right.is_some());
}

#[test]
fn history_slides_over_a_stream() {
    let mut detector = LaneDetector::new(LaneParams::default());
    let left = to_segments(&LEFT_PIECES);
    let right = to_segments(&RIGHT_PIECES);
    let frames = [left.clone(), right.clone(), left, right.clone(), right];

    let mut signals = Vec::new();
    for (i, frame) in frames.iter().enumerate() {
        let report = detector.process_with_diagnostics(frame, HEIGHT);
        assert_eq!(report.trace.smoothing.history_len, (i + 1).min(3));
        signals.push(report.lanes.smoothing);
    }
    assert_eq!(signals[0].slope, 0.0);
    assert_eq!(signals[1].slope, 0.0);
    // Frames 1..=3: left, right, left.
    assert!(signals[2].slope < 0.0);
    // Frames 3..=5: left, right, right.
    assert!(signals[4].slope > 0.0);
    let entries: Vec<f64> = detector
        .smoother()
        .history()
        .iter()
        .map(|e| e.slope)
        .collect();
    assert_eq!(entries.len(), 3);
    assert!(entries[0] < 0.0 && entries[1] > 0.0 && entries[2] > 0.0);
}

#[test]
fn independent_detectors_do_not_share_history() {
    let mut a = LaneDetector::new(LaneParams::default());
    let mut b = LaneDetector::new(LaneParams::default());
    for _ in 0..3 {
        a.process(&to_segments(&LEFT_PIECES), HEIGHT);
    }
    b.process(&to_segments(&RIGHT_PIECES), HEIGHT);
    assert!(a.smoother().signal().slope < 0.0);
    assert_eq!(b.smoother().history().len(), 1);
    assert_eq!(b.smoother().signal().slope, 0.0);
}

#[test]
fn report_serializes_to_json() {
    let mut detector = LaneDetector::new(LaneParams::default());
    let report = detector.process_with_diagnostics(&road_frame(), HEIGHT);
    let value = serde_json::to_value(&report).unwrap();
    assert!(value["lanes"]["left"]["top"].is_array());
    assert_eq!(value["trace"]["classification"]["rejectedVertical"], 1);
    assert_eq!(value["trace"]["sides"][1]["status"], "detected");
}
