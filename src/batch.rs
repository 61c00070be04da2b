//! Runs independent segment streams, one detector per stream.
//!
//! Frames inside a stream are strictly sequential (the smoothing window is
//! order-sensitive), but streams share nothing, so with the `parallel`
//! feature they are distributed across the rayon thread pool.
use crate::detector::{LaneDetector, LaneParams};
use crate::diagnostics::FrameReport;
use crate::types::{LaneResult, SegmentStream};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Processes every frame of `stream` with a fresh detector.
pub fn process_stream(stream: &SegmentStream, params: &LaneParams) -> Vec<LaneResult> {
    let mut detector = LaneDetector::new(params.clone());
    stream
        .frames
        .iter()
        .map(|segments| detector.process(segments, stream.frame_height))
        .collect()
}

/// Like [`process_stream`] but keeps the full per-frame trace.
pub fn process_stream_with_diagnostics(
    stream: &SegmentStream,
    params: &LaneParams,
) -> Vec<FrameReport> {
    let mut detector = LaneDetector::new(params.clone());
    stream
        .frames
        .iter()
        .map(|segments| detector.process_with_diagnostics(segments, stream.frame_height))
        .collect()
}

/// Processes several streams; output order matches input order.
pub fn process_streams(streams: &[SegmentStream], params: &LaneParams) -> Vec<Vec<LaneResult>> {
    #[cfg(feature = "parallel")]
    {
        streams
            .par_iter()
            .map(|stream| process_stream(stream, params))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        streams
            .iter()
            .map(|stream| process_stream(stream, params))
            .collect()
    }
}
