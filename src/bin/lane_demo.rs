use lane_detector::config::lane_demo::{self, LaneDemoConfig};
use lane_detector::diagnostics::FrameReport;
use lane_detector::io::{load_rgb_image, load_segment_stream, save_rgb_image, write_json_file};
use lane_detector::overlay::render_lanes;
use lane_detector::LaneDetector;
use serde::Serialize;
use std::env;
use std::path::Path;
use std::time::Instant;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = lane_demo::load_config(Path::new(&config_path))?;
    let stream = load_segment_stream(&config.input)?;

    let start = Instant::now();
    let mut detector = LaneDetector::new(config.params.clone());
    let reports: Vec<FrameReport> = stream
        .frames
        .iter()
        .map(|segments| detector.process_with_diagnostics(segments, stream.frame_height))
        .collect();
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    let summary = StreamSummary::from_reports(&reports, elapsed_ms);

    if config.output.format.includes_text() {
        for report in &reports {
            report.print_text_summary();
        }
        summary.print();
    }

    if config.output.format.includes_json() {
        let out = DemoReport {
            summary: &summary,
            frames: &reports,
        };
        match &config.output.result_json {
            Some(path) => {
                write_json_file(path, &out)?;
                println!("JSON report written to {}", path.display());
            }
            None => {
                let json = serde_json::to_string_pretty(&out)
                    .map_err(|e| format!("Failed to serialize JSON: {e}"))?;
                println!("{json}");
            }
        }
    }

    render_overlay(&config, reports.last())?;
    Ok(())
}

fn render_overlay(config: &LaneDemoConfig, last: Option<&FrameReport>) -> Result<(), String> {
    let (Some(frame_path), Some(out_path)) = (&config.frame, &config.output.overlay_image) else {
        return Ok(());
    };
    let Some(report) = last else {
        return Err("Segment stream has no frames to render".to_string());
    };
    let frame = load_rgb_image(frame_path)?;
    if frame.height() != report.trace.input.frame_height {
        log::warn!(
            "frame image height {} differs from stream height {}",
            frame.height(),
            report.trace.input.frame_height
        );
    }
    let annotated = render_lanes(&frame, &report.lanes, &config.overlay);
    save_rgb_image(&annotated, out_path)?;
    println!("Overlay written to {}", out_path.display());
    Ok(())
}

fn usage() -> String {
    "Usage: lane_demo <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StreamSummary {
    frames: usize,
    left_detected: usize,
    right_detected: usize,
    both_detected: usize,
    outliers_removed: usize,
    elapsed_ms: f64,
}

impl StreamSummary {
    fn from_reports(reports: &[FrameReport], elapsed_ms: f64) -> Self {
        let mut s = Self {
            frames: reports.len(),
            left_detected: 0,
            right_detected: 0,
            both_detected: 0,
            outliers_removed: 0,
            elapsed_ms,
        };
        for r in reports {
            s.left_detected += r.lanes.left.is_some() as usize;
            s.right_detected += r.lanes.right.is_some() as usize;
            s.both_detected += (r.lanes.lane_count() == 2) as usize;
            s.outliers_removed += r
                .trace
                .sides
                .iter()
                .map(|side| side.outliers_removed())
                .sum::<usize>();
        }
        s
    }

    fn print(&self) {
        let secs = self.elapsed_ms / 1000.0;
        println!(
            "\nProcessed {} frames in {}:{:05.2}: left={} right={} both={} outliers_removed={}",
            self.frames,
            (secs / 60.0).floor() as u64,
            secs % 60.0,
            self.left_detected,
            self.right_detected,
            self.both_detected,
            self.outliers_removed
        );
    }
}

#[derive(Serialize)]
struct DemoReport<'a> {
    summary: &'a StreamSummary,
    frames: &'a [FrameReport],
}
