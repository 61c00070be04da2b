//! I/O helpers for segment streams, RGB frames and JSON reports.
//!
//! - `load_segment_stream`: read a JSON segment stream (`frameHeight`, `frames`).
//! - `load_rgb_image` / `save_rgb_image`: frame I/O for the overlay renderer.
//! - `write_json_file`: pretty-print a serializable value to disk.
use crate::types::SegmentStream;
use image::RgbImage;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load a segment stream from a JSON file.
pub fn load_segment_stream(path: &Path) -> Result<SegmentStream, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read segments {}: {e}", path.display()))?;
    parse_segment_stream(&data)
        .map_err(|e| format!("Failed to parse segments {}: {e}", path.display()))
}

pub fn parse_segment_stream(data: &str) -> Result<SegmentStream, String> {
    let stream: SegmentStream = serde_json::from_str(data).map_err(|e| e.to_string())?;
    if stream.frame_height == 0 {
        return Err("frameHeight must be positive".to_string());
    }
    Ok(stream)
}

/// Load an image from disk and convert to 8-bit RGB.
pub fn load_rgb_image(path: &Path) -> Result<RgbImage, String> {
    Ok(image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8())
}

/// Save an RGB frame, creating parent directories.
pub fn save_rgb_image(image: &RgbImage, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    image
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segments::Segment;

    #[test]
    fn parses_stream_with_optional_width() {
        let json = r#"{
            "frameHeight": 540,
            "frames": [[[100, 500, 150, 400], [600, 400, 650, 500]], []]
        }"#;
        let stream = parse_segment_stream(json).unwrap();
        assert_eq!(stream.frame_height, 540);
        assert_eq!(stream.frame_width, None);
        assert_eq!(stream.frames.len(), 2);
        assert_eq!(stream.frames[0][1], Segment::from([600, 400, 650, 500]));
        assert!(stream.frames[1].is_empty());
    }

    #[test]
    fn rejects_zero_height_and_malformed_segments() {
        assert!(parse_segment_stream(r#"{"frameHeight": 0, "frames": []}"#).is_err());
        assert!(parse_segment_stream(r#"{"frameHeight": 10, "frames": [[[1, 2, 3]]]}"#).is_err());
    }
}
