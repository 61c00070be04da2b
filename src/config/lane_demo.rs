use crate::detector::LaneParams;
use crate::overlay::OverlayParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct LaneDemoConfig {
    /// JSON segment stream (`frameHeight`, `frames`).
    #[serde(rename = "input")]
    pub input: PathBuf,
    /// Optional still frame the last frame's lanes are rendered onto.
    #[serde(default)]
    pub frame: Option<PathBuf>,
    #[serde(default)]
    pub params: LaneParams,
    #[serde(default)]
    pub overlay: OverlayParams,
    #[serde(default)]
    pub output: LaneDemoOutputConfig,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Both,
}

impl OutputFormat {
    pub fn includes_text(self) -> bool {
        matches!(self, OutputFormat::Text | OutputFormat::Both)
    }

    pub fn includes_json(self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Both)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LaneDemoOutputConfig {
    pub format: OutputFormat,
    pub result_json: Option<PathBuf>,
    pub overlay_image: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<LaneDemoConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(data: &str) -> Result<LaneDemoConfig, String> {
    serde_json::from_str(data).map_err(|e| e.to_string())
}
