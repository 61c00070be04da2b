//! JSON configuration for the demo binary.
pub mod lane_demo;
