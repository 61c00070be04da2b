//! Compositing collaborator: draws lane lines onto a blank layer and blends
//! that layer over the source frame as `α·frame + β·lines + λ`.
//!
//! The estimator itself never touches pixels; this module exists so the demo
//! can produce annotated frames.
use crate::segments::Segment;
use crate::types::LaneResult;
use image::{Pixel, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut, draw_polygon_mut};
use imageproc::map::map_colors2;
use imageproc::point::Point;
use serde::{Deserialize, Serialize};

const PALETTE: [[u8; 3]; 6] = [
    [255, 0, 0],
    [0, 255, 0],
    [0, 0, 255],
    [255, 255, 0],
    [0, 255, 255],
    [255, 0, 255],
];

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayParams {
    pub color: [u8; 3],
    pub thickness: u32,
    /// Cycle through a fixed palette instead of using `color`.
    pub multicolor: bool,
    pub alpha: f32,
    pub beta: f32,
    pub lambda: f32,
}

impl Default for OverlayParams {
    fn default() -> Self {
        Self {
            color: [255, 0, 0],
            thickness: 5,
            multicolor: false,
            alpha: 0.8,
            beta: 1.0,
            lambda: 0.0,
        }
    }
}

/// Draws `lines` on a black layer of the given size.
pub fn draw_lines(width: u32, height: u32, lines: &[Segment], params: &OverlayParams) -> RgbImage {
    let mut layer = RgbImage::new(width, height);
    for (i, line) in lines.iter().enumerate() {
        let color = if params.multicolor {
            PALETTE[i % PALETTE.len()]
        } else {
            params.color
        };
        draw_line(&mut layer, line, Rgb(color), params.thickness.max(1));
    }
    layer
}

/// Draws one line as a filled quad of width `thickness` with round caps.
/// Everything outside the image is clipped by the drawing routines.
fn draw_line(img: &mut RgbImage, line: &Segment, color: Rgb<u8>, thickness: u32) {
    let (x0, y0) = (line.p0[0] as f32, line.p0[1] as f32);
    let (x1, y1) = (line.p1[0] as f32, line.p1[1] as f32);
    let len = line.length() as f32;
    if thickness <= 1 || len == 0.0 {
        draw_line_segment_mut(img, (x0, y0), (x1, y1), color);
    } else {
        let half = thickness as f32 / 2.0;
        let (nx, ny) = (-(y1 - y0) / len * half, (x1 - x0) / len * half);
        let corner = |x: f32, y: f32| Point::new(x.round() as i32, y.round() as i32);
        let quad = [
            corner(x0 + nx, y0 + ny),
            corner(x1 + nx, y1 + ny),
            corner(x1 - nx, y1 - ny),
            corner(x0 - nx, y0 - ny),
        ];
        draw_polygon_mut(img, &quad, color);
    }
    if thickness > 1 {
        let radius = (thickness / 2) as i32;
        draw_filled_circle_mut(img, (line.p0[0], line.p0[1]), radius, color);
        draw_filled_circle_mut(img, (line.p1[0], line.p1[1]), radius, color);
    }
}

/// Saturating `α·frame + β·layer + λ` per channel. Both images must share
/// dimensions; the frame is returned unchanged otherwise.
pub fn blend(frame: &RgbImage, layer: &RgbImage, params: &OverlayParams) -> RgbImage {
    if frame.dimensions() != layer.dimensions() {
        log::warn!(
            "overlay size mismatch: frame {:?} vs layer {:?}",
            frame.dimensions(),
            layer.dimensions()
        );
        return frame.clone();
    }
    let OverlayParams {
        alpha, beta, lambda, ..
    } = *params;
    map_colors2(frame, layer, |a: Rgb<u8>, b: Rgb<u8>| {
        a.map2(&b, |x, y| {
            (alpha * x as f32 + beta * y as f32 + lambda)
                .round()
                .clamp(0.0, 255.0) as u8
        })
    })
}

/// Annotated copy of `frame` with the result's lanes (and kept segments).
pub fn render_lanes(frame: &RgbImage, result: &LaneResult, params: &OverlayParams) -> RgbImage {
    let layer = draw_lines(frame.width(), frame.height(), &result.render_lines(), params);
    blend(frame, &layer, params)
}
