//! Composes a decoded frame into a scaled, magenta-keyed display image.
//!
//! The canvas starts fully magenta so any cell that no decoded pixel covers
//! (the border, or the whole canvas for an empty frame) stays visibly
//! distinct from real data.

use log::warn;
use services_decoder::{DecodedFrame, Rgba};
use world::Scale;

/// Width of the magenta frame drawn around the image, in canvas pixels.
pub const BORDER: usize = 1;

/// Largest canvas, in pixels, that [`Canvas::compose`] will build.
pub const MAX_CANVAS_PIXELS: usize = 64 * 1024 * 1024;

/// Row-major RGBA image ready for display or export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Rgba>,
}

impl Canvas {
    /// Draws each frame pixel as a `scale.x` by `scale.y` block inside a
    /// magenta border.
    ///
    /// If the scaled canvas would exceed [`MAX_CANVAS_PIXELS`], the scale is
    /// halved until it fits.
    pub fn compose(frame: &DecodedFrame, scale: Scale) -> Self {
        let (sx, sy) = fit_scale(frame, scale);
        let width = frame.width() * sx + 2 * BORDER;
        let height = frame.height() * sy + 2 * BORDER;
        let mut pixels = vec![Rgba::MAGENTA; width * height];

        for (y, row) in frame.rows().enumerate() {
            for (x, &px) in row.iter().enumerate() {
                for dy in 0..sy {
                    let start = (BORDER + y * sy + dy) * width + BORDER + x * sx;
                    pixels[start..start + sx].fill(px);
                }
            }
        }

        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }

    /// Composites every pixel over the magenta key, for displays without alpha.
    pub fn flatten(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
            pixels: self
                .pixels
                .iter()
                .map(|px| px.over(Rgba::MAGENTA))
                .collect(),
        }
    }

    /// Canvas flattened to RGBA8888 bytes.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|px| px.to_array()).collect()
    }
}

fn fit_scale(frame: &DecodedFrame, scale: Scale) -> (usize, usize) {
    let area = |sx: usize, sy: usize| {
        frame
            .width()
            .saturating_mul(sx)
            .saturating_add(2 * BORDER)
            .saturating_mul(frame.height().saturating_mul(sy).saturating_add(2 * BORDER))
    };

    let (mut sx, mut sy) = (scale.x.max(1) as usize, scale.y.max(1) as usize);
    while (sx > 1 || sy > 1) && area(sx, sy) > MAX_CANVAS_PIXELS {
        sx = (sx / 2).max(1);
        sy = (sy / 2).max(1);
    }
    if (sx, sy) != (scale.x as usize, scale.y as usize) {
        warn!(
            "canvas scale reduced from {}x{} to {sx}x{sy}",
            scale.x, scale.y
        );
    }
    (sx, sy)
}
