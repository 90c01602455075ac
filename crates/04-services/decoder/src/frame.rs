//! Decoded pixel grid plus the packed bytes it came from.

use pixel_codec::Rgba;

/// Row-major RGBA grid produced by one decode.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecodedFrame {
    width: usize,
    height: usize,
    pixels: Vec<Rgba>,
    raw: Vec<u8>,
}

impl DecodedFrame {
    /// Frame with no pixels, shown before anything has been decoded.
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn from_parts(width: usize, height: usize, pixels: Vec<Rgba>, raw: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), width * height);
        Self {
            width,
            height,
            pixels,
            raw,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Returns the pixel at `(x, y)`, or `None` outside the grid.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }

    /// Iterates over the rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgba]> {
        // chunks(0) panics; an empty frame simply has no rows.
        self.pixels.chunks(self.width.max(1))
    }

    /// Packed pixel bytes of the window, row padding removed.
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// Pixels flattened to RGBA8888 bytes, ready for image upload.
    pub fn as_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|px| px.to_array()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_frame_has_no_rows() {
        let frame = DecodedFrame::empty();
        assert!(frame.is_empty());
        assert_eq!(frame.rows().count(), 0);
        assert_eq!(frame.pixel(0, 0), None);
    }

    #[test]
    fn pixel_lookup_is_row_major() {
        let pixels = vec![
            Rgba::opaque(1, 1, 1),
            Rgba::opaque(2, 2, 2),
            Rgba::opaque(3, 3, 3),
            Rgba::opaque(4, 4, 4),
            Rgba::opaque(5, 5, 5),
            Rgba::opaque(6, 6, 6),
        ];
        let frame = DecodedFrame::from_parts(3, 2, pixels, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(frame.pixel(2, 0), Some(Rgba::opaque(3, 3, 3)));
        assert_eq!(frame.pixel(0, 1), Some(Rgba::opaque(4, 4, 4)));
        assert_eq!(frame.pixel(3, 0), None);
        assert_eq!(frame.rows().count(), 2);
        assert_eq!(&frame.as_rgba_bytes()[4..8], &[2, 2, 2, 255]);
    }
}
