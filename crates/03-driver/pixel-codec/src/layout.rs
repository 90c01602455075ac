//! Row and pixel stride arithmetic for a raw frame window.

/// Geometry of a raw frame: how many bytes each pixel, row and frame spans.
///
/// # Layout
/// - Each pixel: `bytes_per_pixel` color bytes, then `pixel_padding` skipped bytes
/// - Each row: `columns` pixels, then `row_padding` skipped bytes
/// - Each frame: `rows` rows
///
/// All sizes saturate rather than overflow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Layout {
    pub bytes_per_pixel: usize,
    pub pixel_padding: usize,
    pub columns: usize,
    pub row_padding: usize,
    pub rows: usize,
}

impl Layout {
    /// Bytes from the start of one pixel to the start of the next.
    #[inline]
    pub fn pixel_stride(&self) -> usize {
        self.bytes_per_pixel.saturating_add(self.pixel_padding)
    }

    /// Bytes of pixel data in one row, excluding row padding.
    #[inline]
    pub fn row_pixel_span(&self) -> usize {
        self.pixel_stride().saturating_mul(self.columns)
    }

    /// Bytes consumed by one row in the source file.
    #[inline]
    pub fn row_stride(&self) -> usize {
        self.row_pixel_span().saturating_add(self.row_padding)
    }

    /// Bytes consumed by one full frame in the source file.
    #[inline]
    pub fn frame_size(&self) -> usize {
        self.row_stride().saturating_mul(self.rows)
    }

    /// Size of the packed pixel buffer once row padding is dropped.
    #[inline]
    pub fn raw_len(&self) -> usize {
        self.row_pixel_span().saturating_mul(self.rows)
    }

    /// Offset of pixel `(x, y)` inside the packed pixel buffer.
    #[inline]
    pub fn pixel_offset(&self, x: usize, y: usize) -> usize {
        y * self.row_pixel_span() + x * self.pixel_stride()
    }

    /// Whether the layout describes zero pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.columns == 0 || self.rows == 0
    }
}
