//! Pixel format decoding utilities for raw byte windows.
//!
//! This crate turns the bytes of one pixel field into an RGBA color, with no
//! dependency on file I/O or on the viewer state. It operates purely on byte
//! slices.

mod layout;

pub use crate::layout::Layout;

use std::fmt;

/// Largest pixel field any supported format reads.
pub const MAX_BYTES_PER_PIXEL: usize = 4;

/// Placeholder for bytes that could not be read from the source file.
pub const SENTINEL_BYTE: u8 = 0x33;

/// Byte order applied to a pixel field before its color channels are extracted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// The first byte in the file lands in the last channel position.
    #[default]
    LittleEndian,
    /// Bytes are taken in file order.
    BigEndian,
}

impl ByteOrder {
    /// Human readable name for selectors and status lines.
    pub fn label(self) -> &'static str {
        match self {
            ByteOrder::LittleEndian => "Little endian",
            ByteOrder::BigEndian => "Big endian",
        }
    }
}

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Background and transparency key for regions without decoded data.
    pub const MAGENTA: Rgba = Rgba::new(255, 0, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 0xFF)
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Composites this color over an opaque `background`, returning an opaque color.
    pub fn over(self, background: Rgba) -> Rgba {
        let a = self.a as u16;
        let mix = |fg: u8, bg: u8| -> u8 {
            let v = fg as u16 * a + bg as u16 * (255 - a);
            ((v + 127) / 255) as u8
        };
        Rgba::opaque(
            mix(self.r, background.r),
            mix(self.g, background.g),
            mix(self.b, background.b),
        )
    }
}

/// Supported raw pixel formats, keyed by their byte width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// One luminance byte.
    Gray8,
    /// Packed 16-bit color, five bits per channel.
    Rgb555,
    /// Three direct color bytes.
    Rgb888,
    /// Four direct color bytes, alpha last.
    Rgba8888,
}

/// Returned when a bytes-per-pixel value has no matching format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnsupportedFormat(pub usize);

impl fmt::Display for UnsupportedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unsupported bytes per pixel: {} (expected 0..={MAX_BYTES_PER_PIXEL})",
            self.0
        )
    }
}

impl std::error::Error for UnsupportedFormat {}

impl PixelFormat {
    /// Maps a bytes-per-pixel setting to a format.
    ///
    /// `0` means no format is selected and yields `Ok(None)`.
    pub fn from_bytes_per_pixel(bpp: usize) -> Result<Option<Self>, UnsupportedFormat> {
        match bpp {
            0 => Ok(None),
            1 => Ok(Some(PixelFormat::Gray8)),
            2 => Ok(Some(PixelFormat::Rgb555)),
            3 => Ok(Some(PixelFormat::Rgb888)),
            4 => Ok(Some(PixelFormat::Rgba8888)),
            other => Err(UnsupportedFormat(other)),
        }
    }

    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Gray8 => 1,
            PixelFormat::Rgb555 => 2,
            PixelFormat::Rgb888 => 3,
            PixelFormat::Rgba8888 => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PixelFormat::Gray8 => "gray8",
            PixelFormat::Rgb555 => "rgb555",
            PixelFormat::Rgb888 => "rgb888",
            PixelFormat::Rgba8888 => "rgba8888",
        }
    }
}

/// Reorders a pixel field into a fixed scratch array according to `order`.
///
/// Little-endian moves field byte `i` to position `n - 1 - i`; big-endian
/// copies in place. Positions past the field width stay zero, and bytes past
/// [`MAX_BYTES_PER_PIXEL`] are ignored.
#[inline]
pub fn normalize(field: &[u8], order: ByteOrder) -> [u8; MAX_BYTES_PER_PIXEL] {
    let mut scratch = [0u8; MAX_BYTES_PER_PIXEL];
    let n = field.len().min(MAX_BYTES_PER_PIXEL);
    for (i, &byte) in field[..n].iter().enumerate() {
        let dst = match order {
            ByteOrder::LittleEndian => n - 1 - i,
            ByteOrder::BigEndian => i,
        };
        scratch[dst] = byte;
    }
    scratch
}

/// Decodes one pixel field into RGBA.
///
/// `field` should be exactly `format.bytes_per_pixel()` bytes long; shorter
/// fields decode as if the missing bytes were zero.
#[inline]
pub fn decode_pixel(format: PixelFormat, field: &[u8], order: ByteOrder) -> Rgba {
    let n = field.len().min(format.bytes_per_pixel());
    let b = normalize(&field[..n], order);

    match format {
        PixelFormat::Gray8 => Rgba::opaque(b[0], b[0], b[0]),
        PixelFormat::Rgb555 => {
            // rrrrrggg gggbbbbb-: five bits per channel, low bit unused.
            let r = (b[0] & 0xF8) >> 3;
            let g = ((b[0] & 0x07) << 2) | ((b[1] & 0xC0) >> 6);
            let bl = (b[1] & 0x3E) >> 1;
            Rgba::opaque(r << 3, g << 3, bl << 3)
        }
        PixelFormat::Rgb888 => Rgba::opaque(b[0], b[1], b[2]),
        PixelFormat::Rgba8888 => Rgba::new(b[0], b[1], b[2], b[3]),
    }
}
