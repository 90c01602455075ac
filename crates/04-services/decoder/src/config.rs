//! User-editable decoding parameters and the sizes derived from them.

use pixel_codec::{ByteOrder, Layout, PixelFormat, UnsupportedFormat};
use serde::{Serialize, Serializer};
use std::path::PathBuf;

/// Complete description of how to interpret a file as a raw bitmap.
///
/// The default value has no file, no format and zero dimensions, which
/// decodes to nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DecodingConfig {
    /// Source file, opened read-only on every decode.
    pub file_path: Option<PathBuf>,
    /// Pixels per row.
    pub columns: usize,
    /// Rows per frame.
    pub rows: usize,
    /// Seek position of the first decoded byte.
    pub byte_offset: u64,
    /// Color bytes per pixel; `0` disables decoding.
    pub bytes_per_pixel: usize,
    /// Bytes skipped after each row of pixels.
    pub row_byte_padding: usize,
    /// Bytes skipped after each pixel's color bytes.
    pub pixel_byte_padding: usize,
    /// Order applied to a pixel's bytes before channel extraction.
    #[serde(serialize_with = "serialize_byte_order")]
    pub byte_order: ByteOrder,
}

impl DecodingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves the configured pixel format; `Ok(None)` while decoding is disabled.
    pub fn pixel_format(&self) -> Result<Option<PixelFormat>, UnsupportedFormat> {
        PixelFormat::from_bytes_per_pixel(self.bytes_per_pixel)
    }

    pub fn layout(&self) -> Layout {
        Layout {
            bytes_per_pixel: self.bytes_per_pixel,
            pixel_padding: self.pixel_byte_padding,
            columns: self.columns,
            row_padding: self.row_byte_padding,
            rows: self.rows,
        }
    }

    pub fn pixel_stride(&self) -> usize {
        self.layout().pixel_stride()
    }

    pub fn row_pixel_span(&self) -> usize {
        self.layout().row_pixel_span()
    }

    /// Bytes one row occupies in the file, padding included.
    pub fn row_stride(&self) -> usize {
        self.layout().row_stride()
    }

    /// Bytes one frame occupies in the file.
    pub fn frame_size(&self) -> usize {
        self.layout().frame_size()
    }
}

fn serialize_byte_order<S: Serializer>(order: &ByteOrder, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(match order {
        ByteOrder::LittleEndian => "little",
        ByteOrder::BigEndian => "big",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_disabled_and_empty() {
        let config = DecodingConfig::new();
        assert_eq!(config.pixel_format(), Ok(None));
        assert_eq!(config.frame_size(), 0);
        assert_eq!(config.byte_order, ByteOrder::LittleEndian);
        assert!(config.file_path.is_none());
    }

    #[test]
    fn derived_sizes_match_layout() {
        let config = DecodingConfig {
            columns: 8,
            rows: 8,
            bytes_per_pixel: 2,
            pixel_byte_padding: 2,
            row_byte_padding: 16,
            ..DecodingConfig::default()
        };
        assert_eq!(config.pixel_stride(), 4);
        assert_eq!(config.row_pixel_span(), 32);
        assert_eq!(config.row_stride(), 48);
        assert_eq!(config.frame_size(), 384);
    }

    #[test]
    fn serializes_byte_order_as_short_name() {
        let config = DecodingConfig {
            byte_order: ByteOrder::BigEndian,
            ..DecodingConfig::default()
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["byte_order"], "big");
        assert_eq!(json["file_path"], serde_json::Value::Null);
    }
}
