//! Reads a byte window from a seekable source and decodes it into a frame.

use std::io::{ErrorKind, Read, Seek, SeekFrom};

use log::trace;
use pixel_codec::{decode_pixel, Layout, PixelFormat, Rgba, SENTINEL_BYTE};

use crate::config::DecodingConfig;
use crate::error::{DecodeError, DecodeResult};
use crate::frame::DecodedFrame;

/// Upper bound on packed pixel bytes read for one frame.
pub const MAX_WINDOW_BYTES: usize = 64 * 1024 * 1024;

/// Upper bound on decoded pixels in one frame.
pub const MAX_FRAME_PIXELS: usize = 16 * 1024 * 1024;

/// What a config asks the decoder to do, resolved before any I/O.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Plan {
    /// Zero columns or rows: the result is the empty frame.
    Empty,
    /// Read and decode a window with this format and geometry.
    Read(PixelFormat, Layout),
}

/// Validates a config and decides whether a read is needed.
pub(crate) fn plan(config: &DecodingConfig) -> DecodeResult<Plan> {
    let format = config.pixel_format()?.ok_or(DecodeError::Disabled)?;
    let layout = config.layout();
    if layout.is_empty() {
        return Ok(Plan::Empty);
    }

    let raw_len = layout.raw_len();
    if raw_len > MAX_WINDOW_BYTES {
        return Err(DecodeError::WindowTooLarge {
            requested: raw_len,
            limit: MAX_WINDOW_BYTES,
        });
    }
    let pixels = layout.columns.saturating_mul(layout.rows);
    if pixels > MAX_FRAME_PIXELS {
        return Err(DecodeError::WindowTooLarge {
            requested: pixels.saturating_mul(4),
            limit: MAX_FRAME_PIXELS * 4,
        });
    }
    Ok(Plan::Read(format, layout))
}

/// Decodes the window described by `config` from `reader`.
///
/// Bytes past the end of the source are [`SENTINEL_BYTE`], so a short source
/// still yields a full `columns x rows` frame.
pub fn decode_window<R: Read + Seek>(
    config: &DecodingConfig,
    reader: &mut R,
) -> DecodeResult<DecodedFrame> {
    match plan(config)? {
        Plan::Empty => Ok(DecodedFrame::empty()),
        Plan::Read(format, layout) => read_planned(config, format, layout, reader),
    }
}

pub(crate) fn read_planned<R: Read + Seek>(
    config: &DecodingConfig,
    format: PixelFormat,
    layout: Layout,
    reader: &mut R,
) -> DecodeResult<DecodedFrame> {
    let raw = read_rows(reader, config.byte_offset, &layout)?;
    let pixels = assemble(&raw, format, &layout, config);
    Ok(DecodedFrame::from_parts(
        layout.columns,
        layout.rows,
        pixels,
        raw,
    ))
}

/// Copies the pixel bytes of each row into a packed buffer, dropping row padding.
///
/// Rows are located from the source length first, so a window starting at or
/// past the end never seeks and stays all sentinel.
fn read_rows<R: Read + Seek>(reader: &mut R, offset: u64, layout: &Layout) -> DecodeResult<Vec<u8>> {
    let span = layout.row_pixel_span();
    let stride = layout.row_stride() as u64;
    let len = reader.seek(SeekFrom::End(0))?;

    let mut raw = vec![SENTINEL_BYTE; layout.raw_len()];
    for (y, row) in raw.chunks_exact_mut(span).enumerate() {
        let start = (y as u64)
            .checked_mul(stride)
            .and_then(|skip| offset.checked_add(skip))
            .filter(|&start| start < len);
        let Some(start) = start else {
            trace!("row {y} starts past end of source, rest stays sentinel");
            break;
        };
        reader.seek(SeekFrom::Start(start))?;
        let got = read_up_to(reader, row)?;
        if got < span {
            trace!("short read at row {y}: {got}/{span} bytes, rest stays sentinel");
            break;
        }
    }
    Ok(raw)
}

/// Fills as much of `buf` as the reader can supply; returns the count read.
fn read_up_to<R: Read>(reader: &mut R, buf: &mut [u8]) -> DecodeResult<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err.into()),
        }
    }
    Ok(filled)
}

fn assemble(
    raw: &[u8],
    format: PixelFormat,
    layout: &Layout,
    config: &DecodingConfig,
) -> Vec<Rgba> {
    let bpp = format.bytes_per_pixel();
    let mut pixels = Vec::with_capacity(layout.columns * layout.rows);
    for y in 0..layout.rows {
        for x in 0..layout.columns {
            let at = layout.pixel_offset(x, y);
            pixels.push(decode_pixel(format, &raw[at..at + bpp], config.byte_order));
        }
    }
    pixels
}
