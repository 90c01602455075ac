//! Pixel formats decoded from real files and composed onto the canvas.

use crate::tests::{rom, viewer_for};
use pixel_codec::Rgba;
use pretty_assertions::assert_eq;
use world::{ByteOrder, Intent};

fn single_pixel(bytes: &[u8], bpp: usize, order: ByteOrder) -> Rgba {
    let file = rom(bytes);
    let viewer = viewer_for(
        &file,
        &[
            Intent::SetColumns(1),
            Intent::SetRows(1),
            Intent::SetByteOrder(order),
            Intent::SetBytesPerPixel(bpp),
        ],
    );
    viewer.frame().pixel(0, 0).expect("one decoded pixel")
}

#[test]
fn rgb555_depends_on_byte_order() {
    assert_eq!(
        single_pixel(&[0x00, 0xF8], 2, ByteOrder::LittleEndian),
        Rgba::opaque(248, 0, 0)
    );
    assert_eq!(
        single_pixel(&[0x00, 0xF8], 2, ByteOrder::BigEndian),
        Rgba::opaque(0, 24, 224)
    );
}

#[test]
fn rgb888_little_endian_reads_blue_first() {
    assert_eq!(
        single_pixel(&[0x01, 0x02, 0x03], 3, ByteOrder::LittleEndian),
        Rgba::opaque(0x03, 0x02, 0x01)
    );
    assert_eq!(
        single_pixel(&[0x01, 0x02, 0x03], 3, ByteOrder::BigEndian),
        Rgba::opaque(0x01, 0x02, 0x03)
    );
}

#[test]
fn rgba_keeps_alpha_until_flattened() {
    let file = rom(&[0x10, 0x20, 0x30, 0x00]);
    let viewer = viewer_for(
        &file,
        &[
            Intent::SetColumns(1),
            Intent::SetRows(1),
            Intent::SetByteOrder(ByteOrder::BigEndian),
            Intent::SetBytesPerPixel(4),
        ],
    );

    let canvas = viewer.canvas();
    assert_eq!(canvas.pixel(1, 1), Some(Rgba::new(0x10, 0x20, 0x30, 0x00)));
    assert_eq!(canvas.flatten().pixel(1, 1), Some(Rgba::MAGENTA));
}

#[test]
fn padded_rows_skip_bytes_between_pixels_and_rows() {
    // 2x2 gray with one pad byte per pixel and two per row.
    let bytes = [
        0x01, 0xEE, 0x02, 0xEE, 0xFF, 0xFF, //
        0x03, 0xEE, 0x04, 0xEE, 0xFF, 0xFF,
    ];
    let file = rom(&bytes);
    let viewer = viewer_for(
        &file,
        &[
            Intent::SetColumns(2),
            Intent::SetRows(2),
            Intent::SetPixelPadding(1),
            Intent::SetRowPadding(2),
            Intent::SetBytesPerPixel(1),
        ],
    );

    let gray: Vec<u8> = viewer.frame().pixels().iter().map(|px| px.r).collect();
    assert_eq!(gray, vec![1, 2, 3, 4]);
    assert_eq!(viewer.world().config.frame_size(), 12);
}
