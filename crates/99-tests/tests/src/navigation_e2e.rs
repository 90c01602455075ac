//! Navigation across a file, checked against the decoded window.

use crate::tests::{rom, viewer_for};
use pixel_codec::SENTINEL_BYTE;
use pretty_assertions::assert_eq;
use services_decoder::DecodeOutcome;
use world::{Direction, Intent};

fn ramp(len: usize) -> Vec<u8> {
    (0..len).map(|i| i as u8).collect()
}

#[test]
fn frame_steps_tile_the_file() {
    let bytes = ramp(64);
    let file = rom(&bytes);
    let mut viewer = viewer_for(
        &file,
        &[
            Intent::SetColumns(4),
            Intent::SetRows(4),
            Intent::SetBytesPerPixel(1),
        ],
    );

    let mut seen = Vec::new();
    for _ in 0..4 {
        seen.extend_from_slice(viewer.frame().raw());
        viewer
            .apply(Intent::StepFrame(Direction::Forward))
            .expect("step frame");
    }

    assert_eq!(seen, bytes);
    assert!(viewer.frame().raw().iter().all(|&b| b == SENTINEL_BYTE));
}

#[test]
fn offset_step_then_back_restores_window() {
    let file = rom(&ramp(32));
    let mut viewer = viewer_for(
        &file,
        &[
            Intent::SetColumns(2),
            Intent::SetRows(2),
            Intent::SetBytesPerPixel(2),
            Intent::SetOffsetStep(3),
        ],
    );
    let start = viewer.frame().clone();

    viewer.apply(Intent::StepOffset(Direction::Forward)).unwrap();
    assert_eq!(viewer.world().config.byte_offset, 3);
    assert_eq!(&viewer.frame().raw()[..2], &[3, 4]);

    viewer.apply(Intent::StepOffset(Direction::Back)).unwrap();
    assert_eq!(viewer.frame(), &start);
}

#[test]
fn deleted_file_keeps_last_frame() {
    let file = rom(&ramp(8));
    let path = file.path().to_path_buf();
    let mut viewer = viewer_for(
        &file,
        &[
            Intent::SetColumns(2),
            Intent::SetRows(2),
            Intent::SetBytesPerPixel(1),
        ],
    );
    let before = viewer.frame().clone();

    drop(file);
    assert!(!path.exists());
    viewer.apply(Intent::Reload).unwrap();

    assert_eq!(viewer.frame(), &before);
    assert!(matches!(viewer.outcome(), DecodeOutcome::Retained(_)));
}
