//! Intent and work types shared between front ends and the app loop.

use services_decoder::ByteOrder;
use std::path::PathBuf;

/// Which way a navigation shortcut moves the byte offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Back,
    Forward,
}

impl Direction {
    /// Moves `offset` by `by` bytes, clamping at zero and at `u64::MAX`.
    pub fn apply(self, offset: u64, by: u64) -> u64 {
        match self {
            Direction::Back => offset.saturating_sub(by),
            Direction::Forward => offset.saturating_add(by),
        }
    }
}

/// Intent emitted by front ends when the user edits a setting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    /// Select the source file (`None` clears it).
    SetPath(Option<PathBuf>),
    /// Change the byte order applied to each pixel field.
    SetByteOrder(ByteOrder),
    /// Jump to an absolute byte offset.
    SetOffset(u64),
    /// Change the step used by [`Intent::StepOffset`].
    SetOffsetStep(u64),
    /// Move the offset by the configured offset step.
    StepOffset(Direction),
    SetColumns(usize),
    SetRows(usize),
    /// Select the pixel format by byte width; `0` disables decoding.
    SetBytesPerPixel(usize),
    SetRowPadding(usize),
    SetPixelPadding(usize),
    /// Move the offset by one row stride.
    StepRow(Direction),
    /// Move the offset by one frame size.
    StepFrame(Direction),
    /// Change the per-axis display scale.
    SetScale { x: u32, y: u32 },
    /// Re-read the current window without changing any setting.
    Reload,
}

/// Work produced by the reducer and executed by the app loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkCmd {
    /// Re-decode the frame from the current config.
    Decode,
    /// Redraw the current frame without decoding.
    Present,
}
