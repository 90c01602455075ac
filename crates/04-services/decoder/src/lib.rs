//! Frame decoder service: turns a byte window of a file into an RGBA frame.
//!
//! [`FrameDecoder::update`] is called once per configuration change from the
//! interactive loop. It never fails: when a window cannot be decoded the last
//! good frame stays in place and the reason is kept in [`DecodeOutcome`].

mod config;
mod error;
mod frame;
mod window;

pub use crate::config::DecodingConfig;
pub use crate::error::{DecodeError, DecodeResult};
pub use crate::frame::DecodedFrame;
pub use crate::window::{decode_window, MAX_FRAME_PIXELS, MAX_WINDOW_BYTES};
pub use pixel_codec::{ByteOrder, Layout, PixelFormat, Rgba, UnsupportedFormat, SENTINEL_BYTE};

use crate::window::Plan;
use log::{debug, trace, warn};
use std::fs::File;

/// Result of the most recent [`FrameDecoder::update`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DecodeOutcome {
    /// No update has run yet.
    #[default]
    Idle,
    /// A new frame replaced the previous one.
    Decoded,
    /// Zero columns or rows; the frame is now empty.
    Empty,
    /// No pixel format selected; the previous frame was kept.
    Disabled,
    /// Decoding failed; the previous frame was kept.
    Retained(String),
}

/// Owns the currently displayed frame and refreshes it from disk.
#[derive(Debug, Default)]
pub struct FrameDecoder {
    frame: DecodedFrame,
    outcome: DecodeOutcome,
    decodes: u64,
}

impl FrameDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current frame: the last successful decode, or the empty frame.
    pub fn frame(&self) -> &DecodedFrame {
        &self.frame
    }

    pub fn last_outcome(&self) -> &DecodeOutcome {
        &self.outcome
    }

    /// Number of updates that replaced the frame.
    pub fn decode_count(&self) -> u64 {
        self.decodes
    }

    /// Re-reads the window described by `config` and replaces the frame.
    ///
    /// Disabled decoding, unreadable files and invalid settings leave the
    /// previous frame untouched.
    pub fn update(&mut self, config: &DecodingConfig) -> &DecodedFrame {
        self.outcome = match try_decode(config) {
            Ok(frame) => {
                let outcome = if frame.is_empty() {
                    DecodeOutcome::Empty
                } else {
                    DecodeOutcome::Decoded
                };
                debug!(
                    "decoded {}x{} frame at offset {:#x}",
                    frame.width(),
                    frame.height(),
                    config.byte_offset
                );
                self.frame = frame;
                self.decodes = self.decodes.wrapping_add(1);
                outcome
            }
            Err(err) if err.is_disabled() => {
                trace!("decode skipped: {err}");
                DecodeOutcome::Disabled
            }
            Err(err) => {
                let reason = err.report();
                warn!("keeping previous frame: {reason}");
                DecodeOutcome::Retained(reason)
            }
        };
        &self.frame
    }
}

fn try_decode(config: &DecodingConfig) -> DecodeResult<DecodedFrame> {
    let (format, layout) = match window::plan(config)? {
        Plan::Empty => return Ok(DecodedFrame::empty()),
        Plan::Read(format, layout) => (format, layout),
    };
    let path = config.file_path.as_deref().ok_or(DecodeError::NoSource)?;
    let mut file = File::open(path).map_err(|source| DecodeError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    window::read_planned(config, format, layout, &mut file)
}
