//! Pure intent reducer for the viewer world.

use crate::error::{check_bytes_per_pixel, IntentError};
use crate::types::{Intent, WorkCmd};
use crate::world::{Scale, World, MAX_SCALE};
use smallvec::{smallvec, SmallVec};

/// Trait for handling intents and producing work commands.
pub trait IntentReducer {
    /// Applies an intent and returns the work it requires.
    ///
    /// A rejected intent leaves the state untouched.
    fn reduce_intent(&mut self, intent: Intent) -> Result<SmallVec<[WorkCmd; 2]>, IntentError>;
}

impl IntentReducer for World {
    fn reduce_intent(&mut self, intent: Intent) -> Result<SmallVec<[WorkCmd; 2]>, IntentError> {
        let config = &mut self.config;
        match intent {
            Intent::SetPath(path) => config.file_path = path,
            Intent::SetByteOrder(order) => config.byte_order = order,
            Intent::SetOffset(offset) => config.byte_offset = offset,
            Intent::SetOffsetStep(step) => {
                if step == 0 {
                    return Err(IntentError::ZeroOffsetStep);
                }
                self.settings.offset_step = step;
                return Ok(smallvec![WorkCmd::Present]);
            }
            Intent::StepOffset(dir) => {
                config.byte_offset = dir.apply(config.byte_offset, self.settings.offset_step);
            }
            Intent::SetColumns(columns) => config.columns = columns,
            Intent::SetRows(rows) => config.rows = rows,
            Intent::SetBytesPerPixel(bpp) => {
                check_bytes_per_pixel(bpp)?;
                config.bytes_per_pixel = bpp;
            }
            Intent::SetRowPadding(padding) => config.row_byte_padding = padding,
            Intent::SetPixelPadding(padding) => config.pixel_byte_padding = padding,
            Intent::StepRow(dir) => {
                let by = config.row_stride() as u64;
                config.byte_offset = dir.apply(config.byte_offset, by);
            }
            Intent::StepFrame(dir) => {
                let by = config.frame_size() as u64;
                config.byte_offset = dir.apply(config.byte_offset, by);
            }
            Intent::SetScale { x, y } => {
                if !(1..=MAX_SCALE).contains(&x) || !(1..=MAX_SCALE).contains(&y) {
                    return Err(IntentError::InvalidScale { x, y });
                }
                self.settings.scale = Scale { x, y };
                return Ok(smallvec![WorkCmd::Present]);
            }
            Intent::Reload => {}
        }
        Ok(smallvec![WorkCmd::Decode])
    }
}
