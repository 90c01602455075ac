use services_decoder::{PixelFormat, UnsupportedFormat};
use thiserror::Error;

/// Reasons an intent is rejected; the world is left unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IntentError {
    #[error(transparent)]
    Format(#[from] UnsupportedFormat),

    #[error("offset step must be at least 1")]
    ZeroOffsetStep,

    #[error("scale must be between 1x1 and {max}x{max} (got {x}x{y})", max = crate::world::MAX_SCALE)]
    InvalidScale { x: u32, y: u32 },
}

/// Checks that a bytes-per-pixel value names a format or disables decoding.
pub(crate) fn check_bytes_per_pixel(bpp: usize) -> Result<(), IntentError> {
    PixelFormat::from_bytes_per_pixel(bpp)?;
    Ok(())
}
