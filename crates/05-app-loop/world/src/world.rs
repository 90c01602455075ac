//! Viewer state container used by the reducer, the app loop and tests.

use services_decoder::DecodingConfig;

/// Largest accepted display scale per axis.
pub const MAX_SCALE: u32 = 64;

/// Integer display scale, applied independently per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scale {
    pub x: u32,
    pub y: u32,
}

impl Default for Scale {
    fn default() -> Self {
        Self { x: 1, y: 1 }
    }
}

/// Settings that shape navigation and display but not decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerSettings {
    /// Bytes moved by a manual offset step.
    pub offset_step: u64,
    /// Display scale of the decoded frame.
    pub scale: Scale,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            offset_step: 1,
            scale: Scale::default(),
        }
    }
}

/// Viewer world: the single source of truth for what is decoded and shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct World {
    /// Decoding parameters, edited only through intents.
    pub config: DecodingConfig,
    /// Navigation and display settings.
    pub settings: ViewerSettings,
}

impl World {
    /// Creates a world with an empty config and default settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self) -> &DecodingConfig {
        &self.config
    }

    pub fn settings(&self) -> &ViewerSettings {
        &self.settings
    }

    /// Bytes a single row step moves the offset by.
    pub fn row_step(&self) -> u64 {
        self.config.row_stride() as u64
    }

    /// Bytes a single frame step moves the offset by.
    pub fn frame_step(&self) -> u64 {
        self.config.frame_size() as u64
    }
}
