//! Canonical viewer state and the intents that change it.
//!
//! The `world` crate intentionally stays small and free of I/O. It owns the
//! single [`DecodingConfig`] plus viewer-only settings, and reduces intents
//! from the front end into state changes and work for the app loop.

/// Error returned when an intent is rejected.
pub mod error;
/// Pure intent reducer.
pub mod reduce_intent;
/// Core message types for the viewer world.
pub mod types;
/// Viewer state container.
pub mod world;

pub use crate::error::IntentError;
pub use crate::reduce_intent::IntentReducer;
pub use crate::types::{Direction, Intent, WorkCmd};
pub use crate::world::{Scale, ViewerSettings, World, MAX_SCALE};
pub use services_decoder::{ByteOrder, DecodingConfig};
