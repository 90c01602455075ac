//! Viewer loop: applies intents to the world and keeps the frame in sync.
//!
//! Every accepted intent goes through one reduce step; any resulting
//! [`WorkCmd::Decode`] runs a single synchronous decode before `apply`
//! returns, so the frame never lags behind the config.

pub mod canvas;

pub use crate::canvas::Canvas;

use log::debug;
use services_decoder::{DecodeOutcome, DecodedFrame, FrameDecoder};
use world::{Intent, IntentError, IntentReducer, WorkCmd, World};

/// What an accepted intent caused.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Applied {
    /// The decoder ran.
    pub decoded: bool,
    /// The front end should redraw.
    pub redraw: bool,
}

/// Owns the world and the decoder.
#[derive(Debug, Default)]
pub struct Viewer {
    world: World,
    decoder: FrameDecoder,
}

impl Viewer {
    pub fn new(world: World) -> Self {
        Self {
            world,
            decoder: FrameDecoder::new(),
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Frame currently on display.
    pub fn frame(&self) -> &DecodedFrame {
        self.decoder.frame()
    }

    pub fn outcome(&self) -> &DecodeOutcome {
        self.decoder.last_outcome()
    }

    /// Reduces `intent` and runs the work it produced.
    pub fn apply(&mut self, intent: Intent) -> Result<Applied, IntentError> {
        debug!("applying {intent:?}");
        let work = self.world.reduce_intent(intent)?;

        let mut applied = Applied::default();
        for cmd in work {
            match cmd {
                WorkCmd::Decode => {
                    self.decoder.update(&self.world.config);
                    applied.decoded = true;
                    applied.redraw = true;
                }
                WorkCmd::Present => applied.redraw = true,
            }
        }
        Ok(applied)
    }

    /// Composes the current frame at the configured scale.
    pub fn canvas(&self) -> Canvas {
        Canvas::compose(self.frame(), self.world.settings.scale)
    }
}
