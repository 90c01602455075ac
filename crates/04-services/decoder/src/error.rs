use std::io;
use std::path::PathBuf;

use pixel_codec::UnsupportedFormat;
use thiserror::Error;

pub type DecodeResult<T> = Result<T, DecodeError>;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("decoding disabled: no pixel format selected")]
    Disabled,

    #[error(transparent)]
    Format(#[from] UnsupportedFormat),

    #[error("no source file selected")]
    NoSource,

    #[error("failed to open {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("read error")]
    Io(#[from] io::Error),

    #[error("window of {requested} bytes exceeds the {limit} byte limit")]
    WindowTooLarge { requested: usize, limit: usize },
}

impl DecodeError {
    /// Whether this error means "nothing to do" rather than a failure.
    pub fn is_disabled(&self) -> bool {
        matches!(self, DecodeError::Disabled)
    }

    /// The message followed by each underlying cause, separated by `: `.
    pub fn report(&self) -> String {
        let mut out = self.to_string();
        let mut cause = std::error::Error::source(self);
        while let Some(err) = cause {
            out.push_str(": ");
            out.push_str(&err.to_string());
            cause = std::error::Error::source(err);
        }
        out
    }
}
