//! Error types for canta.

use thiserror::Error;

/// Result type alias using canta's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for canta.
///
/// Only the search call can fail outward; audio resolution degrades to
/// `None` and never produces one of these.
#[derive(Error, Debug)]
pub enum Error {
    #[error("upstream request failed with status {status}: {message}")]
    UpstreamStatus { status: u16, message: String },

    #[error("upstream transport error: {0}")]
    Transport(String),

    #[error("failed to build HTTP client: {0}")]
    ClientInit(String),
}

impl Error {
    /// Returns true if the error came from the upstream rather than from
    /// local setup.
    pub const fn is_upstream(&self) -> bool {
        matches!(self, Self::UpstreamStatus { .. } | Self::Transport(_))
    }
}
