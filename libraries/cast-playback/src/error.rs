//! Error types for playback-state management

use std::time::Duration;
use thiserror::Error;

/// Playback errors
///
/// Out-of-bounds indices indicate a caller bug (indices are always derived
/// from the known queue length), so they are surfaced instead of clamped.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Requested index does not exist in the queue
    #[error("index out of bounds: {index} (queue length {len})")]
    IndexOutOfBounds {
        /// The requested index
        index: usize,
        /// Queue length at the time of the request
        len: usize,
    },

    /// No episode is currently loaded
    #[error("no episode loaded")]
    NoEpisodeLoaded,

    /// Seek position past the end of the current episode
    #[error("invalid seek position: {0:?}")]
    InvalidSeekPosition(Duration),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
