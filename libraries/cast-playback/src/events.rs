//! Playback events
//!
//! Event-based communication for UI synchronization. The manager buffers
//! events as mutations happen; the rendering layer drains them through
//! [`crate::PlayerManager::drain_events`] on its own reactivity schedule.

use serde::{Deserialize, Serialize};

/// Events emitted by the playback system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// The play/pause flag changed
    StateChanged {
        /// Whether audio is now meant to be advancing
        is_playing: bool,
    },

    /// A different episode became the current one
    EpisodeChanged {
        /// ID of the new current episode
        episode_id: String,
        /// ID of the episode that was current before (if any)
        previous_episode_id: Option<String>,
    },

    /// Queue contents were replaced
    QueueChanged {
        /// New queue length
        length: usize,
    },

    /// Loop mode toggled
    LoopChanged {
        /// Whether looping is now on
        enabled: bool,
    },

    /// Shuffle mode toggled
    ShuffleChanged {
        /// Whether shuffling is now on
        enabled: bool,
    },

    /// The current episode restarted because looping is on
    EpisodeReplayed {
        /// ID of the replayed episode
        episode_id: String,
    },

    /// Queue emptied and no episode is loaded anymore
    PlayerCleared,

    /// Playback position jumped by user request
    Seeked {
        /// New position in milliseconds
        position_ms: u64,
    },
}
