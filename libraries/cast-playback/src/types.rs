//! Core types for playback-state management

use serde::{Deserialize, Serialize};

/// Configuration for the player manager
///
/// The player always starts with an empty queue; only the navigation-mode
/// flags are configurable up front.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Initial loop flag (default: off)
    pub looping: bool,

    /// Initial shuffle flag (default: off)
    pub shuffling: bool,
}
