//! Cast Player - Playback Management
//!
//! Playback-state management for Cast Player.
//!
//! This crate provides:
//! - Episode queue with index-based navigation
//! - Play/pause, loop, and shuffle flags
//! - Progress tracking and seeking within the current episode
//! - Event buffering for UI synchronization
//!
//! # Architecture
//!
//! `cast-playback` is completely rendering-agnostic: it never touches audio
//! samples or the network. The rendering layer owns the audio element,
//! dispatches user intents into [`PlayerManager`], and mirrors element
//! callbacks (timeupdate, ended) back into it. State is read through the
//! manager's accessors; changes are observed by draining the event buffer.
//!
//! All operations are synchronous and applied in dispatch order. The
//! manager is a single logical owner; there is no cross-thread sharing.
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use cast_playback::{PlayerConfig, PlayerManager};
//! use cast_core::Episode;
//! use std::time::Duration;
//!
//! let mut player = PlayerManager::new(PlayerConfig::default());
//!
//! let episodes = vec![
//!     Episode::new("ep-1", "Pilot").with_duration(Duration::from_secs(1800)),
//!     Episode::new("ep-2", "Follow-up").with_duration(Duration::from_secs(2400)),
//! ];
//!
//! player.play_list(episodes, 0)?;
//! assert!(player.is_playing());
//!
//! player.play_next();
//! assert_eq!(player.current_episode().unwrap().id, "ep-2");
//!
//! player.toggle_play();
//! assert!(!player.is_playing());
//! # Ok::<(), cast_playback::PlaybackError>(())
//! ```
//!
//! # Example: Observing changes
//!
//! ```rust
//! use cast_playback::{PlaybackEvent, PlayerManager};
//! use cast_core::Episode;
//!
//! let mut player = PlayerManager::default();
//! player.play(Episode::new("ep-1", "Pilot"));
//!
//! for event in player.drain_events() {
//!     if let PlaybackEvent::EpisodeChanged { episode_id, .. } = event {
//!         println!("now playing {episode_id}");
//!     }
//! }
//! ```

mod error;
mod events;
mod manager;
mod queue;
mod shuffle;
mod types;

// Public exports
pub use error::{PlaybackError, Result};
pub use events::PlaybackEvent;
pub use manager::PlayerManager;
pub use queue::EpisodeQueue;
pub use types::PlayerConfig;
