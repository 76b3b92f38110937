//! Player manager - core orchestration
//!
//! Translates user intents and audio-element callbacks into queue and flag
//! mutations, and buffers events for the rendering layer.

use crate::{
    error::{PlaybackError, Result},
    events::PlaybackEvent,
    queue::EpisodeQueue,
    types::PlayerConfig,
};
use cast_core::Episode;
use std::time::Duration;

/// Central playback-state management
///
/// Single source of truth for what is playing right now:
/// - Episode queue with the current position
/// - Transient flags (playing, looping, shuffling)
/// - Playback progress within the current episode
///
/// All mutations are synchronous and applied in event-dispatch order; the
/// manager is a single logical owner accessed from one execution context at
/// a time. Rendering surfaces read state through the accessors and drain
/// the event buffer on their own schedule.
#[derive(Debug, Clone, Default)]
pub struct PlayerManager {
    // Queue and position
    queue: EpisodeQueue,

    // Transient flags
    is_playing: bool,
    is_looping: bool,
    is_shuffling: bool,

    // Position within the current episode, mirrored from the audio element
    progress: Duration,

    // Event queue for UI synchronization
    pending_events: Vec<PlaybackEvent>,
}

impl PlayerManager {
    /// Create a new player manager with an empty queue
    pub fn new(config: PlayerConfig) -> Self {
        Self {
            queue: EpisodeQueue::new(),
            is_playing: false,
            is_looping: config.looping,
            is_shuffling: config.shuffling,
            progress: Duration::ZERO,
            pending_events: Vec::new(),
        }
    }

    // ===== Playback Control =====

    /// Play a single episode, replacing any existing queue.
    ///
    /// Detail pages drive this: the queue becomes just this episode and
    /// playback starts from the beginning.
    pub fn play(&mut self, episode: Episode) {
        let previous = self.current_episode_id();
        let episode_id = episode.id.clone();

        self.queue.set_single(episode);
        self.progress = Duration::ZERO;

        self.emit_queue_changed();
        self.emit_episode_changed(episode_id, previous);
        self.start_playing();
    }

    /// Play a list of episodes starting at `start`, replacing any existing
    /// queue.
    ///
    /// Fails with [`PlaybackError::IndexOutOfBounds`] when `start` is not a
    /// valid index into `episodes` (an empty list has none); the player is
    /// left unchanged on failure.
    pub fn play_list(&mut self, episodes: Vec<Episode>, start: usize) -> Result<()> {
        let previous = self.current_episode_id();

        self.queue.set_list(episodes, start)?;
        self.progress = Duration::ZERO;

        self.emit_queue_changed();
        if let Some(episode) = self.queue.current_episode() {
            let episode_id = episode.id.clone();
            self.emit_episode_changed(episode_id, previous);
        }
        self.start_playing();
        Ok(())
    }

    /// Flip the play/pause flag
    pub fn toggle_play(&mut self) {
        self.is_playing = !self.is_playing;
        self.emit_state_changed();
    }

    /// Flip the loop flag
    pub fn toggle_loop(&mut self) {
        self.is_looping = !self.is_looping;
        self.pending_events.push(PlaybackEvent::LoopChanged {
            enabled: self.is_looping,
        });
    }

    /// Flip the shuffle flag
    pub fn toggle_shuffle(&mut self) {
        self.is_shuffling = !self.is_shuffling;
        self.pending_events.push(PlaybackEvent::ShuffleChanged {
            enabled: self.is_shuffling,
        });
    }

    /// Set the play/pause flag explicitly.
    ///
    /// Used when the underlying audio element reports a state change on its
    /// own (end of track, load error). Emits only on an actual transition.
    pub fn set_playing_state(&mut self, playing: bool) {
        if self.is_playing != playing {
            self.is_playing = playing;
            self.emit_state_changed();
        }
    }

    /// Reset the queue to empty with no episode loaded.
    ///
    /// Used when a track finishes with no loop or successor available.
    pub fn clear_player_state(&mut self) {
        self.queue.clear();
        self.progress = Duration::ZERO;
        self.pending_events.push(PlaybackEvent::PlayerCleared);
    }

    // ===== Queue Navigation =====

    /// Check if "next" can navigate somewhere.
    ///
    /// With shuffle on, any episode of a non-empty queue is a valid random
    /// successor; otherwise a sequential successor must exist.
    pub fn has_next(&self) -> bool {
        (self.is_shuffling && !self.queue.is_empty()) || self.queue.has_next_sequential()
    }

    /// Check if "previous" can navigate somewhere
    pub fn has_previous(&self) -> bool {
        self.queue.has_previous()
    }

    /// Navigate to the next episode.
    ///
    /// Shuffling picks a uniformly random position (reselecting the current
    /// one is allowed); otherwise the position advances sequentially. At the
    /// tail without shuffle this is a defined no-op. The play/pause flag is
    /// left as it was.
    pub fn play_next(&mut self) {
        let previous = self.current_episode_id();

        let moved = if self.is_shuffling {
            self.queue.jump_random().is_some()
        } else {
            self.queue.advance()
        };

        if moved {
            self.progress = Duration::ZERO;
            if let Some(episode) = self.queue.current_episode() {
                let episode_id = episode.id.clone();
                self.emit_episode_changed(episode_id, previous);
            }
        }
    }

    /// Navigate to the previous episode.
    ///
    /// Always sequential; at the head of the queue this is a defined no-op.
    /// The play/pause flag is left as it was.
    pub fn play_previous(&mut self) {
        let previous = self.current_episode_id();

        if self.queue.retreat() {
            self.progress = Duration::ZERO;
            if let Some(episode) = self.queue.current_episode() {
                let episode_id = episode.id.clone();
                self.emit_episode_changed(episode_id, previous);
            }
        }
    }

    /// Jump directly to the episode at `index` and start playing it.
    ///
    /// Episode-list play buttons drive this. Fails with
    /// [`PlaybackError::IndexOutOfBounds`] on an invalid index, leaving the
    /// player unchanged.
    pub fn play_episode_at(&mut self, index: usize) -> Result<()> {
        let previous = self.current_episode_id();

        self.queue.jump_to(index)?;
        self.progress = Duration::ZERO;

        if let Some(episode) = self.queue.current_episode() {
            let episode_id = episode.id.clone();
            self.emit_episode_changed(episode_id, previous);
        }
        self.start_playing();
        Ok(())
    }

    // ===== Progress =====

    /// Mirror the audio element's position report.
    ///
    /// Clamped to the current episode's duration; ignored while nothing is
    /// loaded.
    pub fn set_progress(&mut self, position: Duration) {
        if let Some(episode) = self.queue.current_episode() {
            self.progress = position.min(episode.duration);
        }
    }

    /// Seek to a position in the current episode.
    ///
    /// Fails with [`PlaybackError::NoEpisodeLoaded`] when the queue is
    /// empty, and [`PlaybackError::InvalidSeekPosition`] past the end of
    /// the episode.
    pub fn seek_to(&mut self, position: Duration) -> Result<()> {
        let episode = self
            .queue
            .current_episode()
            .ok_or(PlaybackError::NoEpisodeLoaded)?;

        if position > episode.duration {
            return Err(PlaybackError::InvalidSeekPosition(position));
        }

        self.progress = position;
        self.pending_events.push(PlaybackEvent::Seeked {
            position_ms: position.as_millis() as u64,
        });
        Ok(())
    }

    /// Handle the audio element reporting the end of the current episode.
    ///
    /// Looping restarts the current episode; otherwise playback advances
    /// when a successor exists (random under shuffle) and clears the player
    /// when none does.
    pub fn handle_episode_ended(&mut self) {
        if self.is_looping {
            if let Some(episode) = self.queue.current_episode() {
                let episode_id = episode.id.clone();
                self.progress = Duration::ZERO;
                self.pending_events
                    .push(PlaybackEvent::EpisodeReplayed { episode_id });
            }
            return;
        }

        if self.has_next() {
            self.play_next();
        } else {
            self.set_playing_state(false);
            self.clear_player_state();
        }
    }

    // ===== State Queries =====

    /// Whether audio is currently meant to be advancing
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Whether loop mode is on
    pub fn is_looping(&self) -> bool {
        self.is_looping
    }

    /// Whether shuffle mode is on
    pub fn is_shuffling(&self) -> bool {
        self.is_shuffling
    }

    /// Position within the current episode
    pub fn progress(&self) -> Duration {
        self.progress
    }

    /// The currently loaded episode
    pub fn current_episode(&self) -> Option<&Episode> {
        self.queue.current_episode()
    }

    /// Index of the currently loaded episode
    pub fn current_index(&self) -> Option<usize> {
        self.queue.current_index()
    }

    /// All queued episodes in navigation order
    pub fn episodes(&self) -> &[Episode] {
        self.queue.episodes()
    }

    /// Number of queued episodes
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    // ===== Events =====

    /// Drain all pending events.
    ///
    /// Returns the events emitted since the last drain; the rendering layer
    /// calls this on its own reactivity schedule.
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    fn current_episode_id(&self) -> Option<String> {
        self.queue.current_episode().map(|e| e.id.clone())
    }

    fn start_playing(&mut self) {
        if !self.is_playing {
            self.is_playing = true;
            self.emit_state_changed();
        }
    }

    fn emit_state_changed(&mut self) {
        self.pending_events.push(PlaybackEvent::StateChanged {
            is_playing: self.is_playing,
        });
    }

    fn emit_episode_changed(&mut self, episode_id: String, previous_episode_id: Option<String>) {
        self.pending_events.push(PlaybackEvent::EpisodeChanged {
            episode_id,
            previous_episode_id,
        });
    }

    fn emit_queue_changed(&mut self) {
        self.pending_events.push(PlaybackEvent::QueueChanged {
            length: self.queue.len(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_episode(id: &str) -> Episode {
        Episode::new(id, format!("Episode {}", id))
            .with_duration(Duration::from_secs(1800))
            .with_url(format!("https://cdn.example.com/{}.mp3", id))
    }

    fn episode_list(ids: &[&str]) -> Vec<Episode> {
        ids.iter().map(|id| create_test_episode(id)).collect()
    }

    #[test]
    fn create_player_manager() {
        let manager = PlayerManager::new(PlayerConfig::default());

        assert!(!manager.is_playing());
        assert!(!manager.is_looping());
        assert!(!manager.is_shuffling());
        assert_eq!(manager.current_index(), None);
        assert_eq!(manager.queue_len(), 0);
        assert_eq!(manager.progress(), Duration::ZERO);
    }

    #[test]
    fn config_sets_initial_flags() {
        let manager = PlayerManager::new(PlayerConfig {
            looping: true,
            shuffling: true,
        });

        assert!(manager.is_looping());
        assert!(manager.is_shuffling());
        assert!(!manager.is_playing());
    }

    #[test]
    fn play_replaces_queue_with_single_episode() {
        let mut manager = PlayerManager::default();
        manager
            .play_list(episode_list(&["a", "b", "c"]), 2)
            .expect("valid start");

        manager.play(create_test_episode("d"));

        assert_eq!(manager.queue_len(), 1);
        assert_eq!(manager.current_index(), Some(0));
        assert_eq!(manager.current_episode().unwrap().id, "d");
        assert!(manager.is_playing());
    }

    #[test]
    fn play_list_positions_at_start_and_plays() {
        let mut manager = PlayerManager::default();
        manager
            .play_list(episode_list(&["a", "b", "c"]), 1)
            .expect("valid start");

        assert_eq!(manager.queue_len(), 3);
        assert_eq!(manager.current_index(), Some(1));
        assert_eq!(manager.current_episode().unwrap().id, "b");
        assert!(manager.is_playing());
    }

    #[test]
    fn play_list_rejects_invalid_start() {
        let mut manager = PlayerManager::default();
        manager
            .play_list(episode_list(&["a", "b"]), 0)
            .expect("valid start");
        manager.drain_events();

        let err = manager.play_list(episode_list(&["c"]), 1).unwrap_err();
        assert!(matches!(
            err,
            PlaybackError::IndexOutOfBounds { index: 1, len: 1 }
        ));

        // State unchanged, nothing emitted
        assert_eq!(manager.current_episode().unwrap().id, "a");
        assert_eq!(manager.queue_len(), 2);
        assert!(!manager.has_pending_events());
    }

    #[test]
    fn play_list_rejects_empty_list() {
        let mut manager = PlayerManager::default();
        let err = manager.play_list(Vec::new(), 0).unwrap_err();

        assert!(matches!(
            err,
            PlaybackError::IndexOutOfBounds { index: 0, len: 0 }
        ));
        assert!(!manager.is_playing());
        assert_eq!(manager.queue_len(), 0);
    }

    #[test]
    fn toggle_play_twice_restores_flag() {
        let mut manager = PlayerManager::default();

        manager.toggle_play();
        assert!(manager.is_playing());
        manager.toggle_play();
        assert!(!manager.is_playing());
    }

    #[test]
    fn toggle_loop_and_shuffle_are_involutions() {
        let mut manager = PlayerManager::default();

        manager.toggle_loop();
        manager.toggle_shuffle();
        assert!(manager.is_looping());
        assert!(manager.is_shuffling());

        manager.toggle_loop();
        manager.toggle_shuffle();
        assert!(!manager.is_looping());
        assert!(!manager.is_shuffling());
    }

    #[test]
    fn set_playing_state_emits_only_on_transition() {
        let mut manager = PlayerManager::default();
        manager.drain_events();

        manager.set_playing_state(false);
        assert!(!manager.has_pending_events());

        manager.set_playing_state(true);
        assert_eq!(
            manager.drain_events(),
            vec![PlaybackEvent::StateChanged { is_playing: true }]
        );
    }

    #[test]
    fn sequential_next_walks_then_pins_at_tail() {
        let mut manager = PlayerManager::default();
        manager
            .play_list(episode_list(&["a", "b", "c"]), 0)
            .expect("valid start");

        manager.play_next();
        assert_eq!(manager.current_episode().unwrap().id, "b");
        manager.play_next();
        assert_eq!(manager.current_episode().unwrap().id, "c");

        // Tail boundary without shuffle: no-op
        manager.play_next();
        assert_eq!(manager.current_episode().unwrap().id, "c");
        assert_eq!(manager.current_index(), Some(2));
    }

    #[test]
    fn previous_walks_then_pins_at_head() {
        let mut manager = PlayerManager::default();
        manager
            .play_list(episode_list(&["a", "b"]), 1)
            .expect("valid start");

        manager.play_previous();
        assert_eq!(manager.current_index(), Some(0));

        manager.play_previous();
        assert_eq!(manager.current_index(), Some(0));
    }

    #[test]
    fn next_does_not_force_start() {
        let mut manager = PlayerManager::default();
        manager
            .play_list(episode_list(&["a", "b"]), 0)
            .expect("valid start");
        manager.set_playing_state(false);

        manager.play_next();
        assert_eq!(manager.current_episode().unwrap().id, "b");
        assert!(!manager.is_playing());

        manager.play_previous();
        assert!(!manager.is_playing());
    }

    #[test]
    fn shuffled_next_stays_in_bounds() {
        let mut manager = PlayerManager::default();
        manager
            .play_list(episode_list(&["a", "b", "c"]), 2)
            .expect("valid start");
        manager.toggle_shuffle();

        for _ in 0..50 {
            manager.play_next();
            assert!(manager.current_index().unwrap() < 3);
        }
    }

    #[test]
    fn has_next_with_shuffle_on_any_position() {
        let mut manager = PlayerManager::default();
        manager
            .play_list(episode_list(&["a", "b"]), 1)
            .expect("valid start");

        // At the tail without shuffle there is no next
        assert!(!manager.has_next());

        manager.toggle_shuffle();
        assert!(manager.has_next());
    }

    #[test]
    fn has_next_is_false_on_empty_queue_even_when_shuffling() {
        let mut manager = PlayerManager::default();
        manager.toggle_shuffle();
        assert!(!manager.has_next());

        manager.play_next();
        assert_eq!(manager.current_index(), None);
    }

    #[test]
    fn has_previous_tracks_position() {
        let mut manager = PlayerManager::default();
        manager
            .play_list(episode_list(&["a", "b"]), 0)
            .expect("valid start");
        assert!(!manager.has_previous());

        manager.play_next();
        assert!(manager.has_previous());
    }

    #[test]
    fn play_episode_at_jumps_and_plays() {
        let mut manager = PlayerManager::default();
        manager
            .play_list(episode_list(&["a", "b", "c"]), 0)
            .expect("valid start");
        manager.set_playing_state(false);

        manager.play_episode_at(2).expect("valid index");
        assert_eq!(manager.current_episode().unwrap().id, "c");
        assert!(manager.is_playing());
    }

    #[test]
    fn play_episode_at_rejects_out_of_bounds_and_keeps_state() {
        let mut manager = PlayerManager::default();
        manager
            .play_list(episode_list(&["a", "b", "c"]), 1)
            .expect("valid start");
        manager.set_playing_state(false);
        manager.drain_events();

        let err = manager.play_episode_at(3).unwrap_err();
        assert!(matches!(
            err,
            PlaybackError::IndexOutOfBounds { index: 3, len: 3 }
        ));
        assert_eq!(manager.current_index(), Some(1));
        assert!(!manager.is_playing());
        assert!(!manager.has_pending_events());
    }

    #[test]
    fn clear_player_state_empties_queue() {
        let mut manager = PlayerManager::default();
        manager
            .play_list(episode_list(&["a", "b"]), 0)
            .expect("valid start");

        manager.clear_player_state();

        assert_eq!(manager.queue_len(), 0);
        assert_eq!(manager.current_index(), None);
        assert!(manager.current_episode().is_none());
        assert_eq!(manager.progress(), Duration::ZERO);
    }

    #[test]
    fn progress_is_clamped_to_episode_duration() {
        let mut manager = PlayerManager::default();
        manager.play(create_test_episode("a")); // 1800s long

        manager.set_progress(Duration::from_secs(60));
        assert_eq!(manager.progress(), Duration::from_secs(60));

        manager.set_progress(Duration::from_secs(9999));
        assert_eq!(manager.progress(), Duration::from_secs(1800));
    }

    #[test]
    fn progress_ignored_without_episode() {
        let mut manager = PlayerManager::default();
        manager.set_progress(Duration::from_secs(60));
        assert_eq!(manager.progress(), Duration::ZERO);
    }

    #[test]
    fn seek_within_episode() {
        let mut manager = PlayerManager::default();
        manager.play(create_test_episode("a"));

        manager.seek_to(Duration::from_secs(120)).expect("in range");
        assert_eq!(manager.progress(), Duration::from_secs(120));
    }

    #[test]
    fn seek_past_end_fails() {
        let mut manager = PlayerManager::default();
        manager.play(create_test_episode("a"));

        let err = manager.seek_to(Duration::from_secs(1801)).unwrap_err();
        assert!(matches!(err, PlaybackError::InvalidSeekPosition(_)));
        assert_eq!(manager.progress(), Duration::ZERO);
    }

    #[test]
    fn seek_without_episode_fails() {
        let mut manager = PlayerManager::default();
        let err = manager.seek_to(Duration::ZERO).unwrap_err();
        assert!(matches!(err, PlaybackError::NoEpisodeLoaded));
    }

    #[test]
    fn ended_with_loop_replays_current() {
        let mut manager = PlayerManager::default();
        manager
            .play_list(episode_list(&["a", "b"]), 1)
            .expect("valid start");
        manager.toggle_loop();
        manager.set_progress(Duration::from_secs(1800));
        manager.drain_events();

        manager.handle_episode_ended();

        assert_eq!(manager.current_index(), Some(1));
        assert!(manager.is_playing());
        assert_eq!(manager.progress(), Duration::ZERO);
        assert_eq!(
            manager.drain_events(),
            vec![PlaybackEvent::EpisodeReplayed {
                episode_id: "b".to_string()
            }]
        );
    }

    #[test]
    fn ended_mid_queue_advances() {
        let mut manager = PlayerManager::default();
        manager
            .play_list(episode_list(&["a", "b"]), 0)
            .expect("valid start");

        manager.handle_episode_ended();

        assert_eq!(manager.current_episode().unwrap().id, "b");
        assert!(manager.is_playing());
    }

    #[test]
    fn ended_at_tail_clears_player() {
        let mut manager = PlayerManager::default();
        manager
            .play_list(episode_list(&["a", "b"]), 1)
            .expect("valid start");

        manager.handle_episode_ended();

        assert!(!manager.is_playing());
        assert_eq!(manager.queue_len(), 0);
        assert_eq!(manager.current_index(), None);
    }

    #[test]
    fn ended_at_tail_with_shuffle_keeps_playing() {
        let mut manager = PlayerManager::default();
        manager
            .play_list(episode_list(&["a", "b"]), 1)
            .expect("valid start");
        manager.toggle_shuffle();

        manager.handle_episode_ended();

        // Shuffle makes any position a valid successor
        assert!(manager.current_index().is_some());
        assert!(manager.is_playing());
        assert_eq!(manager.queue_len(), 2);
    }

    #[test]
    fn play_emits_queue_episode_and_state_events() {
        let mut manager = PlayerManager::default();

        manager.play(create_test_episode("a"));

        assert_eq!(
            manager.drain_events(),
            vec![
                PlaybackEvent::QueueChanged { length: 1 },
                PlaybackEvent::EpisodeChanged {
                    episode_id: "a".to_string(),
                    previous_episode_id: None,
                },
                PlaybackEvent::StateChanged { is_playing: true },
            ]
        );
    }

    #[test]
    fn episode_changed_carries_previous_id() {
        let mut manager = PlayerManager::default();
        manager
            .play_list(episode_list(&["a", "b"]), 0)
            .expect("valid start");
        manager.drain_events();

        manager.play_next();

        assert_eq!(
            manager.drain_events(),
            vec![PlaybackEvent::EpisodeChanged {
                episode_id: "b".to_string(),
                previous_episode_id: Some("a".to_string()),
            }]
        );
    }

    #[test]
    fn boundary_noop_emits_nothing() {
        let mut manager = PlayerManager::default();
        manager
            .play_list(episode_list(&["a", "b"]), 1)
            .expect("valid start");
        manager.drain_events();

        manager.play_next();
        assert!(!manager.has_pending_events());

        manager.play_previous();
        manager.play_previous();
        // Only the first retreat moved
        assert_eq!(manager.drain_events().len(), 1);
    }

    #[test]
    fn drain_events_empties_buffer() {
        let mut manager = PlayerManager::default();
        manager.toggle_play();

        assert!(manager.has_pending_events());
        let events = manager.drain_events();
        assert_eq!(events.len(), 1);
        assert!(!manager.has_pending_events());
        assert!(manager.drain_events().is_empty());
    }
}
