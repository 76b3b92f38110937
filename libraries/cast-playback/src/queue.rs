//! Episode queue with index-based navigation
//!
//! Holds the ordered list of episodes for the current playback session and
//! the position of the episode being played. Insertion order is navigation
//! order; shuffle picks positions without reordering the list.

use crate::error::{PlaybackError, Result};
use crate::shuffle;
use cast_core::Episode;

/// Ordered episode queue with a current position
///
/// Invariant, restored after every mutation: `current` is `None` exactly
/// when the queue is empty, and always a valid index otherwise.
#[derive(Debug, Clone, Default)]
pub struct EpisodeQueue {
    /// Episodes in navigation order
    episodes: Vec<Episode>,

    /// Index of the currently loaded episode
    current: Option<usize>,
}

impl EpisodeQueue {
    /// Create a new empty queue
    pub fn new() -> Self {
        Self {
            episodes: Vec::new(),
            current: None,
        }
    }

    /// Replace the queue with a single episode, positioned on it.
    ///
    /// Used when a detail page starts playback of one episode.
    pub fn set_single(&mut self, episode: Episode) {
        self.episodes = vec![episode];
        self.current = Some(0);
    }

    /// Replace the queue with a list, positioned at `start`.
    ///
    /// Fails with [`PlaybackError::IndexOutOfBounds`] when `start` is not a
    /// valid index (an empty list has none), leaving the queue untouched.
    pub fn set_list(&mut self, episodes: Vec<Episode>, start: usize) -> Result<()> {
        if start >= episodes.len() {
            return Err(PlaybackError::IndexOutOfBounds {
                index: start,
                len: episodes.len(),
            });
        }

        self.episodes = episodes;
        self.current = Some(start);
        Ok(())
    }

    /// Move directly to `index`.
    ///
    /// Fails with [`PlaybackError::IndexOutOfBounds`] on an invalid index,
    /// leaving the position untouched.
    pub fn jump_to(&mut self, index: usize) -> Result<()> {
        if index >= self.episodes.len() {
            return Err(PlaybackError::IndexOutOfBounds {
                index,
                len: self.episodes.len(),
            });
        }

        self.current = Some(index);
        Ok(())
    }

    /// Move to a uniformly random position.
    ///
    /// May reselect the current position. Returns the new index, or `None`
    /// on an empty queue.
    pub fn jump_random(&mut self) -> Option<usize> {
        if self.episodes.is_empty() {
            return None;
        }

        let index = shuffle::random_index(self.episodes.len());
        self.current = Some(index);
        Some(index)
    }

    /// Move to the sequential successor if one exists.
    ///
    /// Returns whether the position moved; the tail of the queue is a
    /// defined no-op.
    pub fn advance(&mut self) -> bool {
        match self.current {
            Some(index) if index + 1 < self.episodes.len() => {
                self.current = Some(index + 1);
                true
            }
            _ => false,
        }
    }

    /// Move to the sequential predecessor if one exists.
    ///
    /// Returns whether the position moved; the head of the queue is a
    /// defined no-op.
    pub fn retreat(&mut self) -> bool {
        match self.current {
            Some(index) if index > 0 => {
                self.current = Some(index - 1);
                true
            }
            _ => false,
        }
    }

    /// Empty the queue and unload the current episode
    pub fn clear(&mut self) {
        self.episodes.clear();
        self.current = None;
    }

    /// Get the currently loaded episode
    pub fn current_episode(&self) -> Option<&Episode> {
        self.current.and_then(|index| self.episodes.get(index))
    }

    /// Get the current position
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// All episodes in navigation order
    pub fn episodes(&self) -> &[Episode] {
        &self.episodes
    }

    /// Number of episodes in the queue
    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    /// Check if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }

    /// Check if a sequential successor exists
    pub fn has_next_sequential(&self) -> bool {
        matches!(self.current, Some(index) if index + 1 < self.episodes.len())
    }

    /// Check if a sequential predecessor exists
    pub fn has_previous(&self) -> bool {
        matches!(self.current, Some(index) if index > 0)
    }
}
