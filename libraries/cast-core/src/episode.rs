//! Episode domain type

use crate::format::duration_to_time_string;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A single podcast episode with playable audio and descriptive metadata.
///
/// Episodes are immutable once constructed. The catalog crate builds them
/// from raw API records; the playback crate holds owned copies in its queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    /// Unique episode identifier
    pub id: String,

    /// Episode title
    pub title: String,

    /// Thumbnail image URL
    pub thumbnail: String,

    /// Member/author label (e.g. "Diego e Richard")
    pub members: String,

    /// Playable length of the episode
    pub duration: Duration,

    /// Precomputed clock string for the duration (`HH:MM:SS`)
    pub duration_as_string: String,

    /// Audio file URL handed to the rendering layer's audio element
    pub url: String,

    /// Localized display date the episode was published
    pub published_at: String,

    /// Episode description. Raw HTML from a trusted source, injected
    /// verbatim by the rendering layer; never sanitized here.
    pub description: String,
}

impl Episode {
    /// Create an episode with minimal metadata.
    ///
    /// Remaining fields default to empty strings and a zero duration;
    /// useful for tests and for building episodes incrementally.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            thumbnail: String::new(),
            members: String::new(),
            duration: Duration::ZERO,
            duration_as_string: duration_to_time_string(Duration::ZERO),
            url: String::new(),
            published_at: String::new(),
            description: String::new(),
        }
    }

    /// Set the duration, keeping the clock string in sync.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self.duration_as_string = duration_to_time_string(duration);
        self
    }

    /// Set the audio file URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}
