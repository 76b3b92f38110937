//! Cast Player Core
//!
//! Platform-agnostic core types for Cast Player.
//!
//! This crate provides the foundational building blocks used across the
//! playback and catalog crates:
//! - **Domain Types**: [`Episode`]
//! - **Formatting**: duration and published-date display strings
//!
//! # Example
//!
//! ```rust
//! use cast_core::{duration_to_time_string, Episode};
//! use std::time::Duration;
//!
//! let episode = Episode::new("ep-1", "A Brave New World")
//!     .with_duration(Duration::from_secs(3720));
//!
//! assert_eq!(episode.duration_as_string, "01:02:00");
//! assert_eq!(duration_to_time_string(Duration::from_secs(187)), "00:03:07");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod episode;
pub mod format;

pub use episode::Episode;
pub use format::{duration_to_time_string, format_published_date};
