//! Cast Player Catalog Client
//!
//! HTTP client library for the episode catalog REST API.
//!
//! # Features
//!
//! - **Listing**: fetch episodes with limit/sort/order query parameters
//! - **Lookup**: fetch a single episode by id
//! - **Transformation**: raw API records become display-ready
//!   [`cast_core::Episode`] values (localized published date, duration
//!   clock string) before anything else sees them
//!
//! Retry policy and response caching are deliberately absent; the catalog
//! is treated as an always-well-formed external collaborator.
//!
//! # Example
//!
//! ```ignore
//! use cast_catalog::{CatalogClient, CatalogConfig, ListQuery};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CatalogClient::new(CatalogConfig::new("http://localhost:3333"))?;
//!
//!     let episodes = client.list_episodes(&ListQuery::latest(12)).await?;
//!     for episode in &episodes {
//!         println!("{} ({})", episode.title, episode.published_at);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

// Re-export main types
pub use client::CatalogClient;
pub use error::{CatalogError, Result};
pub use types::{CatalogConfig, EpisodeFileRecord, EpisodeRecord, ListQuery, SortOrder};
