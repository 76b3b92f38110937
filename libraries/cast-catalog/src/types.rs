//! Types for catalog API requests and responses.

use crate::error::{CatalogError, Result};
use cast_core::{duration_to_time_string, format_published_date, Episode};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for connecting to an episode catalog.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the catalog API (e.g. "https://api.example.com")
    pub base_url: String,
}

impl CatalogConfig {
    /// Create a new catalog config with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

/// Sort direction for episode listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Oldest first
    Asc,
    /// Newest first
    Desc,
}

impl SortOrder {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Query parameters for listing episodes.
///
/// Maps onto the catalog's json-server style `_limit`/`_sort`/`_order`
/// parameters; unset fields are omitted from the request.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    /// Maximum number of episodes to return
    pub limit: Option<u32>,
    /// Field to sort by
    pub sort: Option<String>,
    /// Sort direction
    pub order: Option<SortOrder>,
}

impl ListQuery {
    /// The landing-page query: the `limit` most recently published episodes.
    pub fn latest(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            sort: Some("published_at".to_string()),
            order: Some(SortOrder::Desc),
        }
    }

    pub(crate) fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(limit) = self.limit {
            params.push(("_limit", limit.to_string()));
        }
        if let Some(ref sort) = self.sort {
            params.push(("_sort", sort.clone()));
        }
        if let Some(order) = self.order {
            params.push(("_order", order.as_str().to_string()));
        }
        params
    }
}

/// An episode as returned by the catalog API.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EpisodeRecord {
    /// Unique episode identifier
    pub id: String,
    /// Episode title
    pub title: String,
    /// Thumbnail image URL
    pub thumbnail: String,
    /// Member/author label
    pub members: String,
    /// Publication timestamp, RFC 3339 or `YYYY-MM-DD HH:MM:SS`
    pub published_at: String,
    /// Episode description (raw HTML, trusted source)
    pub description: String,
    /// Audio file details
    pub file: EpisodeFileRecord,
}

/// Audio file details of an episode record.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EpisodeFileRecord {
    /// Audio file URL
    pub url: String,
    /// MIME type of the audio file
    #[serde(rename = "type", default)]
    pub file_type: Option<String>,
    /// Playable length in seconds
    pub duration: u64,
}

impl EpisodeRecord {
    /// Transform a raw record into a display-ready [`Episode`].
    ///
    /// Precomputes the localized published date and the duration clock
    /// string so the rendering layer never formats on the fly.
    pub fn into_episode(self) -> Result<Episode> {
        let published_at = parse_published_at(&self.published_at)?;
        let duration = Duration::from_secs(self.file.duration);

        Ok(Episode {
            id: self.id,
            title: self.title,
            thumbnail: self.thumbnail,
            members: self.members,
            duration,
            duration_as_string: duration_to_time_string(duration),
            url: self.file.url,
            published_at: format_published_date(published_at),
            description: self.description,
        })
    }
}

/// Parse a catalog publication timestamp.
///
/// Accepts RFC 3339 as well as the bare `YYYY-MM-DD HH:MM:SS` form some
/// catalog deployments emit; the latter is taken as UTC.
fn parse_published_at(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }

    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Ok(parsed.and_utc());
    }

    Err(CatalogError::InvalidDate(raw.to_string()))
}
