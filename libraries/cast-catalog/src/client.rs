//! Main catalog API client.

use crate::error::{CatalogError, Result};
use crate::types::{CatalogConfig, EpisodeRecord, ListQuery};
use cast_core::Episode;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Client for the episode catalog REST API.
///
/// The catalog is a read-only collaborator: episodes are fetched by
/// paginated listing or by id, transformed into display-ready
/// [`Episode`] values, and handed to the playback core.
///
/// # Example
///
/// ```ignore
/// use cast_catalog::{CatalogClient, CatalogConfig, ListQuery};
///
/// let client = CatalogClient::new(CatalogConfig::new("https://api.example.com"))?;
///
/// // Landing page: the twelve most recent episodes
/// let episodes = client.list_episodes(&ListQuery::latest(12)).await?;
///
/// // Detail page: one episode by id
/// let episode = client.get_episode("a-caminho-do-ray-tracing").await?;
/// println!("{} — {}", episode.title, episode.duration_as_string);
/// ```
pub struct CatalogClient {
    http: Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a new client with the given configuration.
    pub fn new(config: CatalogConfig) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(CatalogError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.base_url.trim_end_matches('/').to_string();

        let parsed = Url::parse(&base_url)
            .map_err(|e| CatalogError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(CatalogError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("CastPlayer/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(CatalogError::Request)?;

        Ok(Self { http, base_url })
    }

    /// Get the catalog base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List episodes, newest-first or however `query` says.
    ///
    /// `GET /episodes` with json-server style `_limit`/`_sort`/`_order`
    /// parameters; every raw record is transformed into an [`Episode`].
    pub async fn list_episodes(&self, query: &ListQuery) -> Result<Vec<Episode>> {
        let url = format!("{}/episodes", self.base_url);
        debug!(url = %url, "Fetching episode list");

        let response = self
            .http
            .get(&url)
            .query(&query.to_params())
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();

        if status.is_success() {
            let records: Vec<EpisodeRecord> = response.json().await.map_err(|e| {
                CatalogError::ParseError(format!("Failed to parse episode list: {}", e))
            })?;

            debug!(episodes = records.len(), "Fetched episode list");

            records
                .into_iter()
                .map(EpisodeRecord::into_episode)
                .collect()
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(CatalogError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Get a single episode by id.
    ///
    /// `GET /episodes/{id}`; a 404 maps to [`CatalogError::EpisodeNotFound`].
    pub async fn get_episode(&self, id: &str) -> Result<Episode> {
        let url = format!("{}/episodes/{}", self.base_url, id);
        debug!(url = %url, episode_id = %id, "Fetching episode");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();

        if status.is_success() {
            let record: EpisodeRecord = response.json().await.map_err(|e| {
                CatalogError::ParseError(format!("Failed to parse episode: {}", e))
            })?;

            record.into_episode()
        } else if status.as_u16() == 404 {
            Err(CatalogError::EpisodeNotFound(id.to_string()))
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(CatalogError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }
}

/// Map connect/timeout failures to `ServerUnreachable`, everything else to
/// `Request`.
fn map_transport_error(e: reqwest::Error) -> CatalogError {
    if e.is_connect() || e.is_timeout() {
        CatalogError::ServerUnreachable(e.to_string())
    } else {
        CatalogError::Request(e)
    }
}
