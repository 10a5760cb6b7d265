//! Image search client backed by the Google Custom Search API.
//!
//! Image lookups are strictly best-effort: every failure path is logged and
//! converted into an empty result so a search fault can never block the
//! text answer it decorates.

use crate::constants::{IMAGE_SEARCH_ENDPOINT, MAX_IMAGE_RESULTS};
use crate::errors::Error;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

/// Minimal subset of the Custom Search response we care about.
#[derive(Deserialize)]
struct SearchResponse {
    items: Option<Vec<SearchItem>>,
}

#[derive(Deserialize)]
struct SearchItem {
    link: Option<String>,
}

/// Client for resolving a text query into displayable image URLs.
#[derive(Debug)]
pub struct ImageSearchClient {
    /// Shared HTTP client, built once at construction
    client: Client,
    /// Google Custom Search API key; absence disables lookups
    api_key: Option<String>,
    /// Google Custom Search engine id; absence disables lookups
    engine_id: Option<String>,
}

impl ImageSearchClient {
    /// Creates a new image search client.
    ///
    /// Either credential may be absent; the client then short-circuits
    /// every lookup to an empty result.
    pub fn new(api_key: Option<String>, engine_id: Option<String>) -> Self {
        ImageSearchClient {
            client: Client::new(),
            api_key,
            engine_id,
        }
    }

    /// Searches for images matching `query`.
    ///
    /// Returns up to [`MAX_IMAGE_RESULTS`] image URLs in provider order.
    /// Never returns an error: missing credentials, transport failures,
    /// non-success statuses and malformed responses all degrade to an
    /// empty list.
    pub async fn search_images(&self, query: &str) -> Vec<String> {
        let (api_key, engine_id) = match (&self.api_key, &self.engine_id) {
            (Some(key), Some(id)) => (key, id),
            _ => {
                warn!("Image search API key or engine id not set, skipping image lookup");
                return Vec::new();
            }
        };

        match self.try_search(query, api_key, engine_id).await {
            Ok(links) => links,
            Err(e) => {
                warn!("Error searching images: {}", e);
                Vec::new()
            }
        }
    }

    async fn try_search(
        &self,
        query: &str,
        api_key: &str,
        engine_id: &str,
    ) -> Result<Vec<String>, Error> {
        let num = MAX_IMAGE_RESULTS.to_string();
        let res = self
            .client
            .get(IMAGE_SEARCH_ENDPOINT)
            .query(&[
                ("q", query),
                ("cx", engine_id),
                ("key", api_key),
                ("searchType", "image"),
                ("num", num.as_str()),
            ])
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(Error::ImageSearch(format!("{}: {}", status, body)));
        }

        let response: SearchResponse = res.json().await?;
        debug!("Image search for '{}' returned results", query);
        Ok(collect_links(response))
    }
}

/// Extracts image links from a search response, preserving provider order
/// and capping the count at [`MAX_IMAGE_RESULTS`].
fn collect_links(response: SearchResponse) -> Vec<String> {
    response
        .items
        .unwrap_or_default()
        .into_iter()
        .filter_map(|item| item.link)
        .take(MAX_IMAGE_RESULTS)
        .collect()
}
