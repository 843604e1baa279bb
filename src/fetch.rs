//!
//! src/fetch.rs  Andrew Belles  Oct 19th, 2026
//!
//! Defines the saavn client: builds the search request, sends it and
//! hands back the decoded song list. No retries, no caching.
//!

use url::Url;
use reqwest::{Client, redirect, RequestBuilder};
use tracing::{debug, error};

use crate::config::{HttpConfig, SaavnConfig};
use crate::errors::AppError;
use crate::types::{SearchResponse, Song};

/// Client building functionality, only overrides what config asks for
fn client_helper(http: &HttpConfig) -> reqwest::ClientBuilder {
    let mut builder = Client::builder()
        .pool_max_idle_per_host(http.pool_max_idle_per_host)
        .redirect(redirect::Policy::limited(http.max_redirects as usize));

    if let Some(timeout) = http.timeout {
        builder = builder.timeout(timeout);
    }
    if let Some(connect) = http.connect_timeout {
        builder = builder.connect_timeout(connect);
    }
    builder
}

pub fn base_client(http: &HttpConfig) -> Result<Client, AppError> {
    client_helper(http)
        .build()
        .map_err(AppError::from)
}

#[derive(Clone, Debug)]
pub struct SaavnClient {
    http: Client,
    base: Url
}

impl SaavnClient {
    pub fn new(http_config: &HttpConfig, cfg: &SaavnConfig) ->
        Result<Self, AppError> {

        let http = base_client(http_config)?;
        Ok( Self {
            http,
            base: cfg.base_url().clone()
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// GET /search/songs?query=...
    /// The base always has a host (see `parse_base_url`), so it can take path segments
    pub fn search_songs_request(&self, query: &str) -> RequestBuilder {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["search", "songs"]);
        }
        self.http.get(url).query(&[("query", query)])
    }

    /// Runs one search and returns `data.results` as sent by the server.
    /// Failures are logged once and returned as reqwest produced them.
    pub async fn search_songs(&self, query: &str) -> Result<Vec<Song>, reqwest::Error> {
        debug!(query, "saavn.search");

        let outcome: Result<Vec<Song>, reqwest::Error> = async {
            let response = self.search_songs_request(query)
                .send()
                .await?
                .error_for_status()?;
            let body = response.json::<SearchResponse<Song>>().await?;
            Ok(body.data.results)
        }.await;

        outcome.inspect_err(|e| error!(error = %e, query, "error searching songs"))
    }
}
