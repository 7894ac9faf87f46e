// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::{Result, SoundcloudError};
use crate::params::Params;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, trace};
use url::Url;

const SOUNDCLOUD_API_BASE: &str = "https://api.soundcloud.com";
const USER_AGENT: &str = concat!("soundcloud2/", env!("CARGO_PKG_VERSION"));

/// SoundCloud API client.
///
/// Every call issues a single HTTP GET against a resource endpoint and
/// returns the decoded JSON body as an untyped [`serde_json::Value`]; the
/// response shape is defined entirely by the API. Clone is low cost, the
/// internals of `reqwest::Client` are wrapped in an Arc.
#[derive(Debug, Clone)]
pub struct SoundcloudClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl SoundcloudClient {
    /// Create a new client with default settings.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder(api_key).build()
    }

    /// Create a client builder for custom configuration.
    pub fn builder(api_key: impl Into<String>) -> SoundcloudClientBuilder {
        SoundcloudClientBuilder::new(api_key)
    }

    /// The API key attached to every outbound request.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Fetch a resource collection.
    ///
    /// `resource` is inserted into the URL path verbatim; there is no fixed
    /// set of endpoints. `params` are sent as query parameters with
    /// `client_id` always set to this client's API key; a caller-supplied
    /// `client_id` is discarded.
    ///
    /// # Arguments
    /// * `resource` - Endpoint name, e.g. `"tracks"`.
    /// * `params` - Query parameters accepted by that endpoint.
    ///
    /// # Example
    /// ```no_run
    /// # use soundcloud2::{Params, SoundcloudClient};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = SoundcloudClient::new("734a173874da8c420aeb59fd03623454")?;
    /// let apps = client.get("apps", Params::new().param("limit", 5)).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get(&self, resource: &str, params: Params) -> Result<Value> {
        let url = self.endpoint(&format!("{}.json", resource), &params)?;
        self.fetch(url).await
    }

    /// Fetch a single resource by id.
    ///
    /// Same contract as [`get`](Self::get), with the path
    /// `/{resource}/{id}.json`.
    pub async fn get_by_id(&self, resource: &str, id: &str, params: Params) -> Result<Value> {
        let url = self.endpoint(&format!("{}/{}.json", resource, id), &params)?;
        self.fetch(url).await
    }

    /// Search groups.
    ///
    /// # Arguments
    /// * `params` - Any filter the groups endpoint accepts, e.g. `q`,
    ///   `limit`, `offset`.
    ///
    /// # Example
    /// ```no_run
    /// # use soundcloud2::{Params, SoundcloudClient};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = SoundcloudClient::new("734a173874da8c420aeb59fd03623454")?;
    /// let groups = client.groups(Params::new().param("q", "dubstep")).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn groups(&self, params: Params) -> Result<Value> {
        self.get("groups", params).await
    }

    /// Look up a single group by id.
    pub async fn group(&self, id: &str, params: Params) -> Result<Value> {
        self.get_by_id("groups", id, params).await
    }

    /// Search playlists.
    pub async fn playlists(&self, params: Params) -> Result<Value> {
        self.get("playlists", params).await
    }

    /// Look up a single playlist by id.
    pub async fn playlist(&self, id: &str, params: Params) -> Result<Value> {
        self.get_by_id("playlists", id, params).await
    }

    /// Search tracks.
    ///
    /// # Arguments
    /// * `params` - Any filter the tracks endpoint accepts, e.g. `q`,
    ///   `genres`, `bpm[from]`, `duration[to]`, `streamable`.
    ///
    /// # Example
    /// ```no_run
    /// # use soundcloud2::{Params, SoundcloudClient};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = SoundcloudClient::new("734a173874da8c420aeb59fd03623454")?;
    /// let tracks = client
    ///     .tracks(Params::new().param("q", "A new world").param("streamable", true))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn tracks(&self, params: Params) -> Result<Value> {
        self.get("tracks", params).await
    }

    /// Look up a single track by id.
    pub async fn track(&self, id: &str, params: Params) -> Result<Value> {
        self.get_by_id("tracks", id, params).await
    }

    /// Search users.
    pub async fn users(&self, params: Params) -> Result<Value> {
        self.get("users", params).await
    }

    /// Look up a single user by id.
    pub async fn user(&self, id: &str, params: Params) -> Result<Value> {
        self.get_by_id("users", id, params).await
    }

    /// Search comments.
    pub async fn comments(&self, params: Params) -> Result<Value> {
        self.get("comments", params).await
    }

    /// Look up a single comment by id.
    ///
    /// GET `/comments/{id}.json`.
    pub async fn comment(&self, id: &str, params: Params) -> Result<Value> {
        self.get_by_id("comments", id, params).await
    }

    /// Compose the request URL: base, path, caller params, credential.
    fn endpoint(&self, path: &str, params: &Params) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/{}", self.base_url, path))?;
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params.iter() {
                // The credential is not caller-overridable.
                if key == "client_id" {
                    continue;
                }
                pairs.append_pair(key, &value.to_string());
            }
            pairs.append_pair("client_id", &self.api_key);
        }
        Ok(url)
    }

    /// Internal method to perform GET requests and decode the body.
    async fn fetch(&self, url: Url) -> Result<Value> {
        trace!(target: "soundcloud", "GET {}", url.path());

        let response = self.client.get(url).send().await?;

        let status = response.status();
        debug!(target: "soundcloud", "response status: {}", status);

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SoundcloudError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        trace!(target: "soundcloud", "response body: {}", body);

        serde_json::from_str(&body).map_err(|source| SoundcloudError::InvalidJson { body, source })
    }
}

/// Builder for configuring a SoundCloud client.
#[derive(Debug)]
pub struct SoundcloudClientBuilder {
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl SoundcloudClientBuilder {
    fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: SOUNDCLOUD_API_BASE.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Set a custom base URL (useful for testing with mock servers).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout duration.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the SoundCloud client.
    ///
    /// Fails with [`SoundcloudError::InvalidApiKey`] if the API key is empty
    /// and with [`SoundcloudError::InvalidUrl`] if the base URL does not
    /// parse. No request is issued.
    pub fn build(self) -> Result<SoundcloudClient> {
        if self.api_key.is_empty() {
            return Err(SoundcloudError::InvalidApiKey);
        }
        let base_url = self.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)?;

        let client = Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(SoundcloudClient {
            client,
            api_key: self.api_key,
            base_url,
        })
    }
}
