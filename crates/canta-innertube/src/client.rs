//! `InnerTube` API client implementation.

use canta_core::{Error, Result};
use reqwest::header::HeaderMap;
use serde::Serialize;

use crate::context::{REEL_BASE_URL, SEARCH_BASE_URL};

/// `YouTube` Music `InnerTube` API client.
///
/// One shared `reqwest` client; no cache, no retry, no request state
/// beyond the call in flight.
#[derive(Debug, Clone)]
pub struct InnerTubeClient {
    http: reqwest::Client,
    search_base: String,
    reel_base: String,
}

impl InnerTubeClient {
    /// Create a client pointed at the real upstream endpoints.
    pub fn new() -> Result<Self> {
        Self::with_base_urls(SEARCH_BASE_URL, REEL_BASE_URL)
    }

    /// Create a client with overridden base URLs. Used by tests to point
    /// at a mock server.
    pub fn with_base_urls(search_base: &str, reel_base: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| Error::ClientInit(e.to_string()))?;

        Ok(Self {
            http,
            search_base: search_base.trim_end_matches('/').to_string(),
            reel_base: reel_base.trim_end_matches('/').to_string(),
        })
    }

    pub(crate) fn search_url(&self, path_and_query: &str) -> String {
        format!("{}/{path_and_query}", self.search_base)
    }

    pub(crate) fn reel_url(&self, path_and_query: &str) -> String {
        format!("{}/{path_and_query}", self.reel_base)
    }

    /// POST a JSON body with an endpoint-specific header set and return
    /// the raw response body.
    ///
    /// Non-success statuses and transport failures are both errors; how
    /// an error is surfaced is the caller's decision.
    pub(crate) async fn post<T: Serialize>(
        &self,
        url: &str,
        headers: HeaderMap,
        body: &T,
    ) -> Result<Vec<u8>> {
        let response = self
            .http
            .post(url)
            .headers(headers)
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::UpstreamStatus {
                status: status.as_u16(),
                message,
            });
        }

        response
            .bytes()
            .await
            .map(|b| b.to_vec())
            .map_err(|e| Error::Transport(e.to_string()))
    }
}
