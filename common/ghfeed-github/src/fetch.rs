//! Transport seam for GitHub API requests

use crate::links::Links;
use crate::rate_limit::RateLimit;
use anyhow::Result;
use async_trait::async_trait;

/// A successful API response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    /// Raw response text
    pub body: String,
    /// Relations advertised in the `Link` header
    pub links: Links,
    /// Rate-limit headers of this response
    pub rate_limit: RateLimit,
}

impl ApiResponse {
    /// A `200 OK` response with the given body and no links
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
            ..Self::default()
        }
    }

    pub fn with_links(mut self, links: Links) -> Self {
        self.links = links;
        self
    }
}

/// Authenticated GET access to a GitHub-compatible API
///
/// [`GitHubClient`](crate::GitHubClient) is the network implementation.
/// Anything that can answer a GET with a body and `Link` relations can stand
/// in for it, which is how pagination and enrichment are exercised without a
/// server.
#[async_trait]
pub trait HttpFetch: Send + Sync {
    /// Issue a GET against `url` with `payload` appended as query parameters
    ///
    /// Non-2xx statuses are reported as errors.
    async fn fetch(&self, url: &str, payload: &[(&str, &str)]) -> Result<ApiResponse>;

    /// Base URL of the API, e.g. `https://api.github.com`
    fn base_url(&self) -> &str;
}
