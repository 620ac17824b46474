//! GitHub client implementation

use crate::fetch::{ApiResponse, HttpFetch};
use crate::links::Links;
use crate::rate_limit::{RateLimit, RateLimitPolicy};
use crate::util::urijoin;
use anyhow::{Context, Result, anyhow, bail};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use reqwest::{StatusCode, Url};
use std::sync::{Mutex, MutexGuard};

/// GitHub API base URL
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Default User-Agent header for API requests
pub const DEFAULT_USER_AGENT: &str = concat!("ghfeed/", env!("CARGO_PKG_VERSION"));

const ACCEPT: &str = "application/vnd.github.v3+json";

/// GitHub API client for making authenticated requests
///
/// Before every request the client checks the last known rate-limit state and,
/// when the quota is exhausted, waits until the reset time (or fails, if the
/// policy forbids waiting). The state is refreshed from every response.
pub struct GitHubClient {
    pub(crate) client: reqwest::Client,
    pub(crate) token: Option<String>,
    base_url: String,
    policy: RateLimitPolicy,
    rate_limit: Mutex<RateLimit>,
}

impl GitHubClient {
    /// Create a new GitHub client with an optional token
    ///
    /// Without a token requests go out unauthenticated.
    pub fn new(token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            token,
            base_url: DEFAULT_API_BASE.to_string(),
            policy: RateLimitPolicy::default(),
            rate_limit: Mutex::new(RateLimit::default()),
        }
    }

    /// Create a client and initialize its rate-limit state from the API
    pub async fn connect(
        token: Option<String>,
        base_url: &str,
        policy: RateLimitPolicy,
    ) -> Result<Self> {
        let client = Self::new(token)
            .with_base_url(base_url)
            .with_rate_limit_policy(policy);
        client.init_rate_limit().await?;
        Ok(client)
    }

    /// Point the client at another API root, e.g. a GitHub Enterprise instance
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_rate_limit_policy(mut self, policy: RateLimitPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Last known rate-limit state
    pub fn rate_limit(&self) -> RateLimit {
        *self.lock_rate_limit()
    }

    /// Query the rate-limit endpoint and record the current quota
    ///
    /// A 404 means the server does not enforce rate limits; the state then
    /// stays unknown and requests are never held back.
    pub async fn init_rate_limit(&self) -> Result<()> {
        let url = urijoin(&[&self.base_url, "rate_limit"]);
        let response = self
            .request(&url, &[])?
            .send()
            .await
            .with_context(|| format!("Failed to query rate limit at {}", url))?;

        if response.status() == StatusCode::NOT_FOUND {
            info!("Rate limit is not enabled on {}", self.base_url);
            return Ok(());
        }

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(anyhow!(
                "Failed to query rate limit ({} {}): {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown"),
                error_text
            ));
        }

        let rate = RateLimit::from_headers(response.headers());
        debug!(
            "Rate limit: {:?} remaining, reset at {:?}",
            rate.remaining, rate.reset
        );
        self.lock_rate_limit().update(rate);
        Ok(())
    }

    fn lock_rate_limit(&self) -> MutexGuard<'_, RateLimit> {
        self.rate_limit
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn request(&self, url: &str, payload: &[(&str, &str)]) -> Result<reqwest::RequestBuilder> {
        let url = if payload.is_empty() {
            Url::parse(url)
        } else {
            Url::parse_with_params(url, payload)
        }
        .with_context(|| format!("Invalid request URL: {}", url))?;

        let mut request = self
            .client
            .get(url)
            .header("User-Agent", DEFAULT_USER_AGENT)
            .header("Accept", ACCEPT);

        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("token {}", token));
        }

        Ok(request)
    }

    /// Hold back until the quota allows another request
    async fn wait_for_rate_limit(&self) -> Result<()> {
        let rate = self.rate_limit();
        if !rate.is_exhausted(self.policy.min_rate_to_sleep) {
            return Ok(());
        }

        let reset_at = rate
            .reset
            .and_then(|reset| DateTime::<Utc>::from_timestamp(reset, 0))
            .map(|reset| reset.to_rfc3339())
            .unwrap_or_else(|| "an unknown time".to_string());

        if !self.policy.sleep_for_rate {
            bail!("GitHub rate limit exhausted; it resets at {}", reset_at);
        }

        let wait = rate.time_to_reset(Utc::now().timestamp());
        warn!(
            "GitHub rate limit exhausted, waiting {}s until reset at {}",
            wait.as_secs(),
            reset_at
        );
        tokio::time::sleep(wait).await;
        Ok(())
    }
}

#[async_trait]
impl HttpFetch for GitHubClient {
    async fn fetch(&self, url: &str, payload: &[(&str, &str)]) -> Result<ApiResponse> {
        self.wait_for_rate_limit().await?;

        debug!("GET {}", url);
        let response = self
            .request(url, payload)?
            .send()
            .await
            .with_context(|| format!("Failed to GET {}", url))?;

        let status = response.status();
        let links = Links::from_headers(response.headers());
        let rate_limit = RateLimit::from_headers(response.headers());
        self.lock_rate_limit().update(rate_limit);

        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read response body from {}", url))?;

        if !status.is_success() {
            return Err(anyhow!(
                "GitHub API request failed ({} {}): {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown"),
                body
            ));
        }

        Ok(ApiResponse {
            status: status.as_u16(),
            body,
            links,
            rate_limit,
        })
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
