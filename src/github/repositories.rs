//! Repository metadata lookups with a per-client cache
//!
//! Every event names its repository; a user's feed usually touches only a
//! handful of them. Metadata is fetched once per name and then served from
//! memory for the rest of the run. Entries never expire.

use super::types::RepositoryMetadata;
use anyhow::{Context, Result};
use ghfeed_github::{HttpFetch, urijoin};
use log::debug;
use std::collections::HashMap;

/// Repository metadata keyed by `owner/name`
#[derive(Debug, Default)]
pub struct RepositoryCache {
    repos: HashMap<String, RepositoryMetadata>,
}

impl RepositoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up `name`, fetching it from `GET /repos/{name}` on first use
    ///
    /// # Errors
    /// Returns an error if the request fails or the body is not valid JSON.
    /// Nothing is cached in that case.
    pub async fn get<C: HttpFetch + ?Sized>(
        &mut self,
        http: &C,
        name: &str,
    ) -> Result<RepositoryMetadata> {
        if let Some(repo) = self.repos.get(name) {
            debug!("Repository {} served from cache", name);
            return Ok(repo.clone());
        }

        let url = urijoin(&[http.base_url(), "repos", name]);
        debug!("Fetching repository {} from {}", name, url);

        let response = http
            .fetch(&url, &[])
            .await
            .with_context(|| format!("Failed to fetch repository {}", name))?;
        let repo: RepositoryMetadata = serde_json::from_str(&response.body)
            .with_context(|| format!("Failed to parse repository data for {}", name))?;

        self.repos.insert(name.to_string(), repo.clone());
        Ok(repo)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.repos.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.repos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repos.is_empty()
    }
}
