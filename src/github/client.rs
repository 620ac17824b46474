//! Activity client
//!
//! `ActivityClient` knows the two endpoints ghfeed needs: a user's public
//! events and repository metadata. The HTTP work is delegated to any
//! [`HttpFetch`] implementation it is given; the client itself only adds the
//! paths, the page size and the repository cache.

use super::repositories::RepositoryCache;
use super::types::RepositoryMetadata;
use crate::constants::github::DEFAULT_PER_PAGE;
use anyhow::Result;
use ghfeed_github::{HttpFetch, Pages, urijoin};

/// Client for a single user's activity feed
///
/// ## Example
///
/// ```rust,no_run
/// use ghfeed::github::ActivityClient;
/// use ghfeed_github::{GitHubClient, RateLimitPolicy};
///
/// # async fn example() -> anyhow::Result<()> {
/// let http = GitHubClient::connect(
///     Some("your_token".to_string()),
///     "https://api.github.com",
///     RateLimitPolicy::default(),
/// )
/// .await?;
/// let mut client = ActivityClient::new(http, "octocat");
///
/// let mut pages = client.events();
/// while let Some(raw) = pages.next_page().await? {
///     println!("{}", raw);
/// }
///
/// let repo = client.repo("octocat/Hello-World").await?;
/// println!("{:?}", repo.full_name());
/// # Ok(())
/// # }
/// ```
pub struct ActivityClient<C> {
    http: C,
    user: String,
    per_page: u32,
    repos: RepositoryCache,
}

impl<C: HttpFetch> ActivityClient<C> {
    pub fn new(http: C, user: impl Into<String>) -> Self {
        Self {
            http,
            user: user.into(),
            per_page: DEFAULT_PER_PAGE,
            repos: RepositoryCache::new(),
        }
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn http(&self) -> &C {
        &self.http
    }

    /// Repository metadata fetched so far
    pub fn repositories(&self) -> &RepositoryCache {
        &self.repos
    }

    /// URL of the user's public events feed
    pub fn events_url(&self) -> String {
        urijoin(&[
            self.http.base_url(),
            "users",
            &self.user,
            "events",
            "public",
        ])
    }

    /// Raw pages of the user's public events, newest first
    pub fn events(&self) -> Pages<'_, C> {
        Self::pages(&self.http, self.events_url(), self.per_page)
    }

    /// Repository metadata for `owner/name`, cached after the first call
    pub async fn repo(&mut self, name: &str) -> Result<RepositoryMetadata> {
        self.repos.get(&self.http, name).await
    }

    /// Events pages together with the pieces needed to enrich them
    pub(crate) fn split(&mut self) -> (Pages<'_, C>, &C, &mut RepositoryCache) {
        let url = self.events_url();
        let per_page = self.per_page;
        let ActivityClient { http, repos, .. } = self;
        let http: &C = http;
        (Self::pages(http, url, per_page), http, repos)
    }

    fn pages(http: &C, url: String, per_page: u32) -> Pages<'_, C> {
        let per_page = per_page.to_string();
        Pages::new(http, url, &[("per_page", per_page.as_str())])
    }
}
