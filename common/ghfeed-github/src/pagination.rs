//! Lazy iteration over `Link`-paginated endpoints
//!
//! A [`Pages`] value fetches nothing until asked for the next page, and then
//! exactly one page. Following pages are discovered through the `next`
//! relation of the previous response; the `last` relation only feeds progress
//! logging.

use crate::fetch::HttpFetch;
use crate::links::page_number;
use anyhow::Result;
use futures::Stream;
use log::debug;

/// Raw page bodies of a paginated endpoint, fetched on demand
pub struct Pages<'a, C: HttpFetch + ?Sized> {
    client: &'a C,
    /// First URL, until it has been requested
    first_url: Option<String>,
    payload: Vec<(String, String)>,
    next_url: Option<String>,
    page: u32,
    last_page: Option<u32>,
}

impl<'a, C: HttpFetch + ?Sized> Pages<'a, C> {
    /// Prepare iteration starting at `url`
    ///
    /// `payload` is sent as query parameters with the first request only;
    /// `next` links already carry the full query.
    pub fn new(client: &'a C, url: impl Into<String>, payload: &[(&str, &str)]) -> Self {
        Self {
            client,
            first_url: Some(url.into()),
            payload: payload
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
            next_url: None,
            page: 0,
            last_page: None,
        }
    }

    /// Number of pages fetched so far
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Last page number advertised by the first response, if any
    pub fn last_page(&self) -> Option<u32> {
        self.last_page
    }

    /// Fetch the next page body
    ///
    /// Returns `Ok(None)` once the previous response carried no `next` link.
    /// An empty first body ends the iteration right away. Later bodies are
    /// returned even when empty, since only the `next` link decides whether
    /// more pages follow.
    pub async fn next_page(&mut self) -> Result<Option<String>> {
        if let Some(url) = self.first_url.take() {
            return self.first_page(&url).await;
        }

        let Some(url) = self.next_url.take() else {
            return Ok(None);
        };

        let response = self.client.fetch(&url, &[]).await?;
        self.page += 1;
        self.log_progress();
        self.next_url = response.links.next().map(str::to_string);

        Ok(Some(response.body))
    }

    async fn first_page(&mut self, url: &str) -> Result<Option<String>> {
        debug!("Get GitHub paginated items from {}", url);

        let payload: Vec<(&str, &str)> = self
            .payload
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .collect();
        let response = self.client.fetch(url, &payload).await?;
        self.page = 1;

        if response.body.trim().is_empty() {
            debug!("Empty first page from {}", url);
            return Ok(None);
        }

        self.last_page = response.links.last().and_then(page_number);
        self.log_progress();
        self.next_url = response.links.next().map(str::to_string);

        Ok(Some(response.body))
    }

    fn log_progress(&self) {
        match self.last_page {
            Some(last) => debug!("Page: {}/{}", self.page, last),
            None => debug!("Page: {}", self.page),
        }
    }

    /// Adapt into a `Stream` of page bodies
    pub fn into_stream(self) -> impl Stream<Item = Result<String>> + 'a {
        futures::stream::try_unfold(self, |mut pages| async move {
            let body = pages.next_page().await?;
            Ok::<_, anyhow::Error>(body.map(|body| (body, pages)))
        })
    }
}
