//! Event fetching and enrichment
//!
//! Pages come in newest first. Each page is parsed, events older than the
//! requested lower bound are dropped, and every remaining event gets the
//! metadata of its repository attached as `repo_data`. Events leave in the
//! order they arrived; at most one page is held in memory.

use super::client::ActivityClient;
use super::repositories::RepositoryCache;
use super::types::Event;
use crate::utils::dates::DEFAULT_DATETIME;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use futures::Stream;
use ghfeed_github::{HttpFetch, Pages};
use log::debug;
use std::collections::VecDeque;

/// Fetches a user's events and enriches them with repository metadata
pub struct EventFetcher<C> {
    client: ActivityClient<C>,
}

impl<C: HttpFetch> EventFetcher<C> {
    pub fn new(client: ActivityClient<C>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ActivityClient<C> {
        &self.client
    }

    /// Lazily fetch events created at or after `from_date`
    ///
    /// `None` means no lower bound. Nothing is requested until the returned
    /// [`Events`] is polled.
    pub fn fetch(&mut self, from_date: Option<DateTime<Utc>>) -> Events<'_, C> {
        let from_date = from_date.unwrap_or(DEFAULT_DATETIME);
        let (pages, http, repos) = self.client.split();

        Events {
            pages,
            http,
            repos,
            from_date,
            pending: VecDeque::new(),
        }
    }
}

/// Enriched events, produced one at a time
pub struct Events<'a, C: HttpFetch> {
    pages: Pages<'a, C>,
    http: &'a C,
    repos: &'a mut RepositoryCache,
    from_date: DateTime<Utc>,
    /// Unprocessed events of the current page
    pending: VecDeque<Event>,
}

impl<'a, C: HttpFetch> Events<'a, C> {
    /// Next enriched event, or `None` when the feed is exhausted
    ///
    /// # Errors
    /// Request failures and malformed JSON in a page or repository body end
    /// the sequence with an error.
    pub async fn next_event(&mut self) -> Result<Option<Event>> {
        loop {
            while let Some(mut event) = self.pending.pop_front() {
                if event.created_at < self.from_date {
                    debug!(
                        "Skipping event {} created at {}",
                        event.id, event.created_at
                    );
                    continue;
                }

                let repo = self.repos.get(self.http, &event.repo.name).await?;
                event.repo_data = Some(repo);
                return Ok(Some(event));
            }

            match self.pages.next_page().await? {
                Some(raw) => {
                    let page = self.pages.page();
                    let events = parse_events(&raw)
                        .with_context(|| format!("Failed to parse events page {}", page))?;
                    self.pending = events.into();
                }
                None => return Ok(None),
            }
        }
    }

    /// Adapt into a `Stream` of enriched events
    pub fn into_stream(self) -> impl Stream<Item = Result<Event>> + 'a {
        futures::stream::try_unfold(self, |mut events| async move {
            let event = events.next_event().await?;
            Ok::<_, anyhow::Error>(event.map(|event| (event, events)))
        })
    }
}

/// Parse one raw events page
///
/// A blank body is an empty page.
pub fn parse_events(raw: &str) -> Result<Vec<Event>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    Ok(serde_json::from_str(raw)?)
}
